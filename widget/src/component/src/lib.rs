pub mod banner;
pub mod overlay;
pub mod styles;
