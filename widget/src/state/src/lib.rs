pub mod banner;
pub mod config_client;
pub mod overlay;
pub mod widget_config;
