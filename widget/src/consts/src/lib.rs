use once_cell::sync::Lazy;
use reqwest::Url;

/// Set `WIDGET_BACKEND_URL` at build time to point the widget at another backend.
pub static BACKEND_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse(option_env!("WIDGET_BACKEND_URL").unwrap_or("http://localhost:8000")).unwrap()
});

pub const GRAPHQL_PATH: &str = "graphql";

pub static GRAPHQL_ENDPOINT: Lazy<Url> = Lazy::new(|| BACKEND_URL.join(GRAPHQL_PATH).unwrap());

/// Element id of the floating banner container
pub const WIDGET_ID: &str = "store-widget-banner";
pub const STYLES_ID: &str = "store-widget-styles";

/// Script tag attribute overriding the page host name
pub const DOMAIN_ATTRIBUTE: &str = "data-domain";

/// File stem of the loader script generated for the widget bundle
pub const SCRIPT_NAME: &str = "store_widget";

pub const DEFAULT_BANNER_TEXT: &str = "Click to learn more";

pub const OVERLAY_FRAME_TITLE: &str = "Widget Content";
