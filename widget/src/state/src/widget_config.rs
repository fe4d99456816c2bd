use consts::{DEFAULT_BANNER_TEXT, GRAPHQL_ENDPOINT};
use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(default)]
    pub id: String,
    pub store_id: String,
    pub domain: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub banner_text: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl WidgetConfig {
    pub fn banner_text(&self) -> &str {
        match self.banner_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => DEFAULT_BANNER_TEXT,
        }
    }

    pub fn has_video(&self) -> bool {
        !self.video_url.trim().is_empty()
    }
}

/// Everything the runtime needs to know up front.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetSettings {
    pub endpoint: Url,
    pub domain: String,
}

impl WidgetSettings {
    pub fn new(endpoint: Url, domain: impl Into<String>) -> Self {
        Self {
            endpoint,
            domain: domain.into(),
        }
    }

    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self::new(GRAPHQL_ENDPOINT.clone(), domain)
    }

    /// Reads the target domain from the hosting page. Call while the
    /// widget script is still executing so the script tag is reachable.
    pub fn from_host() -> Self {
        Self::for_domain(utils::host::target_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(banner_text: Option<&str>) -> WidgetConfig {
        WidgetConfig {
            id: "w1".into(),
            store_id: "s1".into(),
            domain: "shop.example".into(),
            video_url: "https://cdn/x.mp4".into(),
            banner_text: banner_text.map(Into::into),
            is_active: true,
        }
    }

    #[test]
    fn banner_text_falls_back_to_default() {
        assert_eq!(config(None).banner_text(), "Click to learn more");
        assert_eq!(config(Some("")).banner_text(), "Click to learn more");
        assert_eq!(config(Some("  ")).banner_text(), "Click to learn more");
        assert_eq!(config(Some("Spring sale")).banner_text(), "Spring sale");
    }

    #[test]
    fn deserializes_backend_shape() {
        let cfg: WidgetConfig = serde_json::from_value(json!({
            "id": "w1",
            "storeId": "s1",
            "domain": "shop.example",
            "videoUrl": "https://cdn/x.mp4",
            "bannerText": "",
            "isActive": true
        }))
        .unwrap();
        assert_eq!(cfg, config(Some("")));
    }

    #[test]
    fn missing_optional_fields_default() {
        let cfg: WidgetConfig = serde_json::from_value(json!({
            "storeId": "s1",
            "domain": "shop.example"
        }))
        .unwrap();
        assert!(!cfg.is_active);
        assert!(!cfg.has_video());
        assert_eq!(cfg.banner_text(), "Click to learn more");
    }

    #[test]
    fn settings_default_to_backend_graphql_endpoint() {
        let settings = WidgetSettings::for_domain("shop.example");
        assert_eq!(settings.domain, "shop.example");
        assert!(settings.endpoint.path().ends_with("/graphql"));
    }
}
