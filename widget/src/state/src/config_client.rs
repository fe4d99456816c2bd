use std::future::Future;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;
use utils::graphql::{GraphqlClient, GraphqlError, GraphqlRequest};

use crate::widget_config::WidgetConfig;

const WIDGET_BY_DOMAIN_QUERY: &str = "query WidgetByDomain($domain: String!) { getWidgetByDomain(domain: $domain) { id storeId domain videoUrl bannerText isActive } }";

/// Why no widget is shown. Every variant leads to the same outcome on the
/// page; they only differ in what gets logged.
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("network failure: {0}")]
    NetworkFailure(#[source] GraphqlError),
    #[error("protocol error: {0}")]
    ProtocolError(#[source] GraphqlError),
    #[error("no widget configured for this domain")]
    AbsentConfig,
    #[error("widget is not active")]
    Inactive,
    #[error("widget has no video")]
    MissingVideo,
}

impl Unavailable {
    pub fn category(&self) -> &'static str {
        match self {
            Unavailable::NetworkFailure(_) => "network",
            Unavailable::ProtocolError(_) => "protocol",
            Unavailable::AbsentConfig | Unavailable::Inactive | Unavailable::MissingVideo => {
                "absent"
            }
        }
    }
}

impl From<GraphqlError> for Unavailable {
    fn from(e: GraphqlError) -> Self {
        if e.is_network() {
            Unavailable::NetworkFailure(e)
        } else {
            Unavailable::ProtocolError(e)
        }
    }
}

pub trait ConfigSource {
    fn resolve(&self, domain: &str) -> impl Future<Output = Result<WidgetConfig, Unavailable>>;
}

#[derive(Deserialize)]
struct WidgetByDomain {
    #[serde(rename = "getWidgetByDomain")]
    get_widget_by_domain: Option<WidgetConfig>,
}

#[derive(Clone, Debug)]
pub struct ConfigClient {
    client: GraphqlClient,
}

impl ConfigClient {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    pub fn with_endpoint(endpoint: Url) -> Self {
        Self::new(GraphqlClient::new(endpoint))
    }
}

impl ConfigSource for ConfigClient {
    async fn resolve(&self, domain: &str) -> Result<WidgetConfig, Unavailable> {
        log::debug!("fetching widget config for {domain}");

        let request = GraphqlRequest::query(WIDGET_BY_DOMAIN_QUERY).variable("domain", domain);
        let data = self
            .client
            .execute::<WidgetByDomain>(&request)
            .await
            .map_err(|e| {
                let reason = Unavailable::from(e);
                log::error!("widget config unavailable ({}): {reason}", reason.category());
                reason
            })?;

        match data.and_then(|d| d.get_widget_by_domain) {
            Some(config) => {
                log::debug!("widget config resolved for store {}", config.store_id);
                Ok(config)
            }
            None => {
                log::warn!("no widget config returned for {domain}");
                Err(Unavailable::AbsentConfig)
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> ConfigClient {
        ConfigClient::with_endpoint(Url::parse(&server.url("/graphql")).unwrap())
    }

    async fn respond(server: &MockServer, status: u16, body: &str) {
        let body = body.to_string();
        server
            .mock_async(move |when, then| {
                when.method(POST).path("/graphql");
                then.status(status)
                    .header("content-type", "application/json")
                    .body(body);
            })
            .await;
    }

    #[tokio::test]
    async fn resolves_config_by_domain() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/graphql")
                    .header("content-type", "application/json")
                    .body_includes("getWidgetByDomain(domain: $domain)")
                    .body_includes(r#""variables":{"domain":"shop.example"}"#);
                then.status(200).body(
                    r#"{"data":{"getWidgetByDomain":{"id":"w1","storeId":"s1","domain":"shop.example","videoUrl":"https://cdn/x.mp4","bannerText":"","isActive":true}}}"#,
                );
            })
            .await;

        let config = client_for(&server).resolve("shop.example").await.unwrap();

        assert_eq!(config.store_id, "s1");
        assert_eq!(config.video_url, "https://cdn/x.mp4");
        assert!(config.is_active);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn null_config_is_absent() {
        let server = MockServer::start_async().await;
        respond(&server, 200, r#"{"data":{"getWidgetByDomain":null}}"#).await;

        let err = client_for(&server).resolve("shop.example").await.unwrap_err();
        assert!(matches!(err, Unavailable::AbsentConfig));
    }

    #[tokio::test]
    async fn missing_data_is_absent() {
        let server = MockServer::start_async().await;
        respond(&server, 200, r#"{}"#).await;

        let err = client_for(&server).resolve("shop.example").await.unwrap_err();
        assert!(matches!(err, Unavailable::AbsentConfig));
    }

    #[tokio::test]
    async fn graphql_errors_are_protocol_errors() {
        let server = MockServer::start_async().await;
        respond(
            &server,
            200,
            r#"{"data":null,"errors":[{"message":"resolver failed"}]}"#,
        )
        .await;

        let err = client_for(&server).resolve("shop.example").await.unwrap_err();
        assert!(matches!(err, Unavailable::ProtocolError(_)));
    }

    #[tokio::test]
    async fn unparsable_body_is_protocol_error() {
        let server = MockServer::start_async().await;
        respond(&server, 200, "Internal error, not json").await;

        let err = client_for(&server).resolve("shop.example").await.unwrap_err();
        assert_eq!(err.category(), "protocol");
    }

    #[tokio::test]
    async fn server_error_is_network_failure() {
        let server = MockServer::start_async().await;
        respond(&server, 500, r#"{"detail":"down"}"#).await;

        let err = client_for(&server).resolve("shop.example").await.unwrap_err();
        assert!(matches!(err, Unavailable::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn inactive_config_is_still_returned() {
        let server = MockServer::start_async().await;
        respond(
            &server,
            200,
            r#"{"data":{"getWidgetByDomain":{"id":"w1","storeId":"s1","domain":"shop.example","videoUrl":"https://cdn/x.mp4","bannerText":"Hi","isActive":false}}}"#,
        )
        .await;

        let config = client_for(&server).resolve("shop.example").await.unwrap();
        assert!(!config.is_active);
    }
}
