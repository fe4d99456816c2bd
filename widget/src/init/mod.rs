use std::future::Future;
use std::sync::Arc;

use state::banner::BannerController;
use state::config_client::{ConfigClient, ConfigSource, Unavailable};
use state::overlay::OverlayController;
use state::widget_config::{WidgetConfig, WidgetSettings};
use utils::event_streaming::{EventKind, EventSink, EventTracker};
use utils::graphql::GraphqlClient;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapPhase {
    Pending,
    Resolving,
    Inactive,
    Rendering,
}

/// Drives one page load from "script loaded" to either nothing shown or a
/// mounted banner. Runs at most once.
pub struct Bootstrap<S> {
    settings: WidgetSettings,
    source: S,
    tracker: Arc<dyn EventSink>,
    phase: BootstrapPhase,
    config: Option<WidgetConfig>,
}

impl Bootstrap<ConfigClient> {
    /// Wires the real backend client and tracker for `settings`.
    pub fn with_backend(settings: WidgetSettings, user_agent: String) -> Self {
        let client = GraphqlClient::new(settings.endpoint.clone());
        let tracker = EventTracker::new(client.clone(), user_agent);
        Self::new(settings, ConfigClient::new(client), Arc::new(tracker))
    }
}

impl<S: ConfigSource> Bootstrap<S> {
    pub fn new(settings: WidgetSettings, source: S, tracker: Arc<dyn EventSink>) -> Self {
        Self {
            settings,
            source,
            tracker,
            phase: BootstrapPhase::Pending,
            config: None,
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    pub fn config(&self) -> Option<&WidgetConfig> {
        self.config.as_ref()
    }

    /// Waits for `document_ready`, resolves the config and, when it is
    /// usable, tracks the page view and returns the mounted banner.
    pub async fn run(
        &mut self,
        document_ready: impl Future<Output = ()>,
    ) -> Option<BannerController> {
        if self.phase != BootstrapPhase::Pending {
            log::warn!("widget bootstrap already ran");
            return None;
        }
        document_ready.await;

        self.phase = BootstrapPhase::Resolving;
        let config = match self.resolve().await {
            Ok(config) => config,
            Err(reason) => {
                log::warn!(
                    "widget inactive for {} ({}): {reason}",
                    self.settings.domain,
                    reason.category()
                );
                self.phase = BootstrapPhase::Inactive;
                return None;
            }
        };

        self.tracker
            .emit(&config.store_id, &config.domain, EventKind::PageView);

        let banner =
            BannerController::new(&config, self.tracker.clone(), OverlayController::new());
        banner.mount();
        log::info!("widget rendering for store {}", config.store_id);

        self.config = Some(config);
        self.phase = BootstrapPhase::Rendering;
        Some(banner)
    }

    async fn resolve(&self) -> Result<WidgetConfig, Unavailable> {
        let config = self.source.resolve(&self.settings.domain).await?;
        if !config.is_active {
            return Err(Unavailable::Inactive);
        }
        if !config.has_video() {
            return Err(Unavailable::MissingVideo);
        }
        Ok(config)
    }
}

/// Runs `bootstrap` to completion and hands a rendering banner to `mount`.
pub async fn launch<S: ConfigSource>(
    mut bootstrap: Bootstrap<S>,
    document_ready: impl Future<Output = ()>,
    mount: impl FnOnce(BannerController),
) {
    if let Some(banner) = bootstrap.run(document_ready).await {
        mount(banner);
    }
}
