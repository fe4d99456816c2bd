use std::sync::Arc;

use leptos::prelude::*;
use utils::event_streaming::{EventKind, EventSink};

use crate::overlay::OverlayController;
use crate::widget_config::WidgetConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerPhase {
    Unmounted,
    Mounted,
    Dismissed,
}

/// The parts of a [`WidgetConfig`] the banner actually shows or reports.
#[derive(Clone, Debug, PartialEq)]
pub struct BannerContent {
    pub store_id: String,
    pub domain: String,
    pub video_url: String,
    pub text: String,
}

impl From<&WidgetConfig> for BannerContent {
    fn from(config: &WidgetConfig) -> Self {
        Self {
            store_id: config.store_id.clone(),
            domain: config.domain.clone(),
            video_url: config.video_url.clone(),
            text: config.banner_text().to_string(),
        }
    }
}

/// Floating banner lifecycle: `Unmounted -> Mounted -> Dismissed`.
///
/// Dismissal is terminal. Every interaction is ignored unless the banner is
/// mounted.
#[derive(Clone, Copy)]
pub struct BannerController {
    phase: RwSignal<BannerPhase>,
    content: StoredValue<BannerContent>,
    tracker: StoredValue<Arc<dyn EventSink>>,
    overlay: OverlayController,
}

impl BannerController {
    pub fn new(
        config: &WidgetConfig,
        tracker: Arc<dyn EventSink>,
        overlay: OverlayController,
    ) -> Self {
        Self {
            phase: RwSignal::new(BannerPhase::Unmounted),
            content: StoredValue::new(BannerContent::from(config)),
            tracker: StoredValue::new(tracker),
            overlay,
        }
    }

    /// Returns `false` if the banner was mounted before (or dismissed).
    pub fn mount(&self) -> bool {
        if self.phase.get_untracked() != BannerPhase::Unmounted {
            return false;
        }
        self.phase.set(BannerPhase::Mounted);
        true
    }

    pub fn video_loaded(&self) {
        if self.is_mounted_untracked() {
            self.emit(EventKind::VideoLoaded);
        }
    }

    /// A click on the banner body.
    pub fn open_content(&self) {
        if !self.is_mounted_untracked() {
            return;
        }
        self.emit(EventKind::LinkClicked);
        self.overlay.open(self.video_url());
    }

    pub fn dismiss(&self) {
        if !self.is_mounted_untracked() {
            return;
        }
        log::debug!("banner dismissed");
        self.phase.set(BannerPhase::Dismissed);
    }

    pub fn phase(&self) -> BannerPhase {
        self.phase.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.phase() == BannerPhase::Mounted
    }

    fn is_mounted_untracked(&self) -> bool {
        self.phase.get_untracked() == BannerPhase::Mounted
    }

    pub fn content(&self) -> BannerContent {
        self.content.get_value()
    }

    pub fn video_url(&self) -> String {
        self.content.with_value(|c| c.video_url.clone())
    }

    pub fn text(&self) -> String {
        self.content.with_value(|c| c.text.clone())
    }

    pub fn overlay(&self) -> OverlayController {
        self.overlay
    }

    fn emit(&self, kind: EventKind) {
        let tracker = self.tracker.get_value();
        self.content
            .with_value(|c| tracker.emit(&c.store_id, &c.domain, kind));
    }
}
