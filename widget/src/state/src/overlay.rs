use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
}

/// Full screen content overlay. Only ever knows the URL it shows.
#[derive(Clone, Copy)]
pub struct OverlayController {
    url: RwSignal<Option<String>>,
    times_opened: RwSignal<usize>,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            url: RwSignal::new(None),
            times_opened: RwSignal::new(0),
        }
    }

    /// Shows `url`. Opening while already open swaps the content in place.
    pub fn open(&self, url: impl Into<String>) {
        let url = url.into();
        log::debug!("opening overlay for {url}");
        self.url.set(Some(url));
        self.times_opened.update(|n| *n += 1);
    }

    pub fn close(&self, trigger: CloseTrigger) {
        if self.url.with_untracked(Option::is_none) {
            return;
        }
        log::debug!("overlay closed via {trigger:?}");
        self.url.set(None);
    }

    pub fn phase(&self) -> OverlayPhase {
        if self.url.with(Option::is_some) {
            OverlayPhase::Open
        } else {
            OverlayPhase::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase() == OverlayPhase::Open
    }

    pub fn url(&self) -> Option<String> {
        self.url.get()
    }

    pub fn times_opened(&self) -> usize {
        self.times_opened.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let overlay = OverlayController::new();
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert_eq!(overlay.url(), None);
        assert_eq!(overlay.times_opened(), 0);
    }

    #[test]
    fn close_button_and_backdrop_are_equivalent() {
        for trigger in [CloseTrigger::CloseButton, CloseTrigger::Backdrop] {
            let overlay = OverlayController::new();
            overlay.open("https://cdn/x.mp4");
            assert!(overlay.is_open());

            overlay.close(trigger);
            assert_eq!(overlay.phase(), OverlayPhase::Closed);
            assert_eq!(overlay.url(), None);
        }
    }

    #[test]
    fn reopens_after_close() {
        let overlay = OverlayController::new();
        for _ in 0..3 {
            overlay.open("https://cdn/x.mp4");
            assert!(overlay.is_open());
            overlay.close(CloseTrigger::Backdrop);
            assert!(!overlay.is_open());
        }
        assert_eq!(overlay.times_opened(), 3);
    }

    #[test]
    fn open_while_open_replaces_url() {
        let overlay = OverlayController::new();
        overlay.open("https://a");
        overlay.open("https://b");
        assert_eq!(overlay.url().as_deref(), Some("https://b"));
        assert_eq!(overlay.times_opened(), 2);
    }

    #[test]
    fn closing_when_closed_is_a_no_op() {
        let overlay = OverlayController::new();
        overlay.close(CloseTrigger::CloseButton);
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
    }
}
