use consts::{DOMAIN_ATTRIBUTE, SCRIPT_NAME};
use futures::channel::oneshot;
use gloo::events::EventListener;
use web_sys::Document;

/// Picks the domain the widget is configured for: a non-blank override wins
/// over the page's own host name.
pub fn pick_domain(attribute: Option<String>, hostname: &str) -> String {
    attribute
        .map(|attr| attr.trim().to_string())
        .filter(|attr| !attr.is_empty())
        .unwrap_or_else(|| hostname.to_string())
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Matches only the widget's own loader tag, so `data-domain` attributes of
/// other scripts on the page are never picked up.
pub fn domain_script_selector() -> String {
    format!(r#"script[{DOMAIN_ATTRIBUTE}][src*="{SCRIPT_NAME}"]"#)
}

/// Reads the domain override from the hosting script tag.
///
/// Module scripts have no `currentScript`, so this falls back to the
/// widget's loader script found by its `src`.
pub fn script_domain_attribute() -> Option<String> {
    let document = document()?;
    if let Some(script) = document.current_script() {
        if let Some(value) = script.get_attribute(DOMAIN_ATTRIBUTE) {
            return Some(value);
        }
    }
    document
        .query_selector(&domain_script_selector())
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute(DOMAIN_ATTRIBUTE))
}

pub fn page_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

pub fn target_domain() -> String {
    pick_domain(script_domain_attribute(), &page_hostname())
}

pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// `document.readyState` reports `"loading"` until the DOM is parsed.
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Resolves once the document is interactive or complete.
pub async fn document_interactive() {
    let Some(document) = document() else {
        return;
    };
    if !still_loading(&document.ready_state()) {
        return;
    }

    let (tx, rx) = oneshot::channel();
    let _listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
        let _ = tx.send(());
    });
    if rx.await.is_err() {
        log::warn!("DOMContentLoaded listener dropped before firing");
    }
}

#[cfg(test)]
mod tests {
    use super::{domain_script_selector, pick_domain, still_loading};

    #[test]
    fn attribute_overrides_hostname() {
        assert_eq!(
            pick_domain(Some("shop.example".into()), "cdn.host.net"),
            "shop.example"
        );
    }

    #[test]
    fn hostname_used_without_attribute() {
        assert_eq!(pick_domain(None, "shop.example"), "shop.example");
    }

    #[test]
    fn blank_attribute_is_ignored() {
        assert_eq!(pick_domain(Some("   ".into()), "shop.example"), "shop.example");
        assert_eq!(pick_domain(Some(" a.b ".into()), "shop.example"), "a.b");
    }

    #[test]
    fn selector_requires_widget_script_src() {
        let selector = domain_script_selector();
        assert_eq!(selector, r#"script[data-domain][src*="store_widget"]"#);
        assert_ne!(selector, "script[data-domain]");
    }

    #[test]
    fn waits_only_while_loading() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }
}
