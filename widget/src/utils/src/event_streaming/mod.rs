use leptos::task::spawn_local;
use serde::Deserialize;

use crate::graphql::{GraphqlClient, GraphqlError, GraphqlRequest};

pub mod events;

pub use events::{EventKind, TrackedEvent};

const TRACK_EVENT_MUTATION: &str = "mutation TrackEvent($storeId: String!, $domain: String!, $eventType: String!, $userAgent: String!, $ipAddress: String!) { trackEvent(storeId: $storeId, domain: $domain, eventType: $eventType, userAgent: $userAgent, ipAddress: $ipAddress) }";

/// Destination for widget analytics.
///
/// `emit` must return immediately; delivery happens in the background and
/// its outcome is never reported back to the caller.
pub trait EventSink: Send + Sync {
    fn emit(&self, store_id: &str, domain: &str, kind: EventKind);
}

#[derive(Deserialize)]
struct TrackEventData {
    #[serde(rename = "trackEvent")]
    track_event: bool,
}

#[derive(Clone, Debug)]
pub struct EventTracker {
    client: GraphqlClient,
    user_agent: String,
}

impl EventTracker {
    pub fn new(client: GraphqlClient, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn request(event: &TrackedEvent) -> Result<GraphqlRequest, GraphqlError> {
        let variables = serde_json::to_value(event)?;
        Ok(GraphqlRequest::mutation(TRACK_EVENT_MUTATION).variables(variables))
    }

    /// Delivers `event` and returns whether the backend accepted it.
    pub async fn send(&self, event: &TrackedEvent) -> Result<bool, GraphqlError> {
        let request = Self::request(event)?;
        let data = self.client.execute::<TrackEventData>(&request).await?;
        Ok(data.map(|d| d.track_event).unwrap_or(false))
    }
}

impl EventSink for EventTracker {
    fn emit(&self, store_id: &str, domain: &str, kind: EventKind) {
        let event = TrackedEvent::new(store_id, domain, kind, &self.user_agent);
        log::debug!("tracking {} for store {}", event.event_type, event.store_id);

        let tracker = self.clone();
        // detached: the handler that triggered the event never waits on delivery
        spawn_local(async move {
            match tracker.send(&event).await {
                Ok(true) => {}
                Ok(false) => log::warn!("backend rejected {} event", event.event_type),
                Err(e) => log::error!(
                    "failed to track {} ({}): {e}",
                    event.event_type,
                    e.category()
                ),
            }
        });
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use std::sync::Mutex;

    use super::{EventKind, EventSink};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RecordedEvent {
        pub store_id: String,
        pub domain: String,
        pub kind: EventKind,
    }

    /// Keeps every emitted event in memory, in order.
    #[derive(Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<RecordedEvent>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<RecordedEvent> {
            self.events.lock().map(|e| e.clone()).unwrap_or_default()
        }

        pub fn kinds(&self) -> Vec<EventKind> {
            self.events().into_iter().map(|e| e.kind).collect()
        }

        pub fn count(&self, kind: &EventKind) -> usize {
            self.events().iter().filter(|e| &e.kind == kind).count()
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, store_id: &str, domain: &str, kind: EventKind) {
            if let Ok(mut events) = self.events.lock() {
                events.push(RecordedEvent {
                    store_id: store_id.to_string(),
                    domain: domain.to_string(),
                    kind,
                });
            }
        }
    }
}
