use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PageView,
    VideoLoaded,
    LinkClicked,
    /// Anything outside the built-in vocabulary. Sent as is, the backend decides what it accepts.
    Custom(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::PageView => "page_view",
            EventKind::VideoLoaded => "video_loaded",
            EventKind::LinkClicked => "link_clicked",
            EventKind::Custom(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value {
            "page_view" => EventKind::PageView,
            "video_loaded" => EventKind::VideoLoaded,
            "link_clicked" => EventKind::LinkClicked,
            other => EventKind::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One analytics record, built per emission and dropped once sent.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEvent {
    pub store_id: String,
    pub domain: String,
    pub event_type: EventKind,
    pub user_agent: String,
    /// Always empty, the backend attributes addresses itself.
    pub ip_address: String,
}

impl TrackedEvent {
    pub fn new(store_id: &str, domain: &str, event_type: EventKind, user_agent: &str) -> Self {
        Self {
            store_id: store_id.to_string(),
            domain: domain.to_string(),
            event_type,
            user_agent: user_agent.to_string(),
            ip_address: String::new(),
        }
    }
}
