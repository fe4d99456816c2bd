pub mod event_streaming;
pub mod graphql;
pub mod host;
