use std::sync::Arc;

use reqwest::{header::CONTENT_TYPE, Client, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Body key the backend reads the operation document from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub fn body_key(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// A single GraphQL operation.
///
/// The document is always static text; caller supplied values only ever
/// travel in `variables`, so they are JSON encoded and never spliced into
/// the document itself.
#[derive(Clone, Debug)]
pub struct GraphqlRequest {
    kind: OperationKind,
    document: &'static str,
    variables: Map<String, Value>,
}

impl GraphqlRequest {
    pub fn query(document: &'static str) -> Self {
        Self {
            kind: OperationKind::Query,
            document,
            variables: Map::new(),
        }
    }

    pub fn mutation(document: &'static str) -> Self {
        Self {
            kind: OperationKind::Mutation,
            document,
            variables: Map::new(),
        }
    }

    pub fn variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    /// Merges every field of a JSON object into the variables.
    /// Non-object values are ignored.
    pub fn variables(mut self, values: Value) -> Self {
        if let Value::Object(values) = values {
            self.variables.extend(values);
        }
        self
    }

    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert(self.kind.body_key().into(), self.document.into());
        body.insert("variables".into(), Value::Object(self.variables.clone()));
        Value::Object(body)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ResponseError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

#[derive(Deserialize, Debug)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("backend returned {} error(s): {}", .0.len(), first_message(.0))]
    Response(Vec<ResponseError>),
}

fn first_message(errors: &[ResponseError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}

impl GraphqlError {
    pub fn is_network(&self) -> bool {
        matches!(self, GraphqlError::Network(_) | GraphqlError::Status(_))
    }

    pub fn category(&self) -> &'static str {
        if self.is_network() {
            "network"
        } else {
            "protocol"
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraphqlClient {
    client: Client,
    endpoint: Arc<Url>,
}

impl GraphqlClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint: Arc::new(endpoint),
        }
    }

    /// Sends `request` and returns its `data` payload, `None` when the
    /// backend answered without one.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &GraphqlRequest,
    ) -> Result<Option<T>, GraphqlError> {
        let res = self
            .client
            .post(self.endpoint.as_ref().clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&request.body())
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(GraphqlError::Status(status.as_u16()));
        }

        // read text first so an unparsable body is reported as malformed, not as a transport error
        let text = res.text().await?;
        let envelope: GraphqlResponse<T> = serde_json::from_str(&text)?;

        match envelope.errors {
            Some(errors) if !errors.is_empty() => Err(GraphqlError::Response(errors)),
            _ => Ok(envelope.data),
        }
    }
}
