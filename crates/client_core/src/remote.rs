//! Remote collection client: one HTTP resource, four calls, one error type.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::TodoId,
    error::TransportError,
    protocol::{Todo, TodoDraft, TodoPayload},
};
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    List,
    Create,
    Update,
    Remove,
}

impl StoreOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreOperation::List => "list",
            StoreOperation::Create => "create",
            StoreOperation::Update => "update",
            StoreOperation::Remove => "remove",
        }
    }

    /// Message reported when the store answers with a non-success status.
    pub fn failure_message(self) -> &'static str {
        match self {
            StoreOperation::List => "Failed to fetch todos",
            StoreOperation::Create => "Failed to create todo",
            StoreOperation::Update => "Failed to update todo",
            StoreOperation::Remove => "Failed to delete todo",
        }
    }
}

#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<TodoPayload>, TransportError>;
    async fn create(&self, draft: &TodoDraft) -> Result<TodoPayload, TransportError>;
    /// `None` when the store accepted the change without echoing a record.
    async fn update(
        &self,
        id: &TodoId,
        record: &Todo,
    ) -> Result<Option<TodoPayload>, TransportError>;
    async fn remove(&self, id: &TodoId) -> Result<(), TransportError>;
}

pub struct HttpRemoteStore {
    http: Client,
    base_url: Url,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, TransportError> {
        let mut base_url = Url::parse(base_url.trim()).map_err(|err| {
            TransportError::invalid_request(format!("invalid collection url '{base_url}': {err}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::invalid_request(format!(
                "collection url '{base_url}' cannot address items"
            )));
        }
        if let Ok(mut segments) = base_url.path_segments_mut() {
            segments.pop_if_empty();
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn item_url(&self, id: &TodoId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }
}

fn network_error(err: reqwest::Error) -> TransportError {
    TransportError::network(err.to_string())
}

fn ensure_success(
    response: Response,
    operation: StoreOperation,
) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        debug!(
            operation = operation.as_str(),
            status = status.as_u16(),
            "remote store rejected request"
        );
        Err(TransportError::status(
            status.as_u16(),
            operation.failure_message(),
        ))
    }
}

async fn decode_json<T: DeserializeOwned>(
    response: Response,
    operation: StoreOperation,
) -> Result<T, TransportError> {
    response.json::<T>().await.map_err(|err| {
        TransportError::decode(format!("{}: {err}", operation.failure_message()))
    })
}

/// Body of a request the store already accepted. An empty or undecodable body
/// does not undo the acceptance.
fn decode_accepted<T: DeserializeOwned>(body: &[u8], operation: StoreOperation) -> Option<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(
                operation = operation.as_str(),
                error = %err,
                "ignoring undecodable response body"
            );
            None
        }
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn list_all(&self) -> Result<Vec<TodoPayload>, TransportError> {
        let response = self
            .http
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response, StoreOperation::List)?;
        decode_json(response, StoreOperation::List).await
    }

    async fn create(&self, draft: &TodoDraft) -> Result<TodoPayload, TransportError> {
        let response = self
            .http
            .post(self.base_url.clone())
            .json(draft)
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response, StoreOperation::Create)?;
        decode_json(response, StoreOperation::Create).await
    }

    async fn update(
        &self,
        id: &TodoId,
        record: &Todo,
    ) -> Result<Option<TodoPayload>, TransportError> {
        if id.is_blank() {
            return Err(TransportError::invalid_request(
                "cannot update a todo without an id",
            ));
        }
        let response = self
            .http
            .put(self.item_url(id))
            .json(record)
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_success(response, StoreOperation::Update)?;
        let body = response.bytes().await.map_err(network_error)?;
        Ok(decode_accepted(&body, StoreOperation::Update))
    }

    async fn remove(&self, id: &TodoId) -> Result<(), TransportError> {
        if id.is_blank() {
            return Err(TransportError::invalid_request(
                "cannot delete a todo without an id",
            ));
        }
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(response, StoreOperation::Remove)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/remote_tests.rs"]
mod tests;
