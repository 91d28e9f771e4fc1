//! In-memory [`RawResourceClient`] serving canned bodies.
//!
//! Every request is recorded, so callers can assert which resources were asked
//! for and in what order. Resources that were never registered fail with
//! [`TransportError::Unavailable`].

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use crate::client::{RawResourceClient, TransportError};

#[derive(Clone, Debug)]
enum Canned {
    Body(String),
    Failure(String),
    Stall,
}

/// A client answering from a fixed table of resources.
#[derive(Debug, Default)]
pub struct MemoryClient {
    resources: HashMap<String, Canned>,
    requests: Mutex<Vec<String>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `resource`.
    pub fn with_body(mut self, resource: impl Into<String>, body: impl Into<String>) -> Self {
        self.resources
            .insert(resource.into(), Canned::Body(body.into()));
        self
    }

    /// Fails `resource` with [`TransportError::Unavailable`] carrying `message`.
    pub fn with_failure(mut self, resource: impl Into<String>, message: impl Into<String>) -> Self {
        self.resources
            .insert(resource.into(), Canned::Failure(message.into()));
        self
    }

    /// Never answers `resource`.
    pub fn with_stall(mut self, resource: impl Into<String>) -> Self {
        self.resources.insert(resource.into(), Canned::Stall);
        self
    }

    /// Resources requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl RawResourceClient for MemoryClient {
    async fn fetch(&self, resource: &str) -> Result<String, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(resource.to_string());

        match self.resources.get(resource).cloned() {
            Some(Canned::Body(body)) => Ok(body),
            Some(Canned::Failure(message)) => Err(TransportError::Unavailable(message)),
            Some(Canned::Stall) => std::future::pending().await,
            None => Err(TransportError::Unavailable(resource.to_string())),
        }
    }
}
