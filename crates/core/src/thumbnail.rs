use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::{error::NewscenterError, gateway::RemoteCallGateway};

/// Display handle over fetched thumbnail bytes. Clones share one allocation;
/// the bytes are released when the last clone drops. Decoding is the
/// rendering layer's business, the core never looks inside.
#[derive(Debug, Clone)]
pub struct ThumbnailHandle {
    source_url: String,
    bytes: Arc<Vec<u8>>,
}

impl ThumbnailHandle {
    fn new(source_url: String, bytes: Vec<u8>) -> Self {
        Self {
            source_url,
            bytes: Arc::new(bytes),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Holds at most one thumbnail handle, for the currently selected entity.
///
/// Loading for a new selection replaces the held handle and releases the
/// prior bytes with it. A failed fetch is logged and leaves the slot empty;
/// nothing is surfaced to the user.
pub struct ThumbnailCache {
    gateway: Arc<dyn RemoteCallGateway>,
    slot: Mutex<Option<ThumbnailHandle>>,
}

impl ThumbnailCache {
    pub fn new(gateway: Arc<dyn RemoteCallGateway>) -> Self {
        Self {
            gateway,
            slot: Mutex::new(None),
        }
    }

    /// Fetch `url` and swap in the new handle. On failure the slot ends up
    /// empty.
    pub async fn load_for_selection(&self, url: &str) {
        match self.gateway.fetch_thumbnail_bytes(url).await {
            Ok(bytes) => {
                *self.slot.lock().unwrap() = Some(ThumbnailHandle::new(url.to_string(), bytes));
            }
            Err(e) => {
                let err = NewscenterError::ThumbnailFailed {
                    url: url.to_string(),
                    reason: e.message,
                };
                warn!("{err}");
                *self.slot.lock().unwrap() = None;
            }
        }
    }

    /// Drop the held handle; used when the selection becomes "none".
    pub fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }

    pub fn handle(&self) -> Option<ThumbnailHandle> {
        self.slot.lock().unwrap().clone()
    }
}
