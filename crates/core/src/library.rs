use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::{
    error::{NewscenterError, Result},
    gateway::RemoteCallGateway,
    types::{VideoDraft, VideoEntity},
};

#[derive(Default)]
struct LibraryState {
    videos: Vec<VideoEntity>,
    selected: Option<i64>,
}

/// In-memory mirror of the backend's video collection plus the current
/// selection.
///
/// Every mutating operation except `select` is call-then-confirm: the backend
/// call goes out first and the cache changes only once it acknowledges, so a
/// failed call leaves the cache exactly as it was. The selection is held as an
/// id and resolved against the live collection on every read, never as a
/// cached copy of the entity.
pub struct VideoLibraryStore {
    gateway: Arc<dyn RemoteCallGateway>,
    state: Mutex<LibraryState>,
}

impl VideoLibraryStore {
    pub fn new(gateway: Arc<dyn RemoteCallGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(LibraryState::default()),
        }
    }

    /// Cached collection, most recently created first. Empty before the first
    /// successful refresh.
    pub fn list(&self) -> Vec<VideoEntity> {
        let state = self.state.lock().unwrap();
        let mut videos = state.videos.clone();
        videos.sort_by(|a, b| (b.created_at_timestamp, b.id).cmp(&(a.created_at_timestamp, a.id)));
        videos
    }

    /// Id the selection reference currently holds, resolved or not.
    pub fn selected_id(&self) -> Option<i64> {
        self.state.lock().unwrap().selected
    }

    /// Selection resolved against the live collection. A reference whose id
    /// is no longer cached resolves to `None`.
    pub fn selected_video(&self) -> Option<VideoEntity> {
        let state = self.state.lock().unwrap();
        let id = state.selected?;
        state.videos.iter().find(|v| v.id == id).cloned()
    }

    /// Point the selection at `id`, or clear it when `id` is not cached.
    /// Purely local, no backend call.
    pub fn select(&self, id: i64) {
        let mut state = self.state.lock().unwrap();
        state.selected = state.videos.iter().any(|v| v.id == id).then_some(id);
    }

    /// Refetch the whole collection and swap it in atomically. With
    /// `select_first` the selection moves to the first fetched entity (when
    /// any came back); otherwise the existing reference stays put and simply
    /// resolves against the new data. The cache is untouched when the call
    /// fails.
    pub async fn refresh(&self, select_first: bool) -> Result<()> {
        let videos = self
            .gateway
            .list_entities()
            .await
            .map_err(|e| NewscenterError::FetchFailed { reason: e.message })?;

        debug!(count = videos.len(), "video library refreshed");

        let mut state = self.state.lock().unwrap();
        if select_first {
            if let Some(first) = videos.first() {
                state.selected = Some(first.id);
            }
        }
        state.videos = videos;
        Ok(())
    }

    /// Create a new entity from `draft`. The backend assigns the id; the
    /// cache picks up the returned record.
    pub async fn create(&self, draft: VideoDraft) -> Result<VideoEntity> {
        let entity = self
            .gateway
            .create_entity(draft)
            .await
            .map_err(|e| NewscenterError::CreateFailed { reason: e.message })?;

        let mut state = self.state.lock().unwrap();
        state.videos.push(entity.clone());
        Ok(entity)
    }

    /// Delete `id` on the backend and drop it from the cache. The selection
    /// is cleared whatever it pointed at, so the view always comes back in
    /// the no-selection state instead of presenting stale buffers.
    pub async fn remove(&self, id: i64) -> Result<()> {
        self.gateway
            .delete_entity(id)
            .await
            .map_err(|e| NewscenterError::DeleteFailed {
                id,
                reason: e.message,
            })?;

        let mut state = self.state.lock().unwrap();
        state.videos.retain(|v| v.id != id);
        state.selected = None;
        Ok(())
    }
}
