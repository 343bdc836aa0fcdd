use async_trait::async_trait;
use thiserror::Error;

use crate::{
    settings::AppSettings,
    types::{VideoDraft, VideoEntity},
};

/// A remote call was rejected or never reached the backend. Carries the
/// backend's message verbatim; classification happens at the call site.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct CallError {
    pub message: String,
}

impl CallError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type CallResult<T> = std::result::Result<T, CallError>;

/// Parameters for the transcript extraction job. `target_id` is set for a
/// refill on an existing entity; with `target_id` unset the backend creates
/// the entity itself from the source URL.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptJobRequest {
    pub source: String,
    pub target_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryJobRequest {
    pub video_id: i64,
    pub language: String,
    pub auto_mode: bool,
}

/// Procedure surface of the backend process.
///
/// The backend owns downloads, transcription, summarization, and persistent
/// storage. The session core only ever reaches it through this trait, so tests
/// and embedders can swap in their own transport.
#[async_trait]
pub trait RemoteCallGateway: Send + Sync {
    /// Kick off transcript extraction. Resolves with the backend's completion
    /// message once the job has fully finished, not when it is accepted.
    async fn submit_transcript_job(&self, request: TranscriptJobRequest) -> CallResult<String>;

    /// Kick off summarization for an entity that already has a transcript.
    async fn submit_summary_job(&self, request: SummaryJobRequest) -> CallResult<String>;

    async fn list_entities(&self) -> CallResult<Vec<VideoEntity>>;

    async fn create_entity(&self, draft: VideoDraft) -> CallResult<VideoEntity>;

    async fn delete_entity(&self, id: i64) -> CallResult<()>;

    async fn fetch_thumbnail_bytes(&self, url: &str) -> CallResult<Vec<u8>>;

    async fn load_settings(&self) -> CallResult<AppSettings>;

    async fn save_settings(&self, settings: AppSettings) -> CallResult<()>;
}
