//! Session-coordination core for newscenter.
//!
//! The backend does the heavy lifting (download, transcription,
//! summarization, storage) behind two seams: the [`gateway::RemoteCallGateway`]
//! request/response trait and the [`events::EventChannel`] push transport.
//! This crate owns everything between those seams and the rendering layer:
//! the video library cache, the job gate and orchestration, the
//! sentinel-framed stream buffers, notifications, settings, and the thumbnail
//! slot, all wired together by [`Session`].

pub mod error;
pub mod events;
pub mod format;
pub mod gateway;
pub mod jobs;
pub mod languages;
pub mod library;
pub mod logging;
pub mod notify;
pub mod session;
pub mod settings;
pub mod stream;
pub mod thumbnail;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{NewscenterError, Result};
pub use events::{EventChannel, LocalEventChannel, Subscription};
pub use gateway::{CallError, RemoteCallGateway, SummaryJobRequest, TranscriptJobRequest};
pub use jobs::JobOrchestrator;
pub use library::VideoLibraryStore;
pub use notify::{Notification, NotificationQueue, Severity};
pub use session::Session;
pub use settings::{AppSettings, SettingsStore};
pub use stream::{STREAM_END, STREAM_START, StreamBufferController, StreamChannel};
pub use thumbnail::{ThumbnailCache, ThumbnailHandle};
pub use types::{VideoDraft, VideoEntity};
