use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewscenterError {
    #[error("Transcript job failed for {source_name}: {reason}")]
    TranscriptJobFailed { source_name: String, reason: String },

    #[error("Summary job failed for video {video_id}: {reason}")]
    SummaryJobFailed { video_id: i64, reason: String },

    #[error("The source platform denied access: {reason}")]
    AccessDenied { reason: String },

    #[error("Fetching the video library failed: {reason}")]
    FetchFailed { reason: String },

    #[error("Creating the video entry failed: {reason}")]
    CreateFailed { reason: String },

    #[error("Deleting video {id} failed: {reason}")]
    DeleteFailed { id: i64, reason: String },

    #[error("Saving settings failed: {reason}")]
    SettingsSaveFailed { reason: String },

    #[error("Thumbnail fetch failed for {url}: {reason}")]
    ThumbnailFailed { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, NewscenterError>;
