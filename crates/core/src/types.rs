use serde::{Deserialize, Serialize};

/// A persisted video record, mirrored from backend storage.
///
/// `transcript == None` means no extraction job has ever completed for this
/// entity. An empty string is a real result (a video with no captions), so the
/// two must never be conflated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntity {
    pub id: i64,
    pub external_id: String,
    pub title: String,
    pub duration_seconds: u64,
    pub upload_date: u64,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub keywords: String,
    pub created_at_timestamp: i64,
    pub thumbnail_url: String,
}

impl VideoEntity {
    pub fn has_transcript(&self) -> bool {
        self.transcript.is_some()
    }
}

/// Request body for the create procedure. Same shape as [`VideoEntity`] minus
/// the backend-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDraft {
    pub external_id: String,
    pub title: String,
    pub duration_seconds: u64,
    pub upload_date: u64,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub keywords: String,
    pub created_at_timestamp: i64,
    pub thumbnail_url: String,
}
