//! Test doubles and fixtures shared by the unit tests.

use std::{collections::VecDeque, sync::Mutex, time::Duration};

use async_trait::async_trait;

use crate::{
    gateway::{CallResult, RemoteCallGateway, SummaryJobRequest, TranscriptJobRequest},
    settings::AppSettings,
    types::{VideoDraft, VideoEntity},
};

pub fn sample_video(id: i64) -> VideoEntity {
    VideoEntity {
        id,
        external_id: format!("ext-{id}"),
        title: format!("Video {id}"),
        duration_seconds: 300,
        upload_date: 20240101,
        transcript: None,
        summary: None,
        keywords: String::new(),
        created_at_timestamp: 1_700_000_000 + id,
        thumbnail_url: format!("https://img.example/{id}.jpg"),
    }
}

pub fn sample_video_with_transcript(id: i64, transcript: &str) -> VideoEntity {
    VideoEntity {
        transcript: Some(transcript.to_string()),
        ..sample_video(id)
    }
}

pub fn sample_draft(title: &str) -> VideoDraft {
    VideoDraft {
        external_id: "u".to_string(),
        title: title.to_string(),
        duration_seconds: 120,
        upload_date: 20240201,
        transcript: None,
        summary: None,
        keywords: String::new(),
        created_at_timestamp: 1_700_000_100,
        thumbnail_url: String::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    SubmitTranscriptJob(TranscriptJobRequest),
    SubmitSummaryJob(SummaryJobRequest),
    ListEntities,
    CreateEntity(VideoDraft),
    DeleteEntity(i64),
    FetchThumbnailBytes(String),
    LoadSettings,
    SaveSettings(AppSettings),
}

/// Scripted gateway double: records every invocation and replays queued
/// responses, falling back to benign defaults where one exists.
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<GatewayCall>>,
    call_delay: Mutex<Option<Duration>>,
    transcript_results: Mutex<VecDeque<CallResult<String>>>,
    summary_results: Mutex<VecDeque<CallResult<String>>>,
    list_results: Mutex<VecDeque<CallResult<Vec<VideoEntity>>>>,
    create_results: Mutex<VecDeque<CallResult<VideoEntity>>>,
    delete_results: Mutex<VecDeque<CallResult<()>>>,
    thumbnail_results: Mutex<VecDeque<CallResult<Vec<u8>>>>,
    load_settings_results: Mutex<VecDeque<CallResult<AppSettings>>>,
    save_settings_results: Mutex<VecDeque<CallResult<()>>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make both job submissions dwell before settling, so a test can observe
    /// the gate while a call is in flight.
    pub fn delay_job_calls(&self, delay: Duration) {
        *self.call_delay.lock().unwrap() = Some(delay);
    }

    pub fn script_transcript(&self, result: CallResult<String>) {
        self.transcript_results.lock().unwrap().push_back(result);
    }

    pub fn script_summary(&self, result: CallResult<String>) {
        self.summary_results.lock().unwrap().push_back(result);
    }

    pub fn script_list(&self, result: CallResult<Vec<VideoEntity>>) {
        self.list_results.lock().unwrap().push_back(result);
    }

    pub fn script_create(&self, result: CallResult<VideoEntity>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn script_delete(&self, result: CallResult<()>) {
        self.delete_results.lock().unwrap().push_back(result);
    }

    pub fn script_thumbnail(&self, result: CallResult<Vec<u8>>) {
        self.thumbnail_results.lock().unwrap().push_back(result);
    }

    pub fn script_load_settings(&self, result: CallResult<AppSettings>) {
        self.load_settings_results.lock().unwrap().push_back(result);
    }

    pub fn script_save_settings(&self, result: CallResult<()>) {
        self.save_settings_results.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn job_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    GatewayCall::SubmitTranscriptJob(_) | GatewayCall::SubmitSummaryJob(_)
                )
            })
            .count()
    }

    pub fn list_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, GatewayCall::ListEntities))
            .count()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn dwell(&self) {
        let delay = *self.call_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl RemoteCallGateway for FakeGateway {
    async fn submit_transcript_job(&self, request: TranscriptJobRequest) -> CallResult<String> {
        self.record(GatewayCall::SubmitTranscriptJob(request));
        self.dwell().await;
        self.transcript_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("success: transcript finished".to_string()))
    }

    async fn submit_summary_job(&self, request: SummaryJobRequest) -> CallResult<String> {
        self.record(GatewayCall::SubmitSummaryJob(request));
        self.dwell().await;
        self.summary_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("success: summary finished".to_string()))
    }

    async fn list_entities(&self) -> CallResult<Vec<VideoEntity>> {
        self.record(GatewayCall::ListEntities);
        self.list_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_entity(&self, draft: VideoDraft) -> CallResult<VideoEntity> {
        self.record(GatewayCall::CreateEntity(draft));
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("create_entity response must be scripted")
    }

    async fn delete_entity(&self, id: i64) -> CallResult<()> {
        self.record(GatewayCall::DeleteEntity(id));
        self.delete_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn fetch_thumbnail_bytes(&self, url: &str) -> CallResult<Vec<u8>> {
        self.record(GatewayCall::FetchThumbnailBytes(url.to_string()));
        self.thumbnail_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn load_settings(&self) -> CallResult<AppSettings> {
        self.record(GatewayCall::LoadSettings);
        self.load_settings_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(AppSettings::default()))
    }

    async fn save_settings(&self, settings: AppSettings) -> CallResult<()> {
        self.record(GatewayCall::SaveSettings(settings));
        self.save_settings_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
