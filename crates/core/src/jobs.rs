use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tracing::{debug, error};

use crate::{
    error::NewscenterError,
    gateway::{RemoteCallGateway, SummaryJobRequest, TranscriptJobRequest},
    library::VideoLibraryStore,
    notify::{NotificationQueue, Severity},
};

/// Wording shown when the source platform refuses the download. Deliberately
/// different from the generic failure notification, and shown longer.
pub const ACCESS_DENIED_NOTICE: &str =
    "The source platform refused the request (403). Blocks like this usually lift on their own; wait a while and try again.";

/// Display duration for the access-denied notification.
pub const ACCESS_DENIED_DISPLAY_DURATION: Duration = Duration::from_millis(10_000);

/// The shared "a job is in flight" flag.
///
/// At most one of the two job submissions may run at a time, whichever one it
/// is. The flag goes up before the remote call is issued and comes down when
/// the call settles; the sentinel stream never drives it.
#[derive(Default)]
pub struct JobGate {
    in_flight: AtomicBool,
}

impl JobGate {
    /// Try to raise the gate. `None` means a job is already in flight. The
    /// returned guard lowers the gate on drop, so every exit path releases it.
    fn try_raise(&self) -> Option<GateGuard<'_>> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(GateGuard { gate: self })
    }

    pub fn is_raised(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

struct GateGuard<'a> {
    gate: &'a JobGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::SeqCst);
    }
}

/// Submits the two long-running jobs and owns the admission gate.
///
/// Entry points never return errors: local precondition failures are silent
/// no-ops, and backend failures become exactly one notification. The call's
/// own settlement is the only thing that lowers the gate; stream sentinels
/// arriving earlier or later do not touch it.
pub struct JobOrchestrator {
    gateway: Arc<dyn RemoteCallGateway>,
    library: Arc<VideoLibraryStore>,
    notifications: NotificationQueue,
    gate: JobGate,
}

impl JobOrchestrator {
    pub fn new(
        gateway: Arc<dyn RemoteCallGateway>,
        library: Arc<VideoLibraryStore>,
        notifications: NotificationQueue,
    ) -> Self {
        Self {
            gateway,
            library,
            notifications,
            gate: JobGate::default(),
        }
    }

    pub fn job_running(&self) -> bool {
        self.gate.is_raised()
    }

    /// Submit transcript extraction.
    ///
    /// When the selected entity has never been transcribed, the job targets it
    /// (a refill on the existing record) and `url_input` is ignored.
    /// Otherwise `url_input` must be a non-empty URL and the backend creates
    /// the entity itself. After a successful run the library is refreshed with
    /// the selection moved to the first (newest) entity.
    pub async fn submit_transcript_job(&self, url_input: &str) {
        let request = match self.library.selected_video() {
            Some(selected) if selected.transcript.is_none() => TranscriptJobRequest {
                source: selected.external_id,
                target_id: Some(selected.id),
            },
            _ => {
                let url = url_input.trim();
                if url.is_empty() {
                    debug!("transcript job skipped: no refill target and no URL");
                    return;
                }
                TranscriptJobRequest {
                    source: url.to_string(),
                    target_id: None,
                }
            }
        };

        let Some(_guard) = self.gate.try_raise() else {
            debug!("transcript job rejected: another job is in flight");
            return;
        };

        let source = request.source.clone();
        match self.gateway.submit_transcript_job(request).await {
            Ok(message) => {
                self.notifications.success(message);
                self.refresh_after_job(true).await;
            }
            Err(e) if e.message.contains("403") => {
                let err = NewscenterError::AccessDenied { reason: e.message };
                error!("{err}");
                self.notifications.push_timed(
                    ACCESS_DENIED_NOTICE,
                    Severity::Error,
                    ACCESS_DENIED_DISPLAY_DURATION,
                );
            }
            Err(e) => {
                let err = NewscenterError::TranscriptJobFailed {
                    source_name: source,
                    reason: e.message,
                };
                error!("{err}");
                self.notifications.error(err.to_string());
            }
        }
    }

    /// Submit summarization for the selected entity.
    ///
    /// Requires a selection whose transcript is already extracted; anything
    /// else is a silent no-op. The post-success refresh keeps the selection
    /// where it is, the user is mid-review of that entity.
    pub async fn submit_summary_job(&self, language: &str, auto_mode: bool) {
        let Some(selected) = self.library.selected_video() else {
            debug!("summary job skipped: nothing selected");
            return;
        };
        if selected.transcript.is_none() {
            debug!(video_id = selected.id, "summary job skipped: no transcript yet");
            return;
        }

        let Some(_guard) = self.gate.try_raise() else {
            debug!("summary job rejected: another job is in flight");
            return;
        };

        let request = SummaryJobRequest {
            video_id: selected.id,
            language: language.to_string(),
            auto_mode,
        };
        match self.gateway.submit_summary_job(request).await {
            Ok(message) => {
                self.notifications.success(message);
                self.refresh_after_job(false).await;
            }
            Err(e) => {
                let err = NewscenterError::SummaryJobFailed {
                    video_id: selected.id,
                    reason: e.message,
                };
                error!("{err}");
                self.notifications.error(err.to_string());
            }
        }
    }

    async fn refresh_after_job(&self, select_first: bool) {
        if let Err(err) = self.library.refresh(select_first).await {
            error!("{err}");
            self.notifications.error(err.to_string());
        }
    }
}
