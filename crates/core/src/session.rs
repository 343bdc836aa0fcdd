use std::sync::Arc;

use anyhow::Result as TaskResult;
use tokio::sync::broadcast;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::{
    error::Result,
    events::{
        EventChannel, Subscription, TOPIC_ENTITY_CHANGED, TOPIC_SUMMARY_STREAM,
        TOPIC_TRANSCRIPT_STREAM,
    },
    gateway::RemoteCallGateway,
    jobs::JobOrchestrator,
    library::VideoLibraryStore,
    notify::NotificationQueue,
    settings::{AppSettings, SettingsStore},
    stream::{StreamBufferController, StreamChannel},
    thumbnail::ThumbnailCache,
};

/// One running client session: every core component plus the pump tasks that
/// feed them from the event channel.
///
/// `start` subscribes the three topics and spawns one pump per subscription;
/// `shutdown` broadcasts the stop signal and every pump exits. Components are
/// reachable through accessors so the rendering layer reads state without
/// going through the session, but all event-channel traffic flows through the
/// pumps owned here.
pub struct Session {
    id: Uuid,
    library: Arc<VideoLibraryStore>,
    streams: Arc<StreamBufferController>,
    orchestrator: Arc<JobOrchestrator>,
    notifications: NotificationQueue,
    settings: Arc<SettingsStore>,
    thumbnails: Arc<ThumbnailCache>,
    shutdown_tx: broadcast::Sender<()>,
}

impl Session {
    /// Build the components, subscribe the topics, and start the pumps.
    pub fn start(gateway: Arc<dyn RemoteCallGateway>, channel: &dyn EventChannel) -> Self {
        let id = Uuid::new_v4();
        let notifications = NotificationQueue::new();
        let library = Arc::new(VideoLibraryStore::new(Arc::clone(&gateway)));
        let streams = Arc::new(StreamBufferController::new());
        let settings = Arc::new(SettingsStore::new(Arc::clone(&gateway)));
        let thumbnails = Arc::new(ThumbnailCache::new(Arc::clone(&gateway)));
        let orchestrator = Arc::new(JobOrchestrator::new(
            Arc::clone(&gateway),
            Arc::clone(&library),
            notifications.clone(),
        ));

        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

        tokio::spawn(stream_pump(
            channel.subscribe(TOPIC_TRANSCRIPT_STREAM),
            StreamChannel::Transcript,
            Arc::clone(&streams),
            shutdown_rx.resubscribe(),
        ));
        tokio::spawn(stream_pump(
            channel.subscribe(TOPIC_SUMMARY_STREAM),
            StreamChannel::Summary,
            Arc::clone(&streams),
            shutdown_rx.resubscribe(),
        ));
        tokio::spawn(entity_changed_pump(
            channel.subscribe(TOPIC_ENTITY_CHANGED),
            Arc::clone(&library),
            notifications.clone(),
            shutdown_rx,
        ));

        info!(session = %id, "session started");
        Self {
            id,
            library,
            streams,
            orchestrator,
            notifications,
            settings,
            thumbnails,
            shutdown_tx,
        }
    }

    /// Stop the pump tasks. The subscriptions drop with them, releasing the
    /// event channel handles.
    pub fn shutdown(&self) {
        info!(session = %self.id, "session shutting down");
        let _ = self.shutdown_tx.send(());
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn library(&self) -> &VideoLibraryStore {
        &self.library
    }

    pub fn streams(&self) -> &StreamBufferController {
        &self.streams
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    pub fn job_running(&self) -> bool {
        self.orchestrator.job_running()
    }

    pub async fn submit_transcript_job(&self, url_input: &str) {
        self.orchestrator.submit_transcript_job(url_input).await;
    }

    pub async fn submit_summary_job(&self, language: &str, auto_mode: bool) {
        self.orchestrator.submit_summary_job(language, auto_mode).await;
    }

    /// Select `id` and bring the thumbnail slot in line with whatever the
    /// selection resolved to.
    pub async fn select_video(&self, id: i64) {
        self.library.select(id);
        self.reconcile_thumbnail().await;
    }

    /// Delete `id`; the selection is gone afterwards, so the thumbnail goes
    /// with it.
    pub async fn delete_video(&self, id: i64) -> Result<()> {
        self.library.remove(id).await?;
        self.thumbnails.clear();
        Ok(())
    }

    /// Refresh the library and reconcile the thumbnail against the possibly
    /// changed selection.
    pub async fn refresh_library(&self, select_first: bool) -> Result<()> {
        self.library.refresh(select_first).await?;
        self.reconcile_thumbnail().await;
        Ok(())
    }

    /// Persist settings, surfacing the outcome as a notification either way.
    pub async fn save_settings(&self, settings: AppSettings) {
        match self.settings.save(settings).await {
            Ok(()) => {
                self.notifications.success("Settings saved");
            }
            Err(err) => {
                error!("{err}");
                self.notifications.error(err.to_string());
            }
        }
    }

    async fn reconcile_thumbnail(&self) {
        match self.library.selected_video() {
            Some(video) => self.thumbnails.load_for_selection(&video.thumbnail_url).await,
            None => self.thumbnails.clear(),
        }
    }
}

/// Forward one stream subscription into its buffer until shutdown or the
/// publishing side closes.
async fn stream_pump(
    mut subscription: Subscription,
    channel: StreamChannel,
    streams: Arc<StreamBufferController>,
    mut shutdown: broadcast::Receiver<()>,
) -> TaskResult<()> {
    loop {
        tokio::select! {
            _ = shutdown.recv() => return Ok(()),
            payload = subscription.recv() => match payload {
                Some(payload) => streams.apply(channel, &payload),
                None => {
                    debug!(topic = subscription.topic(), "subscription closed");
                    return Ok(());
                }
            }
        }
    }
}

/// React to external library mutations: any payload on the topic means the
/// collection changed behind our back and must be refetched. The selection is
/// left where it is.
async fn entity_changed_pump(
    mut subscription: Subscription,
    library: Arc<VideoLibraryStore>,
    notifications: NotificationQueue,
    mut shutdown: broadcast::Receiver<()>,
) -> TaskResult<()> {
    loop {
        tokio::select! {
            _ = shutdown.recv() => return Ok(()),
            payload = subscription.recv() => match payload {
                Some(tag) => {
                    debug!(tag, "entity collection changed externally");
                    if let Err(err) = library.refresh(false).await {
                        error!("{err}");
                        notifications.error(err.to_string());
                    }
                }
                None => {
                    debug!(topic = subscription.topic(), "subscription closed");
                    return Ok(());
                }
            }
        }
    }
}
