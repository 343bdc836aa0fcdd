use tokio::sync::mpsc;

/// Topic delivering transcript stream frames (sentinels and chunks).
pub const TOPIC_TRANSCRIPT_STREAM: &str = "transcript-stream";

/// Topic delivering summary stream frames.
pub const TOPIC_SUMMARY_STREAM: &str = "summary-stream";

/// Topic signalling that the entity collection was mutated outside this
/// session and must be refetched.
pub const TOPIC_ENTITY_CHANGED: &str = "entity-changed";

/// Publish/subscribe transport delivering named, ordered string messages to
/// the running client. The backend's push side sits behind this trait; the
/// crate ships [`LocalEventChannel`](crate::events::LocalEventChannel) for
/// tests and in-process embedding.
pub trait EventChannel: Send + Sync {
    /// Open an ordered subscription for one topic. Delivery order per
    /// subscription matches publish order.
    fn subscribe(&self, topic: &'static str) -> Subscription;
}

/// Receiving half of one topic subscription. Dropping it tears the
/// subscription down.
pub struct Subscription {
    topic: &'static str,
    rx: mpsc::UnboundedReceiver<String>,
}

impl Subscription {
    pub fn new(topic: &'static str, rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self { topic, rx }
    }

    pub fn topic(&self) -> &'static str {
        self.topic
    }

    /// Next payload, or `None` once the publishing side is gone.
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}
