use std::{collections::HashMap, sync::Mutex};

use tokio::sync::mpsc;

use crate::events::{EventChannel, Subscription};

/// In-process event channel: a table of live subscriber senders per topic.
///
/// Payloads are delivered in publish order to every subscription on the
/// topic; subscriptions whose receiving half was dropped are pruned on the
/// next publish.
#[derive(Default)]
pub struct LocalEventChannel {
    topics: Mutex<HashMap<&'static str, Vec<mpsc::UnboundedSender<String>>>>,
}

impl LocalEventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `payload` to every live subscription on `topic`.
    pub fn publish(&self, topic: &str, payload: &str) {
        let mut topics = self.topics.lock().unwrap();
        let Some(senders) = topics.get_mut(topic) else {
            tracing::debug!(topic, "publish on topic without subscribers");
            return;
        };

        senders.retain(|tx| tx.send(payload.to_string()).is_ok());
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .lock()
            .unwrap()
            .get(topic)
            .map_or(0, |senders| senders.iter().filter(|tx| !tx.is_closed()).count())
    }
}

impl EventChannel for LocalEventChannel {
    fn subscribe(&self, topic: &'static str) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.topics
            .lock()
            .unwrap()
            .entry(topic)
            .or_default()
            .push(tx);
        Subscription::new(topic, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_in_publish_order() {
        let channel = LocalEventChannel::new();
        let mut sub = channel.subscribe("orders");

        channel.publish("orders", "a");
        channel.publish("orders", "b");
        channel.publish("orders", "c");

        assert_eq!(sub.recv().await.as_deref(), Some("a"));
        assert_eq!(sub.recv().await.as_deref(), Some("b"));
        assert_eq!(sub.recv().await.as_deref(), Some("c"));
    }

    #[tokio::test]
    async fn every_subscriber_sees_every_payload() {
        let channel = LocalEventChannel::new();
        let mut first = channel.subscribe("fanout");
        let mut second = channel.subscribe("fanout");

        channel.publish("fanout", "x");

        assert_eq!(first.recv().await.as_deref(), Some("x"));
        assert_eq!(second.recv().await.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn dropped_subscriptions_are_pruned() {
        let channel = LocalEventChannel::new();
        let sub = channel.subscribe("gone");
        assert_eq!(channel.subscriber_count("gone"), 1);

        drop(sub);
        channel.publish("gone", "ignored");
        assert_eq!(channel.subscriber_count("gone"), 0);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_silent() {
        let channel = LocalEventChannel::new();
        channel.publish("nobody-home", "payload");
        assert_eq!(channel.subscriber_count("nobody-home"), 0);
    }
}
