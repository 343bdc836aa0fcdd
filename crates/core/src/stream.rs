use std::sync::Mutex;

use tracing::debug;

/// Sentinel payload opening a stream window; clears the channel's buffer.
pub const STREAM_START: &str = "[start]";

/// Sentinel payload closing a stream window; the buffer keeps its content.
pub const STREAM_END: &str = "[end]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamChannel {
    Transcript,
    Summary,
}

#[derive(Default)]
struct ChannelBuffer {
    content: String,
    framing: bool,
}

/// Owns the two incrementally-streamed text buffers and applies the sentinel
/// protocol to them, one channel at a time, in arrival order.
///
/// Buffers are mutated only by the session's channel pumps, which keeps each
/// buffer an exact concatenation of everything received since the channel's
/// last `[start]`. Chunks arriving outside a start/end window are appended all
/// the same; the framing flag merely records whether a window is open.
#[derive(Default)]
pub struct StreamBufferController {
    transcript: Mutex<ChannelBuffer>,
    summary: Mutex<ChannelBuffer>,
}

impl StreamBufferController {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, channel: StreamChannel) -> &Mutex<ChannelBuffer> {
        match channel {
            StreamChannel::Transcript => &self.transcript,
            StreamChannel::Summary => &self.summary,
        }
    }

    /// Feed one payload from the channel's subscription into its buffer.
    pub(crate) fn apply(&self, channel: StreamChannel, payload: &str) {
        let mut buffer = self.cell(channel).lock().unwrap();
        match payload {
            STREAM_START => {
                debug!(?channel, "stream window opened");
                buffer.content.clear();
                buffer.framing = true;
            }
            STREAM_END => {
                debug!(?channel, chars = buffer.content.len(), "stream window closed");
                buffer.framing = false;
            }
            chunk => buffer.content.push_str(chunk),
        }
    }

    /// Current accumulated text of one channel.
    pub fn current_text(&self, channel: StreamChannel) -> String {
        self.cell(channel).lock().unwrap().content.clone()
    }

    /// Whether the channel is inside an open `[start]`..`[end]` window.
    pub fn framing(&self, channel: StreamChannel) -> bool {
        self.cell(channel).lock().unwrap().framing
    }
}
