//! JSON message shapes exchanged with the embedding host.
//!
//! The dialog lives in a frame owned by an external controller and talks to
//! it over a generic message channel: the host pushes lifecycle events in,
//! the dialog posts notices and fire-and-forget handler invocations out.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::error;

/// Inbound lifecycle events, tagged by the `name` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum DialogEvent {
    /// Initialize if needed and render the dialog.
    Show,
    /// The user asked for dismissal; request it from the host.
    Hide,
    /// The host finished hiding the frame; clean up transient state.
    Hidden,
}

impl DialogEvent {
    /// Parse a raw inbound message. Any unrecognized `name` is a programmer
    /// error: logged and fatal, never recovered.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value.clone()) {
            Ok(event) => event,
            Err(err) => {
                error!(%err, message = %value, "unrecognized help dialog message");
                panic!("unrecognized help dialog message: {value}");
            }
        }
    }
}

/// Outbound notices addressed to the frame's controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum DialogNotice {
    /// Ask the host to dismiss and destroy the dialog frame.
    Hide,
}

/// A fire-and-forget invocation of a named host handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerRequest {
    pub handler: String,
}

impl HandlerRequest {
    /// Open the settings surface in a new tab.
    pub fn open_options_page() -> Self {
        Self {
            handler: "openOptionsPageInNewTab".to_string(),
        }
    }
}

/// Outbound half of the host channel.
pub trait HostPort: Send + Sync {
    /// Post a serialized message to the host. Fire-and-forget: delivery
    /// failures are the host's problem, not the dialog's.
    fn post(&self, message: Value);
}

/// A `HostPort` backed by an unbounded tokio channel, for embedding the
/// dialog into an event loop (and for driving it in tests).
pub struct ChannelHostPort {
    sender: mpsc::UnboundedSender<Value>,
}

impl ChannelHostPort {
    pub fn new(sender: mpsc::UnboundedSender<Value>) -> Self {
        Self { sender }
    }

    /// Create a port together with the receiving end.
    pub fn pair() -> (Self, mpsc::UnboundedReceiver<Value>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl HostPort for ChannelHostPort {
    fn post(&self, message: Value) {
        // The receiver may already be gone during teardown.
        let _ = self.sender.send(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inbound_event_parsing() {
        assert_eq!(
            DialogEvent::from_value(json!({"name": "show"})),
            DialogEvent::Show
        );
        assert_eq!(
            DialogEvent::from_value(json!({"name": "hide"})),
            DialogEvent::Hide
        );
        assert_eq!(
            DialogEvent::from_value(json!({"name": "hidden"})),
            DialogEvent::Hidden
        );
    }

    #[test]
    fn test_inbound_event_ignores_extra_fields() {
        let event = DialogEvent::from_value(json!({"name": "show", "focus": true}));
        assert_eq!(event, DialogEvent::Show);
    }

    #[test]
    #[should_panic(expected = "unrecognized help dialog message")]
    fn test_unknown_event_name_is_fatal() {
        DialogEvent::from_value(json!({"name": "explode"}));
    }

    #[test]
    fn test_outbound_shapes() {
        assert_eq!(
            serde_json::to_value(DialogNotice::Hide).unwrap(),
            json!({"name": "hide"})
        );
        assert_eq!(
            serde_json::to_value(HandlerRequest::open_options_page()).unwrap(),
            json!({"handler": "openOptionsPageInNewTab"})
        );
    }

    #[test]
    fn test_channel_port_delivers_messages() {
        let (port, mut receiver) = ChannelHostPort::pair();
        port.post(json!({"name": "hide"}));
        assert_eq!(receiver.try_recv().unwrap(), json!({"name": "hide"}));
    }
}
