//! State Encoder: pure mapping from an [`Event`] to a [`StateDocument`].
//!
//! The Raw policy passes every event field through untouched. The Derived
//! policy reduces an event to at most one [`StateSignal`]; events whose
//! values it does not recognise produce no document at all.

use serde_json::{Map, Value};
use tracing::warn;
use ts3gsi_common::{ConnectStatus, Event, SelfFlag, StateDocument, TalkStatus};
use ts3gsi_config::EncodingPolicy;

/// Which kick the local client received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickScope {
    Channel,
    Server,
}

/// What kind of text arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Poke,
    Message,
}

/// A consumer-meaningful signal, emitted as a single `state.<key>` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSignal {
    /// 1 connecting, 2 connected, 3 establishing, 4 established.
    Connected(u8),
    Moved,
    Kicked(KickScope),
    Text(TextSource),
    Talking(bool),
    OutputMuted(bool),
    InputMuted(bool),
}

impl StateSignal {
    pub fn key(&self) -> &'static str {
        match self {
            StateSignal::Connected(_) => "connected",
            StateSignal::Moved => "moved",
            StateSignal::Kicked(_) => "kicked",
            StateSignal::Text(_) => "text",
            StateSignal::Talking(_) => "talking",
            StateSignal::OutputMuted(_) => "outputMuted",
            StateSignal::InputMuted(_) => "inputMuted",
        }
    }

    pub fn value(&self) -> Value {
        match *self {
            StateSignal::Connected(level) => Value::from(level),
            StateSignal::Moved => Value::Bool(true),
            StateSignal::Kicked(KickScope::Channel) => Value::from(1),
            StateSignal::Kicked(KickScope::Server) => Value::from(2),
            StateSignal::Text(TextSource::Poke) => Value::from(0),
            StateSignal::Text(TextSource::Message) => Value::from(1),
            StateSignal::Talking(on)
            | StateSignal::OutputMuted(on)
            | StateSignal::InputMuted(on) => Value::Bool(on),
        }
    }

    pub fn into_document(self) -> StateDocument {
        let mut state = Map::new();
        state.insert(self.key().to_string(), self.value());
        StateDocument::derived(state)
    }
}

/// Encode `event` under `policy`. `None` means there is nothing to send.
pub fn encode(event: &Event, policy: EncodingPolicy) -> Option<StateDocument> {
    match policy {
        EncodingPolicy::Raw => encode_raw(event),
        EncodingPolicy::Derived => derive_signal(event).map(StateSignal::into_document),
    }
}

/// `data.<kind>.<field>` for every field of the event.
pub fn encode_raw(event: &Event) -> Option<StateDocument> {
    match serde_json::to_value(event) {
        Ok(Value::Object(data)) => Some(StateDocument::raw(data)),
        Ok(other) => {
            warn!(kind = event.kind_name(), "event encoded to non-object: {other}");
            None
        }
        Err(e) => {
            warn!(kind = event.kind_name(), error = %e, "failed to encode event");
            None
        }
    }
}

/// Interpret an event into the single signal it stands for, if any.
pub fn derive_signal(event: &Event) -> Option<StateSignal> {
    match event {
        Event::ConnectionStatusChanged(change) => {
            match ConnectStatus::from_raw(change.new_status)? {
                ConnectStatus::Connecting => Some(StateSignal::Connected(1)),
                ConnectStatus::Connected => Some(StateSignal::Connected(2)),
                ConnectStatus::Establishing => Some(StateSignal::Connected(3)),
                ConnectStatus::Established => Some(StateSignal::Connected(4)),
                ConnectStatus::Disconnected => None,
            }
        }
        Event::ClientMoved(_) => Some(StateSignal::Moved),
        Event::ClientKickedFromChannel(_) => Some(StateSignal::Kicked(KickScope::Channel)),
        Event::ClientKickedFromServer(_) => Some(StateSignal::Kicked(KickScope::Server)),
        Event::ClientPoked(_) => Some(StateSignal::Text(TextSource::Poke)),
        Event::TextMessageReceived(_) => Some(StateSignal::Text(TextSource::Message)),
        Event::TalkStatusChanged(change) => Some(StateSignal::Talking(
            TalkStatus::from_raw(change.status) == Some(TalkStatus::Talking),
        )),
        Event::SelfVariableUpdated(update) => {
            let on = update.new_value == "1";
            match SelfFlag::from_raw(update.flag)? {
                SelfFlag::OutputMuted => Some(StateSignal::OutputMuted(on)),
                SelfFlag::InputMuted => Some(StateSignal::InputMuted(on)),
            }
        }
    }
}
