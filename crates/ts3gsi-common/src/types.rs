//! TeamSpeak client identifiers and the enumerations the bridge interprets.
//!
//! Events keep the host's raw integers so unknown values survive the Raw
//! encoding; the `from_raw` constructors here are the only place those
//! integers are given meaning.

/// Identifies one server tab (connection) inside the client.
pub type ConnectionHandlerId = u64;

/// Client id, scoped to a connection (`anyID` in the host ABI).
pub type AnyId = u16;

pub type ChannelId = u64;

/// Host return code signalling success.
pub const ERROR_OK: u32 = 0;

/// Return code for poke and text-message hooks: let the client handle it.
pub const HANDLE_NORMALLY: i32 = 0;

/// Connection status reported by `onConnectStatusChangeEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectStatus {
    Disconnected,
    Connecting,
    Connected,
    Establishing,
    Established,
}

impl ConnectStatus {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Disconnected),
            1 => Some(Self::Connecting),
            2 => Some(Self::Connected),
            3 => Some(Self::Establishing),
            4 => Some(Self::Established),
            _ => None,
        }
    }
}

/// Talk status reported by `onTalkStatusChangeEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkStatus {
    NotTalking,
    Talking,
    TalkingWhileDisabled,
}

impl TalkStatus {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::NotTalking),
            1 => Some(Self::Talking),
            2 => Some(Self::TalkingWhileDisabled),
            _ => None,
        }
    }
}

/// The self-variable flags the bridge reacts to. Every other
/// `ClientProperties` value is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfFlag {
    InputMuted,
    OutputMuted,
}

impl SelfFlag {
    pub const INPUT_MUTED: i32 = 5;
    pub const OUTPUT_MUTED: i32 = 6;

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            Self::INPUT_MUTED => Some(Self::InputMuted),
            Self::OUTPUT_MUTED => Some(Self::OutputMuted),
            _ => None,
        }
    }
}
