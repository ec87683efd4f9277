//! Event normalization and delivery for the TeamSpeak GSI bridge.
//!
//! - [`encoder`]: pure `Event` → `StateDocument` mapping (raw or derived)
//! - [`transport`]: fire-and-forget HTTP POST to the local receiver
//! - [`intake`]: per-callback entry points tying the two together

pub mod encoder;
pub mod intake;
pub mod transport;

pub use encoder::{encode, KickScope, StateSignal, TextSource};
pub use intake::{EventIntake, HostServices};
pub use transport::{
    DeliveryResult, HttpTransport, Transport, UnavailableTransport, RECEIVER_URL,
};
