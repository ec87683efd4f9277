pub mod document;
pub mod errors;
pub mod events;
pub mod types;

pub use document::{DocumentShape, Provider, StateDocument, PROVIDER_APPID, PROVIDER_NAME};
pub use errors::{ConfigError, GsiError, HostError, TransportError};
pub use events::{
    ClientKick, ClientMove, ClientPoke, ConnectStatusChange, Event, SelfVariableUpdate,
    TalkStatusChange, TextMessage,
};
pub use types::{
    AnyId, ChannelId, ConnectStatus, ConnectionHandlerId, SelfFlag, TalkStatus, ERROR_OK,
    HANDLE_NORMALLY,
};

pub type Result<T> = std::result::Result<T, GsiError>;
