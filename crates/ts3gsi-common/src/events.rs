//! Events observed from the TeamSpeak client.
//!
//! Serde names follow the host callback and parameter names, so
//! serializing an `Event` yields exactly the `data` section of a
//! raw-policy document: `{"onClientMoveEvent": {"clientID": 7, ...}}`.

use serde::{Deserialize, Serialize};

use crate::types::{AnyId, ChannelId, ConnectionHandlerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectStatusChange {
    #[serde(rename = "serverConnectionHandlerID")]
    pub connection: ConnectionHandlerId,
    #[serde(rename = "newStatus")]
    pub new_status: i32,
    #[serde(rename = "errorNumber")]
    pub error_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMove {
    #[serde(rename = "serverConnectionHandlerID")]
    pub connection: ConnectionHandlerId,
    #[serde(rename = "clientID")]
    pub client_id: AnyId,
    #[serde(rename = "oldChannelID")]
    pub old_channel_id: ChannelId,
    #[serde(rename = "newChannelID")]
    pub new_channel_id: ChannelId,
    pub visibility: i32,
    #[serde(rename = "moveMessage")]
    pub move_message: String,
}

/// Payload shared by channel and server kicks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientKick {
    #[serde(rename = "serverConnectionHandlerID")]
    pub connection: ConnectionHandlerId,
    #[serde(rename = "clientID")]
    pub client_id: AnyId,
    #[serde(rename = "oldChannelID")]
    pub old_channel_id: ChannelId,
    #[serde(rename = "newChannelID")]
    pub new_channel_id: ChannelId,
    pub visibility: i32,
    #[serde(rename = "kickerID")]
    pub kicker_id: AnyId,
    #[serde(rename = "kickerName")]
    pub kicker_name: String,
    #[serde(rename = "kickerUniqueIdentifier")]
    pub kicker_unique_identifier: String,
    #[serde(rename = "kickMessage")]
    pub kick_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPoke {
    #[serde(rename = "serverConnectionHandlerID")]
    pub connection: ConnectionHandlerId,
    #[serde(rename = "fromClientID")]
    pub from_client_id: AnyId,
    #[serde(rename = "pokerName")]
    pub poker_name: String,
    #[serde(rename = "pokerUniqueIdentity")]
    pub poker_unique_identity: String,
    pub message: String,
    /// Non-zero when the friend/foe filter ignored the sender.
    #[serde(rename = "ffIgnored")]
    pub ff_ignored: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    #[serde(rename = "serverConnectionHandlerID")]
    pub connection: ConnectionHandlerId,
    #[serde(rename = "targetMode")]
    pub target_mode: AnyId,
    #[serde(rename = "toID")]
    pub to_id: AnyId,
    #[serde(rename = "fromID")]
    pub from_id: AnyId,
    #[serde(rename = "fromName")]
    pub from_name: String,
    #[serde(rename = "fromUniqueIdentifier")]
    pub from_unique_identifier: String,
    pub message: String,
    #[serde(rename = "ffIgnored")]
    pub ff_ignored: i32,
}

/// Talk status change, enriched with the talker's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkStatusChange {
    #[serde(rename = "serverConnectionHandlerID")]
    pub connection: ConnectionHandlerId,
    pub status: i32,
    #[serde(rename = "isReceivedWhisper")]
    pub is_received_whisper: i32,
    #[serde(rename = "clientID")]
    pub client_id: AnyId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfVariableUpdate {
    #[serde(rename = "serverConnectionHandlerID")]
    pub connection: ConnectionHandlerId,
    pub flag: i32,
    #[serde(rename = "oldValue")]
    pub old_value: String,
    #[serde(rename = "newValue")]
    pub new_value: String,
}

/// One observed occurrence from the voice client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    #[serde(rename = "onConnectStatusChangeEvent")]
    ConnectionStatusChanged(ConnectStatusChange),
    #[serde(rename = "onClientMoveEvent")]
    ClientMoved(ClientMove),
    #[serde(rename = "onClientKickFromChannelEvent")]
    ClientKickedFromChannel(ClientKick),
    #[serde(rename = "onClientKickFromServerEvent")]
    ClientKickedFromServer(ClientKick),
    #[serde(rename = "onClientPokeEvent")]
    ClientPoked(ClientPoke),
    #[serde(rename = "onTextMessageEvent")]
    TextMessageReceived(TextMessage),
    #[serde(rename = "onTalkStatusChangeEvent")]
    TalkStatusChanged(TalkStatusChange),
    #[serde(rename = "onClientSelfVariableUpdateEvent")]
    SelfVariableUpdated(SelfVariableUpdate),
}

impl Event {
    /// Host callback name; also the key under `data` in raw documents.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Event::ConnectionStatusChanged(_) => "onConnectStatusChangeEvent",
            Event::ClientMoved(_) => "onClientMoveEvent",
            Event::ClientKickedFromChannel(_) => "onClientKickFromChannelEvent",
            Event::ClientKickedFromServer(_) => "onClientKickFromServerEvent",
            Event::ClientPoked(_) => "onClientPokeEvent",
            Event::TextMessageReceived(_) => "onTextMessageEvent",
            Event::TalkStatusChanged(_) => "onTalkStatusChangeEvent",
            Event::SelfVariableUpdated(_) => "onClientSelfVariableUpdateEvent",
        }
    }

    pub fn connection(&self) -> ConnectionHandlerId {
        match self {
            Event::ConnectionStatusChanged(e) => e.connection,
            Event::ClientMoved(e) => e.connection,
            Event::ClientKickedFromChannel(e) | Event::ClientKickedFromServer(e) => e.connection,
            Event::ClientPoked(e) => e.connection,
            Event::TextMessageReceived(e) => e.connection,
            Event::TalkStatusChanged(e) => e.connection,
            Event::SelfVariableUpdated(e) => e.connection,
        }
    }
}
