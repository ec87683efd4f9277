//! Event Intake: one entry point per host callback.
//!
//! Each entry point builds the typed [`Event`], runs it through the
//! encoder and hands the document to the transport. Failures are logged
//! and swallowed; nothing here returns an error to the host.

use tracing::{debug, info, warn};
use ts3gsi_common::{
    AnyId, ClientKick, ClientMove, ClientPoke, ConnectStatus, ConnectStatusChange,
    ConnectionHandlerId, Event, HostError, SelfFlag, SelfVariableUpdate, TalkStatus,
    TalkStatusChange, TextMessage, HANDLE_NORMALLY,
};
use ts3gsi_config::EncodingPolicy;

use crate::encoder;
use crate::transport::{DeliveryResult, Transport};

/// Lookups served by the host client.
pub trait HostServices: Send + Sync {
    fn client_display_name(
        &self,
        connection: ConnectionHandlerId,
        client: AnyId,
    ) -> Result<String, HostError>;
}

pub struct EventIntake<T, H> {
    policy: EncodingPolicy,
    transport: T,
    host: H,
}

impl<T: Transport, H: HostServices> EventIntake<T, H> {
    pub fn new(policy: EncodingPolicy, transport: T, host: H) -> Self {
        Self {
            policy,
            transport,
            host,
        }
    }

    pub fn policy(&self) -> EncodingPolicy {
        self.policy
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn on_connect_status_change(
        &self,
        connection: ConnectionHandlerId,
        new_status: i32,
        error_number: u32,
    ) {
        match ConnectStatus::from_raw(new_status) {
            Some(ConnectStatus::Connecting) => info!(connection, "connecting"),
            Some(ConnectStatus::Connected) => info!(connection, "connected"),
            Some(ConnectStatus::Establishing) => info!(connection, "establishing connection"),
            Some(ConnectStatus::Established) => info!(connection, "connection established"),
            Some(ConnectStatus::Disconnected) => info!(connection, error_number, "disconnected"),
            None => debug!(connection, new_status, "unknown connect status"),
        }
        self.dispatch(&Event::ConnectionStatusChanged(ConnectStatusChange {
            connection,
            new_status,
            error_number,
        }));
    }

    pub fn on_client_move(&self, moved: ClientMove) {
        debug!(client = moved.client_id, "client moved");
        self.dispatch(&Event::ClientMoved(moved));
    }

    pub fn on_client_kick_from_channel(&self, kick: ClientKick) {
        info!(client = kick.client_id, kicker = %kick.kicker_name, "kicked from channel");
        self.dispatch(&Event::ClientKickedFromChannel(kick));
    }

    pub fn on_client_kick_from_server(&self, kick: ClientKick) {
        info!(client = kick.client_id, kicker = %kick.kicker_name, "kicked from server");
        self.dispatch(&Event::ClientKickedFromServer(kick));
    }

    /// Returns the host code telling the client to handle the poke normally.
    pub fn on_client_poke(&self, poke: ClientPoke) -> i32 {
        debug!(from = %poke.poker_name, "received poke");
        self.dispatch(&Event::ClientPoked(poke));
        HANDLE_NORMALLY
    }

    /// Returns the host code telling the client to handle the message normally.
    pub fn on_text_message(&self, message: TextMessage) -> i32 {
        debug!(from = %message.from_name, "received text message");
        self.dispatch(&Event::TextMessageReceived(message));
        HANDLE_NORMALLY
    }

    /// Resolves the talker's display name first; a failed lookup drops
    /// the event.
    pub fn on_talk_status_change(
        &self,
        connection: ConnectionHandlerId,
        status: i32,
        is_received_whisper: i32,
        client_id: AnyId,
    ) {
        let name = match self.host.client_display_name(connection, client_id) {
            Ok(name) => name,
            Err(e) => {
                debug!(connection, client = client_id, error = %e, "display name lookup failed, dropping talk event");
                return;
            }
        };

        if TalkStatus::from_raw(status) == Some(TalkStatus::Talking) {
            debug!("{name} starts talking");
        } else {
            debug!("{name} stops talking");
        }

        self.dispatch(&Event::TalkStatusChanged(TalkStatusChange {
            connection,
            status,
            is_received_whisper,
            client_id,
            name,
        }));
    }

    pub fn on_client_self_variable_update(&self, update: SelfVariableUpdate) {
        match SelfFlag::from_raw(update.flag) {
            Some(SelfFlag::OutputMuted) => info!("client output muted: {}", update.new_value),
            Some(SelfFlag::InputMuted) => info!("client input muted: {}", update.new_value),
            None => debug!(flag = update.flag, "self variable updated"),
        }
        self.dispatch(&Event::SelfVariableUpdated(update));
    }

    /// Encode and send one event. `None` when the policy produced no
    /// document for it.
    pub fn dispatch(&self, event: &Event) -> Option<DeliveryResult> {
        let connection = event.connection();
        let Some(document) = encoder::encode(event, self.policy) else {
            debug!(connection, kind = event.kind_name(), "nothing to send");
            return None;
        };

        let result = self.transport.send(&document);
        if let Err(ref e) = result {
            warn!(connection, kind = event.kind_name(), "failed to deliver state: {e}");
        }
        Some(result)
    }
}
