//! TeamSpeak 3 client plugin forwarding voice-chat state to Aurora.
//!
//! Every `ts3plugin_*` export is a thin adapter: it copies the host's
//! arguments into owned values, hands them to the bridge's event intake
//! and returns the code the host expects. Panics never cross the
//! boundary.

pub mod ffi;
pub mod host;
pub mod runtime;

use std::ffi::{c_char, c_int, c_uint, CStr};

use ts3gsi_common::{
    AnyId, ClientKick, ClientMove, ClientPoke, SelfVariableUpdate, TextMessage, HANDLE_NORMALLY,
};

use crate::ffi::{read_c_string, with_ffi_boundary, Ts3Functions};
use crate::host::PluginIdentity;

pub const PLUGIN_API_VERSION: c_int = 23;

const NAME: &CStr = c"Aurora GSI Integration";
const AUTHOR: &CStr = c"Th3 Ant 'n SnakePin";
const DESCRIPTION: &CStr = c"Display TeamSpeak3 events as RGB effects in Project Aurora";
const VERSION: &CStr = match CStr::from_bytes_with_nul(
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
) {
    Ok(version) => version,
    Err(_) => c"0.0.0",
};

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[no_mangle]
pub extern "C" fn ts3plugin_name() -> *const c_char {
    NAME.as_ptr()
}

#[no_mangle]
pub extern "C" fn ts3plugin_version() -> *const c_char {
    VERSION.as_ptr()
}

/// Plugin API major version this build targets.
#[no_mangle]
pub extern "C" fn ts3plugin_apiVersion() -> c_int {
    PLUGIN_API_VERSION
}

#[no_mangle]
pub extern "C" fn ts3plugin_author() -> *const c_char {
    AUTHOR.as_ptr()
}

#[no_mangle]
pub extern "C" fn ts3plugin_description() -> *const c_char {
    DESCRIPTION.as_ptr()
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[no_mangle]
pub extern "C" fn ts3plugin_setFunctionPointers(funcs: Ts3Functions) {
    with_ffi_boundary("setFunctionPointers", (), || runtime::set_functions(funcs));
}

/// # Safety
///
/// `id` must be null or a NUL-terminated string valid for this call.
#[no_mangle]
pub unsafe extern "C" fn ts3plugin_registerPluginID(id: *const c_char) {
    // The host frees `id` after returning, so copy it now.
    let id = unsafe { read_c_string(id) };
    with_ffi_boundary("registerPluginID", (), || {
        runtime::register_identity(PluginIdentity::new(id))
    });
}

/// 0 = success, 1 = failure.
#[no_mangle]
pub extern "C" fn ts3plugin_init() -> c_int {
    with_ffi_boundary("init", 1, || {
        runtime::init();
        0
    })
}

#[no_mangle]
pub extern "C" fn ts3plugin_shutdown() {
    with_ffi_boundary("shutdown", (), runtime::shutdown);
}

// ---------------------------------------------------------------------------
// Event hooks
// ---------------------------------------------------------------------------

#[no_mangle]
pub extern "C" fn ts3plugin_onConnectStatusChangeEvent(
    server_connection_handler_id: u64,
    new_status: c_int,
    error_number: c_uint,
) {
    with_ffi_boundary("onConnectStatusChangeEvent", (), || {
        runtime::with_intake((), |intake| {
            intake.on_connect_status_change(server_connection_handler_id, new_status, error_number)
        })
    });
}

/// # Safety
///
/// String arguments must be null or NUL-terminated and valid for this call.
#[no_mangle]
pub unsafe extern "C" fn ts3plugin_onClientMoveEvent(
    server_connection_handler_id: u64,
    client_id: AnyId,
    old_channel_id: u64,
    new_channel_id: u64,
    visibility: c_int,
    move_message: *const c_char,
) {
    let moved = ClientMove {
        connection: server_connection_handler_id,
        client_id,
        old_channel_id,
        new_channel_id,
        visibility,
        move_message: unsafe { read_c_string(move_message) },
    };
    with_ffi_boundary("onClientMoveEvent", (), || {
        runtime::with_intake((), |intake| intake.on_client_move(moved))
    });
}

/// Copies the arguments shared by both kick hooks.
///
/// # Safety
///
/// String arguments must be null or NUL-terminated and valid for this call.
#[allow(clippy::too_many_arguments)]
unsafe fn read_kick(
    server_connection_handler_id: u64,
    client_id: AnyId,
    old_channel_id: u64,
    new_channel_id: u64,
    visibility: c_int,
    kicker_id: AnyId,
    kicker_name: *const c_char,
    kicker_unique_identifier: *const c_char,
    kick_message: *const c_char,
) -> ClientKick {
    unsafe {
        ClientKick {
            connection: server_connection_handler_id,
            client_id,
            old_channel_id,
            new_channel_id,
            visibility,
            kicker_id,
            kicker_name: read_c_string(kicker_name),
            kicker_unique_identifier: read_c_string(kicker_unique_identifier),
            kick_message: read_c_string(kick_message),
        }
    }
}

/// # Safety
///
/// String arguments must be null or NUL-terminated and valid for this call.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ts3plugin_onClientKickFromChannelEvent(
    server_connection_handler_id: u64,
    client_id: AnyId,
    old_channel_id: u64,
    new_channel_id: u64,
    visibility: c_int,
    kicker_id: AnyId,
    kicker_name: *const c_char,
    kicker_unique_identifier: *const c_char,
    kick_message: *const c_char,
) {
    let kick = unsafe {
        read_kick(
            server_connection_handler_id,
            client_id,
            old_channel_id,
            new_channel_id,
            visibility,
            kicker_id,
            kicker_name,
            kicker_unique_identifier,
            kick_message,
        )
    };
    with_ffi_boundary("onClientKickFromChannelEvent", (), || {
        runtime::with_intake((), |intake| intake.on_client_kick_from_channel(kick))
    });
}

/// # Safety
///
/// String arguments must be null or NUL-terminated and valid for this call.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ts3plugin_onClientKickFromServerEvent(
    server_connection_handler_id: u64,
    client_id: AnyId,
    old_channel_id: u64,
    new_channel_id: u64,
    visibility: c_int,
    kicker_id: AnyId,
    kicker_name: *const c_char,
    kicker_unique_identifier: *const c_char,
    kick_message: *const c_char,
) {
    let kick = unsafe {
        read_kick(
            server_connection_handler_id,
            client_id,
            old_channel_id,
            new_channel_id,
            visibility,
            kicker_id,
            kicker_name,
            kicker_unique_identifier,
            kick_message,
        )
    };
    with_ffi_boundary("onClientKickFromServerEvent", (), || {
        runtime::with_intake((), |intake| intake.on_client_kick_from_server(kick))
    });
}

/// 0 = handle normally, 1 = client ignores the poke.
///
/// # Safety
///
/// String arguments must be null or NUL-terminated and valid for this call.
#[no_mangle]
pub unsafe extern "C" fn ts3plugin_onClientPokeEvent(
    server_connection_handler_id: u64,
    from_client_id: AnyId,
    poker_name: *const c_char,
    poker_unique_identity: *const c_char,
    message: *const c_char,
    ff_ignored: c_int,
) -> c_int {
    let poke = unsafe {
        ClientPoke {
            connection: server_connection_handler_id,
            from_client_id,
            poker_name: read_c_string(poker_name),
            poker_unique_identity: read_c_string(poker_unique_identity),
            message: read_c_string(message),
            ff_ignored,
        }
    };
    with_ffi_boundary("onClientPokeEvent", HANDLE_NORMALLY, || {
        runtime::with_intake(HANDLE_NORMALLY, |intake| intake.on_client_poke(poke))
    })
}

/// 0 = handle normally, 1 = client ignores the message.
///
/// # Safety
///
/// String arguments must be null or NUL-terminated and valid for this call.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ts3plugin_onTextMessageEvent(
    server_connection_handler_id: u64,
    target_mode: AnyId,
    to_id: AnyId,
    from_id: AnyId,
    from_name: *const c_char,
    from_unique_identifier: *const c_char,
    message: *const c_char,
    ff_ignored: c_int,
) -> c_int {
    let text = unsafe {
        TextMessage {
            connection: server_connection_handler_id,
            target_mode,
            to_id,
            from_id,
            from_name: read_c_string(from_name),
            from_unique_identifier: read_c_string(from_unique_identifier),
            message: read_c_string(message),
            ff_ignored,
        }
    };
    with_ffi_boundary("onTextMessageEvent", HANDLE_NORMALLY, || {
        runtime::with_intake(HANDLE_NORMALLY, |intake| intake.on_text_message(text))
    })
}

#[no_mangle]
pub extern "C" fn ts3plugin_onTalkStatusChangeEvent(
    server_connection_handler_id: u64,
    status: c_int,
    is_received_whisper: c_int,
    client_id: AnyId,
) {
    with_ffi_boundary("onTalkStatusChangeEvent", (), || {
        runtime::with_intake((), |intake| {
            intake.on_talk_status_change(
                server_connection_handler_id,
                status,
                is_received_whisper,
                client_id,
            )
        })
    });
}

/// # Safety
///
/// String arguments must be null or NUL-terminated and valid for this call.
#[no_mangle]
pub unsafe extern "C" fn ts3plugin_onClientSelfVariableUpdateEvent(
    server_connection_handler_id: u64,
    flag: c_int,
    old_value: *const c_char,
    new_value: *const c_char,
) {
    let update = unsafe {
        SelfVariableUpdate {
            connection: server_connection_handler_id,
            flag,
            old_value: read_c_string(old_value),
            new_value: read_c_string(new_value),
        }
    };
    with_ffi_boundary("onClientSelfVariableUpdateEvent", (), || {
        runtime::with_intake((), |intake| intake.on_client_self_variable_update(update))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn text(ptr: *const c_char) -> String {
        assert!(!ptr.is_null(), "ffi returned null pointer");
        // SAFETY: metadata pointers reference static C strings.
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    #[test]
    fn metadata() {
        assert_eq!(text(ts3plugin_name()), "Aurora GSI Integration");
        assert_eq!(text(ts3plugin_version()), env!("CARGO_PKG_VERSION"));
        assert_eq!(text(ts3plugin_author()), "Th3 Ant 'n SnakePin");
        assert!(text(ts3plugin_description()).contains("Project Aurora"));
        assert_eq!(ts3plugin_apiVersion(), 23);
    }

    #[test]
    fn hooks_before_init_return_host_codes() {
        let name = CString::new("Bob").unwrap();
        let uid = CString::new("bob-uid").unwrap();
        let message = CString::new("hello").unwrap();

        // SAFETY: all strings are NUL-terminated and outlive the calls.
        let (poke, text) = unsafe {
            (
                ts3plugin_onClientPokeEvent(1, 2, name.as_ptr(), uid.as_ptr(), message.as_ptr(), 0),
                ts3plugin_onTextMessageEvent(
                    1,
                    1,
                    2,
                    3,
                    name.as_ptr(),
                    uid.as_ptr(),
                    message.as_ptr(),
                    0,
                ),
            )
        };
        assert_eq!(poke, 0);
        assert_eq!(text, 0);
    }

    #[test]
    fn hooks_accept_null_strings() {
        // SAFETY: null strings are explicitly allowed.
        unsafe {
            ts3plugin_onClientMoveEvent(1, 2, 3, 4, 0, std::ptr::null());
            ts3plugin_onClientKickFromServerEvent(
                1,
                2,
                3,
                0,
                0,
                5,
                std::ptr::null(),
                std::ptr::null(),
                std::ptr::null(),
            );
            ts3plugin_onClientSelfVariableUpdateEvent(1, 6, std::ptr::null(), std::ptr::null());
        }
        ts3plugin_onConnectStatusChangeEvent(1, 2, 0);
        ts3plugin_onTalkStatusChangeEvent(1, 1, 0, 3);
    }

    #[test]
    fn read_kick_copies_strings() {
        let name = CString::new("mod").unwrap();
        // SAFETY: `name` is NUL-terminated and outlives the call.
        let kick = unsafe {
            read_kick(
                1,
                2,
                3,
                4,
                1,
                5,
                name.as_ptr(),
                std::ptr::null(),
                std::ptr::null(),
            )
        };
        assert_eq!(kick.kicker_name, "mod");
        assert_eq!(kick.kicker_unique_identifier, "");
        assert_eq!(kick.new_channel_id, 4);
    }
}
