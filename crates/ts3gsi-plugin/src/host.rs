//! Host services backed by the client's function table.

use std::ffi::{c_char, CString};

use ts3gsi_bridge::HostServices;
use ts3gsi_common::{AnyId, ConnectionHandlerId, HostError, ERROR_OK};

use crate::ffi::{string_from_buffer, GetPathFn, Ts3Functions};

pub const DISPLAY_NAME_BUFSIZE: usize = 512;
pub const PATH_BUFSIZE: usize = 512;

/// Identity the host assigned to this plugin at registration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginIdentity {
    id: String,
}

impl PluginIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Directories reported by the client. Empty when unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostPaths {
    pub app: String,
    pub resources: String,
    pub config: String,
    pub plugin: String,
}

pub struct Ts3Host {
    functions: Ts3Functions,
}

impl Ts3Host {
    pub fn new(functions: Ts3Functions) -> Self {
        Self { functions }
    }

    pub fn paths(&self, identity: &PluginIdentity) -> HostPaths {
        let plugin = match (self.functions.get_plugin_path(), CString::new(identity.id())) {
            (Some(f), Ok(id)) => {
                let mut buf = vec![0u8; PATH_BUFSIZE];
                // SAFETY: `buf` holds PATH_BUFSIZE bytes and `id` is
                // NUL-terminated; both outlive the call.
                unsafe { f(buf.as_mut_ptr().cast::<c_char>(), buf.len(), id.as_ptr()) };
                string_from_buffer(&buf)
            }
            _ => String::new(),
        };

        HostPaths {
            app: query_path(self.functions.get_app_path()),
            resources: query_path(self.functions.get_resources_path()),
            config: query_path(self.functions.get_config_path()),
            plugin,
        }
    }
}

fn query_path(f: Option<GetPathFn>) -> String {
    let Some(f) = f else {
        return String::new();
    };
    let mut buf = vec![0u8; PATH_BUFSIZE];
    // SAFETY: `buf` holds PATH_BUFSIZE writable bytes for the call.
    unsafe { f(buf.as_mut_ptr().cast::<c_char>(), buf.len()) };
    string_from_buffer(&buf)
}

impl HostServices for Ts3Host {
    fn client_display_name(
        &self,
        connection: ConnectionHandlerId,
        client: AnyId,
    ) -> Result<String, HostError> {
        let f = self
            .functions
            .get_client_display_name()
            .ok_or(HostError::FunctionMissing("getClientDisplayName"))?;

        let mut buf = vec![0u8; DISPLAY_NAME_BUFSIZE];
        // SAFETY: `buf` holds DISPLAY_NAME_BUFSIZE writable bytes; the host
        // writes at most that many including the terminator.
        let code = unsafe {
            f(
                connection,
                client,
                buf.as_mut_ptr().cast::<c_char>(),
                buf.len(),
            )
        };
        if code != ERROR_OK {
            return Err(HostError::Call {
                function: "getClientDisplayName",
                code,
            });
        }
        Ok(string_from_buffer(&buf))
    }
}
