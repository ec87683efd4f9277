//! Host ABI mirror and FFI boundary helpers.
//!
//! The client hands plugins a `struct TS3Functions` by value: a flat table
//! of function pointers. Only a handful of entries are used here, so the
//! table is mirrored as an array of nullable pointers and the used slots
//! are addressed by position.

use std::ffi::{c_char, c_uint, CStr};
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

/// Untyped table entry; cast to its real signature before calling.
pub type RawFn = unsafe extern "C" fn();

pub type GetPathFn = unsafe extern "C" fn(path: *mut c_char, max_len: usize);
pub type GetPluginPathFn =
    unsafe extern "C" fn(path: *mut c_char, max_len: usize, plugin_id: *const c_char);
pub type GetClientDisplayNameFn = unsafe extern "C" fn(
    connection: u64,
    client: u16,
    result: *mut c_char,
    max_len: usize,
) -> c_uint;

/// Entry positions inside `struct TS3Functions` (plugin API 23).
pub mod slot {
    pub const GET_APP_PATH: usize = 179;
    pub const GET_RESOURCES_PATH: usize = 180;
    pub const GET_CONFIG_PATH: usize = 181;
    pub const GET_PLUGIN_PATH: usize = 182;
    pub const GET_CLIENT_DISPLAY_NAME: usize = 201;

    /// Number of entries in the API 23 table; the host passes exactly
    /// this many pointers by value.
    pub const COUNT: usize = 209;
}

/// Mirror of the host's function table.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Ts3Functions {
    slots: [Option<RawFn>; slot::COUNT],
}

impl Ts3Functions {
    /// A table with every entry missing.
    pub fn empty() -> Self {
        Self {
            slots: [None; slot::COUNT],
        }
    }

    fn slot(&self, index: usize) -> Option<RawFn> {
        self.slots.get(index).copied().flatten()
    }

    #[cfg(test)]
    pub(crate) fn set_slot(&mut self, index: usize, f: RawFn) {
        if let Some(entry) = self.slots.get_mut(index) {
            *entry = Some(f);
        }
    }

    pub fn get_app_path(&self) -> Option<GetPathFn> {
        // SAFETY: the host stores `void (*)(char*, size_t)` in this slot.
        self.slot(slot::GET_APP_PATH)
            .map(|f| unsafe { std::mem::transmute::<RawFn, GetPathFn>(f) })
    }

    pub fn get_resources_path(&self) -> Option<GetPathFn> {
        // SAFETY: as above.
        self.slot(slot::GET_RESOURCES_PATH)
            .map(|f| unsafe { std::mem::transmute::<RawFn, GetPathFn>(f) })
    }

    pub fn get_config_path(&self) -> Option<GetPathFn> {
        // SAFETY: as above.
        self.slot(slot::GET_CONFIG_PATH)
            .map(|f| unsafe { std::mem::transmute::<RawFn, GetPathFn>(f) })
    }

    pub fn get_plugin_path(&self) -> Option<GetPluginPathFn> {
        // SAFETY: the host stores `void (*)(char*, size_t, const char*)` here.
        self.slot(slot::GET_PLUGIN_PATH)
            .map(|f| unsafe { std::mem::transmute::<RawFn, GetPluginPathFn>(f) })
    }

    pub fn get_client_display_name(&self) -> Option<GetClientDisplayNameFn> {
        // SAFETY: the host stores
        // `unsigned int (*)(uint64, anyID, char*, size_t)` here.
        self.slot(slot::GET_CLIENT_DISPLAY_NAME)
            .map(|f| unsafe { std::mem::transmute::<RawFn, GetClientDisplayNameFn>(f) })
    }
}

impl Default for Ts3Functions {
    fn default() -> Self {
        Self::empty()
    }
}

/// Run `work`, turning a panic into `fallback` so it never unwinds into
/// the host.
pub(crate) fn with_ffi_boundary<R, F>(hook: &'static str, fallback: R, work: F) -> R
where
    F: FnOnce() -> R,
{
    match catch_unwind(AssertUnwindSafe(work)) {
        Ok(value) => value,
        Err(_) => {
            error!(hook, "panic inside plugin callback");
            fallback
        }
    }
}

/// Copy a host string. Null reads as empty; invalid UTF-8 is replaced.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
pub(crate) unsafe fn read_c_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: non-null, and the caller guarantees NUL termination.
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

/// Text written by the host into a fixed buffer, up to the first NUL.
pub(crate) fn string_from_buffer(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
