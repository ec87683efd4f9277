//! Plugin lifecycle state: host table, identity, and the running bridge.
//!
//! The host calls `setFunctionPointers` and `registerPluginID` before
//! `init`; `init` builds everything else once and `shutdown` drops it.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use ts3gsi_bridge::{EventIntake, HttpTransport, Transport, UnavailableTransport};
use ts3gsi_config::{config_to_json, load_config, GsiConfig, LoggingConfig};

use crate::ffi::Ts3Functions;
use crate::host::{PluginIdentity, Ts3Host};

pub type Intake = EventIntake<Box<dyn Transport>, Ts3Host>;

pub struct PluginRuntime {
    identity: PluginIdentity,
    intake: Intake,
}

impl PluginRuntime {
    /// Build the runtime from the host table and registered identity.
    ///
    /// Config and transport problems are logged and replaced by defaults;
    /// starting never fails.
    pub fn start(functions: Ts3Functions, identity: PluginIdentity) -> Self {
        let host = Ts3Host::new(functions);
        let paths = host.paths(&identity);

        // Loaded before the subscriber exists, so report afterwards.
        let loaded = load_config(Path::new(&paths.config));
        let config = match &loaded {
            Ok(config) => config.clone(),
            Err(_) => GsiConfig::default(),
        };
        init_logging(&config.logging);

        info!(
            app = %paths.app,
            resources = %paths.resources,
            config = %paths.config,
            plugin = %paths.plugin,
            "host paths"
        );
        if let Err(e) = loaded {
            warn!("failed to load config, using defaults: {e}");
        }
        info!(policy = ?config.encoding.policy, "encoding policy");
        debug!("effective config: {}", config_to_json(&config));

        let transport: Box<dyn Transport> = match HttpTransport::new(&config.transport) {
            Ok(transport) => Box::new(transport),
            Err(e) => {
                warn!("no HTTP client, state will not be delivered: {e}");
                Box::new(UnavailableTransport::new(e.to_string()))
            }
        };

        Self {
            identity,
            intake: EventIntake::new(config.encoding.policy, transport, host),
        }
    }

    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    pub fn intake(&self) -> &Intake {
        &self.intake
    }
}

static FUNCTIONS: RwLock<Option<Ts3Functions>> = RwLock::new(None);
static IDENTITY: RwLock<Option<PluginIdentity>> = RwLock::new(None);
static RUNTIME: RwLock<Option<Arc<PluginRuntime>>> = RwLock::new(None);

pub fn set_functions(functions: Ts3Functions) {
    *FUNCTIONS.write().unwrap_or_else(PoisonError::into_inner) = Some(functions);
}

/// Store the identity. The first registration wins.
pub fn register_identity(identity: PluginIdentity) {
    let mut slot = IDENTITY.write().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
        Some(existing) => debug!(id = existing.id(), "plugin id already registered"),
        None => {
            info!(id = identity.id(), "registered plugin id");
            *slot = Some(identity);
        }
    }
}

pub fn init() {
    let functions =
        (*FUNCTIONS.read().unwrap_or_else(PoisonError::into_inner)).unwrap_or_default();
    let identity = (*IDENTITY.read().unwrap_or_else(PoisonError::into_inner))
        .clone()
        .unwrap_or_default();

    let runtime = PluginRuntime::start(functions, identity);
    *RUNTIME.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(runtime));
    info!("plugin initialised");
}

pub fn shutdown() {
    let runtime = RUNTIME.write().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(runtime) = runtime {
        info!(id = runtime.identity().id(), "plugin shutdown");
    }
    *IDENTITY.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Run `f` against the running intake, or return `fallback` when the
/// plugin is not initialised.
///
/// The lock is released before `f` runs, so `shutdown` never waits behind
/// an in-flight delivery; the runtime is dropped once the last event
/// using it returns.
pub fn with_intake<R>(fallback: R, f: impl FnOnce(&Intake) -> R) -> R {
    let runtime = RUNTIME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone);
    match runtime {
        Some(runtime) => f(runtime.intake()),
        None => {
            debug!("event received while plugin is not initialised");
            fallback
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the configured
/// level; a subscriber left over from an earlier load is kept.
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
