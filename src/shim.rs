//! Runtime compatibility shim.
//!
//! Some embedded script libraries expect a server-style global environment:
//! a `Buffer` utility for binary data and a `global` alias for the top-level
//! object. [`install`] defines both on a caller-supplied [`GlobalScope`]
//! during startup. Nothing is reached through ambient state.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Global name bound to the binary-buffer utility.
pub const BUFFER_GLOBAL: &str = "Buffer";
/// Global name aliasing the window object.
pub const WINDOW_ALIAS_GLOBAL: &str = "global";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShimError {
    #[error("global namespace is frozen, cannot define `{name}`")]
    Frozen { name: String },
    #[error("invalid hex input at offset {offset}")]
    InvalidHex { offset: usize },
    #[error("invalid base64 input: {0}")]
    InvalidBase64(String),
}

/// Values that can be bound in a global namespace
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlobalBinding {
    BufferCodec(BufferCodec),
    /// Refers back to the window object itself
    WindowAlias,
}

/// A writable global-like namespace.
pub trait GlobalScope {
    /// Whether a browser-style window object is present.
    fn has_window(&self) -> bool;
    fn get(&self, name: &str) -> Option<&GlobalBinding>;
    fn define(&mut self, name: &str, binding: GlobalBinding) -> Result<(), ShimError>;
}

/// Result of a successful [`install`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
    /// No window object; nothing was defined
    NoWindow,
}

/// Define `Buffer` and `global` on `scope`.
pub fn install<S: GlobalScope + ?Sized>(scope: &mut S) -> Result<InstallOutcome, ShimError> {
    if !scope.has_window() {
        tracing::debug!("no window object, skipping compatibility shim");
        return Ok(InstallOutcome::NoWindow);
    }

    if scope.get(BUFFER_GLOBAL).is_some() && scope.get(WINDOW_ALIAS_GLOBAL).is_some() {
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    scope.define(BUFFER_GLOBAL, GlobalBinding::BufferCodec(BufferCodec))?;
    scope.define(WINDOW_ALIAS_GLOBAL, GlobalBinding::WindowAlias)?;

    tracing::info!(
        buffer = BUFFER_GLOBAL,
        alias = WINDOW_ALIAS_GLOBAL,
        "compatibility shim installed"
    );
    Ok(InstallOutcome::Installed)
}

/// In-process global namespace.
#[derive(Default, Debug)]
pub struct GlobalNamespace {
    bindings: HashMap<String, GlobalBinding>,
    window: bool,
    frozen: bool,
}

impl GlobalNamespace {
    /// Namespace of a host that exposes a window object.
    pub fn with_window() -> Self {
        Self {
            window: true,
            ..Self::default()
        }
    }

    /// Namespace of a headless host.
    pub fn headless() -> Self {
        Self::default()
    }

    /// Reject all further definitions.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl GlobalScope for GlobalNamespace {
    fn has_window(&self) -> bool {
        self.window
    }

    fn get(&self, name: &str) -> Option<&GlobalBinding> {
        self.bindings.get(name)
    }

    fn define(&mut self, name: &str, binding: GlobalBinding) -> Result<(), ShimError> {
        if self.frozen {
            return Err(ShimError::Frozen {
                name: name.to_string(),
            });
        }
        self.bindings.insert(name.to_string(), binding);
        Ok(())
    }
}

/// Binary-buffer helpers exposed under `Buffer`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferCodec;

impl BufferCodec {
    pub fn from_utf8(&self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    pub fn to_hex(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn from_hex(&self, text: &str) -> Result<Vec<u8>, ShimError> {
        let raw = text.as_bytes();
        if raw.len() % 2 != 0 {
            return Err(ShimError::InvalidHex { offset: raw.len() });
        }
        raw.chunks(2)
            .enumerate()
            .map(|(i, pair)| -> Result<u8, ShimError> {
                let hi = hex_value(pair[0]).ok_or(ShimError::InvalidHex { offset: i * 2 })?;
                let lo = hex_value(pair[1]).ok_or(ShimError::InvalidHex { offset: i * 2 + 1 })?;
                Ok((hi << 4) | lo)
            })
            .collect()
    }

    pub fn to_base64(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    pub fn from_base64(&self, text: &str) -> Result<Vec<u8>, ShimError> {
        STANDARD
            .decode(text)
            .map_err(|e| ShimError::InvalidBase64(e.to_string()))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
