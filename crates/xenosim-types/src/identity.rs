//! Opaque payload types: caller identities and quantum state buffers.
//!
//! Both types are deliberately uninterpreted. An [`Identity`] is whatever
//! string the caller presents -- the registry only ever compares identities
//! for equality, it never parses or validates them. A [`QuantumState`] is a
//! byte payload the registry stores and returns verbatim.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// An opaque caller identity.
///
/// Authorization in the registry is equality of identities: the token owner
/// for transfers, the configured authority for simulation and evolution
/// mutations. No cryptography is involved at this layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from any string-like value.
    pub fn new(inner: impl Into<String>) -> Self {
        Self(inner.into())
    }

    /// Return the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(inner: &str) -> Self {
        Self(inner.to_owned())
    }
}

impl From<String> for Identity {
    fn from(inner: String) -> Self {
        Self(inner)
    }
}

// ---------------------------------------------------------------------------
// QuantumState
// ---------------------------------------------------------------------------

/// An opaque byte payload describing a species' quantum state.
///
/// The registry never interprets these bytes; they are recorded at event
/// creation and handed back unchanged on query.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantumState(Vec<u8>);

impl QuantumState {
    /// Create a payload from raw bytes.
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Return the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return the payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for QuantumState {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for QuantumState {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
