//! Type-safe identifier wrappers around sequential counters.
//!
//! Every record family in the registry has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. IDs are dense `u64`
//! values allocated by the owning registry: the first record in a family
//! gets id 1, and ids are never reused, even across failed mutations.
//!
//! There is no `new()` constructor here on purpose -- allocation is the
//! registry's job, and handing out arbitrary ids would defeat the
//! no-gaps/no-reuse guarantee.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Return the raw numeric value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a minted species token.
    TokenId
}

define_id! {
    /// Unique identifier for an ecosystem simulation run.
    SimulationId
}

define_id! {
    /// Unique identifier for a quantum evolution event.
    EvolutionId
}
