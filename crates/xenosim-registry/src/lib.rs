//! Authorization-gated in-memory registries for the Xenosim platform.
//!
//! Three record families share one state-machine shape: a *create* operation
//! that allocates the next sequential id and stores a record with an initial
//! owner or empty result, and a single *gated mutation* that an identity
//! check must pass before any state changes.
//!
//! | Family | Create | Gated mutation | Gate |
//! |--------|--------|----------------|------|
//! | Species tokens | `mint` | `transfer` | current token owner |
//! | Ecosystem simulations | `start` | `end` | configured authority |
//! | Evolution events | `trigger` | `set_result` | configured authority |
//!
//! # Architecture
//!
//! - [`token`] -- The [`TokenRegistry`]: per-token ownership and metadata.
//! - [`simulation`] -- The [`SimulationRegistry`]: start/end lifecycle.
//! - [`evolution`] -- The [`EvolutionRegistry`]: append-only event log.
//! - [`config`] -- The [`RegistryConfig`] carrying the authority identity.
//!
//! Ids are dense per family: the first record gets id 1, counters advance by
//! exactly one per create, and ids are never reused. Records are never
//! deleted. Rejected mutations leave state untouched.
//!
//! The registries are single-threaded owned state. Resetting means
//! reconstructing -- there is no shared global to clear, so independent
//! sessions cannot leak state into each other. A concurrent embedding must
//! serialize mutations per registry (one mutex around each, or a
//! single-writer task) to keep the counter and read-your-write guarantees.
//!
//! # Usage
//!
//! ```
//! use xenosim_registry::{MintParams, Registry, RegistryConfig};
//! use xenosim_types::Identity;
//!
//! let mut registry = Registry::new(RegistryConfig::default());
//!
//! let creator = Identity::from("creator1");
//! let token = registry.tokens.mint(MintParams {
//!     name: "Xenomorph Queen".to_owned(),
//!     description: "The matriarch of the hive".to_owned(),
//!     creator: creator.clone(),
//!     species_id: 1,
//!     rarity_score: 95,
//!     image_url: "https://example.com/xenomorph-queen.png".to_owned(),
//! });
//! assert_eq!(registry.tokens.owner_of(token), Some(&creator));
//!
//! let sim = registry.simulations.start(1, vec![1, 2, 3], 1000);
//! let authority = registry.simulations.authority().clone();
//! registry
//!     .simulations
//!     .end(sim, "Species 1 dominated the ecosystem".to_owned(), &authority)
//!     .ok();
//! ```

pub mod config;
pub mod evolution;
pub mod simulation;
pub mod token;

// Re-export primary types at crate root.
pub use config::RegistryConfig;
pub use evolution::EvolutionRegistry;
pub use simulation::SimulationRegistry;
pub use token::{MintParams, TokenRegistry};

use xenosim_types::Identity;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors returned by gated registry mutations.
///
/// Both variants are terminal business-rule rejections reported to the
/// caller synchronously; there is nothing to retry. Creates never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The acting identity lacks permission for the requested mutation:
    /// wrong owner for a token transfer, or wrong authority for a
    /// simulation or evolution mutation.
    #[error("identity `{actor}` is not authorized for this mutation")]
    NotAuthorized {
        /// The identity that attempted the mutation.
        actor: Identity,
    },

    /// The referenced id does not exist in the target registry.
    #[error("no record with id {id} in the target registry")]
    InvalidReference {
        /// The unknown raw id.
        id: u64,
    },
}

// ---------------------------------------------------------------------------
// Registry facade
// ---------------------------------------------------------------------------

/// The three record families bundled as one owned state machine.
///
/// One `Registry` is one session of state. Construction injects the
/// authority identity from [`RegistryConfig`] into the two
/// authority-gated families; the token family gates on per-token
/// ownership instead and needs no configuration.
#[derive(Debug)]
pub struct Registry {
    /// Species token mint/transfer registry.
    pub tokens: TokenRegistry,
    /// Ecosystem simulation lifecycle registry.
    pub simulations: SimulationRegistry,
    /// Quantum evolution event registry.
    pub evolutions: EvolutionRegistry,
}

impl Registry {
    /// Create an empty registry session with the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            tokens: TokenRegistry::new(),
            simulations: SimulationRegistry::new(config.authority.clone()),
            evolutions: EvolutionRegistry::new(config.authority),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_shares_one_authority() {
        let config = RegistryConfig {
            authority: Identity::from("overseer"),
        };
        let registry = Registry::new(config);
        assert_eq!(registry.simulations.authority().as_str(), "overseer");
        assert_eq!(registry.evolutions.authority().as_str(), "overseer");
    }

    #[test]
    fn families_count_independently() {
        let mut registry = Registry::default();
        let _ = registry.simulations.start(1, vec![1], 100);
        let _ = registry.simulations.start(2, vec![2], 100);
        let event = registry
            .evolutions
            .trigger(1, xenosim_types::QuantumState::default(), 1);
        // The evolution counter is untouched by simulation creates.
        assert_eq!(event.into_inner(), 1);
        assert_eq!(registry.simulations.len(), 2);
        assert!(registry.tokens.is_empty());
    }

    #[test]
    fn reset_is_reconstruction() {
        let mut registry = Registry::default();
        let _ = registry.simulations.start(1, vec![1], 100);
        registry = Registry::default();
        assert!(registry.simulations.is_empty());
        // Counters restart with the session.
        assert_eq!(registry.simulations.start(1, vec![1], 100).into_inner(), 1);
    }
}
