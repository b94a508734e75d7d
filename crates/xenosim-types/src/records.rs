//! The record structs held by the three registry families.
//!
//! Records are plain data: once created, their identity-bearing fields never
//! change. The only mutable fields are the simulation's `status`/`result`
//! pair and the evolution event's `result`, both written exclusively through
//! the gated registry mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::SimulationStatus;
use crate::identity::{Identity, QuantumState};

// ---------------------------------------------------------------------------
// TokenRecord
// ---------------------------------------------------------------------------

/// Immutable metadata for a minted species token.
///
/// Ownership is tracked separately by the token registry; the `creator`
/// recorded here is the minting identity and never changes, even after
/// the token is transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Display name of the species.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// The identity that minted the token.
    pub creator: Identity,
    /// The species this token represents.
    pub species_id: u64,
    /// Rarity score assigned at mint time.
    pub rarity_score: u32,
    /// URL of the species artwork.
    pub image_url: String,
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// A single ecosystem simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    /// The planet the simulation runs on.
    pub planet_id: u64,
    /// The species participating, in the order given at start.
    pub species_ids: Vec<u64>,
    /// Wall-clock time the simulation was started.
    pub started_at: DateTime<Utc>,
    /// Requested duration, in simulation time units.
    pub duration: u64,
    /// Lifecycle status.
    pub status: SimulationStatus,
    /// Outcome description; empty until the simulation is ended.
    pub result: String,
}

impl Simulation {
    /// Create a fresh in-progress simulation, stamped with the current time.
    pub fn new(planet_id: u64, species_ids: Vec<u64>, duration: u64) -> Self {
        Self::starting_at(planet_id, species_ids, duration, Utc::now())
    }

    /// Create a fresh in-progress simulation with an explicit start time.
    ///
    /// This is the deterministic variant used by tests and replay tooling;
    /// [`Simulation::new`] delegates here.
    pub const fn starting_at(
        planet_id: u64,
        species_ids: Vec<u64>,
        duration: u64,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            planet_id,
            species_ids,
            started_at,
            duration,
            status: SimulationStatus::InProgress,
            result: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// EvolutionEvent
// ---------------------------------------------------------------------------

/// A quantum evolution event triggered for a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionEvent {
    /// The species undergoing evolution.
    pub species_id: u64,
    /// Opaque quantum state captured at trigger time.
    pub quantum_state: QuantumState,
    /// Mutation intensity factor.
    pub mutation_factor: u32,
    /// Outcome description; empty until set by the authority.
    pub result: String,
}

impl EvolutionEvent {
    /// Create a fresh evolution event with an empty result.
    pub const fn new(species_id: u64, quantum_state: QuantumState, mutation_factor: u32) -> Self {
        Self {
            species_id,
            quantum_state,
            mutation_factor,
            result: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_simulation_is_in_progress_with_empty_result() {
        let sim = Simulation::new(1, vec![1, 2, 3], 1000);
        assert_eq!(sim.status, SimulationStatus::InProgress);
        assert_eq!(sim.result, "");
        assert!(sim.started_at <= Utc::now());
    }

    #[test]
    fn starting_at_preserves_given_timestamp() {
        let t = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        let sim = Simulation::starting_at(4, vec![10, 11, 12], 5000, t);
        assert_eq!(sim.started_at, t);
        assert_eq!(sim.planet_id, 4);
        assert_eq!(sim.species_ids, vec![10, 11, 12]);
        assert_eq!(sim.duration, 5000);
    }

    #[test]
    fn new_evolution_event_has_empty_result() {
        let event = EvolutionEvent::new(1, QuantumState::from(b"superposition".as_slice()), 5);
        assert_eq!(event.result, "");
        assert_eq!(event.mutation_factor, 5);
    }

    #[test]
    fn token_record_roundtrip_serde() {
        let record = TokenRecord {
            name: "Xenomorph Queen".to_owned(),
            description: "The matriarch of the hive".to_owned(),
            creator: Identity::from("creator1"),
            species_id: 1,
            rarity_score: 95,
            image_url: "https://example.com/xenomorph-queen.png".to_owned(),
        };
        let json = serde_json::to_string(&record).ok();
        let restored: Option<TokenRecord> =
            json.as_deref().and_then(|j| serde_json::from_str(j).ok());
        assert_eq!(restored, Some(record));
    }
}
