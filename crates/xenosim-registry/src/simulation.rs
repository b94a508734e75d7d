//! The ecosystem simulation registry: start/end lifecycle.
//!
//! Simulations are created in the `InProgress` state with an empty result
//! and ended exactly one way: the configured authority supplies a result
//! string, which flips the status to `Completed`. The existence check runs
//! before the authority check, so an unknown id surfaces
//! [`RegistryError::InvalidReference`] even to a non-authority caller.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use xenosim_types::{Identity, Simulation, SimulationId, SimulationStatus};

use crate::RegistryError;

/// Registry of ecosystem simulation runs.
///
/// Anyone may start a simulation; only the authority injected at
/// construction may end one.
#[derive(Debug)]
pub struct SimulationRegistry {
    /// The identity allowed to end simulations.
    authority: Identity,
    /// Last allocated id; 0 before the first start.
    last_id: u64,
    /// All simulations, keyed by id.
    simulations: BTreeMap<SimulationId, Simulation>,
}

impl SimulationRegistry {
    /// Create an empty simulation registry gated on the given authority.
    pub const fn new(authority: Identity) -> Self {
        Self {
            authority,
            last_id: 0,
            simulations: BTreeMap::new(),
        }
    }

    /// Start a new simulation, stamped with the current wall-clock time.
    ///
    /// Allocates the next sequential id (first start gets id 1). The new
    /// record is `InProgress` with an empty result. Never fails.
    pub fn start(&mut self, planet_id: u64, species_ids: Vec<u64>, duration: u64) -> SimulationId {
        self.start_at(planet_id, species_ids, duration, Utc::now())
    }

    /// Start a new simulation with an explicit start time.
    ///
    /// Deterministic variant for tests and replay tooling; [`start`] is
    /// `start_at` with `Utc::now()`.
    ///
    /// [`start`]: SimulationRegistry::start
    pub fn start_at(
        &mut self,
        planet_id: u64,
        species_ids: Vec<u64>,
        duration: u64,
        started_at: DateTime<Utc>,
    ) -> SimulationId {
        self.last_id = self.last_id.saturating_add(1);
        let id = SimulationId(self.last_id);

        tracing::debug!(%id, planet_id, duration, "Started ecosystem simulation");
        self.simulations.insert(
            id,
            Simulation::starting_at(planet_id, species_ids, duration, started_at),
        );

        id
    }

    /// End a simulation, recording its result.
    ///
    /// The existence check precedes the authority check. On success the
    /// status becomes [`SimulationStatus::Completed`] and `result` is
    /// stored. There is deliberately no guard against ending an already
    /// completed simulation: a second authorized call overwrites the
    /// result, matching the source platform's semantics.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidReference`] if `id` is unknown, or
    /// [`RegistryError::NotAuthorized`] if `ender` is not the authority.
    /// Either way the registry state is unchanged.
    pub fn end(
        &mut self,
        id: SimulationId,
        result: String,
        ender: &Identity,
    ) -> Result<(), RegistryError> {
        let Some(simulation) = self.simulations.get_mut(&id) else {
            tracing::warn!(%id, "Rejected simulation end: unknown id");
            return Err(RegistryError::InvalidReference {
                id: id.into_inner(),
            });
        };

        if ender != &self.authority {
            tracing::warn!(%id, actor = %ender, "Rejected simulation end: not the authority");
            return Err(RegistryError::NotAuthorized {
                actor: ender.clone(),
            });
        }

        tracing::debug!(%id, "Completed ecosystem simulation");
        simulation.status = SimulationStatus::Completed;
        simulation.result = result;
        Ok(())
    }

    /// Return a simulation by id, if it exists.
    pub fn get(&self, id: SimulationId) -> Option<&Simulation> {
        self.simulations.get(&id)
    }

    /// Return the identity allowed to end simulations.
    pub const fn authority(&self) -> &Identity {
        &self.authority
    }

    /// Return the number of simulations ever started.
    pub fn len(&self) -> usize {
        self.simulations.len()
    }

    /// Return whether no simulations have been started.
    pub fn is_empty(&self) -> bool {
        self.simulations.is_empty()
    }

    /// Return the most recently allocated id, or `None` before the first start.
    pub const fn last_id(&self) -> Option<SimulationId> {
        if self.last_id == 0 {
            None
        } else {
            Some(SimulationId(self.last_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authority() -> Identity {
        Identity::from("CONTRACT_OWNER")
    }

    fn registry() -> SimulationRegistry {
        SimulationRegistry::new(authority())
    }

    #[test]
    fn start_allocates_sequential_ids_from_one() {
        let mut registry = registry();
        assert_eq!(registry.start(1, vec![1, 2, 3], 1000), SimulationId(1));
        assert_eq!(registry.start(2, vec![4, 5, 6], 2000), SimulationId(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn fresh_simulation_is_in_progress() {
        let mut registry = registry();
        let id = registry.start(1, vec![1, 2, 3], 1000);
        let sim = registry.get(id);
        assert_eq!(sim.map(|s| s.status), Some(SimulationStatus::InProgress));
        assert_eq!(sim.map(|s| s.result.as_str()), Some(""));
        assert_eq!(sim.map(|s| s.planet_id), Some(1));
    }

    #[test]
    fn end_by_authority_completes_and_stores_result() {
        let mut registry = registry();
        let id = registry.start(2, vec![4, 5, 6], 2000);
        let result = registry.end(id, "Species 4 dominated the ecosystem".to_owned(), &authority());
        assert_eq!(result, Ok(()));
        let sim = registry.get(id);
        assert_eq!(sim.map(|s| s.status), Some(SimulationStatus::Completed));
        assert_eq!(
            sim.map(|s| s.result.clone()),
            Some("Species 4 dominated the ecosystem".to_owned()),
        );
    }

    #[test]
    fn end_by_non_authority_is_rejected_and_state_unchanged() {
        let mut registry = registry();
        let id = registry.start(3, vec![7, 8, 9], 3000);
        let intruder = Identity::from("unauthorized_user");
        let result = registry.end(id, "Unauthorized result".to_owned(), &intruder);
        assert_eq!(result, Err(RegistryError::NotAuthorized { actor: intruder }));
        let sim = registry.get(id);
        assert_eq!(sim.map(|s| s.status), Some(SimulationStatus::InProgress));
        assert_eq!(sim.map(|s| s.result.as_str()), Some(""));
    }

    #[test]
    fn end_of_unknown_id_is_invalid_reference() {
        let mut registry = registry();
        let result = registry.end(SimulationId(42), "r".to_owned(), &authority());
        assert_eq!(result, Err(RegistryError::InvalidReference { id: 42 }));
    }

    #[test]
    fn existence_check_precedes_authority_check() {
        let mut registry = registry();
        // A non-authority caller probing an unknown id learns it is
        // unknown, not that they lack authority.
        let result = registry.end(SimulationId(42), "r".to_owned(), &Identity::from("nobody"));
        assert_eq!(result, Err(RegistryError::InvalidReference { id: 42 }));
    }

    #[test]
    fn double_end_overwrites_result() {
        let mut registry = registry();
        let id = registry.start(1, vec![1], 100);
        assert_eq!(registry.end(id, "first".to_owned(), &authority()), Ok(()));
        assert_eq!(registry.end(id, "second".to_owned(), &authority()), Ok(()));
        let sim = registry.get(id);
        assert_eq!(sim.map(|s| s.status), Some(SimulationStatus::Completed));
        assert_eq!(sim.map(|s| s.result.clone()), Some("second".to_owned()));
    }

    #[test]
    fn start_preserves_given_fields() {
        let mut registry = registry();
        let t = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        let id = registry.start_at(4, vec![10, 11, 12], 5000, t);
        let sim = registry.get(id);
        assert_eq!(sim.map(|s| s.planet_id), Some(4));
        assert_eq!(sim.map(|s| s.species_ids.clone()), Some(vec![10, 11, 12]));
        assert_eq!(sim.map(|s| s.duration), Some(5000));
        assert_eq!(sim.map(|s| s.started_at), Some(t));
    }

    #[test]
    fn failed_end_does_not_consume_an_id() {
        let mut registry = registry();
        let _ = registry.end(SimulationId(1), "r".to_owned(), &authority());
        // The failed mutation must not advance the counter.
        assert_eq!(registry.start(1, vec![1], 100), SimulationId(1));
    }
}
