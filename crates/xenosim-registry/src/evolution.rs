//! The quantum evolution event registry: trigger and set-result.
//!
//! Same gate shape as the simulation registry -- existence check first,
//! then the authority check -- but the record carries no status field;
//! the only mutable state is the result string.

use std::collections::BTreeMap;

use xenosim_types::{EvolutionEvent, EvolutionId, Identity, QuantumState};

use crate::RegistryError;

/// Registry of quantum evolution events.
///
/// Anyone may trigger an event; only the authority injected at
/// construction may set its result.
#[derive(Debug)]
pub struct EvolutionRegistry {
    /// The identity allowed to set event results.
    authority: Identity,
    /// Last allocated id; 0 before the first trigger.
    last_id: u64,
    /// All events, keyed by id.
    events: BTreeMap<EvolutionId, EvolutionEvent>,
}

impl EvolutionRegistry {
    /// Create an empty evolution registry gated on the given authority.
    pub const fn new(authority: Identity) -> Self {
        Self {
            authority,
            last_id: 0,
            events: BTreeMap::new(),
        }
    }

    /// Trigger a new evolution event.
    ///
    /// Allocates the next sequential id (first trigger gets id 1) and
    /// stores the event with an empty result. The quantum state bytes are
    /// recorded verbatim and never interpreted. Never fails.
    pub fn trigger(
        &mut self,
        species_id: u64,
        quantum_state: QuantumState,
        mutation_factor: u32,
    ) -> EvolutionId {
        self.last_id = self.last_id.saturating_add(1);
        let id = EvolutionId(self.last_id);

        tracing::debug!(%id, species_id, mutation_factor, "Triggered quantum evolution event");
        self.events.insert(
            id,
            EvolutionEvent::new(species_id, quantum_state, mutation_factor),
        );

        id
    }

    /// Set the result of an evolution event.
    ///
    /// The existence check precedes the authority check. A second
    /// authorized call overwrites the previous result; the source platform
    /// does not guard against this and the behavior is preserved here.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidReference`] if `id` is unknown, or
    /// [`RegistryError::NotAuthorized`] if `setter` is not the authority.
    /// Either way the registry state is unchanged.
    pub fn set_result(
        &mut self,
        id: EvolutionId,
        result: String,
        setter: &Identity,
    ) -> Result<(), RegistryError> {
        let Some(event) = self.events.get_mut(&id) else {
            tracing::warn!(%id, "Rejected evolution result: unknown id");
            return Err(RegistryError::InvalidReference {
                id: id.into_inner(),
            });
        };

        if setter != &self.authority {
            tracing::warn!(%id, actor = %setter, "Rejected evolution result: not the authority");
            return Err(RegistryError::NotAuthorized {
                actor: setter.clone(),
            });
        }

        tracing::debug!(%id, "Recorded evolution result");
        event.result = result;
        Ok(())
    }

    /// Return an event by id, if it exists.
    pub fn get(&self, id: EvolutionId) -> Option<&EvolutionEvent> {
        self.events.get(&id)
    }

    /// Return the identity allowed to set event results.
    pub const fn authority(&self) -> &Identity {
        &self.authority
    }

    /// Return the number of events ever triggered.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return whether no events have been triggered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the most recently allocated id, or `None` before the first trigger.
    pub const fn last_id(&self) -> Option<EvolutionId> {
        if self.last_id == 0 {
            None
        } else {
            Some(EvolutionId(self.last_id))
        }
    }
}
