//! Enumeration types for the Xenosim registry.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an ecosystem simulation.
///
/// The only legal transition is `InProgress -> Completed`; a simulation
/// never reverts to in-progress once ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationStatus {
    /// The simulation is running and has no result yet.
    #[default]
    InProgress,
    /// The simulation has been ended by the authority and carries a result.
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_kebab_case() {
        // The wire form matches the source platform's status strings.
        assert_eq!(
            serde_json::to_string(&SimulationStatus::InProgress).ok(),
            Some("\"in-progress\"".to_owned()),
        );
        assert_eq!(
            serde_json::to_string(&SimulationStatus::Completed).ok(),
            Some("\"completed\"".to_owned()),
        );
    }

    #[test]
    fn default_status_is_in_progress() {
        assert_eq!(SimulationStatus::default(), SimulationStatus::InProgress);
    }
}
