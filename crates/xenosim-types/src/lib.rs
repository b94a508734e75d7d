//! Shared type definitions for the Xenosim registry.
//!
//! This crate is the single source of truth for the types used across the
//! Xenosim workspace: strongly-typed record identifiers, the opaque identity
//! and quantum-state payloads, and the record structs held by the registries.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe sequential identifiers for each record family
//! - [`identity`] -- Opaque identity strings and quantum-state payloads
//! - [`enums`] -- Enumeration types (simulation lifecycle status)
//! - [`records`] -- The record structs (tokens, simulations, evolution events)

pub mod enums;
pub mod identity;
pub mod ids;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use enums::SimulationStatus;
pub use identity::{Identity, QuantumState};
pub use ids::{EvolutionId, SimulationId, TokenId};
pub use records::{EvolutionEvent, Simulation, TokenRecord};
