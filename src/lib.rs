//! # Evodrive - vehicle simulation for evolving controllers
//!
//! A 2D vehicle simulation used as the fitness environment for an evolving
//! population of control agents. Vehicles perceive a rasterized track through
//! radar rays, move under simple kinematics, and are scored by the distance
//! they cover before a corner touches a boundary pixel.
//!
//! ## Features
//!
//! - Boundary bitmap decoded once from a track image (fail-safe at the edges)
//! - Radar sensing at fixed angles relative to the heading
//! - Four-corner collision detection with irreversible death
//! - Lockstep generation evaluation with per-member fitness accumulation
//! - Opaque [`simulation::controller::Controller`] seam for evolved agents
//! - Feed-forward demo brains with mutation and crossover
//! - JSON persistence of generation results
//!
//! ## Core Modules
//!
//! - [`simulation::vehicle`] - Vehicle kinematics, collision, and radars
//! - [`simulation::track`] - Immutable boundary field
//! - [`simulation::controller`] - Observation-to-action adapter
//! - [`simulation::evaluation`] - Per-generation evaluation loop
//! - [`simulation::brain`] - Concrete evolvable controller variant

/// Core simulation logic and data structures.
pub mod simulation {
    /// Feed-forward controller brains for demos and tests.
    pub mod brain;
    /// Controller trait and discrete action mapping.
    pub mod controller;
    /// Per-generation evaluation loop.
    pub mod evaluation;
    /// Geometric helpers shared by motion and sensing.
    pub mod geometric_utils;
    /// Simulation parameters.
    pub mod params;
    /// Persistence of generation results.
    pub mod summary;
    /// Rasterized track map queried for boundary pixels.
    pub mod track;
    /// Vehicle behavior, state, and sensing.
    pub mod vehicle;
}
