/*
 * Double-Slit Experiment Simulation - Module Definitions
 *
 * This file defines the module structure for the double-slit simulation.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use app::Model;
pub use clock::{ClockPhase, ClockTicker, QuantumClock, SharedClock};
pub use entity::{Entity, Particle, WavePacket};
pub use geometry::Geometry;
pub use observer::ObserverSignal;
pub use params::SimulationParams;
pub use sim::Simulation;

// Define modules
pub mod app;
pub mod clock;
pub mod color;
pub mod entity;
pub mod geometry;
pub mod interference;
pub mod observer;
pub mod params;
pub mod renderer;
pub mod sim;
pub mod ui;

// Constants
pub const FRAME_RATE: f32 = 30.0;
pub const SLIT_SCALE: f32 = 100.0;
pub const MAX_ENTITY_AGE: u32 = 100;
pub const WAVE_SPAWN_PERIOD: u64 = 5;
pub const PARTICLE_SPAWN_PERIOD: u64 = 10;
