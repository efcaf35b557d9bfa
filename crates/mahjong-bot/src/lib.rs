pub mod engine;

pub use engine::{DecideError, DecisionEngine, EngineParams, Simulation, best_discard};
