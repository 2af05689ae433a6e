pub mod census;
pub mod components;
pub mod config;
pub mod effects;
pub mod emotion;
pub mod engine;
pub mod health;
pub mod rng;
pub mod runner;
pub mod scenario;
pub mod snapshot;
pub mod systems;
pub mod world;

pub use components::ElementKind;
pub use emotion::{calculate_emotion, Emotion};
pub use engine::{EngineBuilder, EngineEvent, EngineSettings, PlanetEngine};
pub use health::calculate_health;
pub use scenario::Scenario;
pub use world::{PlacedElement, PlanetState, Position};
