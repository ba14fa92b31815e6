//! Life simulation for PixelPet
//!
//! This crate implements:
//! - The creature aggregate (needs, health, stage, evolution)
//! - A timer-driven simulator with user actions
//! - Illness escalation, criticality and probabilistic death
//! - Care-quality sampling and one-shot evolution
//! - Transient visual cues for the view layer

pub mod config;
pub mod creature;
pub mod effects;
pub mod rng;
pub mod simulator;
pub mod timer;
pub mod types;
pub mod wellness;

// Re-export main types for convenience
pub use config::{ConfigError, LifeConfig, LifeVariant};
pub use creature::Creature;
pub use effects::{EffectKind, VisualEffect};
pub use rng::LifeRng;
pub use simulator::LifeSimulator;
pub use types::{Action, CareHistory, Evolution, Mood, Stage};
