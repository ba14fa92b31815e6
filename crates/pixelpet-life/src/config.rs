//! Tuning constants for the life simulation
//!
//! Both game variants run the same simulator; they differ only in the values
//! collected here. `LifeConfig::classic()` has no care tracking, evolution or
//! cooldowns. `LifeConfig::evolving()` adds all three.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Incubation range is inverted or negative: {min}..{max}")]
    InvalidIncubation { min: f32, max: f32 },

    #[error("Period `{name}` must be positive, got {value}")]
    NonPositivePeriod { name: &'static str, value: f32 },

    #[error("Probability `{name}` must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f32 },

    #[error("Threshold `{name}` is out of range: {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    #[error("Effect offset range is inverted: {min}..{max}")]
    InvalidEffectOffset { min: f32, max: f32 },
}

/// Named preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LifeVariant {
    #[default]
    Classic,
    Evolving,
}

impl LifeVariant {
    pub fn config(&self) -> LifeConfig {
        match self {
            LifeVariant::Classic => LifeConfig::classic(),
            LifeVariant::Evolving => LifeConfig::evolving(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LifeVariant::Classic => "classic",
            LifeVariant::Evolving => "evolving",
        }
    }
}

impl std::fmt::Display for LifeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for LifeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" | "a" => Ok(LifeVariant::Classic),
            "evolving" | "evolution" | "b" => Ok(LifeVariant::Evolving),
            _ => Err(format!("Unknown variant: {}. Valid: classic, evolving", s)),
        }
    }
}

/// Thresholds that define "well cared for"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareStandard {
    pub min_happiness: u8,
    pub min_hunger: u8,
    /// Tiredness must stay strictly below this
    pub max_tiredness: f32,
}

impl Default for CareStandard {
    fn default() -> Self {
        Self {
            min_happiness: 2,
            min_hunger: 2,
            max_tiredness: 3.0,
        }
    }
}

/// One-shot evolution decision parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Age (in status ticks) at which the decision is made
    pub age: u32,
    /// Scores above this evolve Good
    pub cutoff: f32,
    /// Half-width of the uniform noise added to the score
    pub perturbation: f32,
    /// Score used with no care history when the pet is currently well
    pub fallback_good_score: f32,
    /// Score used with no care history otherwise
    pub fallback_bad_score: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            age: 20,
            cutoff: 0.6,
            perturbation: 0.1,
            fallback_good_score: 0.8,
            fallback_bad_score: 0.3,
        }
    }
}

/// Transient visual cue parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectConfig {
    /// Cues spawned per feed/play
    pub burst_size: usize,
    pub lifetime_secs: f32,
    pub offset_min: f32,
    pub offset_max: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            burst_size: 3,
            lifetime_secs: 1.0,
            offset_min: 20.0,
            offset_max: 60.0,
        }
    }
}

/// Complete simulator tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeConfig {
    pub incubation_min_secs: f32,
    pub incubation_max_secs: f32,

    pub status_tick_secs: f32,
    pub cleanliness_tick_secs: f32,
    /// Chance per cleanliness tick that the pet makes a mess
    pub hazard_probability: f32,

    /// Sickness worsens once `unclean_counter` exceeds this
    pub unclean_threshold: u32,
    /// Sickness worsens once tiredness exceeds this
    pub tired_threshold: f32,
    /// Tiredness removed per tick while resting
    pub rest_recovery: f32,
    /// Tiredness added per tick while awake
    pub awake_fatigue: f32,

    pub feed_illness_probability: f32,
    pub death_chance_base: f32,
    pub death_chance_increment: f32,

    pub care: CareStandard,
    /// Wellness sampling period; None disables care tracking
    pub wellness_sample_secs: Option<f32>,
    pub evolution: Option<EvolutionConfig>,

    /// Per-action lockout after an accepted action; None disables cooldowns
    pub action_cooldown_secs: Option<f32>,
    /// Reject actions other than toggling rest while the light is off
    pub require_light_for_actions: bool,

    pub effects: EffectConfig,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl LifeConfig {
    /// Plain pet: decay, sickness and death only
    pub fn classic() -> Self {
        Self {
            incubation_min_secs: 0.0,
            incubation_max_secs: 5.0,
            status_tick_secs: 6.0,
            cleanliness_tick_secs: 25.0,
            hazard_probability: 0.3,
            unclean_threshold: 2,
            tired_threshold: 3.0,
            rest_recovery: 0.5,
            awake_fatigue: 0.2,
            feed_illness_probability: 0.1,
            death_chance_base: 0.1,
            death_chance_increment: 0.1,
            care: CareStandard::default(),
            wellness_sample_secs: None,
            evolution: None,
            action_cooldown_secs: None,
            require_light_for_actions: false,
            effects: EffectConfig::default(),
        }
    }

    /// Pet that tracks care quality and evolves into Good or Evil
    pub fn evolving() -> Self {
        let effects = EffectConfig::default();
        Self {
            incubation_min_secs: 2.0,
            incubation_max_secs: 5.0,
            status_tick_secs: 5.0,
            cleanliness_tick_secs: 20.0,
            rest_recovery: 2.0,
            awake_fatigue: 0.25,
            wellness_sample_secs: Some(1.0),
            evolution: Some(EvolutionConfig::default()),
            action_cooldown_secs: Some(effects.lifetime_secs),
            require_light_for_actions: true,
            effects,
            ..Self::classic()
        }
    }

    /// Probability of dying on a status tick after `critical_timer` critical ticks
    pub fn death_chance(&self, critical_timer: u32) -> f32 {
        (self.death_chance_base + critical_timer as f32 * self.death_chance_increment)
            .clamp(0.0, 1.0)
    }

    pub fn tracks_care(&self) -> bool {
        self.wellness_sample_secs.is_some()
    }

    /// Check every value the simulator relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.incubation_min_secs < 0.0 || self.incubation_min_secs > self.incubation_max_secs
        {
            return Err(ConfigError::InvalidIncubation {
                min: self.incubation_min_secs,
                max: self.incubation_max_secs,
            });
        }

        let mut periods = vec![
            ("status_tick_secs", self.status_tick_secs),
            ("cleanliness_tick_secs", self.cleanliness_tick_secs),
            ("effects.lifetime_secs", self.effects.lifetime_secs),
        ];
        if let Some(secs) = self.wellness_sample_secs {
            periods.push(("wellness_sample_secs", secs));
        }
        if let Some(secs) = self.action_cooldown_secs {
            periods.push(("action_cooldown_secs", secs));
        }
        for (name, value) in periods {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositivePeriod { name, value });
            }
        }

        let mut probabilities = vec![
            ("hazard_probability", self.hazard_probability),
            ("feed_illness_probability", self.feed_illness_probability),
            ("death_chance_base", self.death_chance_base),
        ];
        if let Some(evolution) = &self.evolution {
            probabilities.push(("evolution.cutoff", evolution.cutoff));
            probabilities.push(("evolution.fallback_good_score", evolution.fallback_good_score));
            probabilities.push(("evolution.fallback_bad_score", evolution.fallback_bad_score));
        }
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        let thresholds = [
            ("death_chance_increment", self.death_chance_increment, 0.0, 1.0),
            ("tired_threshold", self.tired_threshold, 0.0, 4.0),
            ("rest_recovery", self.rest_recovery, 0.0, 4.0),
            ("awake_fatigue", self.awake_fatigue, 0.0, 4.0),
            ("care.max_tiredness", self.care.max_tiredness, 0.0, 4.0),
        ];
        for (name, value, min, max) in thresholds {
            if !(min..=max).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if let Some(evolution) = &self.evolution
            && evolution.perturbation < 0.0
        {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "evolution.perturbation",
                value: evolution.perturbation,
            });
        }

        if self.effects.offset_min > self.effects.offset_max {
            return Err(ConfigError::InvalidEffectOffset {
                min: self.effects.offset_min,
                max: self.effects.offset_max,
            });
        }

        Ok(())
    }
}
