//! Visual body types

use pixelpet_life::Evolution;
use serde::{Deserialize, Serialize};

/// Body plan drawn for a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BodyType {
    /// Juvenile: tiny 3x3 core with stubby limbs
    #[default]
    Baby,
    /// Benevolent adult: round core, long curling tentacles, orbiting particles
    Good,
    /// Malevolent adult: round cracked core, three heavy limbs, glitching
    Evil,
}

impl BodyType {
    /// Body for an evolution outcome; no outcome yet means a baby
    pub fn from_evolution(evolution: Option<Evolution>) -> Self {
        match evolution {
            None => BodyType::Baby,
            Some(Evolution::Good) => BodyType::Good,
            Some(Evolution::Evil) => BodyType::Evil,
        }
    }

    pub fn all() -> &'static [BodyType] {
        &[BodyType::Baby, BodyType::Good, BodyType::Evil]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyType::Baby => "Baby",
            BodyType::Good => "Good",
            BodyType::Evil => "Evil",
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for BodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baby" => Ok(BodyType::Baby),
            "good" => Ok(BodyType::Good),
            "evil" => Ok(BodyType::Evil),
            _ => Err(format!("Unknown body type: {}. Valid: baby, good, evil", s)),
        }
    }
}
