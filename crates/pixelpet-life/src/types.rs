//! Small value types shared by the simulator and its consumers

use serde::{Deserialize, Serialize};

/// Life stage of the creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stage {
    /// Still incubating, no timers running
    #[default]
    Egg,
    /// Alive and simulated
    Hatched,
    /// Terminal until the host restarts the simulation
    Dead,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Egg => "Egg",
            Stage::Hatched => "Hatched",
            Stage::Dead => "Dead",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mood shown on the creature's face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mood {
    Happy,
    #[default]
    Normal,
    Sad,
}

impl Mood {
    /// Derive mood from happiness: above 3 is happy, below 2 is sad
    pub fn from_happiness(happiness: u8) -> Self {
        if happiness > 3 {
            Mood::Happy
        } else if happiness < 2 {
            Mood::Sad
        } else {
            Mood::Normal
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Normal => "Normal",
            Mood::Sad => "Sad",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Adult form the creature diverges into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evolution {
    Good,
    Evil,
}

impl std::fmt::Display for Evolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evolution::Good => write!(f, "Good"),
            Evolution::Evil => write!(f, "Evil"),
        }
    }
}

/// Tally of wellness samples taken while the creature was alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareHistory {
    pub good: u32,
    pub bad: u32,
}

impl CareHistory {
    /// Record one sample
    pub fn record(&mut self, well_cared_for: bool) {
        if well_cared_for {
            self.good = self.good.saturating_add(1);
        } else {
            self.bad = self.bad.saturating_add(1);
        }
    }

    pub fn total(&self) -> u32 {
        self.good.saturating_add(self.bad)
    }

    /// Fraction of good samples, or None if nothing was recorded yet
    pub fn ratio(&self) -> Option<f32> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(self.good as f32 / total as f32)
        }
    }
}

/// User commands accepted by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Feed,
    Play,
    Clean,
    ToggleRest,
    GiveMedicine,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::Feed,
            Action::Play,
            Action::Clean,
            Action::ToggleRest,
            Action::GiveMedicine,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Feed => "feed",
            Action::Play => "play",
            Action::Clean => "clean",
            Action::ToggleRest => "rest",
            Action::GiveMedicine => "medicine",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Action::Feed => 0,
            Action::Play => 1,
            Action::Clean => 2,
            Action::ToggleRest => 3,
            Action::GiveMedicine => 4,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feed" | "eat" => Ok(Action::Feed),
            "play" => Ok(Action::Play),
            "clean" => Ok(Action::Clean),
            "rest" | "sleep" | "wake" | "light" => Ok(Action::ToggleRest),
            "medicine" | "heal" => Ok(Action::GiveMedicine),
            _ => Err(format!(
                "Unknown action: {}. Valid: feed, play, clean, rest, medicine",
                s
            )),
        }
    }
}
