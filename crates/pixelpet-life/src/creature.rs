//! The creature aggregate
//!
//! All mutable pet state lives in one struct so a tick or an action updates
//! it in a single place. Mutation helpers clamp to the valid ranges.

use serde::{Deserialize, Serialize};

use crate::types::{CareHistory, Evolution, Mood, Stage};

/// Upper bound for happiness and hunger
pub const MAX_STAT: u8 = 4;
/// Upper bound for tiredness
pub const MAX_TIREDNESS: f32 = 4.0;
/// Severity at which the creature turns critical
pub const MAX_SEVERITY: u8 = 3;

/// Snapshot of a single pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub stage: Stage,
    pub mood: Mood,
    pub happiness: u8,
    /// Fullness: feeding raises it, ticks drain it
    pub hunger: u8,
    pub tiredness: f32,
    /// On = awake, off = resting
    pub is_light_on: bool,
    pub needs_cleaning: bool,
    pub unclean_counter: u32,
    pub is_sick: bool,
    pub sickness_severity: u8,
    pub is_critical: bool,
    pub critical_timer: u32,
    pub age: u32,
    pub care_history: CareHistory,
    pub evolution: Option<Evolution>,
}

impl Default for Creature {
    fn default() -> Self {
        Self::new()
    }
}

impl Creature {
    /// Fresh egg with starting stats
    pub fn new() -> Self {
        let happiness = 2;
        Self {
            stage: Stage::Egg,
            mood: Mood::from_happiness(happiness),
            happiness,
            hunger: 2,
            tiredness: 0.0,
            is_light_on: true,
            needs_cleaning: false,
            unclean_counter: 0,
            is_sick: false,
            sickness_severity: 0,
            is_critical: false,
            critical_timer: 0,
            age: 0,
            care_history: CareHistory::default(),
            evolution: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stage == Stage::Hatched
    }

    pub fn is_dead(&self) -> bool {
        self.stage == Stage::Dead
    }

    pub fn is_sleeping(&self) -> bool {
        !self.is_light_on
    }

    /// Set happiness (clamped) and refresh mood
    pub fn set_happiness(&mut self, value: u8) {
        self.happiness = value.min(MAX_STAT);
        self.mood = Mood::from_happiness(self.happiness);
    }

    pub fn set_hunger(&mut self, value: u8) {
        self.hunger = value.min(MAX_STAT);
    }

    pub fn set_tiredness(&mut self, value: f32) {
        self.tiredness = value.clamp(0.0, MAX_TIREDNESS);
    }

    pub fn adjust_tiredness(&mut self, delta: f32) {
        self.set_tiredness(self.tiredness + delta);
    }

    /// Make the creature sick, or sicker
    pub fn worsen_sickness(&mut self) {
        self.is_sick = true;
        self.sickness_severity = self.sickness_severity.saturating_add(1).min(MAX_SEVERITY);
    }

    /// Enter criticality once severity is at its cap
    ///
    /// Returns true if the creature became critical on this call.
    pub fn check_critical(&mut self) -> bool {
        if self.sickness_severity >= MAX_SEVERITY && !self.is_critical {
            self.is_critical = true;
            return true;
        }
        false
    }

    /// Clear every sickness field back to healthy
    pub fn cure(&mut self) {
        self.is_sick = false;
        self.sickness_severity = 0;
        self.is_critical = false;
        self.critical_timer = 0;
    }

    /// Mark the creature dirty once more
    pub fn soil(&mut self) {
        self.needs_cleaning = true;
        self.unclean_counter = self.unclean_counter.saturating_add(1);
    }

    pub fn wash(&mut self) {
        self.needs_cleaning = false;
        self.unclean_counter = 0;
    }

    /// Human-readable age bracket
    pub fn age_label(&self) -> &'static str {
        match self.age {
            0..=4 => "baby",
            5..=9 => "child",
            10..=14 => "teen",
            15..=19 => "adult",
            _ => "elder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creature_is_egg() {
        let creature = Creature::new();
        assert_eq!(creature.stage, Stage::Egg);
        assert_eq!(creature.happiness, 2);
        assert_eq!(creature.hunger, 2);
        assert_eq!(creature.tiredness, 0.0);
        assert_eq!(creature.mood, Mood::Normal);
        assert!(creature.is_light_on);
        assert!(creature.evolution.is_none());
    }

    #[test]
    fn test_stat_clamping() {
        let mut creature = Creature::new();

        creature.set_happiness(200);
        assert_eq!(creature.happiness, MAX_STAT);
        assert_eq!(creature.mood, Mood::Happy);

        creature.set_hunger(9);
        assert_eq!(creature.hunger, MAX_STAT);

        creature.adjust_tiredness(10.0);
        assert_eq!(creature.tiredness, MAX_TIREDNESS);
        creature.adjust_tiredness(-10.0);
        assert_eq!(creature.tiredness, 0.0);
    }

    #[test]
    fn test_sickness_caps_and_turns_critical() {
        let mut creature = Creature::new();

        for _ in 0..10 {
            creature.worsen_sickness();
        }
        assert!(creature.is_sick);
        assert_eq!(creature.sickness_severity, MAX_SEVERITY);

        assert!(creature.check_critical());
        // Already critical, second check reports no transition
        assert!(!creature.check_critical());
        assert!(creature.is_critical);

        creature.critical_timer = 7;
        creature.cure();
        assert!(!creature.is_sick);
        assert!(!creature.is_critical);
        assert_eq!(creature.sickness_severity, 0);
        assert_eq!(creature.critical_timer, 0);
    }

    #[test]
    fn test_soil_and_wash() {
        let mut creature = Creature::new();
        creature.soil();
        creature.soil();
        assert!(creature.needs_cleaning);
        assert_eq!(creature.unclean_counter, 2);

        creature.wash();
        assert!(!creature.needs_cleaning);
        assert_eq!(creature.unclean_counter, 0);
    }

    #[test]
    fn test_zero_happiness_and_hunger_coexist() {
        let mut creature = Creature::new();
        creature.set_happiness(0);
        creature.set_hunger(0);
        assert_eq!(creature.happiness, 0);
        assert_eq!(creature.hunger, 0);
        assert_eq!(creature.mood, Mood::Sad);
    }

    #[test]
    fn test_age_label() {
        let mut creature = Creature::new();
        assert_eq!(creature.age_label(), "baby");
        creature.age = 12;
        assert_eq!(creature.age_label(), "teen");
        creature.age = 40;
        assert_eq!(creature.age_label(), "elder");
    }
}
