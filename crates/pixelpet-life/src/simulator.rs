//! The life simulation state machine
//!
//! `LifeSimulator` owns the creature and advances it in two ways:
//! - `update(dt)` runs incubation and the periodic timers (status,
//!   cleanliness and, when configured, wellness sampling)
//! - the action methods apply user commands immediately
//!
//! Nothing here fails: rejected actions return false and leave every field
//! untouched, and death is an ordinary stage change.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::{ConfigError, LifeConfig};
use crate::creature::Creature;
use crate::effects::{EffectKind, EffectList, VisualEffect};
use crate::rng::LifeRng;
use crate::timer::{LifeTimer, Schedule};
use crate::types::{Action, Mood, Stage};
use crate::wellness;

/// Single-pet life simulator
pub struct LifeSimulator<R: LifeRng = Xoshiro256StarStar> {
    config: LifeConfig,
    creature: Creature,
    schedule: Schedule,
    /// Seconds left before the egg hatches
    incubation_remaining: f32,
    /// Seconds left on each action's cooldown, indexed by `Action::index`
    cooldowns: [f32; 5],
    effects: EffectList,
    rng: R,
}

impl LifeSimulator<Xoshiro256StarStar> {
    /// Create a simulator with a seeded generator
    pub fn new(config: LifeConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Xoshiro256StarStar::seed_from_u64(seed))
    }

    /// Create a simulator seeded from system entropy
    pub fn from_entropy(config: LifeConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, Xoshiro256StarStar::from_entropy())
    }
}

impl<R: LifeRng> LifeSimulator<R> {
    /// Create a simulator drawing from the given random source
    pub fn with_rng(config: LifeConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let incubation_remaining =
            rng.gen_between(config.incubation_min_secs, config.incubation_max_secs);
        let schedule = Schedule::new(&config);
        log::debug!("New egg, hatching in {:.2}s", incubation_remaining);

        Ok(Self {
            config,
            creature: Creature::new(),
            schedule,
            incubation_remaining,
            cooldowns: [0.0; 5],
            effects: EffectList::new(),
            rng,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Read-only view of the creature
    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    /// Owned copy of the creature state
    pub fn snapshot(&self) -> Creature {
        self.creature.clone()
    }

    /// Direct mutable access for debug tooling and tests
    ///
    /// Bypasses action gating. Raw writes may leave a stat out of range;
    /// the next action or tick clamps it back.
    pub fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }

    pub fn stage(&self) -> Stage {
        self.creature.stage
    }

    pub fn mood(&self) -> Mood {
        self.creature.mood
    }

    /// Seconds until hatching, None once hatched
    pub fn incubation_remaining(&self) -> Option<f32> {
        (self.creature.stage == Stage::Egg).then_some(self.incubation_remaining)
    }

    /// Chance of dying on the next status tick, 0 unless critical
    pub fn death_chance(&self) -> f32 {
        if self.creature.is_alive() && self.creature.is_critical {
            self.config.death_chance(self.creature.critical_timer)
        } else {
            0.0
        }
    }

    /// Whether the life timers are currently counting
    pub fn timers_running(&self) -> bool {
        self.schedule.is_running()
    }

    /// Seconds left on an action's cooldown
    pub fn cooldown_remaining(&self, action: Action) -> f32 {
        self.cooldowns[action.index()].max(0.0)
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let mut remaining = dt;

        loop {
            match self.creature.stage {
                Stage::Egg => {
                    if self.incubation_remaining <= remaining {
                        remaining -= self.incubation_remaining;
                        self.incubation_remaining = 0.0;
                        self.hatch();
                    } else {
                        self.incubation_remaining -= remaining;
                        break;
                    }
                }
                Stage::Hatched => match self.schedule.next_due(remaining) {
                    Some((timer, waited)) => {
                        remaining -= waited;
                        self.fire(timer);
                    }
                    None => break,
                },
                Stage::Dead => break,
            }
        }

        for cooldown in &mut self.cooldowns {
            *cooldown = (*cooldown - dt).max(0.0);
        }
        self.effects.update(dt);
    }

    fn fire(&mut self, timer: LifeTimer) {
        match timer {
            LifeTimer::Status => self.tick_status(),
            LifeTimer::Cleanliness => self.tick_cleanliness(),
            LifeTimer::Wellness => self.sample_wellness(),
        }
    }

    fn hatch(&mut self) {
        self.creature.stage = Stage::Hatched;
        self.schedule.start_all();
        log::info!("The egg hatched");
    }

    fn die(&mut self) {
        self.creature.stage = Stage::Dead;
        self.schedule.stop_all();
        self.cooldowns = [0.0; 5];
        log::info!(
            "The creature died at age {} after {} critical ticks",
            self.creature.age,
            self.creature.critical_timer
        );
    }

    /// Run one status tick immediately
    pub fn tick_status(&mut self) {
        if !self.creature.is_alive() {
            return;
        }

        let config = &self.config;
        let creature = &mut self.creature;

        if creature.is_critical {
            creature.critical_timer += 1;
        }

        if creature.unclean_counter > config.unclean_threshold
            || creature.tiredness > config.tired_threshold
        {
            creature.worsen_sickness();
            log::debug!("Sickness worsened to {}", creature.sickness_severity);
        }

        creature.set_hunger(creature.hunger.saturating_sub(1));
        creature.set_happiness(creature.happiness.saturating_sub(1));

        if creature.is_light_on {
            creature.adjust_tiredness(config.awake_fatigue);
        } else {
            creature.adjust_tiredness(-config.rest_recovery);
        }

        creature.age += 1;

        if creature.check_critical() {
            log::warn!("The creature is in critical condition");
        }

        log::debug!(
            "Tick age={} happiness={} hunger={} tiredness={:.2} sick={} critical={}",
            creature.age,
            creature.happiness,
            creature.hunger,
            creature.tiredness,
            creature.sickness_severity,
            creature.is_critical
        );

        self.maybe_evolve();

        if self.creature.is_critical {
            let chance = self.config.death_chance(self.creature.critical_timer);
            if self.rng.check_probability(chance) {
                self.die();
            }
        }
    }

    fn maybe_evolve(&mut self) {
        let Some(evolution_config) = &self.config.evolution else {
            return;
        };
        if self.creature.evolution.is_some() || self.creature.age != evolution_config.age {
            return;
        }

        let outcome = wellness::decide_evolution(
            &self.creature,
            &self.config.care,
            evolution_config,
            &mut self.rng,
        );
        self.creature.evolution = Some(outcome);
        log::info!("The creature evolved: {}", outcome);
    }

    /// Run one cleanliness hazard roll immediately
    pub fn tick_cleanliness(&mut self) {
        if !self.creature.is_alive() {
            return;
        }
        if self.rng.check_probability(self.config.hazard_probability) {
            self.creature.soil();
            log::debug!("Made a mess ({} uncleaned)", self.creature.unclean_counter);
        }
    }

    /// Record one wellness sample immediately (no-op without care tracking)
    pub fn sample_wellness(&mut self) {
        if !self.creature.is_alive() || !self.config.tracks_care() {
            return;
        }
        let well = wellness::is_well_cared_for(&self.creature, &self.config.care);
        self.creature.care_history.record(well);
    }

    /// Whether `action` would be accepted right now
    pub fn accepts(&self, action: Action) -> bool {
        if !self.creature.is_alive() {
            return false;
        }

        if action != Action::ToggleRest {
            if self.config.require_light_for_actions && !self.creature.is_light_on {
                return false;
            }
            if self.cooldowns[action.index()] > 0.0 {
                return false;
            }
        }

        match action {
            Action::Clean => self.creature.needs_cleaning,
            Action::GiveMedicine => self.creature.is_sick,
            Action::Feed | Action::Play | Action::ToggleRest => true,
        }
    }

    fn begin(&mut self, action: Action) -> bool {
        if !self.accepts(action) {
            log::trace!("Ignored {} in stage {}", action, self.creature.stage);
            return false;
        }
        if action != Action::ToggleRest
            && let Some(secs) = self.config.action_cooldown_secs
        {
            self.cooldowns[action.index()] = secs;
        }
        log::debug!("Action: {}", action);
        true
    }

    /// Dispatch a command by value
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Feed => self.feed(),
            Action::Play => self.play(),
            Action::Clean => self.clean(),
            Action::ToggleRest => self.toggle_rest(),
            Action::GiveMedicine => self.give_medicine(),
        }
    }

    pub fn feed(&mut self) -> bool {
        if !self.begin(Action::Feed) {
            return false;
        }

        let creature = &mut self.creature;
        creature.set_hunger(creature.hunger.saturating_add(1));
        creature.adjust_tiredness(1.0);

        if self.rng.check_probability(self.config.feed_illness_probability) {
            self.creature.worsen_sickness();
            log::debug!("Food made the creature sick");
            if self.creature.check_critical() {
                log::warn!("The creature is in critical condition");
            }
        }

        self.effects
            .spawn_burst(EffectKind::FeedEffect, &self.config.effects, &mut self.rng);
        true
    }

    pub fn play(&mut self) -> bool {
        if !self.begin(Action::Play) {
            return false;
        }

        let creature = &mut self.creature;
        creature.set_happiness(creature.happiness.saturating_add(1));
        creature.adjust_tiredness(1.0);

        self.effects
            .spawn_burst(EffectKind::PlayEffect, &self.config.effects, &mut self.rng);
        true
    }

    pub fn clean(&mut self) -> bool {
        if !self.begin(Action::Clean) {
            return false;
        }
        self.creature.wash();
        true
    }

    pub fn toggle_rest(&mut self) -> bool {
        if !self.begin(Action::ToggleRest) {
            return false;
        }
        self.creature.is_light_on = !self.creature.is_light_on;
        true
    }

    /// The only way out of criticality
    pub fn give_medicine(&mut self) -> bool {
        if !self.begin(Action::GiveMedicine) {
            return false;
        }
        self.creature.cure();
        true
    }

    /// Cues currently on screen
    pub fn active_effects(&self) -> &[VisualEffect] {
        self.effects.active()
    }

    /// Cues spawned since the last call
    pub fn drain_events(&mut self) -> Vec<VisualEffect> {
        self.effects.drain_spawned()
    }

    /// Start over with a fresh egg
    pub fn restart(&mut self) {
        self.creature = Creature::new();
        self.schedule = Schedule::new(&self.config);
        self.incubation_remaining = self
            .rng
            .gen_between(self.config.incubation_min_secs, self.config.incubation_max_secs);
        self.cooldowns = [0.0; 5];
        self.effects.clear();
        log::info!(
            "Restarted, new egg hatching in {:.2}s",
            self.incubation_remaining
        );
    }
}
