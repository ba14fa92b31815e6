//! One pet plus its body, driven by a single clock

use anyhow::{Context, Result};
use pixelpet_body::{AnimationFrame, Animator, BodyType, Primitive, ShapeProfileCache, render_frame};
use pixelpet_life::timer::PeriodicTimer;
use pixelpet_life::{Creature, LifeSimulator, Stage, VisualEffect};

use crate::config::PetConfig;
use crate::script::Command;

/// Owns the simulator, the body cache and the animation clock
pub struct Session {
    seed: u64,
    simulator: LifeSimulator,
    profiles: ShapeProfileCache,
    animator: Animator,
    animation: PeriodicTimer,
    elapsed: f32,
}

impl Session {
    /// Build a session; an unset seed is drawn from entropy and logged
    pub fn new(config: &PetConfig) -> Result<Self> {
        let seed = config.simulation.seed.unwrap_or_else(rand::random);
        let life = config.simulation.variant.config();
        let simulator = LifeSimulator::new(life, seed)
            .with_context(|| format!("Invalid {} life config", config.simulation.variant))?;

        log::info!(
            "Session started: variant={}, seed={}",
            config.simulation.variant,
            seed
        );

        Ok(Self {
            seed,
            simulator,
            profiles: ShapeProfileCache::new(seed.wrapping_add(1)),
            animator: Animator::new(seed.wrapping_add(2)),
            animation: PeriodicTimer::new(config.animation.frame_interval_secs),
            elapsed: 0.0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn simulator(&self) -> &LifeSimulator {
        &self.simulator
    }

    pub fn creature(&self) -> &Creature {
        self.simulator.creature()
    }

    pub fn body_type(&self) -> BodyType {
        BodyType::from_evolution(self.creature().evolution)
    }

    pub fn frame(&self) -> &AnimationFrame {
        self.animator.current()
    }

    /// Advance everything by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.simulator.update(dt);

        if self.simulator.stage() == Stage::Hatched {
            if self.animation.is_running() {
                let body_type = self.body_type();
                for _ in 0..self.animation.advance(dt) {
                    self.animator.tick(body_type);
                }
            } else {
                // first frame after hatching
                self.animation.start();
            }
        } else if self.animation.is_running() {
            self.animation.stop();
        }
    }

    /// Run a player command, returning whether it had any effect
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Act(action) => {
                let accepted = self.simulator.apply(action);
                log::debug!(
                    "{} at {:.1}s: {}",
                    action,
                    self.elapsed,
                    if accepted { "ok" } else { "ignored" }
                );
                accepted
            }
            Command::Restart => {
                self.simulator.restart();
                self.animation.stop();
                self.animator.reset();
                self.profiles.clear();
                true
            }
        }
    }

    /// Cues spawned since the last call
    pub fn drain_events(&mut self) -> Vec<VisualEffect> {
        self.simulator.drain_events()
    }

    /// Body primitives for the current frame, None while there is no body
    pub fn render(&mut self) -> Option<Vec<Primitive>> {
        if self.simulator.stage() != Stage::Hatched {
            return None;
        }

        let creature = self.simulator.creature();
        let body_type = BodyType::from_evolution(creature.evolution);
        let mood = creature.mood;
        let sleeping = creature.is_sleeping();
        let profile = self.profiles.profile_for(body_type);
        Some(render_frame(profile, mood, sleeping, self.animator.current()))
    }

    /// One-line human summary of the pet
    pub fn status_line(&self) -> String {
        let creature = self.creature();
        match creature.stage {
            Stage::Egg => format!(
                "[{:6.1}s] egg, hatching in {:.1}s",
                self.elapsed,
                self.simulator.incubation_remaining().unwrap_or(0.0)
            ),
            Stage::Dead => format!(
                "[{:6.1}s] dead at age {} ({})",
                self.elapsed,
                creature.age,
                creature.age_label()
            ),
            Stage::Hatched => {
                let mut line = format!(
                    "[{:6.1}s] {} {} age {} | happy {} hunger {} tired {:.1}{}",
                    self.elapsed,
                    self.body_type(),
                    creature.mood.name(),
                    creature.age,
                    creature.happiness,
                    creature.hunger,
                    creature.tiredness,
                    if creature.is_sleeping() { " zzz" } else { "" }
                );
                if creature.needs_cleaning {
                    line.push_str(" | dirty");
                }
                if creature.is_sick {
                    line.push_str(&format!(" | sick {}", creature.sickness_severity));
                }
                if creature.is_critical {
                    line.push_str(&format!(
                        " | CRITICAL ({:.0}% death chance)",
                        self.simulator.death_chance() * 100.0
                    ));
                }
                line
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpet_life::LifeVariant;

    fn config(seed: u64) -> PetConfig {
        let mut config = PetConfig::default();
        config.simulation.seed = Some(seed);
        config
    }

    #[test]
    fn test_egg_has_no_body() {
        let mut session = Session::new(&config(1)).unwrap();
        assert_eq!(session.creature().stage, Stage::Egg);
        assert!(session.render().is_none());
        assert!(session.status_line().contains("egg"));
    }

    #[test]
    fn test_animation_runs_only_while_hatched() {
        let mut session = Session::new(&config(2)).unwrap();
        // classic incubation never exceeds 5s
        session.update(5.0);
        assert_eq!(session.creature().stage, Stage::Hatched);
        let before = session.frame().index;
        session.update(0.35);
        assert_ne!(session.frame().index, before);
        assert!(session.render().is_some());
    }

    #[test]
    fn test_animation_freezes_on_death() {
        let mut session = Session::new(&config(4)).unwrap();
        session.update(5.0);
        session.update(0.5);
        assert!(session.animation.is_running());

        let creature = session.simulator.creature_mut();
        creature.is_sick = true;
        creature.sickness_severity = 3;
        for _ in 0..1_000 {
            if session.simulator.stage() == Stage::Dead {
                break;
            }
            session.simulator.tick_status();
        }
        assert_eq!(session.creature().stage, Stage::Dead);

        session.update(0.1);
        assert!(!session.animation.is_running());
        let frozen = *session.frame();
        for _ in 0..20 {
            session.update(0.1);
        }
        assert_eq!(*session.frame(), frozen);
        assert!(session.render().is_none());
        assert!(session.status_line().contains("dead"));
    }

    #[test]
    fn test_restart_resets_body() {
        let mut config = config(3);
        config.simulation.variant = LifeVariant::Evolving;
        let mut session = Session::new(&config).unwrap();
        session.update(6.0);
        assert!(session.apply(Command::Restart));
        assert_eq!(session.creature().stage, Stage::Egg);
        assert_eq!(*session.frame(), AnimationFrame::default());
        assert!(session.render().is_none());
    }
}
