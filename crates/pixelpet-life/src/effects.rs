//! Transient visual cues emitted by feeding and playing
//!
//! Each accepted feed/play spawns a short burst of floating cues. They live in
//! their own list and expire on their own timer. Expiry never touches the
//! creature, so cues still drain normally after it dies.

use serde::{Deserialize, Serialize};

use crate::config::EffectConfig;
use crate::rng::LifeRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    FeedEffect,
    PlayEffect,
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::FeedEffect => "feed-effect",
            EffectKind::PlayEffect => "play-effect",
        }
    }
}

/// A single floating cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEffect {
    pub id: u64,
    pub kind: EffectKind,
    /// Total lifetime in seconds
    pub lifetime_secs: f32,
    /// Horizontal offset for the view
    pub x_offset: f32,
    /// Seconds until expiry
    pub remaining_secs: f32,
}

impl VisualEffect {
    /// Progress from 0.0 (just spawned) to 1.0 (expiring)
    pub fn progress(&self) -> f32 {
        if self.lifetime_secs <= 0.0 {
            1.0
        } else {
            (1.0 - self.remaining_secs / self.lifetime_secs).clamp(0.0, 1.0)
        }
    }
}

/// Active cues plus the ones spawned since the view last drained
#[derive(Debug, Clone, Default)]
pub struct EffectList {
    active: Vec<VisualEffect>,
    spawned: Vec<VisualEffect>,
    next_id: u64,
}

impl EffectList {
    pub fn new() -> Self {
        Self {
            active: Vec::with_capacity(8),
            spawned: Vec::new(),
            next_id: 0,
        }
    }

    /// Spawn one burst of cues
    pub fn spawn_burst<R: LifeRng + ?Sized>(
        &mut self,
        kind: EffectKind,
        config: &EffectConfig,
        rng: &mut R,
    ) {
        for _ in 0..config.burst_size {
            let effect = VisualEffect {
                id: self.next_id,
                kind,
                lifetime_secs: config.lifetime_secs,
                x_offset: rng.gen_between(config.offset_min, config.offset_max),
                remaining_secs: config.lifetime_secs,
            };
            self.next_id += 1;
            self.spawned.push(effect.clone());
            self.active.push(effect);
        }
    }

    /// Count down lifetimes and drop expired cues
    pub fn update(&mut self, dt: f32) {
        for effect in &mut self.active {
            effect.remaining_secs -= dt;
        }
        self.active.retain(|effect| effect.remaining_secs > 0.0);
    }

    pub fn active(&self) -> &[VisualEffect] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Take the cues spawned since the last call
    pub fn drain_spawned(&mut self) -> Vec<VisualEffect> {
        std::mem::take(&mut self.spawned)
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.spawned.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn rng() -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(99)
    }

    #[test]
    fn test_burst_spawns_configured_count() {
        let mut effects = EffectList::new();
        let config = EffectConfig::default();
        effects.spawn_burst(EffectKind::FeedEffect, &config, &mut rng());

        assert_eq!(effects.active_count(), 3);
        for effect in effects.active() {
            assert_eq!(effect.kind, EffectKind::FeedEffect);
            assert!((20.0..60.0).contains(&effect.x_offset));
            assert_eq!(effect.lifetime_secs, 1.0);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut effects = EffectList::new();
        let config = EffectConfig::default();
        let mut rng = rng();
        effects.spawn_burst(EffectKind::FeedEffect, &config, &mut rng);
        effects.spawn_burst(EffectKind::PlayEffect, &config, &mut rng);

        let mut ids: Vec<u64> = effects.active().iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_expiry() {
        let mut effects = EffectList::new();
        let config = EffectConfig::default();
        effects.spawn_burst(EffectKind::PlayEffect, &config, &mut rng());

        effects.update(0.5);
        assert_eq!(effects.active_count(), 3);
        assert!((effects.active()[0].progress() - 0.5).abs() < 1e-6);

        effects.update(0.5);
        assert_eq!(effects.active_count(), 0);
    }

    #[test]
    fn test_drain_spawned_only_returns_new_cues() {
        let mut effects = EffectList::new();
        let config = EffectConfig::default();
        let mut rng = rng();
        effects.spawn_burst(EffectKind::FeedEffect, &config, &mut rng);

        assert_eq!(effects.drain_spawned().len(), 3);
        assert!(effects.drain_spawned().is_empty());
        // Draining does not expire anything
        assert_eq!(effects.active_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut effects = EffectList::new();
        effects.spawn_burst(EffectKind::FeedEffect, &EffectConfig::default(), &mut rng());
        effects.clear();
        assert_eq!(effects.active_count(), 0);
        assert!(effects.drain_spawned().is_empty());
    }
}
