//! Shape profiles: the structural, type-seeded part of a body
//!
//! A profile is rolled once per body type and then reused for every frame.
//! Re-rolling it per frame would make the body jump around, so
//! `ShapeProfileCache` only regenerates when the requested type changes.

use std::f32::consts::TAU;

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

use crate::body_type::BodyType;
use crate::color::{ColorScheme, pick_scheme};

/// Limb radiating from the core
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tentacle {
    /// Direction in radians
    pub angle: f32,
    /// Segment count
    pub length: u32,
    pub width: f32,
    /// Wave amplitude in radians (only animated for Good bodies)
    pub curve_intensity: f32,
}

impl Tentacle {
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }
}

/// Accent blotch on a Good core, in core-local cell offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub center: IVec2,
    pub size: i32,
}

impl Pattern {
    /// Whether a core cell at `offset` lies inside the blotch
    pub fn covers(&self, offset: IVec2) -> bool {
        let delta = (offset - self.center).abs();
        delta.x < self.size && delta.y < self.size
    }
}

/// Glowing crack across an Evil core, in core-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crack {
    pub start: IVec2,
    pub length: f32,
    pub angle: f32,
}

impl Crack {
    pub fn end(&self) -> Vec2 {
        self.start.as_vec2() + Vec2::from_angle(self.angle) * self.length
    }
}

/// Structural description of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProfile {
    pub body_type: BodyType,
    pub colors: ColorScheme,
    pub tentacles: Vec<Tentacle>,
    pub patterns: Vec<Pattern>,
    pub cracks: Vec<Crack>,
}

const PATTERN_COUNT: usize = 3;
const CRACK_COUNT: usize = 2;
const CRACK_LENGTH: f32 = 6.0;
/// Surface features are placed in [-12, 12) on both axes
const FEATURE_SPREAD: i32 = 12;
/// Wave amplitude for limbs that do not curl
pub const DEFAULT_CURVE: f32 = 0.2;

/// Roll a new profile for `body_type`
pub fn generate_shape_profile<R: Rng + ?Sized>(body_type: BodyType, rng: &mut R) -> ShapeProfile {
    let colors = pick_scheme(body_type, rng);

    let (tentacles, patterns, cracks) = match body_type {
        BodyType::Baby => {
            let count = rng.gen_range(2..=3);
            let tentacles = (0..count)
                .map(|_| Tentacle {
                    angle: rng.gen_range(0.0..TAU),
                    length: rng.gen_range(2..=3),
                    width: 1.0,
                    curve_intensity: DEFAULT_CURVE,
                })
                .collect();
            (tentacles, Vec::new(), Vec::new())
        }
        BodyType::Good => {
            let count = rng.gen_range(4..=6);
            let patterns = (0..PATTERN_COUNT)
                .map(|_| Pattern {
                    center: random_offset(rng),
                    size: rng.gen_range(2..=4),
                })
                .collect();
            let tentacles = (0..count)
                .map(|_| Tentacle {
                    angle: rng.gen_range(0.0..TAU),
                    length: rng.gen_range(8..=11),
                    width: rng.gen_range(2..=3_u32) as f32,
                    curve_intensity: rng.gen_range(0.2..0.5),
                })
                .collect();
            (tentacles, patterns, Vec::new())
        }
        BodyType::Evil => {
            let count = 3;
            let cracks = (0..CRACK_COUNT)
                .map(|_| Crack {
                    start: random_offset(rng),
                    length: CRACK_LENGTH,
                    angle: rng.gen_range(0.0..TAU),
                })
                .collect();
            // Evenly spaced with a little jitter
            let tentacles = (0..count)
                .map(|i| Tentacle {
                    angle: i as f32 * (TAU / count as f32) + rng.gen_range(-0.25..0.25),
                    length: rng.gen_range(6..=8),
                    width: 3.0,
                    curve_intensity: DEFAULT_CURVE,
                })
                .collect();
            (tentacles, Vec::new(), cracks)
        }
    };

    ShapeProfile {
        body_type,
        colors,
        tentacles,
        patterns,
        cracks,
    }
}

fn random_offset<R: Rng + ?Sized>(rng: &mut R) -> IVec2 {
    IVec2::new(
        rng.gen_range(-FEATURE_SPREAD..FEATURE_SPREAD),
        rng.gen_range(-FEATURE_SPREAD..FEATURE_SPREAD),
    )
}

/// Holds the current profile and re-rolls it only on a type change
pub struct ShapeProfileCache<R: Rng = Xoshiro256StarStar> {
    rng: R,
    current: Option<ShapeProfile>,
    generations: u32,
}

impl ShapeProfileCache<Xoshiro256StarStar> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<R: Rng> ShapeProfileCache<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            current: None,
            generations: 0,
        }
    }

    /// Profile for `body_type`, generating one if the type changed
    pub fn profile_for(&mut self, body_type: BodyType) -> &ShapeProfile {
        if self
            .current
            .as_ref()
            .is_some_and(|profile| profile.body_type != body_type)
        {
            self.current = None;
        }

        let rng = &mut self.rng;
        let generations = &mut self.generations;
        self.current.get_or_insert_with(|| {
            *generations += 1;
            let profile = generate_shape_profile(body_type, rng);
            log::debug!(
                "Rolled {} body with {} tentacles",
                body_type,
                profile.tentacles.len()
            );
            profile
        })
    }

    pub fn current(&self) -> Option<&ShapeProfile> {
        self.current.as_ref()
    }

    /// Number of profiles rolled so far
    pub fn generations(&self) -> u32 {
        self.generations
    }

    /// Forget the cached profile so the next request re-rolls
    pub fn clear(&mut self) {
        self.current = None;
    }
}
