//! Animation clock for a rendered body

use std::f32::consts::TAU;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::body_type::BodyType;
use crate::frame::{AnimationFrame, FRAME_LOOP};

const PHASE_STEP: f32 = 0.1;
const GLITCH_PROBABILITY: f32 = 0.1;

/// Advances the frame index, particle phase and Evil glitch offset
pub struct Animator<R: Rng = Xoshiro256StarStar> {
    frame: AnimationFrame,
    rng: R,
}

impl Animator<Xoshiro256StarStar> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<R: Rng> Animator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            frame: AnimationFrame::default(),
            rng,
        }
    }

    pub fn current(&self) -> &AnimationFrame {
        &self.frame
    }

    /// Advance one animation tick
    pub fn tick(&mut self, body_type: BodyType) -> &AnimationFrame {
        self.frame.index = (self.frame.index + 1) % FRAME_LOOP;
        self.frame.particle_phase = (self.frame.particle_phase + PHASE_STEP) % TAU;

        // A glitch lasts exactly one frame
        self.frame.glitch = IVec2::ZERO;
        if body_type == BodyType::Evil && self.rng.r#gen::<f32>() < GLITCH_PROBABILITY {
            self.frame.glitch = IVec2::new(self.glitch_component(), self.glitch_component());
            log::trace!("Glitch offset {}", self.frame.glitch);
        }

        &self.frame
    }

    fn glitch_component(&mut self) -> i32 {
        // float draw keeps mock generators usable
        (self.rng.r#gen::<f32>() * 3.0).floor().min(2.0) as i32 - 1
    }

    pub fn reset(&mut self) {
        self.frame = AnimationFrame::default();
    }
}
