//! Random source abstraction for the simulator
//!
//! The simulator only ever draws uniform floats, so any `rand::Rng` works:
//! a seeded `Xoshiro256StarStar` in the game, or a mock generator in tests to
//! force outcomes.

/// Random number generator used by the life simulation
pub trait LifeRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Uniform f32 in [min, max); returns `min` for an empty range
    fn gen_between(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            min
        } else {
            min + (max - min) * self.gen_f32()
        }
    }
}

impl<T: ?Sized + rand::Rng> LifeRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
