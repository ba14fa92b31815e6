//! Procedural pixel bodies for PixelPet creatures
//!
//! - Body type derived from the creature's evolution
//! - Shape profiles rolled once per body type and cached
//! - Pure per-frame rendering into renderer-agnostic primitives
//! - An animation clock with the Evil glitch effect

pub mod animator;
pub mod body_type;
pub mod color;
pub mod frame;
pub mod primitive;
pub mod profile;

pub use animator::Animator;
pub use body_type::BodyType;
pub use color::{Color, ColorScheme};
pub use frame::{AnimationFrame, render_frame};
pub use primitive::{Paint, PathSegment, Primitive};
pub use profile::{Crack, Pattern, ShapeProfile, ShapeProfileCache, Tentacle, generate_shape_profile};
