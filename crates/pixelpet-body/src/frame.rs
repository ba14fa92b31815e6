//! Per-frame body rendering
//!
//! `render_frame` is a pure function of its inputs. All randomness lives in
//! the shape profile and the animator's glitch roll, so the same
//! `(profile, mood, sleeping, frame)` always yields the same primitives.

use std::f32::consts::{PI, TAU};

use glam::{Affine2, IVec2, Vec2};
use pixelpet_life::Mood;
use serde::{Deserialize, Serialize};

use crate::body_type::BodyType;
use crate::color::Color;
use crate::primitive::{Paint, PathSegment, Primitive};
use crate::profile::{ShapeProfile, Tentacle};

/// Side of the square view box
pub const VIEW_SIZE: f32 = 64.0;
/// Body centre inside the view box
pub const CENTER: Vec2 = Vec2::new(32.0, 32.0);
/// Frames per animation loop
pub const FRAME_LOOP: u32 = 24;

const CELL: i32 = 4;
const CORE_RADIUS: i32 = 16;
const LIMB_SPACING: f32 = 4.0;
const CRACK_OPACITY: f32 = 0.3;
const PARTICLE_COUNT: usize = 8;
const PARTICLE_DISTANCE: f32 = 20.0;
const EYE_X: [f32; 2] = [22.0, 34.0];
const BABY_CENTER: Vec2 = Vec2::new(34.0, 34.0);
const BABY_SCALE: f32 = 2.0;

/// Animation clock state handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Loops over `0..FRAME_LOOP`
    pub index: u32,
    /// Particle orbit phase in radians
    pub particle_phase: f32,
    /// Pixel offset applied to Evil bodies this frame
    pub glitch: IVec2,
}

impl AnimationFrame {
    pub fn at(index: u32) -> Self {
        Self {
            index: index % FRAME_LOOP,
            ..Default::default()
        }
    }

    fn t(&self) -> f32 {
        self.index as f32
    }
}

/// Render one frame of a body
pub fn render_frame(
    profile: &ShapeProfile,
    mood: Mood,
    sleeping: bool,
    frame: &AnimationFrame,
) -> Vec<Primitive> {
    let mut out = Vec::new();

    match profile.body_type {
        BodyType::Baby => {
            let mut baby = Vec::new();
            baby_limbs(profile, frame, &mut baby);
            baby_core(profile, &mut baby);
            baby_face(profile, mood, sleeping, &mut baby);

            let bob = (frame.t() * 0.2).sin() * 2.0;
            let transform = Affine2::from_translation(CENTER)
                * Affine2::from_scale(Vec2::splat(BABY_SCALE))
                * Affine2::from_translation(-CENTER + Vec2::new(0.0, bob));
            out.extend(baby.iter().map(|p| p.transformed(&transform)));
        }
        BodyType::Good => {
            particles(profile, frame, &mut out);
            limbs(profile, frame, Vec2::ZERO, &mut out);
            disc_core(profile, Vec2::ZERO, &mut out);
            good_face(profile, mood, sleeping, &mut out);
        }
        BodyType::Evil => {
            let glitch = frame.glitch.as_vec2();
            limbs(profile, frame, glitch, &mut out);
            disc_core(profile, glitch, &mut out);
            cracks(profile, &mut out);
            evil_face(profile, mood, sleeping, frame, &mut out);
        }
    }

    out
}

fn core_cells() -> impl Iterator<Item = IVec2> {
    (-CORE_RADIUS..=CORE_RADIUS)
        .step_by(CELL as usize)
        .flat_map(|y| {
            (-CORE_RADIUS..=CORE_RADIUS)
                .step_by(CELL as usize)
                .map(move |x| IVec2::new(x, y))
        })
        .filter(|cell| cell.length_squared() <= CORE_RADIUS * CORE_RADIUS)
}

fn disc_core(profile: &ShapeProfile, offset: Vec2, out: &mut Vec<Primitive>) {
    let base = Paint::solid(profile.colors.base);
    let accent = Paint::solid(profile.colors.accent);
    let cell_size = CELL as f32;

    for cell in core_cells() {
        let origin = CENTER + cell.as_vec2() + offset;
        out.push(Primitive::rect(origin.x, origin.y, cell_size, cell_size, base));

        if profile.patterns.iter().any(|pattern| pattern.covers(cell)) {
            out.push(Primitive::rect(origin.x + 1.0, origin.y + 1.0, 2.0, 2.0, accent));
        }
    }
}

fn limb_wave(body_type: BodyType, tentacle: &Tentacle, frame: &AnimationFrame) -> f32 {
    let (period, amplitude) = match body_type {
        BodyType::Good => (24.0, tentacle.curve_intensity),
        _ => (12.0, 0.2),
    };
    (frame.t() / period * TAU).sin() * amplitude
}

fn limbs(profile: &ShapeProfile, frame: &AnimationFrame, offset: Vec2, out: &mut Vec<Primitive>) {
    let paint = match profile.body_type {
        BodyType::Good => Paint::faded(profile.colors.base, 0.9),
        _ => Paint::solid(profile.colors.base),
    };

    for tentacle in &profile.tentacles {
        let root = CENTER + tentacle.direction() * CORE_RADIUS as f32 + offset;
        let wave = limb_wave(profile.body_type, tentacle, frame);
        let length = tentacle.length.max(1) as f32;

        for j in 0..tentacle.length {
            let progress = j as f32 / length;
            let bent = Vec2::from_angle(tentacle.angle + wave * progress);
            let position = root + bent * (j as f32 * LIMB_SPACING);
            let size = (tentacle.width * (1.0 - progress) * 4.0).max(2.0);
            out.push(Primitive::square_at(position, size, paint));
        }
    }
}

fn cracks(profile: &ShapeProfile, out: &mut Vec<Primitive>) {
    let stroke = Paint::faded(profile.colors.glow, CRACK_OPACITY);
    for crack in &profile.cracks {
        out.push(Primitive::Line {
            from: CENTER + crack.start.as_vec2(),
            to: CENTER + crack.end(),
            width: 1.0,
            stroke,
        });
    }
}

fn particles(profile: &ShapeProfile, frame: &AnimationFrame, out: &mut Vec<Primitive>) {
    let fill = Paint::faded(profile.colors.glow, 0.5);
    for i in 0..PARTICLE_COUNT {
        let angle = i as f32 / PARTICLE_COUNT as f32 * TAU + frame.particle_phase;
        let distance = PARTICLE_DISTANCE + ((frame.t() + i as f32) * 0.5).sin() * 4.0;
        out.push(Primitive::Circle {
            center: CENTER + Vec2::from_angle(angle) * distance,
            radius: 1.0,
            fill,
        });
    }
}

fn eyelids(color: Color, out: &mut Vec<Primitive>) {
    for x in EYE_X {
        out.push(Primitive::rect(x, 32.0, 8.0, 1.0, Paint::solid(color)));
    }
}

fn good_face(profile: &ShapeProfile, mood: Mood, sleeping: bool, out: &mut Vec<Primitive>) {
    if sleeping {
        eyelids(Color::WHITE, out);
        return;
    }

    let accent = Paint::solid(profile.colors.accent);
    for x in EYE_X {
        out.push(Primitive::rect(x, 28.0, 8.0, 8.0, Paint::solid(Color::WHITE)));
        out.push(Primitive::rect(x + 2.0, 30.0, 4.0, 4.0, accent));
    }

    let control_y = match mood {
        Mood::Happy => 38.0,
        Mood::Sad => 42.0,
        Mood::Normal => 40.0,
    };
    out.push(Primitive::Path {
        start: Vec2::new(28.0, 40.0),
        segments: vec![PathSegment::QuadTo {
            control: Vec2::new(32.0, control_y),
            to: Vec2::new(36.0, 40.0),
        }],
        width: 1.0,
        stroke: accent,
    });
}

fn evil_face(
    profile: &ShapeProfile,
    mood: Mood,
    sleeping: bool,
    frame: &AnimationFrame,
    out: &mut Vec<Primitive>,
) {
    if sleeping {
        eyelids(profile.colors.glow, out);
        return;
    }

    let accent = Paint::solid(profile.colors.accent);
    let pulse = (frame.t() * 0.5).sin() + 2.0;
    for x in EYE_X {
        out.push(Primitive::rect(x, 28.0, 8.0, 8.0, Paint::solid(Color::BLACK)));
        out.push(Primitive::rect(
            x + 2.0,
            30.0,
            4.0,
            4.0,
            Paint::faded(profile.colors.glow, 0.5),
        ));
        out.push(Primitive::rect(x + 2.0, 30.0, 4.0, 4.0, accent));
        out.push(Primitive::Circle {
            center: Vec2::new(x + 4.0, 32.0),
            radius: pulse,
            fill: Paint::faded(profile.colors.glow, 0.3),
        });
    }

    let zigzag: [(f32, f32); 4] = match mood {
        Mood::Happy => [(30.0, 39.0), (32.0, 40.0), (34.0, 39.0), (36.0, 40.0)],
        Mood::Sad => [(30.0, 41.0), (32.0, 40.0), (34.0, 41.0), (36.0, 40.0)],
        Mood::Normal => [(30.0, 40.0), (32.0, 41.0), (34.0, 40.0), (36.0, 40.0)],
    };
    out.push(Primitive::Path {
        start: Vec2::new(28.0, 40.0),
        segments: zigzag
            .iter()
            .map(|&(x, y)| PathSegment::LineTo(Vec2::new(x, y)))
            .collect(),
        width: 1.0,
        stroke: accent,
    });
}

fn baby_limbs(profile: &ShapeProfile, frame: &AnimationFrame, out: &mut Vec<Primitive>) {
    let paint = Paint::solid(profile.colors.base);
    for (i, tentacle) in profile.tentacles.iter().enumerate() {
        let wobble = (frame.t() * 0.2 + i as f32 * PI).sin();
        let center = BABY_CENTER + tentacle.direction() * (8.0 + wobble);
        out.push(Primitive::square_at(center, 4.0, paint));
    }
}

fn baby_core(profile: &ShapeProfile, out: &mut Vec<Primitive>) {
    let paint = Paint::solid(profile.colors.base);
    for y in -1..=1 {
        for x in -1..=1 {
            // cells are anchored by their top-left corner, not centred
            let origin = BABY_CENTER + Vec2::new(x as f32, y as f32) * CELL as f32;
            out.push(Primitive::rect(origin.x, origin.y, CELL as f32, CELL as f32, paint));
        }
    }
}

fn baby_face(profile: &ShapeProfile, mood: Mood, sleeping: bool, out: &mut Vec<Primitive>) {
    let white = Paint::solid(Color::WHITE);
    let eyes = [32.0, 38.0];

    if sleeping {
        for x in eyes {
            out.push(Primitive::rect(x, 34.0, 2.0, 1.0, white));
        }
        return;
    }

    let accent = Paint::solid(profile.colors.accent);
    for x in eyes {
        out.push(Primitive::rect(x, 34.0, 2.0, 2.0, white));
        out.push(Primitive::rect(x + 0.5, 34.5, 1.0, 1.0, accent));
    }

    let end = Vec2::new(36.0, 37.0);
    let segment = match mood {
        Mood::Happy => PathSegment::QuadTo {
            control: Vec2::new(35.0, 36.5),
            to: end,
        },
        Mood::Sad => PathSegment::QuadTo {
            control: Vec2::new(35.0, 37.5),
            to: end,
        },
        Mood::Normal => PathSegment::LineTo(end),
    };
    out.push(Primitive::Path {
        start: Vec2::new(34.0, 37.0),
        segments: vec![segment],
        width: 0.5,
        stroke: accent,
    });
}
