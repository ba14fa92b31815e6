//! Renderer-agnostic drawing primitives
//!
//! Coordinates live in a 64x64 view box with the body centred on (32, 32).

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Colour plus opacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub opacity: f32,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    pub fn faded(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

/// One step of an open stroked path, absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    LineTo(Vec2),
    QuadTo { control: Vec2, to: Vec2 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Filled axis-aligned rectangle
    Rect { origin: Vec2, size: Vec2, fill: Paint },
    /// Stroked straight line
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        stroke: Paint,
    },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        fill: Paint,
    },
    /// Stroked open path
    Path {
        start: Vec2,
        segments: Vec<PathSegment>,
        width: f32,
        stroke: Paint,
    },
}

impl Primitive {
    pub fn rect(x: f32, y: f32, width: f32, height: f32, fill: Paint) -> Self {
        Primitive::Rect {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
            fill,
        }
    }

    /// Square of side `size` centred on `center`
    pub fn square_at(center: Vec2, size: f32, fill: Paint) -> Self {
        Primitive::Rect {
            origin: center - Vec2::splat(size / 2.0),
            size: Vec2::splat(size),
            fill,
        }
    }

    pub fn paint(&self) -> Paint {
        match self {
            Primitive::Rect { fill, .. } | Primitive::Circle { fill, .. } => *fill,
            Primitive::Line { stroke, .. } | Primitive::Path { stroke, .. } => *stroke,
        }
    }

    /// Apply a uniform-scale transform (rotation is not supported for rects)
    pub fn transformed(&self, transform: &Affine2) -> Primitive {
        let scale = transform.matrix2.x_axis.length();
        let point = |p: Vec2| transform.transform_point2(p);

        match self {
            Primitive::Rect { origin, size, fill } => Primitive::Rect {
                origin: point(*origin),
                size: *size * scale,
                fill: *fill,
            },
            Primitive::Line {
                from,
                to,
                width,
                stroke,
            } => Primitive::Line {
                from: point(*from),
                to: point(*to),
                width: width * scale,
                stroke: *stroke,
            },
            Primitive::Circle {
                center,
                radius,
                fill,
            } => Primitive::Circle {
                center: point(*center),
                radius: radius * scale,
                fill: *fill,
            },
            Primitive::Path {
                start,
                segments,
                width,
                stroke,
            } => Primitive::Path {
                start: point(*start),
                segments: segments
                    .iter()
                    .map(|segment| match segment {
                        PathSegment::LineTo(to) => PathSegment::LineTo(point(*to)),
                        PathSegment::QuadTo { control, to } => PathSegment::QuadTo {
                            control: point(*control),
                            to: point(*to),
                        },
                    })
                    .collect(),
                width: width * scale,
                stroke: *stroke,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_at_is_centred() {
        let square = Primitive::square_at(Vec2::new(10.0, 10.0), 4.0, Paint::solid(Color::WHITE));
        assert_eq!(
            square,
            Primitive::rect(8.0, 8.0, 4.0, 4.0, Paint::solid(Color::WHITE))
        );
    }

    #[test]
    fn test_faded_clamps_opacity() {
        assert_eq!(Paint::faded(Color::BLACK, 3.0).opacity, 1.0);
        assert_eq!(Paint::faded(Color::BLACK, -1.0).opacity, 0.0);
    }

    #[test]
    fn test_transform_scales_sizes() {
        let transform = Affine2::from_scale_angle_translation(Vec2::splat(2.0), 0.0, Vec2::X);
        let rect = Primitive::rect(1.0, 2.0, 3.0, 4.0, Paint::solid(Color::WHITE));

        match rect.transformed(&transform) {
            Primitive::Rect { origin, size, .. } => {
                assert_eq!(origin, Vec2::new(3.0, 4.0));
                assert_eq!(size, Vec2::new(6.0, 8.0));
            }
            other => panic!("unexpected primitive {:?}", other),
        }

        let circle = Primitive::Circle {
            center: Vec2::ZERO,
            radius: 1.5,
            fill: Paint::solid(Color::WHITE),
        };
        match circle.transformed(&transform) {
            Primitive::Circle { center, radius, .. } => {
                assert_eq!(center, Vec2::X);
                assert_eq!(radius, 3.0);
            }
            other => panic!("unexpected primitive {:?}", other),
        }
    }
}
