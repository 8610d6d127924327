//! Draw commands for the meter.
//!
//! All rendering reduces to these primitives.

use crate::gauge::GradientStop;
use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// How a stroke or fill is colored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Single color
    Solid(Color),
    /// Conic gradient around the arc center
    AngularGradient {
        /// Stops with locations as fractions of a full turn
        stops: Vec<GradientStop>,
        /// Screen angle (degrees) where location 0 sits
        start_angle: f64,
    },
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Uniform scale around `center`.
    #[must_use]
    pub fn scale_about(center: Point, factor: f32) -> Self {
        Self {
            matrix: [
                factor,
                0.0,
                0.0,
                factor,
                center.x * (1.0 - factor),
                center.y * (1.0 - factor),
            ],
        }
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        // result = other * self
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },

    /// Fill a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Straight stroked line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Line color
        color: Color,
        /// Stroke width
        width: f32,
    },

    /// Stroke a circular arc, clockwise from `start_angle` to `end_angle`
    Arc {
        /// Center point
        center: Point,
        /// Radius of the stroke centerline
        radius: f32,
        /// Start screen angle in degrees
        start_angle: f64,
        /// End screen angle in degrees
        end_angle: f64,
        /// Stroke width
        width: f32,
        /// Stroke paint
        paint: Paint,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },
}

impl DrawCommand {
    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }

    /// Create a line between two points.
    #[must_use]
    pub fn line(from: Point, to: Point, color: Color, width: f32) -> Self {
        Self::Line {
            from,
            to,
            color,
            width,
        }
    }

    /// Sweep of an arc command in degrees; zero for other commands.
    #[must_use]
    pub fn arc_sweep(&self) -> f64 {
        match self {
            Self::Arc {
                start_angle,
                end_angle,
                ..
            } => end_angle - start_angle,
            _ => 0.0,
        }
    }
}
