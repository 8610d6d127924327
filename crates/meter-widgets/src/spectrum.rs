//! Stateless painters for the meter's layers.
//!
//! Each painter receives a fully computed layout and nothing else, so the
//! same geometry can be replayed on any [`Canvas`].

use meter_core::{Canvas, Color, GaugeGeometry, Paint, Point, Transform2D};

/// Track color behind the progress arc.
pub const TRACK_COLOR: Color = Color {
    a: 0.5,
    ..Color::LIGHT_GRAY
};

/// Tick mark color.
pub const MARK_COLOR: Color = Color::GRAY;

/// A clockwise arc between two screen angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    /// Start angle
    pub start: f64,
    /// End angle
    pub end: f64,
}

/// Everything needed to paint the track, the progress arc and the marks.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumLayout {
    /// Circle center
    pub center: Point,
    /// Radius of the stroke centerline
    pub radius: f32,
    /// Stroke width
    pub thickness: f32,
    /// Full visible arc
    pub track: ArcSpan,
    /// Filled part; `None` at zero progress
    pub progress: Option<ArcSpan>,
    /// Gradient for the filled part
    pub paint: Paint,
    /// One span per tick mark
    pub marks: Vec<ArcSpan>,
    /// Scale around the center (pulses above the shaking point)
    pub scale: f32,
}

impl SpectrumLayout {
    /// Lay the spectrum out around `center` for `progress`.
    #[must_use]
    pub fn compute(geometry: &GaugeGeometry<'_>, progress: f64, center: Point) -> Self {
        let config = geometry.config();
        let span = |from: f64, to: f64| ArcSpan {
            start: geometry.screen_angle_degrees(from),
            end: geometry.screen_angle_degrees(to),
        };

        let filled = geometry.normalized_progress(progress);
        Self {
            center,
            radius: (geometry.track_diameter() / 2.0) as f32,
            thickness: config.gauge_arc_thickness() as f32,
            track: span(0.0, config.gauge_arc_portion()),
            progress: (filled > 0.0).then(|| span(0.0, filled)),
            paint: Paint::AngularGradient {
                stops: geometry.gradient_stops(),
                start_angle: geometry.screen_angle_degrees(0.0),
            },
            marks: geometry
                .mark_trim_ranges()
                .into_iter()
                .map(|range| span(range.from, range.to))
                .collect(),
            scale: geometry.spectrum_scale(progress) as f32,
        }
    }
}

/// Paint track, progress arc and marks, in that order.
pub fn paint_spectrum(canvas: &mut dyn Canvas, layout: &SpectrumLayout) {
    let scaled = layout.scale != 1.0;
    if scaled {
        canvas.push_transform(Transform2D::scale_about(layout.center, layout.scale));
    }

    let mut stroke = |span: ArcSpan, paint: &Paint| {
        canvas.stroke_arc(
            layout.center,
            layout.radius,
            span.start,
            span.end,
            layout.thickness,
            paint,
        );
    };

    stroke(layout.track, &Paint::Solid(TRACK_COLOR));
    if let Some(progress) = layout.progress {
        stroke(progress, &layout.paint);
    }
    let mark_paint: Paint = MARK_COLOR.into();
    for &mark in &layout.marks {
        stroke(mark, &mark_paint);
    }

    if scaled {
        canvas.pop_transform();
    }
}

/// Needle geometry: a hand through the center plus a round knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorLayout {
    /// Rotation anchor (knob center)
    pub center: Point,
    /// Screen angle the hand points at
    pub angle: f64,
    /// Hand end behind the anchor
    pub tail: Point,
    /// Hand end the needle points with
    pub tip: Point,
    /// Hand width
    pub hand_width: f32,
    /// Knob radius
    pub knob_radius: f32,
    /// Hand and knob color
    pub color: Color,
}

impl IndicatorLayout {
    /// Lay the needle out around `center` for `progress`.
    ///
    /// The hand starts at the bottom edge of the knob, so it extends
    /// `knob_diameter / 2` behind the anchor and the rest of its length ahead.
    #[must_use]
    pub fn compute(geometry: &GaugeGeometry<'_>, progress: f64, center: Point) -> Self {
        let style = geometry.config().indicator();
        let angle = geometry.indicator_screen_angle_degrees(progress);
        // the anchor offset lifts the hand so the knob center sits on the anchor
        let offset = geometry.indicator_anchor_offset();
        let ahead = (style.hand_length / 2.0 - offset) as f32;
        let behind = (style.hand_length / 2.0 + offset) as f32;
        Self {
            center,
            angle,
            tail: center.polar(behind, angle + 180.0),
            tip: center.polar(ahead, angle),
            hand_width: style.hand_width as f32,
            knob_radius: (style.knob_diameter / 2.0) as f32,
            color: style.color,
        }
    }
}

/// Paint the hand, then the knob over it.
pub fn paint_indicator(canvas: &mut dyn Canvas, layout: &IndicatorLayout) {
    canvas.draw_line(layout.tail, layout.tip, layout.color, layout.hand_width);
    canvas.fill_circle(layout.center, layout.knob_radius, layout.color);
}
