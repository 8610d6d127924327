//! Core types for the meter gauge widget.
//!
//! This crate turns a progress value on a 0-100 scale and a [`GaugeConfig`]
//! into the numbers needed to draw a partial-circle gauge:
//! - Gauge math: [`GaugeGeometry`] (trims, angles, gradient stops, frame bounds)
//! - Configuration: [`GaugeConfig`], validated once at build or load time
//! - Animation intents: [`MeterAnimations`], never timers
//! - Drawing: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]

pub mod animation;
mod canvas;
mod color;
pub mod config;
mod constraints;
pub mod draw;
mod error;
pub mod gauge;
mod geometry;
pub mod widget;

pub use animation::{AnimationIntent, AnimationProfile, Easing, MeterAnimations, Repeat};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use config::{ColorStop, GaugeConfig, GaugeConfigBuilder, IndicatorStyle};
pub use constraints::Constraints;
pub use draw::{DrawCommand, Paint, Transform2D};
pub use error::{MeterError, Result, MIN_ARC_PORTION};
pub use gauge::{
    arc_start_angle_degrees, clamp, clamp_progress, frame_height, frame_vertical_offset,
    gradient_stops, FrameMetrics, GaugeGeometry, GradientStop, TrimRange, GRADIENT_STOP_OFFSET,
    PROGRESS_MAX,
};
pub use geometry::{Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn portion() -> impl Strategy<Value = f64> {
        0.5f64..=1.0
    }

    proptest! {
        #[test]
        fn prop_normalized_progress_in_range(p in -1000.0f64..1000.0, a in portion()) {
            let config = GaugeConfig::builder().gauge_arc_portion(a).build().unwrap();
            let n = GaugeGeometry::new(&config).normalized_progress(p);
            prop_assert!((0.0..=a).contains(&n));
        }

        #[test]
        fn prop_normalized_progress_endpoints(a in portion()) {
            let config = GaugeConfig::builder().gauge_arc_portion(a).build().unwrap();
            let g = GaugeGeometry::new(&config);
            prop_assert_eq!(g.normalized_progress(0.0), 0.0);
            prop_assert_eq!(g.normalized_progress(100.0), a);
        }

        #[test]
        fn prop_needle_monotonic(p in 0.0f64..100.0, dp in 0.0f64..100.0, a in portion()) {
            let config = GaugeConfig::builder().gauge_arc_portion(a).build().unwrap();
            let g = GaugeGeometry::new(&config);
            prop_assert!(g.needle_angle_degrees(p) <= g.needle_angle_degrees(p + dp));
        }

        #[test]
        fn prop_arc_start_rejects_below_half(a in -2.0f64..0.5) {
            prop_assert!(arc_start_angle_degrees(a).is_err());
        }

        #[test]
        fn prop_mark_trim_range_ordered(
            mark in prop_oneof![Just(f64::NAN), -500.0f64..500.0],
            thickness in 0.0f64..=1.0,
            a in portion(),
        ) {
            let config = GaugeConfig::builder()
                .gauge_arc_portion(a)
                .mark_thickness(thickness)
                .build()
                .unwrap();
            let r = GaugeGeometry::new(&config).mark_trim_range(mark);
            prop_assert!(r.from <= r.to);
            prop_assert!((0.0..=1.0).contains(&r.from));
            prop_assert!((0.0..=1.0).contains(&r.to));
        }

        #[test]
        fn prop_gradient_stops_sorted_and_bounded(
            mut percentages in proptest::collection::vec(-50.0f64..200.0, 0..8),
            a in portion(),
        ) {
            percentages.sort_by(f64::total_cmp);
            let stops: Vec<ColorStop> = percentages
                .iter()
                .map(|&p| ColorStop::new(Color::RED, p))
                .collect();
            let out = gradient_stops(&stops, a);
            prop_assert_eq!(out.len(), stops.len());
            for pair in out.windows(2) {
                prop_assert!(pair[0].location <= pair[1].location);
            }
            for stop in &out {
                prop_assert!((0.0..=1.0).contains(&stop.location));
            }
        }

        #[test]
        fn prop_geometry_idempotent(p in -1000.0f64..1000.0, a in portion()) {
            let config = GaugeConfig::builder().gauge_arc_portion(a).build().unwrap();
            let g = GaugeGeometry::new(&config);
            prop_assert_eq!(g.normalized_progress(p).to_bits(), g.normalized_progress(p).to_bits());
            prop_assert_eq!(g.needle_angle_degrees(p).to_bits(), g.needle_angle_degrees(p).to_bits());
            prop_assert_eq!(g.mark_trim_range(p), g.mark_trim_range(p));
            prop_assert_eq!(g.frame_metrics(), g.frame_metrics());
        }
    }
}
