//! Integration tests for the meter widget.

use meter_core::{
    Canvas, Color, Constraints, DrawCommand, GaugeConfig, Paint, RecordingCanvas, Rect, Widget,
};
use meter_widgets::{Meter, Text, MARK_COLOR};
use proptest::prelude::*;

fn laid_out(mut meter: Meter) -> Meter {
    let size = meter.measure(Constraints::unbounded());
    meter.layout(Rect::new(0.0, 0.0, size.width, size.height));
    meter
}

fn paint(meter: &Meter) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    meter.paint(&mut canvas);
    canvas
}

#[test]
fn test_half_circle_meter_with_marks() {
    let yaml = r##"
gauge_arc_portion: 0.5
marks: [20, 40, 60, 80]
mark_thickness: 0.01
indicator:
  color: "#34c759"
"##;
    let config = GaugeConfig::from_yaml(yaml).unwrap();
    let meter = laid_out(
        Meter::new(config)
            .progress(100.0)
            .middle_content(Text::new("Hi").font_size(30.0)),
    );

    let canvas = paint(&meter);
    let flat = canvas.flattened();
    let mark_count = flat
        .iter()
        .filter(|(_, cmd)| {
            matches!(cmd, DrawCommand::Arc { paint: Paint::Solid(c), .. } if *c == MARK_COLOR)
        })
        .count();
    assert_eq!(mark_count, 4);

    let needle = flat
        .iter()
        .find_map(|(_, cmd)| match cmd {
            DrawCommand::Line { color, .. } => Some(*color),
            _ => None,
        })
        .unwrap();
    assert_eq!(needle, Color::from_hex("#34c759").unwrap());

    // full progress on a half circle ends pointing right
    assert!((meter.indicator_layout().angle - 360.0).abs() < 1e-9);
}

#[test]
fn test_full_progress_shakes() {
    let meter = laid_out(Meter::default().progress(100.0));
    let animations = meter.animations();
    assert!(animations.scale.is_repeating());
    assert!((meter.spectrum_layout().scale - 1.01).abs() < 1e-6);
}

#[test]
fn test_disabled_animations_still_scale() {
    let config = GaugeConfig::builder()
        .animations_enabled(false)
        .build()
        .unwrap();
    let meter = Meter::new(config).progress(99.0);
    let animations = meter.animations();
    assert!(animations.needle.is_none());
    assert!(animations.spectrum.is_none());
    assert!(animations.scale.is_repeating());
}

#[test]
fn test_paint_replays_on_any_canvas() {
    struct Counter(usize);

    impl Canvas for Counter {
        fn fill_rect(&mut self, _: Rect, _: Color) {
            self.0 += 1;
        }
        fn fill_circle(&mut self, _: meter_core::Point, _: f32, _: Color) {
            self.0 += 1;
        }
        fn draw_line(&mut self, _: meter_core::Point, _: meter_core::Point, _: Color, _: f32) {
            self.0 += 1;
        }
        fn stroke_arc(&mut self, _: meter_core::Point, _: f32, _: f64, _: f64, _: f32, _: &Paint) {
            self.0 += 1;
        }
        fn draw_text(&mut self, _: &str, _: meter_core::Point, _: &meter_core::TextStyle) {
            self.0 += 1;
        }
        fn push_transform(&mut self, _: meter_core::Transform2D) {}
        fn pop_transform(&mut self) {}
    }

    let meter = laid_out(Meter::default().progress(50.0).middle_content(Text::new("50")));
    let mut counter = Counter(0);
    meter.paint(&mut counter);
    // track, progress, hand, knob, text
    assert_eq!(counter.0, 5);
}

proptest! {
    #[test]
    fn prop_progress_always_in_range(start in -500.0f64..500.0, deltas in proptest::collection::vec(-50.0f64..50.0, 0..20)) {
        let mut meter = Meter::default().progress(start);
        for delta in deltas {
            meter.increment(delta);
            prop_assert!((0.0..=100.0).contains(&meter.get_progress()));
        }
    }

    #[test]
    fn prop_non_finite_progress_lands_in_range(
        p in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
        delta in -50.0f64..50.0,
    ) {
        let mut meter = laid_out(Meter::default().progress(p));
        prop_assert!((0.0..=100.0).contains(&meter.get_progress()));
        meter.increment(delta);
        prop_assert!((0.0..=100.0).contains(&meter.get_progress()));
        let needle = meter.indicator_layout();
        prop_assert!(needle.angle.is_finite());
        prop_assert!(needle.tip.x.is_finite() && needle.tip.y.is_finite());
    }

    #[test]
    fn prop_progress_arc_within_track(p in 0.0f64..=100.0, a in 0.5f64..=1.0) {
        let config = GaugeConfig::builder().gauge_arc_portion(a).build().unwrap();
        let meter = laid_out(Meter::new(config).progress(p));
        let layout = meter.spectrum_layout();
        if let Some(progress) = layout.progress {
            prop_assert!((progress.start - layout.track.start).abs() < 1e-9);
            prop_assert!(progress.end <= layout.track.end + 1e-9);
        }
    }
}
