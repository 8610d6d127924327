//! Gauge geometry: progress values to angles, trims and frame bounds.
//!
//! The visible arc is drawn as a trimmed full circle. A progress value on the
//! 0-100 scale therefore maps onto `[0, gauge_arc_portion]` of the circle,
//! and the circle is rotated so the hidden part sits symmetrically around
//! the bottom.
//!
//! Every function here is pure. Out-of-range progress is clamped, never
//! rejected. The one contract, an arc of at least half a circle, is checked
//! when a [`GaugeConfig`] is built.
//!
//! # Examples
//!
//! ```
//! use meter_core::{GaugeConfig, GaugeGeometry};
//!
//! let config = GaugeConfig::default();
//! let geometry = GaugeGeometry::new(&config);
//!
//! assert_eq!(geometry.normalized_progress(100.0), 0.6);
//! assert_eq!(geometry.normalized_progress(250.0), 0.6);
//! assert!((geometry.needle_angle_degrees(50.0) - 108.0).abs() < 1e-9);
//! ```

use crate::color::Color;
use crate::config::{ColorStop, GaugeConfig, IndicatorStyle};
use crate::error::{check_arc_portion, Result};
use serde::{Deserialize, Serialize};

/// Upper end of the progress scale.
pub const PROGRESS_MAX: f64 = 100.0;

/// Shift applied to every gradient stop location.
///
/// Tuned by eye so stop colors do not bleed past the arc ends; changing it
/// changes the rendered gradient.
pub const GRADIENT_STOP_OFFSET: f64 = 0.03;

/// Spectrum scale while the progress is above the shaking point.
pub const SHAKING_SCALE: f64 = 1.01;

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; the upper bound
/// wins, matching the check order used for every progress value. NaN maps to
/// `min`, so the result is always a number in range.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Clamp a progress value onto the 0-100 scale.
#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    clamp(progress, 0.0, PROGRESS_MAX)
}

/// Start angle of the arc in degrees for a given arc portion.
///
/// The hidden span `360 * (1 - portion)` is split evenly on both sides of the
/// bottom of the circle, so the start is `-(90 - hidden / 2)`.
///
/// # Errors
///
/// [`MeterError::InvalidArcPortion`](crate::MeterError::InvalidArcPortion)
/// when `portion < 0.5` or is not finite.
pub fn arc_start_angle_degrees(portion: f64) -> Result<f64> {
    check_arc_portion(portion).map(start_angle_unchecked)
}

fn start_angle_unchecked(portion: f64) -> f64 {
    let visible = 360.0 * portion;
    let hidden = 360.0 - visible;
    -(90.0 - hidden / 2.0)
}

/// Gradient stops for an angular gradient laid over the arc.
///
/// Each location is `percentage * portion / 100 - 0.03`, clamped to `[0, 1]`.
#[must_use]
pub fn gradient_stops(color_stops: &[ColorStop], portion: f64) -> Vec<GradientStop> {
    color_stops
        .iter()
        .map(|stop| {
            let location = stop.percentage * (portion / PROGRESS_MAX) - GRADIENT_STOP_OFFSET;
            GradientStop {
                color: stop.color,
                location: clamp(location, 0.0, 1.0),
            }
        })
        .collect()
}

/// Tight vertical bound of a partial-circle gauge.
#[must_use]
pub fn frame_height(frame_side_length: f64, portion: f64, thickness: f64) -> f64 {
    FrameMetrics::compute(frame_side_length, portion, thickness).height
}

/// Vertical offset that re-centers the undersized frame in its container.
#[must_use]
pub fn frame_vertical_offset(frame_side_length: f64, portion: f64, thickness: f64) -> f64 {
    FrameMetrics::compute(frame_side_length, portion, thickness).vertical_offset
}

/// A color placed at a location along a gradient path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color
    pub color: Color,
    /// Location in [0, 1]
    pub location: f64,
}

/// Window of a circle to draw, as fractions of its full length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimRange {
    /// Start fraction
    pub from: f64,
    /// End fraction
    pub to: f64,
}

impl TrimRange {
    /// Length of the window.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.to - self.from
    }
}

/// Frame bounds of a partial-circle gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameMetrics {
    /// `|0.5 - portion| / 2 * thickness`
    pub thickness_offset: f64,
    /// Part of the bounding square below the arc, on one side
    pub missing_bottom_half: f64,
    /// Frame height
    pub height: f64,
    /// Downward offset of the frame
    pub vertical_offset: f64,
}

impl FrameMetrics {
    /// Compute the frame bounds.
    #[must_use]
    pub fn compute(frame_side_length: f64, portion: f64, thickness: f64) -> Self {
        let thickness_offset = (0.5 - portion).abs() / 2.0 * thickness;
        // the missing span is split over both sides of the bottom
        let missing_bottom_half = frame_side_length * (1.0 - portion) / 2.0;
        Self {
            thickness_offset,
            missing_bottom_half,
            height: frame_side_length - missing_bottom_half - thickness_offset,
            vertical_offset: missing_bottom_half - thickness_offset,
        }
    }
}

/// Geometry of a configured gauge.
///
/// Borrowing the config keeps this free to construct on every progress change.
#[derive(Debug, Clone, Copy)]
pub struct GaugeGeometry<'a> {
    config: &'a GaugeConfig,
}

impl<'a> GaugeGeometry<'a> {
    /// Bind geometry to a validated configuration.
    #[must_use]
    pub const fn new(config: &'a GaugeConfig) -> Self {
        Self { config }
    }

    /// The configuration this geometry reads from.
    #[must_use]
    pub const fn config(&self) -> &'a GaugeConfig {
        self.config
    }

    fn portion(&self) -> f64 {
        self.config.gauge_arc_portion()
    }

    /// Trim end for the filled part of the arc, in `[0, gauge_arc_portion]`.
    #[must_use]
    pub fn normalized_progress(&self, progress: f64) -> f64 {
        clamp_progress(progress) / PROGRESS_MAX * self.portion()
    }

    /// Needle sweep in degrees across the span the arc occupies.
    #[must_use]
    pub fn needle_angle_degrees(&self, progress: f64) -> f64 {
        let degrees_per_unit = 360.0 * self.portion() / PROGRESS_MAX;
        clamp_progress(progress) * degrees_per_unit
    }

    /// Start angle of the arc. The config guarantees a valid portion.
    #[must_use]
    pub fn arc_start_angle_degrees(&self) -> f64 {
        start_angle_unchecked(self.portion())
    }

    /// Trim window for a tick mark centered on `mark`.
    #[must_use]
    pub fn mark_trim_range(&self, mark: f64) -> TrimRange {
        let center = self.normalized_progress(mark);
        let half = self.config.mark_thickness() / 2.0;
        TrimRange {
            from: clamp(center - half, 0.0, 1.0),
            to: clamp(center + half, 0.0, 1.0),
        }
    }

    /// Trim windows for every configured mark, in order.
    #[must_use]
    pub fn mark_trim_ranges(&self) -> Vec<TrimRange> {
        self.config
            .marks()
            .iter()
            .map(|&mark| self.mark_trim_range(mark))
            .collect()
    }

    /// Gradient stops for the configured color spectrum.
    #[must_use]
    pub fn gradient_stops(&self) -> Vec<GradientStop> {
        gradient_stops(self.config.color_stops(), self.portion())
    }

    /// Frame bounds for the configured size.
    #[must_use]
    pub fn frame_metrics(&self) -> FrameMetrics {
        FrameMetrics::compute(
            self.config.frame_side_length(),
            self.portion(),
            self.config.gauge_arc_thickness(),
        )
    }

    /// Tight frame height.
    #[must_use]
    pub fn frame_height(&self) -> f64 {
        self.frame_metrics().height
    }

    /// Frame vertical offset.
    #[must_use]
    pub fn frame_vertical_offset(&self) -> f64 {
        self.frame_metrics().vertical_offset
    }

    /// Diameter of the stroked circle; the stroke is centered on it.
    #[must_use]
    pub fn track_diameter(&self) -> f64 {
        (self.config.frame_side_length() - self.config.gauge_arc_thickness()).max(0.0)
    }

    /// Whether the spectrum should shake at this progress.
    ///
    /// The progress is clamped first, so with a shaking point of 100 or more
    /// the spectrum never shakes, even for progress values above 100.
    #[must_use]
    pub fn is_shaking(&self, progress: f64) -> bool {
        clamp_progress(progress) > self.config.shaking_point()
    }

    /// Scale applied to the spectrum at this progress.
    #[must_use]
    pub fn spectrum_scale(&self, progress: f64) -> f64 {
        if self.is_shaking(progress) {
            SHAKING_SCALE
        } else {
            1.0
        }
    }

    /// Screen angle (degrees clockwise from +x, y down) of a trim fraction.
    ///
    /// The whole spectrum is turned half a circle after the start rotation,
    /// which is what puts the gap at the bottom.
    #[must_use]
    pub fn screen_angle_degrees(&self, trim: f64) -> f64 {
        self.arc_start_angle_degrees() + 180.0 + trim * 360.0
    }

    /// Needle rotation away from "pointing up".
    #[must_use]
    pub fn indicator_rotation_degrees(&self, progress: f64) -> f64 {
        -90.0 + self.arc_start_angle_degrees() + self.needle_angle_degrees(progress)
    }

    /// Screen angle the needle points at.
    #[must_use]
    pub fn indicator_screen_angle_degrees(&self, progress: f64) -> f64 {
        270.0 + self.indicator_rotation_degrees(progress)
    }

    /// Vertical shift that puts the knob center on the rotation anchor.
    #[must_use]
    pub fn indicator_anchor_offset(&self) -> f64 {
        let IndicatorStyle {
            hand_length,
            knob_diameter,
            ..
        } = *self.config.indicator();
        -(hand_length / 2.0 - knob_diameter / 2.0)
    }
}
