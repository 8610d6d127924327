//! Immutable gauge configuration.
//!
//! A [`GaugeConfig`] is validated once, when it is built or loaded, so the
//! geometry functions that consume it never see an arc smaller than a half
//! circle. Every other field is clamped rather than rejected.
//!
//! # Examples
//!
//! ```
//! use meter_core::{Color, GaugeConfig};
//!
//! let config = GaugeConfig::builder()
//!     .gauge_arc_portion(0.85)
//!     .gauge_arc_thickness(20.0)
//!     .marks([20.0, 40.0, 60.0, 80.0])
//!     .indicator_color(Color::GREEN)
//!     .build()
//!     .expect("valid arc portion");
//! assert_eq!(config.gauge_arc_portion(), 0.85);
//!
//! assert!(GaugeConfig::builder().gauge_arc_portion(0.3).build().is_err());
//! ```

use crate::color::Color;
use crate::error::{check_arc_portion, MeterError, Result};
use crate::gauge::clamp;
use serde::{Deserialize, Serialize};

/// A color pinned to a progress percentage along the arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Stop color
    pub color: Color,
    /// Progress percentage (0-100) where the color sits
    pub percentage: f64,
}

impl ColorStop {
    /// Create a new color stop.
    #[must_use]
    pub const fn new(color: Color, percentage: f64) -> Self {
        Self { color, percentage }
    }
}

/// Needle appearance: a hand of `hand_length` x `hand_width` over a round knob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorStyle {
    /// Hand and knob color
    pub color: Color,
    /// Hand length
    pub hand_length: f64,
    /// Hand width
    pub hand_width: f64,
    /// Knob diameter
    pub knob_diameter: f64,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            hand_length: 120.0,
            hand_width: 2.0,
            knob_diameter: 10.0,
        }
    }
}

impl IndicatorStyle {
    fn sanitized(self) -> Self {
        Self {
            color: self.color,
            hand_length: self.hand_length.max(0.0),
            hand_width: self.hand_width.max(0.0),
            knob_diameter: self.knob_diameter.max(0.0),
        }
    }
}

fn default_color_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(Color::RED, 30.0),
        ColorStop::new(Color::YELLOW, 60.0),
        ColorStop::new(Color::GREEN, 90.0),
    ]
}

/// Validated, immutable gauge configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeConfig {
    gauge_arc_portion: f64,
    gauge_arc_thickness: f64,
    frame_side_length: f64,
    marks: Vec<f64>,
    mark_thickness: f64,
    color_stops: Vec<ColorStop>,
    shaking_point: f64,
    indicator: IndicatorStyle,
    animations_enabled: bool,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            gauge_arc_portion: 0.6,
            gauge_arc_thickness: 30.0,
            frame_side_length: 280.0,
            marks: Vec::new(),
            mark_thickness: 0.001,
            color_stops: default_color_stops(),
            shaking_point: 95.0,
            indicator: IndicatorStyle::default(),
            animations_enabled: true,
        }
    }
}

impl GaugeConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> GaugeConfigBuilder {
        GaugeConfigBuilder::default()
    }

    /// Load and validate a configuration from YAML.
    ///
    /// Missing fields take their default values.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let builder: GaugeConfigBuilder = serde_yaml_ng::from_str(yaml)?;
        log::debug!("loaded gauge config from YAML");
        builder.build()
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Fraction of the full circle the visible arc occupies.
    #[must_use]
    pub fn gauge_arc_portion(&self) -> f64 {
        self.gauge_arc_portion
    }

    /// Stroke width of the arc.
    #[must_use]
    pub fn gauge_arc_thickness(&self) -> f64 {
        self.gauge_arc_thickness
    }

    /// Side of the bounding square of the full circle.
    #[must_use]
    pub fn frame_side_length(&self) -> f64 {
        self.frame_side_length
    }

    /// Tick mark positions on the progress scale.
    #[must_use]
    pub fn marks(&self) -> &[f64] {
        &self.marks
    }

    /// Width of a tick mark as a fraction of the full circle.
    #[must_use]
    pub fn mark_thickness(&self) -> f64 {
        self.mark_thickness
    }

    /// Gradient color stops along the arc.
    #[must_use]
    pub fn color_stops(&self) -> &[ColorStop] {
        &self.color_stops
    }

    /// Progress above which the spectrum starts shaking.
    #[must_use]
    pub fn shaking_point(&self) -> f64 {
        self.shaking_point
    }

    /// Needle appearance.
    #[must_use]
    pub fn indicator(&self) -> &IndicatorStyle {
        &self.indicator
    }

    /// Whether the host should animate value changes.
    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }
}

/// Builder for [`GaugeConfig`]. Also the deserialization shape of a config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaugeConfigBuilder {
    gauge_arc_portion: f64,
    gauge_arc_thickness: f64,
    frame_side_length: f64,
    marks: Vec<f64>,
    mark_thickness: f64,
    color_stops: Vec<ColorStop>,
    shaking_point: f64,
    indicator: IndicatorStyle,
    animations_enabled: bool,
}

impl Default for GaugeConfigBuilder {
    fn default() -> Self {
        let GaugeConfig {
            gauge_arc_portion,
            gauge_arc_thickness,
            frame_side_length,
            marks,
            mark_thickness,
            color_stops,
            shaking_point,
            indicator,
            animations_enabled,
        } = GaugeConfig::default();
        Self {
            gauge_arc_portion,
            gauge_arc_thickness,
            frame_side_length,
            marks,
            mark_thickness,
            color_stops,
            shaking_point,
            indicator,
            animations_enabled,
        }
    }
}

impl GaugeConfigBuilder {
    /// Set the arc portion. Must be at least 0.5 when built.
    #[must_use]
    pub fn gauge_arc_portion(mut self, portion: f64) -> Self {
        self.gauge_arc_portion = portion;
        self
    }

    /// Set the arc stroke width.
    #[must_use]
    pub fn gauge_arc_thickness(mut self, thickness: f64) -> Self {
        self.gauge_arc_thickness = thickness;
        self
    }

    /// Set the bounding square side.
    #[must_use]
    pub fn frame_side_length(mut self, side: f64) -> Self {
        self.frame_side_length = side;
        self
    }

    /// Set the tick mark positions.
    #[must_use]
    pub fn marks(mut self, marks: impl IntoIterator<Item = f64>) -> Self {
        self.marks = marks.into_iter().collect();
        self
    }

    /// Set the tick mark width (fraction of the full circle).
    #[must_use]
    pub fn mark_thickness(mut self, thickness: f64) -> Self {
        self.mark_thickness = thickness;
        self
    }

    /// Replace the gradient color stops.
    #[must_use]
    pub fn color_stops(mut self, stops: impl IntoIterator<Item = ColorStop>) -> Self {
        self.color_stops = stops.into_iter().collect();
        self
    }

    /// Set the shaking threshold.
    #[must_use]
    pub fn shaking_point(mut self, point: f64) -> Self {
        self.shaking_point = point;
        self
    }

    /// Replace the whole indicator style.
    #[must_use]
    pub fn indicator(mut self, indicator: IndicatorStyle) -> Self {
        self.indicator = indicator;
        self
    }

    /// Set the needle color.
    #[must_use]
    pub fn indicator_color(mut self, color: Color) -> Self {
        self.indicator.color = color;
        self
    }

    /// Set the needle hand length.
    #[must_use]
    pub fn indicator_hand_length(mut self, length: f64) -> Self {
        self.indicator.hand_length = length;
        self
    }

    /// Set the needle hand width.
    #[must_use]
    pub fn indicator_hand_width(mut self, width: f64) -> Self {
        self.indicator.hand_width = width;
        self
    }

    /// Set the knob diameter.
    #[must_use]
    pub fn indicator_knob_diameter(mut self, diameter: f64) -> Self {
        self.indicator.knob_diameter = diameter;
        self
    }

    /// Enable or disable animation intents.
    #[must_use]
    pub fn animations_enabled(mut self, enabled: bool) -> Self {
        self.animations_enabled = enabled;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// Fails only when the arc portion is below 0.5 or not a number.
    pub fn build(self) -> Result<GaugeConfig> {
        let gauge_arc_portion = check_arc_portion(self.gauge_arc_portion).map_err(|err| {
            log::warn!("rejecting gauge config: {err}");
            err
        })?;

        let config = GaugeConfig {
            gauge_arc_portion,
            gauge_arc_thickness: self.gauge_arc_thickness.max(0.0),
            frame_side_length: self.frame_side_length.max(0.0),
            marks: self.marks,
            mark_thickness: clamp(self.mark_thickness, 0.0, 1.0),
            color_stops: self.color_stops,
            shaking_point: self.shaking_point,
            indicator: self.indicator.sanitized(),
            animations_enabled: self.animations_enabled,
        };
        log::debug!(
            "built gauge config: portion={} thickness={} side={} marks={} stops={}",
            config.gauge_arc_portion,
            config.gauge_arc_thickness,
            config.frame_side_length,
            config.marks.len(),
            config.color_stops.len()
        );
        Ok(config)
    }
}

impl TryFrom<GaugeConfigBuilder> for GaugeConfig {
    type Error = MeterError;

    fn try_from(builder: GaugeConfigBuilder) -> Result<Self> {
        builder.build()
    }
}
