//! Meter widget: a partial-circle gauge with a color spectrum and a needle.

use crate::spectrum::{paint_indicator, paint_spectrum, IndicatorLayout, SpectrumLayout};
use meter_core::{
    clamp_progress, widget::LayoutResult, AccessibleRole, Canvas, Constraints, GaugeConfig,
    GaugeGeometry, MeterAnimations, Point, Rect, Size, Transform2D, TypeId, Widget,
};
use std::fmt;

/// Gauge widget showing a progress value between 0 and 100.
///
/// ```
/// use meter_core::GaugeConfig;
/// use meter_widgets::{Meter, Text};
///
/// let config = GaugeConfig::builder()
///     .marks([20.0, 40.0, 60.0, 80.0])
///     .mark_thickness(0.01)
///     .gauge_arc_portion(0.5)
///     .build()
///     .expect("valid arc portion");
/// let meter = Meter::new(config)
///     .progress(100.0)
///     .middle_content(Text::new("Hi"));
/// assert_eq!(meter.get_progress(), 100.0);
/// ```
pub struct Meter {
    /// Validated gauge configuration
    config: GaugeConfig,
    /// Current progress (0-100)
    progress: f64,
    /// Widget drawn in the middle of the gauge; nothing when empty
    middle: Option<Box<dyn Widget>>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Current layout bounds
    bounds: Rect,
}

impl fmt::Debug for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meter")
            .field("config", &self.config)
            .field("progress", &self.progress)
            .field("has_middle_content", &self.middle.is_some())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self::new(GaugeConfig::default())
    }
}

impl Meter {
    /// Create a meter at zero progress.
    #[must_use]
    pub fn new(config: GaugeConfig) -> Self {
        Self {
            config,
            progress: 0.0,
            middle: None,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the progress value (clamped to 0..=100).
    #[must_use]
    pub fn progress(mut self, progress: f64) -> Self {
        self.set_progress(progress);
        self
    }

    /// Place a widget in the middle of the gauge.
    #[must_use]
    pub fn middle_content(mut self, content: impl Widget + 'static) -> Self {
        self.middle = Some(Box::new(content));
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the progress directly (mutable).
    pub fn set_progress(&mut self, progress: f64) {
        let clamped = clamp_progress(progress);
        if clamped != progress {
            log::trace!("meter progress {progress} clamped to {clamped}");
        }
        self.progress = clamped;
    }

    /// Move the progress by `delta`, staying within 0..=100.
    pub fn increment(&mut self, delta: f64) {
        self.set_progress(self.progress + delta);
    }

    /// Get the current progress.
    #[must_use]
    pub fn get_progress(&self) -> f64 {
        self.progress
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Whether a middle widget is set.
    #[must_use]
    pub fn has_middle_content(&self) -> bool {
        self.middle.is_some()
    }

    /// Geometry for the current configuration.
    #[must_use]
    pub fn geometry(&self) -> GaugeGeometry<'_> {
        GaugeGeometry::new(&self.config)
    }

    /// Animation intents for the current progress.
    #[must_use]
    pub fn animations(&self) -> MeterAnimations {
        MeterAnimations::for_progress(&self.geometry(), self.progress)
    }

    /// Center of the gauge circle inside the current bounds, before the
    /// frame offset is applied.
    #[must_use]
    pub fn center(&self) -> Point {
        let height = self.geometry().frame_height() as f32;
        Point::new(self.bounds.center().x, self.bounds.y + height / 2.0)
    }

    /// Spectrum layout for the current state.
    #[must_use]
    pub fn spectrum_layout(&self) -> SpectrumLayout {
        SpectrumLayout::compute(&self.geometry(), self.progress, self.center())
    }

    /// Needle layout for the current state.
    #[must_use]
    pub fn indicator_layout(&self) -> IndicatorLayout {
        IndicatorLayout::compute(&self.geometry(), self.progress, self.center())
    }
}

impl Widget for Meter {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let geometry = self.geometry();
        let preferred = Size::new(
            self.config.frame_side_length() as f32,
            geometry.frame_height().max(0.0) as f32,
        );
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let center = self.center();
        let inner = (self.config.frame_side_length() - 2.0 * self.config.gauge_arc_thickness())
            .max(0.0) as f32;
        if let Some(middle) = self.middle.as_mut() {
            let size = middle.measure(Constraints::loose(Size::new(inner, inner)));
            middle.layout(Rect::centered(center, size));
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let offset = self.geometry().frame_vertical_offset() as f32;
        canvas.push_transform(Transform2D::translate(0.0, offset));

        paint_spectrum(canvas, &self.spectrum_layout());
        paint_indicator(canvas, &self.indicator_layout());
        if let Some(middle) = &self.middle {
            middle.paint(canvas);
        }

        canvas.pop_transform();
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        match &self.middle {
            Some(middle) => std::slice::from_ref(middle),
            None => &[],
        }
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Meter
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
