//! Text widget, typically placed in the middle of a meter.

use meter_core::{
    widget::LayoutResult, AccessibleRole, Canvas, Color, Constraints, FontWeight, Rect, Size,
    TextStyle, TypeId, Widget,
};
use serde::{Deserialize, Serialize};

/// Text widget for displaying a single line of styled text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    content: String,
    /// Text color
    color: Color,
    /// Font size in pixels
    font_size: f32,
    /// Font weight
    font_weight: FontWeight,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Text {
    /// Create new text widget.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: Color::BLACK,
            font_size: 16.0,
            font_weight: FontWeight::Normal,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set font weight.
    #[must_use]
    pub const fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Estimate text size (no font metrics: ~0.6 em per character).
    fn estimate_size(&self) -> Size {
        let char_width = self.font_size * 0.6;
        let line_height = self.font_size * 1.2;
        Size::new(self.content.chars().count() as f32 * char_width, line_height)
    }
}

impl Widget for Text {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.estimate_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: self.font_size,
            color: self.color,
            weight: self.font_weight,
        };
        canvas.draw_text(
            &self.content,
            meter_core::Point::new(self.bounds.x, self.bounds.y),
            &style,
        );
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Text
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
