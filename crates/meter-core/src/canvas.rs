//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, Paint, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Commands issued between `push_transform` and `pop_transform` are
/// collected into a [`DrawCommand::Group`] carrying that transform. Useful
/// for tests and for hosts that replay the commands on their own backend.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    open_groups: Vec<(Transform2D, Vec<DrawCommand>)>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded top-level draw commands.
    ///
    /// Groups that are still open are not included.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of top-level commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.open_groups.len()
    }

    /// Every non-group command with the transform accumulated over its groups.
    #[must_use]
    pub fn flattened(&self) -> Vec<(Transform2D, &DrawCommand)> {
        let mut out = Vec::new();
        flatten_into(&self.commands, Transform2D::identity(), &mut out);
        out
    }

    fn record(&mut self, command: DrawCommand) {
        match self.open_groups.last_mut() {
            Some((_, children)) => children.push(command),
            None => self.commands.push(command),
        }
    }
}

fn flatten_into<'a>(
    commands: &'a [DrawCommand],
    outer: Transform2D,
    out: &mut Vec<(Transform2D, &'a DrawCommand)>,
) {
    for command in commands {
        match command {
            DrawCommand::Group {
                children,
                transform,
            } => flatten_into(children, transform.then(&outer), out),
            leaf => out.push((outer, leaf)),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::Rect {
            bounds: rect,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.record(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.record(DrawCommand::line(from, to, color, width));
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f64,
        end_angle: f64,
        width: f32,
        paint: &Paint,
    ) {
        self.record(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            width,
            paint: paint.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.open_groups.push((transform, Vec::new()));
    }

    fn pop_transform(&mut self) {
        if let Some((transform, children)) = self.open_groups.pop() {
            self.record(DrawCommand::Group {
                children,
                transform,
            });
        }
    }
}
