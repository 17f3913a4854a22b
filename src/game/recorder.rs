//! Recording canvas for tests
//!
//! Keeps every primitive in call order together with the style that was
//! active when it was issued.

use macroquad::prelude::{Color, Vec2};
use super::canvas::{Canvas, Style, StyleStack};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background(Color),
    Ellipse { x: f32, y: f32, w: f32, h: f32, style: Style },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, style: Style },
    Polygon { points: Vec<Vec2>, style: Style },
    Rect { x: f32, y: f32, w: f32, h: f32, style: Style },
}

impl DrawCall {
    /// Style in effect for the call (backgrounds ignore style)
    pub fn style(&self) -> Style {
        match self {
            DrawCall::Background(_) => Style::default(),
            DrawCall::Ellipse { style, .. }
            | DrawCall::Line { style, .. }
            | DrawCall::Polygon { style, .. }
            | DrawCall::Rect { style, .. } => *style,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    styles: StyleStack,
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn style(&self) -> &Style {
        self.styles.current()
    }

    pub fn depth(&self) -> usize {
        self.styles.depth()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn ellipses(&self) -> Vec<&DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Ellipse { .. })).collect()
    }

    pub fn lines(&self) -> Vec<&DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. })).collect()
    }

    pub fn polygons(&self) -> Vec<&DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Polygon { .. })).collect()
    }

    pub fn rects(&self) -> Vec<&DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Rect { .. })).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn background(&mut self, color: Color) {
        self.calls.push(DrawCall::Background(color));
    }

    fn push(&mut self) {
        self.styles.push();
    }

    fn pop(&mut self) {
        self.styles.pop();
    }

    fn fill(&mut self, color: Color) {
        self.styles.current_mut().fill = Some(color);
    }

    fn stroke(&mut self, color: Color) {
        self.styles.current_mut().stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.styles.current_mut().stroke = None;
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.styles.current_mut().stroke_weight = weight;
    }

    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let style = *self.styles.current();
        self.calls.push(DrawCall::Ellipse { x, y, w, h, style });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let style = *self.styles.current();
        self.calls.push(DrawCall::Line { x1, y1, x2, y2, style });
    }

    fn polygon(&mut self, points: &[Vec2]) {
        let style = *self.styles.current();
        self.calls.push(DrawCall::Polygon { points: points.to_vec(), style });
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let style = *self.styles.current();
        self.calls.push(DrawCall::Rect { x, y, w, h, style });
    }
}
