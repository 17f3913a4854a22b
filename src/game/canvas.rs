//! Drawing canvas
//!
//! Immediate-mode 2D primitives with a fill/stroke style and a push/pop
//! style stack. Level rendering only talks to the `Canvas` trait:
//! - `MacroquadCanvas` draws to the window
//! - `RecordingCanvas` (tests) records every call
//!
//! Callers draw in world coordinates. The macroquad canvas carries a
//! translation that the host sets from its camera before each frame.

use macroquad::prelude::*;

/// Fill/stroke state applied to shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_weight: f32,
}

impl Default for Style {
    /// White fill, black 1px stroke
    fn default() -> Self {
        Self {
            fill: Some(WHITE),
            stroke: Some(BLACK),
            stroke_weight: 1.0,
        }
    }
}

/// Current style plus saved copies from `push`
#[derive(Debug, Clone, Default)]
pub struct StyleStack {
    current: Style,
    saved: Vec<Style>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Style {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Style {
        &mut self.current
    }

    /// Number of unmatched pushes
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last pushed style. Unbalanced pops are ignored.
    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(style) => self.current = style,
            None => log::warn!("Canvas pop without matching push; ignored"),
        }
    }
}

/// 2D drawing primitives
pub trait Canvas {
    /// Clear everything to one color
    fn background(&mut self, color: Color);

    /// Save the current style
    fn push(&mut self);
    /// Restore the last saved style
    fn pop(&mut self);

    fn fill(&mut self, color: Color);
    fn stroke(&mut self, color: Color);
    fn no_stroke(&mut self);
    fn stroke_weight(&mut self, weight: f32);

    /// Ellipse centered at (x, y) with full width and height
    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Line segment, drawn with the stroke only
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    /// Closed polygon through `points`
    fn polygon(&mut self, points: &[Vec2]);
    /// Rectangle anchored at its top-left corner
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Style scope: pushes on creation, pops when dropped.
///
/// Style changes made through the guard can never outlive it, even when the
/// drawing code returns early.
pub struct StyleScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<C: Canvas + ?Sized> std::ops::Deref for StyleScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> std::ops::DerefMut for StyleScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for StyleScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.pop();
    }
}

/// Open a style scope on `canvas`
pub fn style_scope<C: Canvas + ?Sized>(canvas: &mut C) -> StyleScope<'_, C> {
    canvas.push();
    StyleScope { canvas }
}

/// Canvas backed by macroquad's shape functions, drawing in screen space
#[derive(Debug, Default)]
pub struct MacroquadCanvas {
    styles: StyleStack,
    /// Added to every coordinate (world to screen)
    offset: Vec2,
}

impl MacroquadCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn to_screen(&self, x: f32, y: f32) -> Vec2 {
        vec2(x, y) + self.offset
    }

    /// Forget any unbalanced pushes; call once per frame before drawing
    pub fn begin_frame(&mut self) {
        if self.styles.depth() > 0 {
            log::warn!("Canvas style stack left at depth {}; resetting", self.styles.depth());
        }
        self.styles = StyleStack::new();
    }
}

impl Canvas for MacroquadCanvas {
    fn background(&mut self, color: Color) {
        clear_background(color);
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
        let c = self.to_screen(x, y);
        // macroquad takes radii, not diameters
        if let Some(fill) = style.fill {
            draw_ellipse(c.x, c.y, w * 0.5, h * 0.5, 0.0, fill);
        }
        if let Some(stroke) = style.stroke {
            draw_ellipse_lines(c.x, c.y, w * 0.5, h * 0.5, 0.0, style.stroke_weight, stroke);
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let style = *self.styles.current();
        let (a, b) = (self.to_screen(x1, y1), self.to_screen(x2, y2));
        if let Some(stroke) = style.stroke {
            draw_line(a.x, a.y, b.x, b.y, style.stroke_weight, stroke);
        }
    }

    fn polygon(&mut self, points: &[Vec2]) {
        if points.len() < 3 {
            return;
        }
        let style = *self.styles.current();
        let points: Vec<Vec2> = points.iter().map(|p| *p + self.offset).collect();

        // Fan triangulation (convex polygons only)
        if let Some(fill) = style.fill {
            for pair in points[1..].windows(2) {
                draw_triangle(points[0], pair[0], pair[1], fill);
            }
        }
        if let Some(stroke) = style.stroke {
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                draw_line(a.x, a.y, b.x, b.y, style.stroke_weight, stroke);
            }
        }
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let style = *self.styles.current();
        let corner = self.to_screen(x, y);
        if let Some(fill) = style.fill {
            draw_rectangle(corner.x, corner.y, w, h, fill);
        }
        if let Some(stroke) = style.stroke {
            draw_rectangle_lines(corner.x, corner.y, w, h, style.stroke_weight, stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::recorder::RecordingCanvas;

    #[test]
    fn test_stack_restores_style() {
        let mut stack = StyleStack::new();
        stack.push();
        stack.current_mut().fill = None;
        stack.current_mut().stroke_weight = 4.0;
        assert_eq!(stack.depth(), 1);

        stack.pop();
        assert_eq!(*stack.current(), Style::default());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut stack = StyleStack::new();
        stack.current_mut().stroke = None;
        stack.pop();
        assert_eq!(stack.current().stroke, None);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_scope_pops_on_drop() {
        let mut canvas = RecordingCanvas::new();
        {
            let mut scope = style_scope(&mut canvas);
            scope.no_stroke();
            scope.fill(RED);
            assert_eq!(scope.depth(), 1);
        }
        assert_eq!(canvas.depth(), 0);
        assert_eq!(*canvas.style(), Style::default());
    }

    #[test]
    fn test_scope_pops_on_early_return() {
        fn draw_maybe(canvas: &mut RecordingCanvas, bail: bool) -> Option<()> {
            let mut scope = style_scope(canvas);
            scope.stroke_weight(9.0);
            if bail {
                return None;
            }
            scope.line(0.0, 0.0, 1.0, 1.0);
            Some(())
        }

        let mut canvas = RecordingCanvas::new();
        assert!(draw_maybe(&mut canvas, true).is_none());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.style().stroke_weight, 1.0);
    }

    #[test]
    fn test_nested_scopes_on_trait_object() {
        let mut canvas = RecordingCanvas::new();
        let dyn_canvas: &mut dyn Canvas = &mut canvas;
        {
            let mut outer = style_scope(dyn_canvas);
            outer.fill(BLUE);
            {
                let mut inner = style_scope(&mut *outer);
                inner.fill(GREEN);
                inner.rect(0.0, 0.0, 1.0, 1.0);
            }
            outer.rect(1.0, 1.0, 1.0, 1.0);
        }

        let fills: Vec<Option<Color>> = canvas.calls().iter().map(|c| c.style().fill).collect();
        assert_eq!(fills, vec![Some(GREEN), Some(BLUE)]);
        assert_eq!(canvas.depth(), 0);
    }
}
