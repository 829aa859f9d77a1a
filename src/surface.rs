use std::sync::Arc;

use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::epaint::text::Galley;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

/// How the ends of a stroked path are finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    /// Ends (and lone points) get a disc of the line width
    Round,
}

/// Immediate-mode 2D drawing surface the sketch renders onto.
///
/// Coordinates are surface-local logical points: (0, 0) is the top-left of the canvas.
pub trait Surface {
    /// Logical size of the surface
    fn size(&self) -> Vec2;

    fn clear_rect(&mut self, rect: Rect, background: Color32);

    fn stroke_path(&mut self, points: &[Pos2], width: f32, cap: LineCap, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw `text` centered on `center`, rotated by `rotation` radians about that center.
    fn fill_glyph(&mut self, text: &str, center: Pos2, font_size: f32, rotation: f32, color: Color32);

    fn clear(&mut self, background: Color32) {
        let rect = Rect::from_min_size(Pos2::ZERO, self.size());
        self.clear_rect(rect, background);
    }
}

/// Shapes for a polyline, offset by `origin`.
pub(crate) fn path_shapes(
    points: &[Pos2],
    width: f32,
    cap: LineCap,
    color: Color32,
    origin: Vec2,
) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(3);
    if points.is_empty() {
        return shapes;
    }

    if points.len() > 1 {
        shapes.push(Shape::line(
            points.iter().map(|p| *p + origin).collect(),
            EguiStroke::new(width, color),
        ));
    }

    if cap == LineCap::Round {
        let radius = width / 2.0;
        let first = points[0] + origin;
        shapes.push(Shape::circle_filled(first, radius, color));
        if let Some(last) = points.last().filter(|_| points.len() > 1) {
            shapes.push(Shape::circle_filled(*last + origin, radius, color));
        }
    }

    shapes
}

/// A text shape whose galley is centered on `center` and rotated about it.
pub(crate) fn glyph_shape(galley: Arc<Galley>, center: Pos2, rotation: f32, color: Color32) -> Shape {
    let half = galley.size() / 2.0;
    let top_left = center - Rot2::from_angle(rotation) * half;
    let mut text = TextShape::new(top_left, galley, color);
    text.angle = rotation;
    Shape::Text(text)
}

/// The on-screen surface: an egui painter plus the canvas' top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn origin(&self) -> Vec2 {
        self.rect.min.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear_rect(&mut self, rect: Rect, background: Color32) {
        let rect = rect.translate(self.origin()).intersect(self.rect);
        self.painter.rect_filled(rect, 0.0, background);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, cap: LineCap, color: Color32) {
        for shape in path_shapes(points, width, cap, color, self.origin()) {
            self.painter.add(shape);
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center + self.origin(), radius, color);
    }

    fn fill_glyph(&mut self, text: &str, center: Pos2, font_size: f32, rotation: f32, color: Color32) {
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            egui::FontId::proportional(font_size),
            color,
        );
        self.painter
            .add(glyph_shape(galley, center + self.origin(), rotation, color));
    }
}
