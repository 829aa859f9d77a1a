use egui::{Color32, Pos2};

use crate::surface::{LineCap, Surface};

/// Surface-local coordinate
pub type Point = Pos2;

// Immutable stroke, frozen once committed
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color32,
    thickness: f32,
}

// Mutable stroke while the pointer is down
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    points: Vec<Point>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Point>) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Draw with the thickness and color captured when the stroke was started.
    pub fn render(&self, surface: &mut dyn Surface) {
        render_points(&self.points, self.thickness, self.color, surface);
    }
}

impl StrokeBuilder {
    /// Start a stroke at the pointer-down position.
    pub fn begin(color: Color32, thickness: f32, start: Point) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// True once the pointer has moved after going down.
    pub fn has_segment(&self) -> bool {
        self.points.len() > 1
    }

    /// Freeze into a [`Stroke`]. A press-and-release without movement yields `None`.
    pub fn finish(self) -> Option<Stroke> {
        if !self.has_segment() {
            return None;
        }
        Some(Stroke::new(self.color, self.thickness, self.points))
    }

    /// Draw the live stroke
    pub fn render(&self, surface: &mut dyn Surface) {
        render_points(&self.points, self.thickness, self.color, surface);
    }
}

fn render_points(points: &[Point], thickness: f32, color: Color32, surface: &mut dyn Surface) {
    if points.is_empty() {
        return;
    }
    surface.stroke_path(points, thickness, LineCap::Round, color);
}
