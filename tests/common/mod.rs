#![allow(dead_code)]

use egui::{Color32, Pos2, Rect, Vec2};
use sketchpad::{LineCap, PointerSample, Session, Surface};

/// One primitive call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(Color32),
    Path {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
    },
    Glyph {
        text: String,
        center: Pos2,
        rotation: f32,
    },
}

/// Surface that remembers what was drawn instead of drawing it
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        Vec2::splat(256.0)
    }

    fn clear_rect(&mut self, _rect: Rect, background: Color32) {
        self.calls.push(Call::Clear(background));
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, _cap: LineCap, color: Color32) {
        self.calls.push(Call::Path {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, _color: Color32) {
        self.calls.push(Call::Circle { center, radius });
    }

    fn fill_glyph(&mut self, text: &str, center: Pos2, _font_size: f32, rotation: f32, _color: Color32) {
        self.calls.push(Call::Glyph {
            text: text.to_owned(),
            center,
            rotation,
        });
    }
}

/// Press at `from`, drag through `to`, release
pub fn draw_line(session: &mut Session, from: (f32, f32), to: (f32, f32)) {
    session.handle_pointer_samples([
        PointerSample::moved(from.0, from.1),
        PointerSample::down(from.0, from.1),
        PointerSample::moved(to.0, to.1),
        PointerSample::up(to.0, to.1),
    ]);
}
