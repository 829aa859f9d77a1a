use egui::Color32;

use crate::sticker::Sticker;
use crate::stroke::Point;
use crate::surface::Surface;

const BRUSH_PREVIEW_COLOR: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 128);
const STICKER_GHOST_TINT: Color32 = Color32::from_rgba_premultiplied(160, 160, 160, 160);

/// Hint of what the active tool will do at the pointer. Never committed.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Disc the size of the brush
    Brush { position: Point, thickness: f32 },
    /// The sticker that a click would place
    Sticker(Sticker),
}

impl ToolPreview {
    pub fn position(&self) -> Point {
        match self {
            ToolPreview::Brush { position, .. } => *position,
            ToolPreview::Sticker(sticker) => sticker.position(),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, sticker_font_size: f32) {
        match self {
            ToolPreview::Brush {
                position,
                thickness,
            } => surface.fill_circle(*position, thickness / 2.0, BRUSH_PREVIEW_COLOR),
            ToolPreview::Sticker(sticker) => {
                sticker.render_tinted(surface, sticker_font_size, STICKER_GHOST_TINT)
            }
        }
    }
}
