use egui::Color32;

use crate::config::SketchConfig;
use crate::history::History;
use crate::preview::ToolPreview;
use crate::stroke::StrokeBuilder;
use crate::surface::Surface;

/// Full clear-and-replay renderer. Holds no per-frame state.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    sticker_font_size: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl Renderer {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            background: config.background_color,
            sticker_font_size: config.sticker_font_size,
        }
    }

    /// Clears the surface and replays every committed drawable in commit order.
    ///
    /// The live stroke, when present, is drawn on top and suppresses the preview.
    pub fn redraw(
        &self,
        surface: &mut dyn Surface,
        history: &History,
        live_stroke: Option<&StrokeBuilder>,
        preview: Option<&ToolPreview>,
    ) {
        self.replay(surface, history);

        match (live_stroke, preview) {
            (Some(stroke), _) => stroke.render(surface),
            (None, Some(preview)) => preview.render(surface, self.sticker_font_size),
            (None, None) => {}
        }
    }

    /// Clear and draw the committed drawables only
    pub fn replay(&self, surface: &mut dyn Surface, history: &History) {
        surface.clear(self.background);
        for drawable in history.snapshot() {
            drawable.render(surface, self.sticker_font_size);
        }
    }
}
