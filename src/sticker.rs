use egui::Color32;

use crate::stroke::Point;
use crate::surface::Surface;

/// A glyph stamped onto the canvas.
///
/// The rotation is chosen once, when the sticker is rolled, and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Point,
    icon: String,
    rotation: f32,
}

impl Sticker {
    pub fn new(icon: impl Into<String>, position: Point, rotation: f32) -> Self {
        Self {
            position,
            icon: icon.into(),
            rotation,
        }
    }

    /// Same icon and rotation at another position
    pub fn moved_to(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn render(&self, surface: &mut dyn Surface, font_size: f32) {
        self.render_tinted(surface, font_size, Color32::WHITE);
    }

    pub(crate) fn render_tinted(&self, surface: &mut dyn Surface, font_size: f32, tint: Color32) {
        surface.fill_glyph(&self.icon, self.position, font_size, self.rotation, tint);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerSpec {
    pub icon: String,
    pub name: String,
}

impl StickerSpec {
    fn new(icon: &str, name: &str) -> Self {
        Self {
            icon: icon.to_owned(),
            name: name.to_owned(),
        }
    }
}

/// The stickers offered by the tools panel, in button order.
#[derive(Debug, Clone)]
pub struct StickerPalette {
    stickers: Vec<StickerSpec>,
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self {
            stickers: vec![
                StickerSpec::new("😱", "shock"),
                StickerSpec::new("😰", "worried"),
                StickerSpec::new("😨", "fear"),
            ],
        }
    }
}

impl StickerPalette {
    pub fn stickers(&self) -> &[StickerSpec] {
        &self.stickers
    }

    pub fn contains(&self, icon: &str) -> bool {
        self.stickers.iter().any(|s| s.icon == icon)
    }

    /// Append a user supplied glyph as typed. Only empty input is ignored.
    pub fn add_custom(&mut self, glyph: &str) -> Option<&StickerSpec> {
        if glyph.is_empty() {
            return None;
        }
        let name = format!("custom-{}", self.stickers.len());
        self.stickers.push(StickerSpec::new(glyph, &name));
        self.stickers.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_moved_to_keeps_icon_and_rotation() {
        let sticker = Sticker::new("😱", Pos2::new(1.0, 1.0), 0.5);
        let moved = sticker.moved_to(Pos2::new(9.0, 9.0));
        assert_eq!(moved.icon(), "😱");
        assert_eq!(moved.rotation(), 0.5);
        assert_eq!(moved.position(), Pos2::new(9.0, 9.0));
    }

    #[test]
    fn test_custom_stickers_are_named_by_index() {
        let mut palette = StickerPalette::default();
        let spec = palette.add_custom("🙂").unwrap();
        assert_eq!(spec.icon, "🙂");
        assert_eq!(spec.name, "custom-3");
        assert!(palette.contains("🙂"));
    }

    #[test]
    fn test_only_empty_custom_sticker_is_ignored() {
        let mut palette = StickerPalette::default();
        assert!(palette.add_custom("").is_none());
        assert_eq!(palette.stickers().len(), 3);

        let spec = palette.add_custom(" 🙂 ").unwrap();
        assert_eq!(spec.icon, " 🙂 ");
        assert!(palette.add_custom("   ").is_some());
        assert_eq!(palette.stickers().len(), 5);
    }
}
