use egui::{Color32, Vec2};

use crate::error::{SketchError, SketchResult};

/// Largest side of an exported image, in pixels
pub const MAX_EXPORT_SIDE: u32 = 8192;

/// Tunables for a sketch session.
///
/// Every field has a default, so a partial JSON document only needs to name what it changes.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old config
pub struct SketchConfig {
    pub title: String,
    /// Logical size of the drawing surface in points
    pub canvas_size: [u32; 2],
    /// Integer upscale applied to the canvas when exporting
    pub export_scale: u32,
    pub export_file_name: String,
    /// Thin, medium and thick brush widths
    pub thickness_presets: [f32; 3],
    pub default_thickness: f32,
    pub sticker_font_size: f32,
    pub stroke_color: Color32,
    pub background_color: Color32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Hi".to_owned(),
            canvas_size: [256, 256],
            export_scale: 4,
            export_file_name: "sketchpad.png".to_owned(),
            thickness_presets: [1.0, 3.0, 5.0],
            default_thickness: 3.0,
            sticker_font_size: 24.0,
            stroke_color: Color32::WHITE,
            background_color: Color32::from_rgb(0x24, 0x24, 0x2c),
        }
    }
}

impl SketchConfig {
    /// Parse a JSON document on top of the defaults.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn canvas_vec(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0] as f32, self.canvas_size[1] as f32)
    }

    /// Pixel dimensions of an exported image.
    ///
    /// Fails for a canvas without area and for exports larger than [`MAX_EXPORT_SIDE`].
    pub fn export_size(&self) -> SketchResult<[u32; 2]> {
        let [width, height] = self.canvas_size;
        let scale = self.export_scale;
        if width == 0 || height == 0 || scale == 0 {
            return Err(SketchError::EmptyCanvas { width, height });
        }

        let too_large = || SketchError::CanvasTooLarge { width, height, scale };
        let pixel_width = width.checked_mul(scale).ok_or_else(too_large)?;
        let pixel_height = height.checked_mul(scale).ok_or_else(too_large)?;
        if pixel_width > MAX_EXPORT_SIDE || pixel_height > MAX_EXPORT_SIDE {
            return Err(too_large());
        }
        Ok([pixel_width, pixel_height])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SketchConfig::from_json(r#"{ "title": "Sketch", "export_scale": 2 }"#).unwrap();
        assert_eq!(config.title, "Sketch");
        assert_eq!(config.export_scale, 2);
        assert_eq!(config.canvas_size, [256, 256]);
        assert_eq!(config.export_size().unwrap(), [512, 512]);
    }

    #[test]
    fn test_oversized_export_is_an_error() {
        let config = SketchConfig {
            canvas_size: [u32::MAX / 2, 2],
            ..SketchConfig::default()
        };
        assert!(matches!(
            config.export_size(),
            Err(SketchError::CanvasTooLarge { scale: 4, .. })
        ));

        let config = SketchConfig {
            canvas_size: [2049, 16],
            ..SketchConfig::default()
        };
        assert!(matches!(config.export_size(), Err(SketchError::CanvasTooLarge { .. })));

        let config = SketchConfig {
            canvas_size: [2048, 16],
            ..SketchConfig::default()
        };
        assert_eq!(config.export_size().unwrap(), [8192, 64]);
    }

    #[test]
    fn test_zero_sized_export_is_an_error() {
        let config = SketchConfig {
            export_scale: 0,
            ..SketchConfig::default()
        };
        assert!(matches!(
            config.export_size(),
            Err(SketchError::EmptyCanvas { width: 256, height: 256 })
        ));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SketchConfig::from_json("{ not json").is_err());
    }
}
