//! Offscreen PNG export.
//!
//! The committed drawables are replayed onto a [`ShapeSurface`], which collects egui shapes
//! instead of painting them. Those shapes go through epaint's tessellator at the export scale
//! and the resulting triangles are filled in software, the same way a GPU backend would draw
//! them: vertex color times a sample from the font atlas, blended source-over.

use std::io::Cursor;

use egui::epaint::text::{FontDefinitions, Fonts};
use egui::epaint::{Mesh, TessellationOptions, Tessellator, Vertex};
use egui::{Color32, FontId, Pos2, Rect, Shape, Vec2};
use image::{ImageFormat, RgbaImage};

use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::history::History;
use crate::renderer::Renderer;
use crate::surface::{LineCap, Surface, glyph_shape, path_shapes};

const MAX_TEXTURE_SIDE: usize = 4096;

/// Render the committed drawables at `config.export_scale` and encode them as PNG.
///
/// The tool preview and any stroke still being drawn are never part of an export.
pub fn export_png(history: &History, config: &SketchConfig) -> SketchResult<Vec<u8>> {
    let image = render_image(history, config)?;
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::info!(
        "exported {} drawables as {}x{} png ({} bytes)",
        history.len(),
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Rasterize the committed drawables without encoding
pub fn render_image(history: &History, config: &SketchConfig) -> SketchResult<RgbaImage> {
    let [width, height] = config.export_size()?;
    let mut surface = ShapeSurface::new(config.canvas_vec(), config.export_scale as f32);
    Renderer::new(config).replay(&mut surface, history);
    Ok(surface.rasterize(width, height))
}

/// Surface that records egui shapes for later rasterization
pub struct ShapeSurface {
    size: Vec2,
    pixels_per_point: f32,
    fonts: Fonts,
    shapes: Vec<Shape>,
}

impl ShapeSurface {
    pub fn new(size: Vec2, pixels_per_point: f32) -> Self {
        Self {
            size,
            pixels_per_point,
            fonts: Fonts::new(pixels_per_point, MAX_TEXTURE_SIDE, FontDefinitions::default()),
            shapes: Vec::new(),
        }
    }

    /// Tessellate every recorded shape and fill the triangles into a `width` x `height` image.
    ///
    /// Geometry is scaled by `pixels_per_point`; anything outside the image is clipped.
    pub fn rasterize(self, width: u32, height: u32) -> RgbaImage {
        // Galleys are laid out already, so the atlas will not change any more
        let atlas = Atlas::from_fonts(&self.fonts);
        let mut tessellator = Tessellator::new(
            self.pixels_per_point,
            TessellationOptions::default(),
            atlas.size,
            Vec::new(),
        );

        let mut canvas = Canvas::new(width, height);
        for shape in self.shapes {
            let mut mesh = Mesh::default();
            tessellator.tessellate_shape(shape, &mut mesh);
            canvas.fill_mesh(&mesh, self.pixels_per_point, &atlas);
        }
        canvas.into_image()
    }
}

impl Surface for ShapeSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect, background: Color32) {
        self.shapes.push(Shape::rect_filled(rect, 0.0, background));
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, cap: LineCap, color: Color32) {
        self.shapes
            .extend(path_shapes(points, width, cap, color, Vec2::ZERO));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.shapes.push(Shape::circle_filled(center, radius, color));
    }

    fn fill_glyph(&mut self, text: &str, center: Pos2, font_size: f32, rotation: f32, color: Color32) {
        let galley = self
            .fonts
            .layout_no_wrap(text.to_owned(), FontId::proportional(font_size), color);
        self.shapes.push(glyph_shape(galley, center, rotation, color));
    }
}

/// CPU copy of the font atlas. Texel (0, 0) is white and serves untextured geometry.
struct Atlas {
    size: [usize; 2],
    texels: Vec<Color32>,
}

impl Atlas {
    fn from_fonts(fonts: &Fonts) -> Self {
        let image = fonts.image();
        Self {
            size: image.size,
            texels: image.srgba_pixels(None).collect(),
        }
    }

    fn sample(&self, uv: Pos2) -> [f32; 4] {
        let [w, h] = self.size;
        let x = ((uv.x * w as f32) as usize).min(w.saturating_sub(1));
        let y = ((uv.y * h as f32) as usize).min(h.saturating_sub(1));
        let texel = self.texels.get(y * w + x).copied().unwrap_or(Color32::WHITE);
        premultiplied(texel)
    }
}

/// Premultiplied RGBA accumulation buffer
struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    fn fill_mesh(&mut self, mesh: &Mesh, scale: f32, atlas: &Atlas) {
        for triangle in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]]
                .map(|i| scaled(&mesh.vertices[i as usize], scale));
            self.fill_triangle(a, b, c, atlas);
        }
    }

    fn fill_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex, atlas: &Atlas) {
        let area = edge(a.pos, b.pos, c.pos);
        if area.abs() < f32::EPSILON {
            return;
        }

        let min_x = a.pos.x.min(b.pos.x).min(c.pos.x).floor().max(0.0) as u32;
        let min_y = a.pos.y.min(b.pos.y).min(c.pos.y).floor().max(0.0) as u32;
        let max_x = (a.pos.x.max(b.pos.x).max(c.pos.x).ceil() as u32).min(self.width);
        let max_y = (a.pos.y.max(b.pos.y).max(c.pos.y).ceil() as u32).min(self.height);

        let [ca, cb, cc] = [a.color, b.color, c.color].map(premultiplied);

        for y in min_y..max_y {
            for x in min_x..max_x {
                let p = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let wa = edge(b.pos, c.pos, p) / area;
                let wb = edge(c.pos, a.pos, p) / area;
                let wc = edge(a.pos, b.pos, p) / area;
                if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                    continue;
                }

                let uv = Pos2::new(
                    a.uv.x * wa + b.uv.x * wb + c.uv.x * wc,
                    a.uv.y * wa + b.uv.y * wb + c.uv.y * wc,
                );
                let texel = atlas.sample(uv);
                let mut src = [0.0; 4];
                for i in 0..4 {
                    src[i] = (ca[i] * wa + cb[i] * wb + cc[i] * wc) * texel[i];
                }

                let dst = &mut self.pixels[y as usize * self.width as usize + x as usize];
                let keep = 1.0 - src[3];
                for i in 0..4 {
                    dst[i] = src[i] + dst[i] * keep;
                }
            }
        }
    }

    fn into_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);
        for (pixel, value) in image.pixels_mut().zip(self.pixels) {
            let alpha = value[3].clamp(0.0, 1.0);
            let unmultiply = |c: f32| {
                if alpha > 0.0 {
                    (c / alpha * 255.0).round().clamp(0.0, 255.0) as u8
                } else {
                    0
                }
            };
            pixel.0 = [
                unmultiply(value[0]),
                unmultiply(value[1]),
                unmultiply(value[2]),
                (alpha * 255.0).round() as u8,
            ];
        }
        image
    }
}

fn scaled(vertex: &Vertex, scale: f32) -> Vertex {
    Vertex {
        pos: Pos2::new(vertex.pos.x * scale, vertex.pos.y * scale),
        ..*vertex
    }
}

fn edge(a: Pos2, b: Pos2, p: Pos2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn premultiplied(color: Color32) -> [f32; 4] {
    color.to_array().map(|c| c as f32 / 255.0)
}

/// Hand the encoded export to the user.
///
/// Native builds write `file_name` into the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_export(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    std::fs::write(file_name, bytes)?;
    log::info!("saved export to {file_name}");
    Ok(())
}

/// Hand the encoded export to the user.
///
/// On the web this starts a browser download named `file_name`.
#[cfg(target_arch = "wasm32")]
pub fn save_export(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    use wasm_bindgen::JsCast as _;

    use crate::error::SketchError;

    fn js_err(what: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> SketchError {
        move |err| SketchError::Download(format!("{what}: {err:?}"))
    }

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err("creating blob"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err("creating url"))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Download("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err("creating link"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("element is not an anchor".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err("revoking url"))?;
    log::info!("started download of {file_name}");
    Ok(())
}
