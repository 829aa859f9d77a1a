#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod drawable;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod random;
pub mod renderer;
pub mod session;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tool;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use controller::{InputController, InputOutcome, InputState};
pub use drawable::Drawable;
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use history::History;
pub use input::{InputHandler, PointerPhase, PointerSample};
pub use preview::ToolPreview;
pub use random::{OsRandom, RandomSource, SequenceRandom};
pub use renderer::Renderer;
pub use session::Session;
pub use sticker::{Sticker, StickerPalette, StickerSpec};
pub use stroke::{Point, Stroke, StrokeBuilder};
pub use surface::{LineCap, PainterSurface, Surface};
pub use tool::{Tool, ToolState};
