mod common;

use common::draw_line;
use sketchpad::export::render_image;
use sketchpad::{PointerSample, SequenceRandom, Session, SketchConfig, SketchError};

fn small_config() -> SketchConfig {
    SketchConfig {
        canvas_size: [64, 64],
        ..SketchConfig::default()
    }
}

#[test]
fn test_export_is_scaled_png() {
    let mut session = Session::new(small_config());
    draw_line(&mut session, (4.0, 32.0), (60.0, 32.0));

    let bytes = session.export_png().unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (256, 256));

    // Middle of the 3pt stroke, 4x scaled
    assert_eq!(image.get_pixel(128, 128).0, [255, 255, 255, 255]);

    let background = small_config().background_color.to_array();
    assert_eq!(image.get_pixel(128, 40).0, background);
}

#[test]
fn test_export_excludes_preview_and_live_stroke() {
    let mut session = Session::new(small_config());
    draw_line(&mut session, (4.0, 10.0), (60.0, 10.0));
    let committed_only = render_image(session.history(), session.config()).unwrap();

    session.select_brush(5.0);
    session.handle_pointer_samples([
        PointerSample::moved(30.0, 40.0),
        PointerSample::down(30.0, 40.0),
        PointerSample::moved(40.0, 50.0),
    ]);
    assert!(session.is_drawing());

    let bytes = session.export_png().unwrap();
    let exported = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(exported.as_raw(), committed_only.as_raw());
}

#[test]
fn test_export_draws_stickers() {
    let config = small_config();
    let background = config.background_color.to_array();
    let mut session = Session::with_random(config, Box::new(SequenceRandom::new([0.0])));
    session.select_sticker("😱");
    session.handle_pointer_samples([PointerSample::moved(32.0, 32.0), PointerSample::down(32.0, 32.0)]);

    let image = render_image(session.history(), session.config()).unwrap();
    let touched = (80..176)
        .flat_map(|y| (80..176).map(move |x| (x, y)))
        .any(|(x, y)| image.get_pixel(x, y).0 != background);
    assert!(touched, "sticker left no pixels");
}

#[test]
fn test_export_of_zero_sized_canvas_fails() {
    let config = SketchConfig {
        canvas_size: [0, 64],
        ..SketchConfig::default()
    };
    let session = Session::new(config);
    assert!(matches!(
        session.export_png(),
        Err(SketchError::EmptyCanvas { width: 0, height: 64 })
    ));
}

#[test]
fn test_export_of_oversized_canvas_fails() {
    let config = SketchConfig {
        canvas_size: [u32::MAX / 2, 2],
        ..SketchConfig::default()
    };
    let session = Session::new(config);
    assert!(matches!(
        session.export_png(),
        Err(SketchError::CanvasTooLarge { height: 2, scale: 4, .. })
    ));
}
