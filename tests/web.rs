//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use cursor_trail::{ensure_surface, CursorTrail, Surface, TrailConfig, Viewport};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn config(canvas_id: &'static str) -> TrailConfig {
    TrailConfig {
        canvas_id,
        ..TrailConfig::default()
    }
}

#[wasm_bindgen_test]
fn surface_is_created_once() {
    let document = document();
    let config = config("trail-test-create");
    assert!(document.get_element_by_id(config.canvas_id).is_none());

    let first = ensure_surface(&document, &config).unwrap();
    let second = ensure_surface(&document, &config).unwrap();
    assert!(first.is_same_node(Some(second.as_ref())));
    assert_eq!(first.id(), "trail-test-create");
    assert_eq!(first.style().get_property_value("pointer-events").unwrap(), "none");
    assert_eq!(first.style().get_property_value("position").unwrap(), "fixed");
}

#[wasm_bindgen_test]
fn resize_twice_is_stable() {
    let document = document();
    let mut surface = Surface::attach(&document, &config("trail-test-resize")).unwrap();
    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
        device_pixel_ratio: 3.0,
    };

    let first = surface.resize(viewport).unwrap();
    let dims = (surface.canvas.width(), surface.canvas.height());
    let second = surface.resize(viewport).unwrap();

    assert_eq!(first, second);
    assert_eq!(dims, (1600, 1200));
    assert_eq!((surface.canvas.width(), surface.canvas.height()), dims);
    assert_eq!(surface.canvas.style().get_property_value("width").unwrap(), "800px");
}

#[wasm_bindgen_test]
fn frame_paints_on_real_canvas() {
    let document = document();
    let mut surface = Surface::attach(&document, &config("trail-test-frame")).unwrap();
    surface
        .resize(Viewport {
            width: 320.0,
            height: 240.0,
            device_pixel_ratio: 1.0,
        })
        .unwrap();

    let mut trail = CursorTrail::new(TrailConfig::default());
    trail.on_pointer_move(100.0, 100.0, 0.0);
    trail.on_pointer_move(120.0, 110.0, 20.0);
    trail.frame(&mut surface).unwrap();
    assert_eq!(trail.store.len(), 2);
}
