// Hooks the trail up to the page: resize and mousemove listeners plus a
// requestAnimationFrame loop that reschedules itself for the life of the page.

use crate::config::TrailConfig;
use crate::error::TrailError;
use crate::surface::{Surface, Viewport};
use crate::trail::CursorTrail;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Performance, Window};

pub fn attach(config: TrailConfig) -> Result<(), TrailError> {
    let window = web_sys::window().ok_or(TrailError::NoWindow)?;
    let document = window.document().ok_or(TrailError::NoDocument)?;

    let surface = Rc::new(RefCell::new(Surface::attach(&document, &config)?));
    surface.borrow_mut().resize(Viewport::read(&window)?)?;
    let trail = Rc::new(RefCell::new(CursorTrail::new(config)));

    listen_for_resize(&window, surface.clone())?;
    listen_for_pointer(&window, trail.clone())?;
    start_frame_loop(&window, surface, trail)?;

    log::info!("cursor trail attached");
    Ok(())
}

fn listen_for_resize(window: &Window, surface: Rc<RefCell<Surface>>) -> Result<(), TrailError> {
    let window_for_resize = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let resized = Viewport::read(&window_for_resize).and_then(|v| surface.borrow_mut().resize(v));
        if let Err(e) = resized {
            log::warn!("resize failed: {}", e);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn listen_for_pointer(window: &Window, trail: Rc<RefCell<CursorTrail>>) -> Result<(), TrailError> {
    let performance = window.performance();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let now = now_ms(performance.as_ref());
        trail
            .borrow_mut()
            .on_pointer_move(event.client_x() as f64, event.client_y() as f64, now);
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

fn now_ms(performance: Option<&Performance>) -> f64 {
    match performance {
        Some(performance) => performance.now(),
        None => js_sys::Date::now(),
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, TrailError> {
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

// The frame closure has to reschedule itself, so it lives in a shared slot it can
// read back out of. Only one frame is ever pending.
fn start_frame_loop(
    window: &Window,
    surface: Rc<RefCell<Surface>>,
    trail: Rc<RefCell<CursorTrail>>,
) -> Result<(), TrailError> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let window_for_loop = window.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = trail.borrow_mut().frame(&mut *surface.borrow_mut()) {
            log::warn!("frame failed: {}", e);
        }
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = request_frame(&window_for_loop, callback) {
                log::error!("could not schedule next frame: {}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        request_frame(window, callback)?;
    }
    Ok(())
}
