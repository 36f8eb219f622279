// Full-viewport overlay canvas: finds or creates it, and keeps its backing store
// matched to the viewport and device pixel ratio.

use crate::config::TrailConfig;
use crate::error::TrailError;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn read(window: &Window) -> Result<Viewport, TrailError> {
        Ok(Viewport {
            width: window.inner_width()?.as_f64().unwrap_or(0.0),
            height: window.inner_height()?.as_f64().unwrap_or(0.0),
            device_pixel_ratio: window.device_pixel_ratio(),
        })
    }
}

// Everything resize derives from a viewport. Pure, so resizing twice with the same
// viewport always lands on the same state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceGeometry {
    pub backing_width: u32,
    pub backing_height: u32,
    pub css_width: f64,
    pub css_height: f64,
    pub scale: f64,
}

impl SurfaceGeometry {
    pub fn from_viewport(viewport: Viewport, max_device_pixel_ratio: f64) -> SurfaceGeometry {
        let ratio = if viewport.device_pixel_ratio > 0.0 {
            viewport.device_pixel_ratio
        } else {
            1.0
        };
        let scale = ratio.min(max_device_pixel_ratio);
        SurfaceGeometry {
            backing_width: (viewport.width * scale) as u32,
            backing_height: (viewport.height * scale) as u32,
            css_width: viewport.width,
            css_height: viewport.height,
            scale,
        }
    }

    // Canvas transform (a, b, c, d, e, f) mapping logical to backing pixels
    pub fn transform(&self) -> [f64; 6] {
        [self.scale, 0.0, 0.0, self.scale, 0.0, 0.0]
    }

    pub fn logical_size(&self) -> (f64, f64) {
        (
            self.backing_width as f64 / self.scale,
            self.backing_height as f64 / self.scale,
        )
    }
}

// Returns the trail canvas, creating and appending it to the body if the page
// doesn't already have one with the configured id
pub fn ensure_surface(document: &Document, config: &TrailConfig) -> Result<HtmlCanvasElement, TrailError> {
    if let Some(existing) = document.get_element_by_id(config.canvas_id) {
        if let Ok(canvas) = existing.dyn_into::<HtmlCanvasElement>() {
            log::info!("reusing canvas #{}", config.canvas_id);
            return Ok(canvas);
        }
        log::warn!("#{} exists but is not a canvas", config.canvas_id);
        return Err(TrailError::NoContext);
    }

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TrailError::Js("created element is not a canvas".to_owned()))?;
    canvas.set_id(config.canvas_id);
    canvas.style().set_css_text(&config.canvas_css());
    document
        .body()
        .ok_or(TrailError::NoBody)?
        .append_child(&canvas)?;
    log::info!("created canvas #{}", config.canvas_id);
    Ok(canvas)
}

pub struct Surface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
    pub geometry: SurfaceGeometry,
    max_device_pixel_ratio: f64,
}

impl Surface {
    pub fn attach(document: &Document, config: &TrailConfig) -> Result<Surface, TrailError> {
        let canvas = ensure_surface(document, config)?;
        let context = canvas
            .get_context("2d")?
            .ok_or(TrailError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| TrailError::NoContext)?;
        Ok(Surface {
            canvas,
            context,
            geometry: SurfaceGeometry::from_viewport(
                Viewport {
                    width: 0.0,
                    height: 0.0,
                    device_pixel_ratio: 1.0,
                },
                config.max_device_pixel_ratio,
            ),
            max_device_pixel_ratio: config.max_device_pixel_ratio,
        })
    }

    pub fn resize(&mut self, viewport: Viewport) -> Result<SurfaceGeometry, TrailError> {
        let geometry = SurfaceGeometry::from_viewport(viewport, self.max_device_pixel_ratio);
        self.canvas.set_width(geometry.backing_width);
        self.canvas.set_height(geometry.backing_height);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", geometry.css_width))?;
        style.set_property("height", &format!("{}px", geometry.css_height))?;
        let [a, b, c, d, e, f] = geometry.transform();
        self.context.set_transform(a, b, c, d, e, f)?;
        self.geometry = geometry;
        log::debug!(
            "surface resized to {}x{} (scale {})",
            geometry.backing_width,
            geometry.backing_height,
            geometry.scale
        );
        Ok(geometry)
    }
}
