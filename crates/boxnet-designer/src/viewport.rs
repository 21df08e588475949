//! Preview viewport.
//!
//! Maps pattern space to screen pixels. Both spaces put the origin at the
//! top-left with y growing downward, so the mapping is a uniform scale
//! followed by a pan:
//!
//! ```text
//! pixel = world * zoom + pan
//! world = (pixel - pan) / zoom
//! ```

use std::fmt;

use boxnet_core::constants::VIEW_PADDING;
use boxnet_layout::{Point, Rect};
use nalgebra::Vector2;

const MIN_ZOOM: f64 = 1e-3;
const MAX_ZOOM: f64 = 1e3;
const ZOOM_STEP: f64 = 1.2;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Pixels per internal unit.
    zoom: f64,
    /// Pixel position of the world origin.
    pan: Vector2<f64>,
    canvas: Vector2<f64>,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan: Vector2::zeros(),
            canvas: Vector2::new(canvas_width, canvas_height),
        }
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas.x, self.canvas.y)
    }

    /// Resizes the canvas. Zoom and pan are kept.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas = Vector2::new(width, height);
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom; values outside the supported range are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    /// Steps the zoom in or out about the canvas centre.
    pub fn step_zoom(&mut self, zoom_in: bool) {
        let factor = if zoom_in { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        let centre = self.canvas / 2.0;
        let anchor = self.pixel_to_world(centre.x, centre.y);
        self.zoom_to_point(&anchor, self.zoom * factor);
    }

    /// Pixel position of the world origin.
    pub fn pan(&self) -> (f64, f64) {
        (self.pan.x, self.pan.y)
    }

    /// Moves the view by a pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan += Vector2::new(dx, dy);
    }

    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::from((Vector2::new(pixel_x, pixel_y) - self.pan) / self.zoom)
    }

    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        self.world_point_to_pixel(&Point::new(world_x, world_y))
    }

    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        let pixel = point.coords * self.zoom + self.pan;
        (pixel.x, pixel.y)
    }

    /// Fits `bounds` into the viewport, centred, with `padding` (a fraction
    /// of the canvas, 0.0 - 0.5) kept free on every side.
    ///
    /// Bounds with no extent in either direction leave the viewport as is;
    /// bounds flat in one direction are fitted along the other.
    pub fn fit_to_bounds(&mut self, bounds: &Rect, padding: f64) {
        let usable = self.canvas * (1.0 - padding * 2.0).max(0.0);
        let fit = |available: f64, extent: f64| (extent > 0.0).then(|| available / extent);

        let new_zoom = match (
            fit(usable.x, bounds.width()),
            fit(usable.y, bounds.height()),
        ) {
            (Some(x), Some(y)) => x.min(y),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => return,
        };
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return;
        }

        self.zoom = new_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.center_on(&bounds.center());
    }

    /// Fits `bounds` with the standard preview padding.
    pub fn fit_to_view(&mut self, bounds: &Rect) {
        self.fit_to_bounds(bounds, VIEW_PADDING);
    }

    /// Changes the zoom while `world_point` stays under the same pixel.
    pub fn zoom_to_point(&mut self, world_point: &Point, new_zoom: f64) {
        if new_zoom <= MIN_ZOOM || new_zoom >= MAX_ZOOM {
            return;
        }

        let (px, py) = self.world_point_to_pixel(world_point);
        self.zoom = new_zoom;
        self.pan = Vector2::new(px, py) - world_point.coords * new_zoom;
    }

    /// Puts `point` at the canvas centre without changing the zoom.
    pub fn center_on(&mut self, point: &Point) {
        self.pan = self.canvas / 2.0 - point.coords * self.zoom;
    }

    pub fn visible_world_rect(&self) -> Rect {
        let top_left = self.pixel_to_world(0.0, 0.0);
        let size = self.canvas / self.zoom;
        Rect::new(top_left.x, top_left.y, size.x, size.y)
    }

    /// Back to 1:1 with the world origin at the top-left pixel.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Vector2::zeros();
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}% at ({:.1}, {:.1}) on {}x{}",
            self.zoom * 100.0,
            self.pan.x,
            self.pan.y,
            self.canvas.x,
            self.canvas.y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
