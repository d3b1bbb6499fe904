//! Pan/zoom state for the simulated map view.
//!
//! Zoom is clamped to [`MIN_ZOOM`, `MAX_ZOOM`]. Drag distances are divided by
//! the current zoom so the content tracks the pointer. A press/release pair
//! whose pointer travel stays under [`CLICK_TOLERANCE_PX`] counts as a click.

use stargazer_core::GeoPoint;

use crate::projection::ChartPoint;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 5.0;
pub const BUTTON_ZOOM_STEP: f64 = 1.25;
pub const WHEEL_ZOOM_STEP: f64 = 1.1;
pub const CLICK_TOLERANCE_PX: f64 = 5.0;

/// In-progress drag: where the pointer went down and the pan at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    pub start: ChartPoint,
    pub initial_pan: ChartPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: ChartPoint,
    gesture: Option<PanGesture>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            pan: ChartPoint::default(),
            gesture: None,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> ChartPoint {
        self.pan
    }

    pub fn is_panning(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * BUTTON_ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / BUTTON_ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Negative `delta_y` (scroll up) zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        let factor = if delta_y < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset(&mut self) {
        self.zoom = MIN_ZOOM;
        self.pan = ChartPoint::default();
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.gesture = Some(PanGesture {
            start: ChartPoint::new(x, y),
            initial_pan: self.pan,
        });
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(g) = self.gesture else {
            return;
        };
        self.pan = ChartPoint::new(
            g.initial_pan.x + (x - g.start.x) / self.zoom,
            g.initial_pan.y + (y - g.start.y) / self.zoom,
        );
    }

    /// Ends the drag. Returns the release point when the gesture was a click.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<ChartPoint> {
        let g = self.gesture.take()?;
        let dx = x - g.start.x;
        let dy = y - g.start.y;
        if dx * dx + dy * dy < CLICK_TOLERANCE_PX * CLICK_TOLERANCE_PX {
            Some(ChartPoint::new(x, y))
        } else {
            None
        }
    }

    /// Pointer left the view mid-drag: keep the pan reached so far, no click.
    pub fn pointer_leave(&mut self) {
        self.gesture = None;
    }

    /// Maps a point on the (unzoomed) `width` x `height` world map to a
    /// geographic position: top edge is +90°, left edge is -180°.
    pub fn screen_to_geo(x: f64, y: f64, width: f64, height: f64) -> GeoPoint {
        let norm_x = x / width;
        let norm_y = y / height;
        GeoPoint::from_degrees(90.0 - norm_y * 180.0, -180.0 + norm_x * 360.0)
    }
}
