use glam::Vec2;
use web_sys as web;

/// Latest pointer sample; each event overwrites the previous one.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub ndc: Vec2,
    pub client_x: f32,
    pub client_y: f32,
}

impl PointerState {
    pub fn record(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.client_x = client_x;
        self.client_y = client_y;
        self.ndc = pointer_ndc(client_x, client_y, width, height);
    }
}

/// Window-relative pixels to normalized device coords: x right, y up, both in [-1, 1].
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Pin the custom cursor element's center to the pointer.
#[inline]
pub fn move_cursor(cursor: &web::HtmlElement, client_x: f32, client_y: f32) {
    let style = cursor.style();
    _ = style.set_property("left", &format!("{}px", client_x));
    _ = style.set_property("top", &format!("{}px", client_y));
}
