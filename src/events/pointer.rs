use crate::dom::{self, EventListener};
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer for the animator and drag the custom cursor along.
pub fn wire_pointermove(
    window: &web::Window,
    pointer: Rc<RefCell<PointerState>>,
    cursor: Option<web::HtmlElement>,
) -> EventListener {
    let wnd = window.clone();
    EventListener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let (w, h) = input::viewport_size(&wnd);
        pointer.borrow_mut().record(x, y, w, h);
        if let Some(c) = &cursor {
            input::move_cursor(c, x, y);
        }
    })
}

/// Keep the canvas backing store matched to its CSS size.
pub fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> EventListener {
    let canvas = canvas.clone();
    EventListener::new(window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
    })
}
