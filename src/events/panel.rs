use crate::core::{site, Carousel};
use crate::dom::{EventListener, Interval};
use crate::shell::{start_slide_timer, ShellState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Prev/next pagination button.
pub fn wire_step_button(
    button: &web::Element,
    state: &Rc<RefCell<ShellState>>,
    step: fn(&mut Carousel) -> usize,
) -> EventListener {
    let state = state.clone();
    EventListener::new(button, "click", move |_ev: web::Event| {
        let mut s = state.borrow_mut();
        let i = step(&mut s.carousel);
        log::debug!("[carousel] manual step to {}", i);
        s.render_slide();
    })
}

/// Pager dots; one delegated listener on the container jumps to the clicked
/// dot's slide.
pub fn wire_dots(dots: &web::Element, state: &Rc<RefCell<ShellState>>) -> EventListener {
    let state = state.clone();
    EventListener::new(dots, "click", move |ev: web::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let index = target
            .closest("[data-index]")
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("data-index"))
            .and_then(|a| site::dot_index(&a));
        if let Some(index) = index {
            let mut s = state.borrow_mut();
            let i = s.carousel.go_to(index);
            log::debug!("[carousel] jump to {}", i);
            s.render_slide();
        }
    })
}

/// Hovering the detail panel suspends auto-advance; leaving restarts the
/// interval from zero.
pub fn wire_hover(
    panel: &web::HtmlElement,
    event: &'static str,
    hovering: bool,
    state: &Rc<RefCell<ShellState>>,
    timer: &Rc<RefCell<Option<Interval>>>,
) -> EventListener {
    let state = state.clone();
    let timer = timer.clone();
    EventListener::new(panel, event, move |_ev: web::Event| {
        if !state.borrow_mut().carousel.set_hovering(hovering) {
            return;
        }
        if hovering {
            timer.borrow_mut().take();
        } else {
            match start_slide_timer(&state) {
                Ok(t) => *timer.borrow_mut() = Some(t),
                Err(e) => log::error!("slide timer restart failed: {:?}", e),
            }
        }
    })
}

/// Fade the detail panel as it scrolls.
pub fn wire_scroll(panel: &web::HtmlElement, state: &Rc<RefCell<ShellState>>) -> EventListener {
    let state = state.clone();
    let el = panel.clone();
    EventListener::new(panel, "scroll", move |_ev: web::Event| {
        state
            .borrow_mut()
            .set_scroll_offset(el.scroll_top() as f64);
    })
}

/// Hide the slide image when it fails to load; the next slide render shows
/// it again.
pub fn wire_image_fallback(image: &web::Element) -> EventListener {
    let img = image.clone();
    EventListener::new(image, "error", move |_ev: web::Event| {
        if let Some(el) = img.dyn_ref::<web::HtmlElement>() {
            _ = el.style().set_property("display", "none");
        }
        log::warn!("[shell] image failed to load: {:?}", img.get_attribute("src"));
    })
}
