use crate::constants::*;
use crate::core::{panel_opacity, site, Carousel, Slide, SLIDES, SLIDE_INTERVAL_MS};
use crate::dom::{self, EventListener, Interval};
use crate::events;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the shell writes into on every slide change.
pub struct SlideView {
    title: web::HtmlElement,
    subtitle: web::HtmlElement,
    panel: web::HtmlElement,
    image: web::HtmlImageElement,
    description: web::HtmlElement,
    dots: web::Element,
}

impl SlideView {
    fn find(document: &web::Document) -> anyhow::Result<Self> {
        let image = dom::element_by_id(document, IMAGE_ID)?
            .dyn_into::<web::HtmlImageElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not an img: {:?}", IMAGE_ID, e)))?;
        Ok(Self {
            title: dom::html_element_by_id(document, TITLE_ID)?,
            subtitle: dom::html_element_by_id(document, SUBTITLE_ID)?,
            panel: dom::html_element_by_id(document, DETAIL_PANEL_ID)?,
            image,
            description: dom::html_element_by_id(document, DESCRIPTION_ID)?,
            dots: dom::element_by_id(document, DOTS_ID)?,
        })
    }

    fn show(&self, slide: &Slide, index: usize) {
        self.title.set_text_content(Some(slide.title));
        self.subtitle.set_text_content(Some(slide.subtitle));
        self.description.set_text_content(Some(slide.description));
        // a previous load error may have hidden the image
        _ = self.image.style().remove_property("display");
        self.image.set_alt(&slide.image_alt());
        self.image.set_src(slide.image);
        self.mark_dot(index);
    }

    fn mark_dot(&self, index: usize) {
        let mut dot = self.dots.first_element_child();
        let mut i = 0;
        while let Some(el) = dot {
            _ = el.class_list().toggle_with_force("active", i == index);
            dot = el.next_element_sibling();
            i += 1;
        }
    }

    fn set_opacity(&self, opacity: f64) {
        _ = self
            .panel
            .style()
            .set_property("opacity", &format!("{:.3}", opacity));
    }
}

/// UI state owned by the presentation shell.
pub struct ShellState {
    pub carousel: Carousel,
    pub scroll_offset: f64,
    slides: &'static [Slide],
    view: SlideView,
}

impl ShellState {
    pub fn current(&self) -> &'static Slide {
        &self.slides[self.carousel.index()]
    }

    pub fn render_slide(&self) {
        self.view.show(self.current(), self.carousel.index());
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
        self.view.set_opacity(panel_opacity(self.scroll_offset));
    }
}

/// The mounted shell; dropping it clears the slide timer and detaches every
/// listener.
pub struct Shell {
    state: Rc<RefCell<ShellState>>,
    timer: Rc<RefCell<Option<Interval>>>,
    _listeners: Vec<EventListener>,
}

impl Shell {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        dom::element_by_id(document, NAV_ID)?.set_inner_html(&site::nav_html());
        dom::element_by_id(document, FOOTER_ID)?.set_inner_html(&site::footer_html());

        let view = SlideView::find(document)?;
        let carousel = Carousel::new(SLIDES.len());
        view.dots.set_inner_html(&site::dots_html(carousel.len()));
        let dots = view.dots.clone();
        let state = Rc::new(RefCell::new(ShellState {
            carousel,
            scroll_offset: 0.0,
            slides: SLIDES,
            view,
        }));
        {
            let mut s = state.borrow_mut();
            s.render_slide();
            s.set_scroll_offset(0.0);
        }

        let timer = Rc::new(RefCell::new(Some(start_slide_timer(&state)?)));

        let scroll_el = dom::html_element_by_id(document, DETAIL_SCROLL_ID)?;
        let prev = dom::element_by_id(document, PREV_ID)?;
        let next = dom::element_by_id(document, NEXT_ID)?;
        let image = dom::element_by_id(document, IMAGE_ID)?;

        let listeners = vec![
            events::panel::wire_step_button(&prev, &state, |c| c.prev()),
            events::panel::wire_step_button(&next, &state, |c| c.next()),
            events::panel::wire_dots(&dots, &state),
            events::panel::wire_hover(&scroll_el, "mouseenter", true, &state, &timer),
            events::panel::wire_hover(&scroll_el, "mouseleave", false, &state, &timer),
            events::panel::wire_scroll(&scroll_el, &state),
            events::panel::wire_image_fallback(&image),
        ];
        log::info!("[shell] mounted with {} slides", SLIDES.len());

        Ok(Self {
            state,
            timer,
            _listeners: listeners,
        })
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.timer.borrow_mut().take();
        log::info!(
            "[shell] unmounted at slide {}",
            self.state.borrow().carousel.index()
        );
    }
}

/// Start the auto-advance interval from zero.
pub fn start_slide_timer(state: &Rc<RefCell<ShellState>>) -> anyhow::Result<Interval> {
    let state = state.clone();
    Interval::new(SLIDE_INTERVAL_MS, move || {
        let mut s = state.borrow_mut();
        if let Some(i) = s.carousel.auto_advance() {
            log::debug!("[carousel] auto-advance to {}", i);
            s.render_slide();
        }
    })
}
