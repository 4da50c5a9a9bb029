#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod shell;

use constants::{CANVAS_ID, CURSOR_ID};

/// Everything mounted on the page. Dropping it tears the page down.
struct Portfolio {
    _shell: shell::Shell,
    _animator: frame::Animator,
    _pagehide: dom::EventListener,
}

thread_local! {
    static APP: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        match mount().await {
            Ok(app) => APP.with(|a| *a.borrow_mut() = Some(app)),
            Err(e) => log::error!("mount error: {:?}", e),
        }
    });
    Ok(())
}

/// Stop the animation loop and slide timer and detach every listener.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|a| a.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("portfolio-web torn down");
    }
}

async fn mount() -> anyhow::Result<Portfolio> {
    let (window, document) = dom::window_document()?;

    let shell = shell::Shell::mount(&document)?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let cursor = dom::html_element_by_id(&document, CURSOR_ID).ok();
    let animator = frame::Animator::start(&window, canvas, cursor).await;

    let pagehide = dom::EventListener::new(&window, "pagehide", |ev: web::Event| {
        // a page kept in the back/forward cache may come back; keep it alive
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|p| p.persisted())
            .unwrap_or(false);
        if !persisted {
            // defer so this listener is not dropped while it runs
            spawn_local(async { teardown() });
        }
    });

    Ok(Portfolio {
        _shell: shell,
        _animator: animator,
        _pagehide: pagehide,
    })
}
