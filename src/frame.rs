use crate::core::{FieldParams, OrbitCamera, OrbitParams, ParticleField};
use crate::dom::{self, EventListener};
use crate::events;
use crate::input::PointerState;
use crate::render::SceneRenderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Frames between timing log lines
const STATS_EVERY_FRAMES: u64 = 600;

pub struct FrameContext {
    pub field: ParticleField,
    pub camera: OrbitCamera,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Option<SceneRenderer>,

    pub last_instant: Instant,
    pub frame_count: u64,
    pub frame_time_accum: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.log_stats(dt_sec);

        self.camera.update(js_sys::Date::now());
        let pointer_ndc = self.pointer.borrow().ndc;
        self.field.step(pointer_ndc);

        if let Some(r) = &mut self.renderer {
            r.resize_if_needed(self.canvas.width(), self.canvas.height());
            match r.render(&self.camera, self.field.positions()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => r.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    fn log_stats(&mut self, dt_sec: f32) {
        self.frame_count += 1;
        self.frame_time_accum += dt_sec;
        if self.frame_count % STATS_EVERY_FRAMES == 0 {
            let avg_ms = self.frame_time_accum * 1000.0 / STATS_EVERY_FRAMES as f32;
            log::debug!(
                "[frame] {} frames, avg {:.2} ms, {} particles",
                self.frame_count,
                avg_ms,
                self.field.len()
            );
            self.frame_time_accum = 0.0;
        }
    }
}

pub async fn init_renderer(
    canvas: &web::HtmlCanvasElement,
    max_instances: usize,
) -> Option<SceneRenderer> {
    match SceneRenderer::new(canvas, max_instances).await {
        Ok(r) => Some(r),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the callback.
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        frame_ctx.borrow_mut().frame();
        raf_id_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));
    AnimationLoop { tick, raf_id }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
    }
}

/// Background animator: particle field, camera, renderer, and the two
/// window listeners that feed it.
pub struct Animator {
    _loop: AnimationLoop,
    _listeners: Vec<EventListener>,
}

impl Animator {
    pub async fn start(
        window: &web::Window,
        canvas: web::HtmlCanvasElement,
        cursor: Option<web::HtmlElement>,
    ) -> Self {
        dom::sync_canvas_backing_size(&canvas);
        let pointer = Rc::new(RefCell::new(PointerState::default()));
        let listeners = vec![
            events::pointer::wire_pointermove(window, pointer.clone(), cursor),
            events::pointer::wire_resize(window, &canvas),
        ];

        let params = FieldParams::default();
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let field = ParticleField::new(params, seed);
        let renderer = init_renderer(&canvas, field.len()).await;
        let camera = OrbitCamera::new(OrbitParams::default(), js_sys::Date::now());
        log::info!(
            "[animator] {} particles, renderer={}",
            field.len(),
            if renderer.is_some() { "webgpu" } else { "none" }
        );

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            field,
            camera,
            pointer,
            canvas,
            renderer,
            last_instant: Instant::now(),
            frame_count: 0,
            frame_time_accum: 0.0,
        }));
        Self {
            _loop: start_loop(frame_ctx),
            _listeners: listeners,
        }
    }
}
