use folio_core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler. The callback is installed once
/// per run and re-requested by the animator after every frame.
pub struct RafScheduler {
    window: web::Window,
    tick: Tick,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            tick: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_callback(&self, callback: Closure<dyn FnMut()>) {
        *self.tick.borrow_mut() = Some(callback);
    }

    /// Hand back the callback so it can be dropped once no frame is pending.
    pub fn release(&self) -> Option<Closure<dyn FnMut()>> {
        self.tick.borrow_mut().take()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Run `frame` on every animation frame for the life of the page.
pub fn run_forever(mut frame: impl FnMut() + 'static) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
