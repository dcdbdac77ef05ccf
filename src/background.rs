use crate::canvas::CanvasSurface;
use crate::dom;
use crate::frame::RafScheduler;
use crate::palette::ForegroundCache;
use crate::registry::Registry;
use anyhow::anyhow;
use folio_core::config::ATTRIBUTE_KEYS;
use folio_core::{Animator, ColorResolution, FieldConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static MOUNTS: RefCell<Registry<Mount>> = RefCell::new(Registry::default());
}

struct Mount {
    animator: Animator,
    surface: CanvasSurface,
    scheduler: RafScheduler,
    palette: ForegroundCache,
    window: web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl Mount {
    fn frame(&mut self) {
        if self.animator.config().color_resolution == ColorResolution::PerFrame {
            self.refresh_foreground();
        }
        let Mount {
            animator,
            surface,
            scheduler,
            ..
        } = self;
        animator.on_frame(surface, scheduler);
    }

    fn resize(&mut self) {
        let bounds = dom::viewport_bounds(&self.window);
        dom::size_canvas(&self.canvas, bounds);
        self.animator.resize(bounds);
    }

    fn refresh_foreground(&mut self) {
        let token = dom::foreground_token(&self.window, &self.document);
        let theme = dom::current_theme(&self.document);
        let fg = self.palette.resolve(token.as_deref(), theme);
        self.animator.set_foreground(fg);
    }

    /// Stop the animator and detach from the window. The returned closures
    /// still hold the mount and must be dropped after the borrow ends.
    fn detach(&mut self) -> [Option<Closure<dyn FnMut()>>; 2] {
        self.animator.stop(&mut self.scheduler);
        if let Some(cb) = &self.on_resize {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        [self.scheduler.release(), self.on_resize.take()]
    }
}

/// Wire the frame and resize callbacks and start the animator.
fn attach(mount: &Rc<RefCell<Mount>>) -> anyhow::Result<()> {
    let tick_mount = mount.clone();
    let tick = Closure::wrap(Box::new(move || {
        tick_mount.borrow_mut().frame();
    }) as Box<dyn FnMut()>);

    let resize_mount = mount.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        resize_mount.borrow_mut().resize();
    }) as Box<dyn FnMut()>);

    let mut m = mount.borrow_mut();
    m.window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("{:?}", e))?;
    m.on_resize = Some(on_resize);
    m.scheduler.set_callback(tick);

    let bounds = dom::viewport_bounds(&m.window);
    dom::size_canvas(&m.canvas, bounds);
    m.refresh_foreground();
    let Mount {
        animator,
        scheduler,
        ..
    } = &mut *m;
    animator.start(bounds, scheduler);
    Ok(())
}

fn read_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let mut config = FieldConfig::default();
    for key in ATTRIBUTE_KEYS {
        if let Some(value) = canvas.get_attribute(key) {
            if let Err(e) = config.apply_attribute(key, &value) {
                log::warn!("[background] {}; keeping default", e);
            }
        }
    }
    if let Err(e) = config.validate() {
        log::warn!("[background] {}; using defaults", e);
        return FieldConfig::default();
    }
    config
}

fn try_mount(canvas_id: &str) -> anyhow::Result<Rc<RefCell<Mount>>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;

    let config = read_config(&canvas);
    let theme = dom::current_theme(&document);
    let animator = Animator::new(config, theme.fallback_foreground())?;

    let mount = Rc::new(RefCell::new(Mount {
        animator,
        surface: CanvasSurface::new(ctx),
        scheduler: RafScheduler::new(window.clone()),
        palette: ForegroundCache::default(),
        window,
        document,
        canvas,
        on_resize: None,
    }));
    attach(&mount)?;
    Ok(mount)
}

/// Animated particle background bound to a `<canvas>`.
///
/// A handle whose canvas or 2D context was unavailable is inert: every
/// method is a silent no-op.
#[wasm_bindgen]
#[derive(Clone)]
pub struct ParticleBackground {
    mount: Option<Rc<RefCell<Mount>>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Mount on `canvas_id`, or return the live handle if that canvas is
    /// already mounted.
    pub fn mount(canvas_id: &str) -> ParticleBackground {
        if let Some(mount) = MOUNTS.with(|m| m.borrow().get(canvas_id)) {
            log::debug!("[background] #{} already mounted", canvas_id);
            return Self { mount: Some(mount) };
        }
        match try_mount(canvas_id) {
            Ok(mount) => {
                log::info!("[background] mounted on #{}", canvas_id);
                let mount = MOUNTS.with(|m| m.borrow_mut().insert(canvas_id, mount));
                Self { mount: Some(mount) }
            }
            Err(e) => {
                log::debug!("[background] not mounted: {:?}", e);
                Self { mount: None }
            }
        }
    }

    /// Restart after `stop` with a fresh particle set.
    pub fn start(&self) {
        let Some(mount) = &self.mount else { return };
        if mount.borrow().animator.is_running() {
            return;
        }
        if let Err(e) = attach(mount) {
            log::debug!("[background] restart failed: {:?}", e);
        }
    }

    pub fn stop(&self) {
        let Some(mount) = &self.mount else { return };
        let released = mount.borrow_mut().detach();
        drop(released);
    }

    /// Re-read the theme token now, regardless of colour resolution mode.
    pub fn refresh_theme(&self) {
        if let Some(mount) = &self.mount {
            mount.borrow_mut().refresh_foreground();
        }
    }

    pub fn is_running(&self) -> bool {
        self.mount
            .as_ref()
            .is_some_and(|m| m.borrow().animator.is_running())
    }
}
