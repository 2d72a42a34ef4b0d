//! Scene registry and per-scene animation loops.
//!
//! Each canvas on the page gets its own contents, camera, and renderer, plus
//! a requestAnimationFrame loop that never terminates. A missing canvas
//! skips that scene entirely.

use crate::core::{
    Camera, SceneContents, SceneKind, ABOUT_CAMERA_Z, HERO_CAMERA_Z, HERO_CANVAS_SIZE,
    PROJECT_CAMERA_Z, PROJECT_CANVAS_HEIGHT, PROJECT_CANVAS_WIDTH, RESIZE_DEBOUNCE_MS,
};
use crate::render::{GpuState, LineVertex};
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SceneHandle {
    pub name: &'static str,
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<Camera>>,
    pub contents: Rc<RefCell<SceneContents>>,
    pub gpu: Rc<RefCell<GpuState>>,
}

pub type SceneRegistry = Rc<RefCell<Vec<SceneHandle>>>;

struct SceneDesc {
    name: &'static str,
    canvas_id: &'static str,
    kind: SceneKind,
    width: u32,
    height: u32,
    camera_z: f32,
}

const SCENE_TABLE: [SceneDesc; 6] = [
    SceneDesc {
        name: "hero",
        canvas_id: "hero-canvas",
        kind: SceneKind::Hero,
        width: HERO_CANVAS_SIZE,
        height: HERO_CANVAS_SIZE,
        camera_z: HERO_CAMERA_Z,
    },
    SceneDesc {
        name: "about",
        canvas_id: "about-canvas",
        kind: SceneKind::Helix,
        width: HERO_CANVAS_SIZE,
        height: HERO_CANVAS_SIZE,
        camera_z: ABOUT_CAMERA_Z,
    },
    SceneDesc {
        name: "project1",
        canvas_id: "project-1-canvas",
        kind: SceneKind::Gallery,
        width: PROJECT_CANVAS_WIDTH,
        height: PROJECT_CANVAS_HEIGHT,
        camera_z: PROJECT_CAMERA_Z,
    },
    SceneDesc {
        name: "project2",
        canvas_id: "project-2-canvas",
        kind: SceneKind::Particles,
        width: PROJECT_CANVAS_WIDTH,
        height: PROJECT_CANVAS_HEIGHT,
        camera_z: PROJECT_CAMERA_Z,
    },
    SceneDesc {
        name: "project3",
        canvas_id: "project-3-canvas",
        kind: SceneKind::Bars,
        width: PROJECT_CANVAS_WIDTH,
        height: PROJECT_CANVAS_HEIGHT,
        camera_z: PROJECT_CAMERA_Z,
    },
    SceneDesc {
        name: "project4",
        canvas_id: "project-4-canvas",
        kind: SceneKind::Torus,
        width: PROJECT_CANVAS_WIDTH,
        height: PROJECT_CANVAS_HEIGHT,
        camera_z: PROJECT_CAMERA_Z,
    },
];

/// Build every scene whose canvas exists and start its loop.
pub async fn init_scenes(document: &web::Document) -> SceneRegistry {
    let registry: SceneRegistry = Rc::new(RefCell::new(Vec::new()));
    let mut rng = StdRng::from_entropy();
    for desc in &SCENE_TABLE {
        match build_scene(document, desc, &mut rng).await {
            Some(handle) => {
                start_scene_loop(&handle);
                registry.borrow_mut().push(handle);
            }
            None => log::warn!("[scenes] '{}' skipped (no #{})", desc.name, desc.canvas_id),
        }
    }
    log::info!("[scenes] {} scene(s) active", registry.borrow().len());
    registry
}

async fn build_scene(
    document: &web::Document,
    desc: &SceneDesc,
    rng: &mut StdRng,
) -> Option<SceneHandle> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(desc.canvas_id)?
        .dyn_into()
        .ok()?;
    canvas.set_width(desc.width);
    canvas.set_height(desc.height);

    let contents = SceneContents::build(desc.kind, rng);
    let gpu = match GpuState::new(&canvas, contents.line_vertex_count()).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("[scenes] '{}' gpu init failed: {e:?}", desc.name);
            return None;
        }
    };
    let camera = Camera::at_z(desc.camera_z, desc.width as f32 / desc.height as f32);
    Some(SceneHandle {
        name: desc.name,
        canvas,
        camera: Rc::new(RefCell::new(camera)),
        contents: Rc::new(RefCell::new(contents)),
        gpu: Rc::new(RefCell::new(gpu)),
    })
}

/// Never-ending RAF loop: step the simulation, tessellate, render once.
fn start_scene_loop(handle: &SceneHandle) {
    let name = handle.name;
    let contents = handle.contents.clone();
    let camera = handle.camera.clone();
    let gpu = handle.gpu.clone();
    let started = Instant::now();
    let mut vertices: Vec<LineVertex> =
        Vec::with_capacity(contents.borrow().line_vertex_count());

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = started.elapsed().as_secs_f32();
        contents.borrow_mut().step(elapsed);

        vertices.clear();
        contents.borrow().for_each_world_segment(|a, b, color| {
            vertices.push(LineVertex {
                pos: a.to_array(),
                color: color.to_array(),
            });
            vertices.push(LineVertex {
                pos: b.to_array(),
                color: color.to_array(),
            });
        });

        let view_proj = camera.borrow().view_proj();
        if let Err(e) = gpu.borrow_mut().render(view_proj, &vertices) {
            log::error!("[scenes] '{name}' render error: {e:?}");
        }

        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Debounced window-resize pass: one renderer/camera resize per scene per
/// quiet interval, not one per resize event.
pub fn wire_resize(registry: SceneRegistry) {
    let apply = {
        let registry = registry.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            for handle in registry.borrow().iter() {
                let rect = handle.canvas.get_bounding_client_rect();
                let w = rect.width().max(1.0) as u32;
                let h = rect.height().max(1.0) as u32;
                handle.canvas.set_width(w);
                handle.canvas.set_height(h);
                handle.camera.borrow_mut().set_aspect(w as f32 / h as f32);
                handle.gpu.borrow_mut().resize_if_needed(w, h);
            }
        }) as Box<dyn FnMut()>))
    };

    let pending: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            if let Some(id) = pending.borrow_mut().take() {
                window.clear_timeout_with_handle(id);
            }
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                apply.as_ref().as_ref().unchecked_ref(),
                RESIZE_DEBOUNCE_MS,
            ) {
                *pending.borrow_mut() = Some(id);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
