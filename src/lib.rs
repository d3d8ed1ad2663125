#![cfg(target_arch = "wasm32")]
use crate::core::{BowlGeometry, BubbleField, GameState, Population, WinPolicy};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fishbowl-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store matched to CSS size * devicePixelRatio.
    events::wire_resize(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let audio = audio::AudioEngine::new();
    log::info!(
        "[music] sequencer ready, step = {:.3}s",
        audio::step_secs()
    );

    let seed = js_sys::Date::now() as u64;
    let mut population = Population::new(seed);
    let bowl = BowlGeometry::from_viewport(canvas.width() as f32, canvas.height() as f32);
    population.respawn(bowl.radius, 0.0);
    let population = Rc::new(RefCell::new(population));
    let bubbles = BubbleField::new(seed.wrapping_add(1));

    let game = Rc::new(RefCell::new(GameState::new()));
    let policy = WinPolicy::default();
    overlay::update_hud(&document, &game.borrow());

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_pointer_move(&canvas, mouse.clone());
    events::wire_pointer_down(&canvas, audio.clone());
    let started_at = Instant::now();
    wire_play_again(
        &document,
        population.clone(),
        game.clone(),
        audio.clone(),
        canvas.clone(),
        started_at,
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        renderer: render::SceneRenderer::new(ctx),
        population,
        bubbles,
        mouse,
        audio,
        game,
        policy,
        started_at,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

fn wire_play_again(
    document: &web::Document,
    population: Rc<RefCell<Population>>,
    game: Rc<RefCell<GameState>>,
    audio: audio::AudioEngine,
    canvas: web::HtmlCanvasElement,
    started_at: Instant,
) {
    dom::add_click_listener(document, "play-again", move || {
        game.borrow_mut().reset();
        {
            let mut pop = population.borrow_mut();
            pop.set_unlock_count(0);
            let bowl =
                BowlGeometry::from_viewport(canvas.width() as f32, canvas.height() as f32);
            pop.respawn(bowl.radius, started_at.elapsed().as_secs_f64());
        }
        if let Some(doc) = dom::window_document() {
            overlay::hide_win(&doc);
            overlay::update_hud(&doc, &game.borrow());
        }
        audio.resume();
    });
}
