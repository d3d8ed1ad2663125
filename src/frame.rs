use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioEngine;
use crate::constants::WAVE_ADVANCE_DELAY_MS;
use crate::core::{
    BowlGeometry, BubbleField, Ending, GameState, Population, TickContext, WinPolicy,
};
use crate::dom;
use crate::input::MouseState;
use crate::overlay;
use crate::render::{SceneFrame, SceneRenderer};

/// Everything one animation tick needs. Owned by the frame loop closure;
/// the shared cells are also reachable from the event handlers.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub renderer: SceneRenderer,
    pub population: Rc<RefCell<Population>>,
    pub bubbles: BubbleField,
    pub mouse: Rc<RefCell<MouseState>>,
    pub audio: AudioEngine,
    pub game: Rc<RefCell<GameState>>,
    pub policy: WinPolicy,
    pub started_at: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.started_at.elapsed().as_secs_f64();
        // Geometry is recomputed from the live canvas size every tick, so a
        // resize never needs to touch agent state.
        let bowl =
            BowlGeometry::from_viewport(self.canvas.width() as f32, self.canvas.height() as f32);
        let pointer = self.mouse.borrow().pos;

        self.bubbles.tick(bowl.radius);

        let report = self.population.borrow_mut().tick(&TickContext {
            pointer,
            bowl,
            now,
        });

        let already_ended = self.game.borrow().ended.is_some();
        if !already_ended {
            let mut newly_ended = None;
            for _ in 0..report.caught {
                self.audio.play_catch();
                if let Some(ending) = self.game.borrow_mut().on_catch(self.policy) {
                    newly_ended = Some(ending);
                }
            }
            if report.caught > 0 {
                if let Some(doc) = dom::window_document() {
                    overlay::update_hud(&doc, &self.game.borrow());
                }
            }
            if let Some(ending) = newly_ended {
                self.on_ended(ending);
            } else if report.cleared {
                self.on_wave_cleared();
            }
        }

        let population = self.population.borrow();
        self.renderer.draw(
            &SceneFrame {
                bowl,
                pointer,
                time: now,
                fish: population.fish(),
                bubbles: self.bubbles.bubbles(),
            },
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn on_ended(&self, ending: Ending) {
        log::info!("[game] run ended: {:?}", ending);
        self.audio.play_win();
        if let Some(doc) = dom::window_document() {
            overlay::show_win(&doc, ending);
        }
    }

    /// Celebrate the cleared bowl, then advance the wave after a pause.
    /// The population stays empty until the deferred advance fires; the
    /// renderer never advances waves on its own.
    fn on_wave_cleared(&self) {
        log::info!(
            "[game] wave {} cleared",
            self.game.borrow().wave
        );
        self.audio.play_medal();
        self.audio.play_meow();
        if let Some(doc) = dom::window_document() {
            overlay::show_reward(&doc);
        }
        schedule_wave_advance(
            self.population.clone(),
            self.game.clone(),
            self.audio.clone(),
            self.policy,
            self.canvas.clone(),
            self.started_at,
        );
    }
}

fn schedule_wave_advance(
    population: Rc<RefCell<Population>>,
    game: Rc<RefCell<GameState>>,
    audio: AudioEngine,
    policy: WinPolicy,
    canvas: web::HtmlCanvasElement,
    started_at: Instant,
) {
    let closure = Closure::once(move || {
        if let Some(doc) = dom::window_document() {
            overlay::hide_reward(&doc);
        }
        let ending = game.borrow_mut().award_medal(policy);
        {
            let mut pop = population.borrow_mut();
            let unlocks = game.borrow().medals as usize;
            pop.set_unlock_count(unlocks);
            if ending.is_none() {
                let bowl = BowlGeometry::from_viewport(
                    canvas.width() as f32,
                    canvas.height() as f32,
                );
                pop.respawn(bowl.radius, started_at.elapsed().as_secs_f64());
            }
        }
        if let Some(doc) = dom::window_document() {
            overlay::update_hud(&doc, &game.borrow());
        }
        if let Some(ending) = ending {
            log::info!("[game] run ended: {:?}", ending);
            audio.play_win();
            if let Some(doc) = dom::window_document() {
                overlay::show_win(&doc, ending);
            }
        }
    });
    if let Some(w) = web::window() {
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            WAVE_ADVANCE_DELAY_MS,
        ) {
            Ok(_) => closure.forget(),
            Err(e) => log::error!("wave advance timeout error: {:?}", e),
        }
    }
}

/// Drive the frame context from requestAnimationFrame, the closure
/// re-arming itself each tick.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
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
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
