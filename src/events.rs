use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioEngine;
use crate::dom;
use crate::input::{self, MouseState};
use crate::overlay;

/// Track the pointer in canvas pixels. Movement alone never starts audio;
/// that waits for an explicit press.
pub fn wire_pointer_move(canvas: &web::HtmlCanvasElement, mouse: Rc<RefCell<MouseState>>) {
    let target = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        mouse.borrow_mut().pos = input::pointer_canvas_px(&ev, &target);
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = canvas.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    on_move.forget();
}

/// First press is the user gesture the AudioContext needs: resume it,
/// start the melody, and drop the start overlay. Later presses are no-ops
/// apart from the (idempotent) resume.
pub fn wire_pointer_down(canvas: &web::HtmlCanvasElement, audio: AudioEngine) {
    let on_down = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        audio.resume();
        if let Some(doc) = dom::window_document() {
            overlay::hide_start(&doc);
        }
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref());
    on_down.forget();
}

/// Keep the canvas backing store matched to its CSS size and DPR.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let target = canvas.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&target);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
