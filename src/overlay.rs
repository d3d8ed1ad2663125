use web_sys as web;

use crate::core::{Ending, GameState};
use crate::dom;

fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1("hidden");
            // fallback for environments without CSS class
            _ = el.set_attribute("style", "display:none");
        } else {
            _ = cl.remove_1("hidden");
            _ = el.set_attribute("style", "");
        }
    }
}

#[inline]
pub fn hide_start(document: &web::Document) {
    set_hidden(document, "start-overlay", true);
}

#[inline]
pub fn show_reward(document: &web::Document) {
    set_hidden(document, "reward-overlay", false);
}

#[inline]
pub fn hide_reward(document: &web::Document) {
    set_hidden(document, "reward-overlay", true);
}

pub fn show_win(document: &web::Document, ending: Ending) {
    let caption = match ending {
        Ending::DebtLimit => "\"I will never keep goldfish again, Your Owner\"",
        Ending::FullCabinet => "Every medal on the shelf.",
        Ending::Master => "A full cabinet and a ruined owner. Master cat.",
    };
    dom::set_text(document, "win-caption", caption);
    set_hidden(document, "win-overlay", false);
}

#[inline]
pub fn hide_win(document: &web::Document) {
    set_hidden(document, "win-overlay", true);
}

/// Refresh the score and medal readouts.
pub fn update_hud(document: &web::Document, game: &GameState) {
    dom::set_text(
        document,
        "score-text",
        &format!("You has lost $ {}", game.score.abs()),
    );
    let mut medals = String::new();
    for i in 0..crate::core::game::MEDAL_CAP {
        medals.push(if i < game.medals { '\u{1F3C5}' } else { '\u{25CB}' });
    }
    dom::set_text(document, "medal-text", &medals);
}
