// Host-side tests for score, medal and win-condition bookkeeping.

#![allow(dead_code)]
mod game {
    include!("../src/core/game.rs");
}

use game::*;

#[test]
fn sixty_catches_hit_the_debt_limit() {
    let mut state = GameState::new();
    let policy = WinPolicy::default();
    for i in 1..60 {
        assert_eq!(state.on_catch(policy), None, "ended early at catch {i}");
    }
    assert_eq!(state.on_catch(policy), Some(Ending::DebtLimit));
    assert_eq!(state.score, -600);
    assert_eq!(state.ended, Some(Ending::DebtLimit));
}

#[test]
fn catches_after_the_end_are_ignored() {
    let mut state = GameState::new();
    let policy = WinPolicy::DebtLimit { threshold: -20 };
    state.on_catch(policy);
    assert_eq!(state.on_catch(policy), Some(Ending::DebtLimit));
    // Further catches neither change the score nor re-report the ending.
    assert_eq!(state.on_catch(policy), None);
    assert_eq!(state.score, -20);
}

#[test]
fn medals_cap_but_waves_keep_counting() {
    let mut state = GameState::new();
    // Threshold the run can't reach, so only medals accumulate.
    let policy = WinPolicy::DebtLimit { threshold: -1_000_000 };
    for _ in 0..8 {
        state.award_medal(policy);
    }
    assert_eq!(state.medals, MEDAL_CAP);
    assert_eq!(state.wave, 8);
}

#[test]
fn full_cabinet_ends_the_run_on_the_final_medal() {
    let mut state = GameState::new();
    let policy = WinPolicy::FullCabinet { medals: MEDAL_CAP };
    for _ in 0..4 {
        assert_eq!(state.award_medal(policy), None);
    }
    assert_eq!(state.award_medal(policy), Some(Ending::FullCabinet));
    // A later wave clear changes nothing.
    assert_eq!(state.award_medal(policy), None);
    assert_eq!(state.wave, 5);
}

#[test]
fn master_requires_both_conditions() {
    let policy = WinPolicy::Master {
        threshold: -30,
        medals: 2,
    };
    let mut state = GameState::new();
    state.medals = 2;
    state.score = -20;
    assert_eq!(policy.evaluate(&state), Some(Ending::FullCabinet));

    state.medals = 0;
    state.score = -30;
    assert_eq!(policy.evaluate(&state), Some(Ending::DebtLimit));

    state.medals = 2;
    assert_eq!(policy.evaluate(&state), Some(Ending::Master));

    state.medals = 1;
    state.score = -20;
    assert_eq!(policy.evaluate(&state), None);
}

#[test]
fn reset_returns_to_the_initial_state() {
    let mut state = GameState::new();
    let policy = WinPolicy::DebtLimit { threshold: -10 };
    state.on_catch(policy);
    state.award_medal(policy);
    assert!(state.ended.is_some());

    state.reset();
    assert_eq!(state, GameState::new());
    assert_eq!(state.on_catch(WinPolicy::default()), None);
    assert_eq!(state.score, -10);
}
