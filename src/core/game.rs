/// Each catch deepens the owner's debt by ten dollars.
pub const CATCH_SCORE_DELTA: i32 = -10;
pub const MEDAL_CAP: u32 = 5;
pub const DEBT_LIMIT: i32 = -600;

/// How a run can end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    /// The owner's losses hit the configured threshold.
    DebtLimit,
    /// Every medal slot filled.
    FullCabinet,
    /// Both at once.
    Master,
}

/// The win condition as a pure function of running state. The observed
/// variants are kept as named policies instead of being merged; the
/// composition root picks one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinPolicy {
    DebtLimit { threshold: i32 },
    FullCabinet { medals: u32 },
    Master { threshold: i32, medals: u32 },
}

impl WinPolicy {
    pub fn evaluate(&self, state: &GameState) -> Option<Ending> {
        match *self {
            WinPolicy::DebtLimit { threshold } => {
                (state.score <= threshold).then_some(Ending::DebtLimit)
            }
            WinPolicy::FullCabinet { medals } => {
                (state.medals >= medals).then_some(Ending::FullCabinet)
            }
            WinPolicy::Master { threshold, medals } => {
                match (state.score <= threshold, state.medals >= medals) {
                    (true, true) => Some(Ending::Master),
                    (true, false) => Some(Ending::DebtLimit),
                    (false, true) => Some(Ending::FullCabinet),
                    (false, false) => None,
                }
            }
        }
    }
}

impl Default for WinPolicy {
    fn default() -> Self {
        WinPolicy::DebtLimit {
            threshold: DEBT_LIMIT,
        }
    }
}

/// Score, medal and wave bookkeeping for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub score: i32,
    pub medals: u32,
    pub wave: u32,
    pub ended: Option<Ending>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Register one caught fish. Returns the ending if this catch ends
    /// the run; catches after the run has ended are ignored.
    pub fn on_catch(&mut self, policy: WinPolicy) -> Option<Ending> {
        if self.ended.is_some() {
            return None;
        }
        self.score += CATCH_SCORE_DELTA;
        self.apply(policy)
    }

    /// Register a cleared wave: one more medal (capped) and the next wave.
    pub fn award_medal(&mut self, policy: WinPolicy) -> Option<Ending> {
        if self.ended.is_some() {
            return None;
        }
        self.medals = (self.medals + 1).min(MEDAL_CAP);
        self.wave += 1;
        self.apply(policy)
    }

    fn apply(&mut self, policy: WinPolicy) -> Option<Ending> {
        self.ended = policy.evaluate(self);
        self.ended
    }
}
