use std::fmt;

pub const POINTS_PER_WORD: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    AwaitingInput,
    RoundTransition,
    SessionEnded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Player submitted the text field.
    Validate { input: String },
    /// One second elapsed. Carries whatever is in the text field at that moment.
    Tick { input: String },
    /// Player gave up on the session.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailReason {
    TimeExpired,
    UserReset,
}

impl FailReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailReason::TimeExpired => "time expired",
            FailReason::UserReset => "user reset",
        }
    }
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub level: u32,
    pub reason: FailReason,
    pub new_high_score: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    StartTimer,
    StopTimer,
    RoundStarted { level: u32, time_budget: u32 },
    Correct,
    Incorrect,
    SessionEnded(GameOver),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Incorrect,
    Failed(FailReason),
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::None => String::new(),
            Feedback::Correct => format!("Correct! +{}", POINTS_PER_WORD),
            Feedback::Incorrect => "Wrong, try again.".to_string(),
            Feedback::Failed(reason) => format!("Game over: {}", reason),
        }
    }
}

/// Transient state of a single word challenge.
#[derive(Clone, Debug)]
pub struct Round {
    pub word: String,
    pub seconds_remaining: u32,
    pub time_budget: u32,
}

impl Round {
    pub fn new(word: String, time_budget: u32) -> Self {
        Self {
            word,
            seconds_remaining: time_budget,
            time_budget,
        }
    }

    pub fn progress(&self) -> f64 {
        if self.time_budget == 0 {
            return 0.0;
        }
        (self.seconds_remaining as f64 / self.time_budget as f64).clamp(0.0, 1.0)
    }

    pub fn matches(&self, typed: &str) -> bool {
        typed.trim() == self.word.trim()
    }
}
