pub mod records;
pub mod settings;
pub mod timing;
pub mod types;
pub mod words;
pub use types::*;

#[cfg(test)]
mod tests;

use crate::game::records::HighScoreStore;
use crate::game::timing::time_for_level;
use crate::game::words::WordBank;

/// One play session: a sequence of rounds that ends on a timed-out wrong answer or a reset.
///
/// All transitions go through [`Game::handle`]. The returned effects tell the host
/// when to start and stop its one-second timer and when the session is over.
pub struct Game {
    bank: WordBank,
    round: Round,
    level: u32,
    score: u32,
    state: State,
    timer_running: bool,
    feedback: Feedback,
}

impl Game {
    pub fn start(bank: WordBank) -> (Self, Vec<Effect>) {
        let mut game = Self {
            bank,
            round: Round::new(String::new(), time_for_level(1)),
            level: 1,
            score: 0,
            state: State::RoundTransition,
            timer_running: false,
            feedback: Feedback::None,
        };
        let mut effects = Vec::new();
        game.begin_round(&mut effects);
        log::info!("Session started. Word: '{}'.", game.round.word);
        (game, effects)
    }

    pub fn handle(&mut self, event: Event, store: &mut HighScoreStore) -> Vec<Effect> {
        if self.state == State::SessionEnded {
            debug_assert!(false, "{:?} received after the session ended", event);
            log::warn!("Ignoring {:?}, the session has already ended.", event);
            return Vec::new();
        }
        match event {
            Event::Validate { input } => self.validate(&input),
            Event::Tick { input } => self.tick(&input, store),
            Event::Reset => self.fail(FailReason::UserReset, store),
        }
    }

    fn validate(&mut self, input: &str) -> Vec<Effect> {
        if self.round.matches(input) {
            self.succeed()
        } else {
            self.feedback = Feedback::Incorrect;
            vec![Effect::Incorrect]
        }
    }

    fn tick(&mut self, input: &str, store: &mut HighScoreStore) -> Vec<Effect> {
        if !self.timer_running {
            log::debug!("Dropping a tick that arrived while the timer was stopped.");
            return Vec::new();
        }
        self.round.seconds_remaining = self.round.seconds_remaining.saturating_sub(1);
        if self.round.seconds_remaining > 0 {
            return Vec::new();
        }
        if self.round.matches(input) {
            self.succeed()
        } else {
            self.fail(FailReason::TimeExpired, store)
        }
    }

    fn stop_timer(&mut self, effects: &mut Vec<Effect>) {
        if self.timer_running {
            self.timer_running = false;
            effects.push(Effect::StopTimer);
        }
    }

    fn succeed(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.stop_timer(&mut effects);
        self.score += POINTS_PER_WORD;
        self.level += 1;
        self.feedback = Feedback::Correct;
        effects.push(Effect::Correct);
        log::info!("Word '{}' typed. Level: '{}', Score: '{}'.", self.round.word, self.level, self.score);
        self.begin_round(&mut effects);
        effects
    }

    fn begin_round(&mut self, effects: &mut Vec<Effect>) {
        self.state = State::RoundTransition;
        let time_budget = time_for_level(self.level);
        self.round = Round::new(self.bank.next_word(), time_budget);
        self.state = State::AwaitingInput;
        self.timer_running = true;
        effects.push(Effect::RoundStarted {
            level: self.level,
            time_budget,
        });
        effects.push(Effect::StartTimer);
    }

    fn fail(&mut self, reason: FailReason, store: &mut HighScoreStore) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.stop_timer(&mut effects);

        let previous_high = store.load();
        let new_high_score = self.score > previous_high;
        if new_high_score {
            store.save(self.score as i64);
            log::info!("New high score: '{}' (previous '{}').", self.score, previous_high);
        }

        let over = GameOver {
            score: self.score,
            level: self.level,
            reason,
            new_high_score,
        };
        log::info!("Session ended. Reason: '{}', Score: '{}', Level: '{}'.", reason, self.score, self.level);
        self.state = State::SessionEnded;
        self.feedback = Feedback::Failed(reason);
        effects.push(Effect::SessionEnded(over));
        effects
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn word(&self) -> &str {
        &self.round.word
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.round.seconds_remaining
    }

    pub fn time_budget(&self) -> u32 {
        self.round.time_budget
    }

    /// Fraction of the round's budget still left, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.round.progress()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }
}
