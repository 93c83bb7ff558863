use crossterm::{
    event::{self, KeyCode},
    execute, terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::audio::{Sfx, SfxPlayer};
use crate::game::records::HighScoreStore;
use crate::game::settings::Settings;
use crate::game::words::WordBank;
use crate::game::{Effect, Event, Game, GameOver, State};
use crate::render;

use super::{drain_pending, menu_nav, play_sfx, read_key, read_key_event, typed_char};

const TICK: Duration = Duration::from_secs(1);
const IDLE_POLL: Duration = Duration::from_millis(250);
const WARNING_SECS: u32 = 3;

/// Repeating one-second timer driven from the event loop.
pub(crate) struct Countdown {
    next_tick: Option<Instant>,
}

impl Countdown {
    pub fn new() -> Self {
        Self { next_tick: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + TICK);
    }

    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_tick {
            Some(next) => next.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    /// Returns true once per elapsed period. A late check fires once and reschedules from `now`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(next) if next <= now => {
                let following = next + TICK;
                self.next_tick = Some(if following <= now { now + TICK } else { following });
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Exit {
    Menu,
    Quit,
}

fn word_bank(settings: &Settings) -> WordBank {
    match &settings.word_list {
        Some(path) => WordBank::from_file(path),
        None => WordBank::new(),
    }
}

struct Session {
    game: Game,
    countdown: Countdown,
    input: String,
    time_budget: u32,
}

impl Session {
    fn start(settings: &Settings) -> Self {
        let (game, effects) = Game::start(word_bank(settings));
        let time_budget = game.time_budget();
        let mut session = Self {
            game,
            countdown: Countdown::new(),
            input: String::new(),
            time_budget,
        };
        session.apply(effects, &None);
        session
    }

    fn dispatch(
        &mut self,
        event: Event,
        store: &mut HighScoreStore,
        sfx: &Option<SfxPlayer>,
    ) -> Option<GameOver> {
        let effects = self.game.handle(event, store);
        self.apply(effects, sfx)
    }

    fn apply(&mut self, effects: Vec<Effect>, sfx: &Option<SfxPlayer>) -> Option<GameOver> {
        let mut over = None;
        for effect in effects {
            match effect {
                Effect::StartTimer => self.countdown.start(Instant::now()),
                Effect::StopTimer => self.countdown.stop(),
                Effect::RoundStarted { level, time_budget } => {
                    log::debug!("Round started. Level: '{}', TimeBudget: '{}s'.", level, time_budget);
                    self.input.clear();
                    if time_budget < self.time_budget {
                        play_sfx(sfx, Sfx::LevelUp);
                    }
                    self.time_budget = time_budget;
                }
                Effect::Correct => play_sfx(sfx, Sfx::Correct),
                Effect::Incorrect => play_sfx(sfx, Sfx::Wrong),
                Effect::SessionEnded(result) => over = Some(result),
            }
        }
        over
    }
}

/// Plays sessions until the player leaves for the menu or quits.
pub(crate) fn run_game(
    stdout: &mut io::Stdout,
    sfx: &Option<SfxPlayer>,
    settings: &Settings,
    store: &mut HighScoreStore,
) -> io::Result<Exit> {
    loop {
        execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
        let over = play_session(stdout, sfx, settings, store)?;

        play_sfx(sfx, if over.new_high_score { Sfx::NewRecord } else { Sfx::GameOver });
        match run_game_over(stdout, sfx, &over)? {
            Some(exit) => return Ok(exit),
            None => continue,
        }
    }
}

fn play_session(
    stdout: &mut io::Stdout,
    sfx: &Option<SfxPlayer>,
    settings: &Settings,
    store: &mut HighScoreStore,
) -> io::Result<GameOver> {
    let mut session = Session::start(settings);

    loop {
        render::draw(stdout, &session.game, &session.input)?;

        if event::poll(session.countdown.poll_timeout(Instant::now()))? {
            let event = match read_key_event()? {
                Some(key) => match key.code {
                    KeyCode::Enter => Some(Event::Validate {
                        input: session.input.clone(),
                    }),
                    KeyCode::Esc => Some(Event::Reset),
                    KeyCode::Backspace => {
                        session.input.pop();
                        None
                    }
                    _ => {
                        if let Some(c) = typed_char(&key) {
                            session.input.push(c);
                            play_sfx(sfx, Sfx::Key);
                        }
                        None
                    }
                },
                None => None,
            };
            if let Some(event) = event {
                if let Some(over) = session.dispatch(event, store, sfx) {
                    return Ok(over);
                }
                debug_assert_eq!(session.game.state(), State::AwaitingInput);
                debug_assert_eq!(session.countdown.is_running(), session.game.timer_running());
            }
        }

        if session.countdown.fire_if_due(Instant::now()) {
            let tick = Event::Tick {
                input: session.input.clone(),
            };
            if let Some(over) = session.dispatch(tick, store, sfx) {
                return Ok(over);
            }
            let left = session.game.seconds_remaining();
            if session.countdown.is_running() && left <= WARNING_SECS {
                play_sfx(sfx, Sfx::Warning(left));
            }
        }
    }
}

const GAME_OVER_ITEMS: usize = 3;
/// Menu, so a key still held from the last round does not restart straight away.
const GAME_OVER_DEFAULT: usize = 1;

/// `None` means retry.
fn game_over_choice(sel: usize) -> Option<Exit> {
    match sel {
        0 => None,
        1 => Some(Exit::Menu),
        _ => Some(Exit::Quit),
    }
}

fn run_game_over(
    stdout: &mut io::Stdout,
    sfx: &Option<SfxPlayer>,
    over: &GameOver,
) -> io::Result<Option<Exit>> {
    drain_pending()?;
    let mut sel = GAME_OVER_DEFAULT;
    loop {
        render::draw_game_over(stdout, over, sel)?;
        match read_key()? {
            Some(code @ (KeyCode::Up | KeyCode::Down)) => {
                sel = menu_nav(sel, GAME_OVER_ITEMS, code);
                play_sfx(sfx, Sfx::MenuMove);
            }
            Some(KeyCode::Enter) => {
                let choice = game_over_choice(sel);
                match choice {
                    None => play_sfx(sfx, Sfx::MenuSelect),
                    Some(Exit::Menu) => play_sfx(sfx, Sfx::MenuBack),
                    Some(Exit::Quit) => {}
                }
                return Ok(choice);
            }
            Some(KeyCode::Esc) => {
                play_sfx(sfx, Sfx::MenuBack);
                return Ok(Some(Exit::Menu));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FailReason;

    #[test]
    fn stopped_countdown_never_fires() {
        let mut countdown = Countdown::new();
        let now = Instant::now();
        assert!(!countdown.is_running());
        assert!(!countdown.fire_if_due(now + Duration::from_secs(5)));
        assert_eq!(countdown.poll_timeout(now), IDLE_POLL);
    }

    #[test]
    fn fires_once_per_second() {
        let mut countdown = Countdown::new();
        let t0 = Instant::now();
        countdown.start(t0);

        assert!(!countdown.fire_if_due(t0 + Duration::from_millis(999)));
        assert!(countdown.fire_if_due(t0 + Duration::from_millis(1000)));
        assert!(!countdown.fire_if_due(t0 + Duration::from_millis(1500)));
        assert!(countdown.fire_if_due(t0 + Duration::from_millis(2001)));
        assert_eq!(
            countdown.poll_timeout(t0 + Duration::from_millis(2500)),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn late_check_does_not_burst() {
        let mut countdown = Countdown::new();
        let t0 = Instant::now();
        countdown.start(t0);

        let late = t0 + Duration::from_secs(5);
        assert!(countdown.fire_if_due(late));
        assert!(!countdown.fire_if_due(late));
        assert!(countdown.fire_if_due(late + TICK));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut countdown = Countdown::new();
        let t0 = Instant::now();
        countdown.start(t0);
        countdown.stop();
        assert!(!countdown.fire_if_due(t0 + Duration::from_secs(2)));
    }

    fn started() -> (Session, HighScoreStore) {
        let session = Session::start(&Settings::default());
        assert!(session.countdown.is_running());
        (session, HighScoreStore::in_memory())
    }

    #[test]
    fn correct_word_restarts_countdown_and_clears_input() {
        let (mut session, mut store) = started();
        session.input = session.game.word().to_string();
        let event = Event::Validate {
            input: session.input.clone(),
        };

        assert_eq!(session.dispatch(event, &mut store, &None), None);
        assert_eq!(session.game.level(), 2);
        assert!(session.countdown.is_running());
        assert!(session.input.is_empty());
        assert!(session.countdown.poll_timeout(Instant::now()) <= TICK);
    }

    #[test]
    fn wrong_word_keeps_input_and_countdown() {
        let (mut session, mut store) = started();
        session.input = "definitely not the word".to_string();
        let event = Event::Validate {
            input: session.input.clone(),
        };

        assert_eq!(session.dispatch(event, &mut store, &None), None);
        assert!(session.countdown.is_running());
        assert_eq!(session.input, "definitely not the word");
    }

    #[test]
    fn reset_stops_countdown_and_ends_session() {
        let (mut session, mut store) = started();
        let over = session.dispatch(Event::Reset, &mut store, &None).unwrap();
        assert_eq!(over.reason, FailReason::UserReset);
        assert_eq!(over.score, 0);
        assert!(!session.countdown.is_running());
        assert!(!session.countdown.fire_if_due(Instant::now() + TICK * 2));
    }

    #[test]
    fn expired_round_stops_countdown() {
        let (mut session, mut store) = started();
        let budget = session.game.time_budget();
        let mut over = None;
        for _ in 0..budget {
            let tick = Event::Tick {
                input: "x".to_string(),
            };
            over = session.dispatch(tick, &mut store, &None);
        }
        assert_eq!(over.map(|o| o.reason), Some(FailReason::TimeExpired));
        assert!(!session.countdown.is_running());
    }

    #[test]
    fn game_over_defaults_to_menu() {
        assert_eq!(game_over_choice(GAME_OVER_DEFAULT), Some(Exit::Menu));
        assert_eq!(game_over_choice(0), None);
        assert_eq!(game_over_choice(GAME_OVER_ITEMS - 1), Some(Exit::Quit));
    }

    #[test]
    fn restart_reschedules_from_now() {
        let mut countdown = Countdown::new();
        let t0 = Instant::now();
        countdown.start(t0);
        let t1 = t0 + Duration::from_millis(700);
        countdown.stop();
        countdown.start(t1);
        assert!(!countdown.fire_if_due(t0 + Duration::from_millis(1000)));
        assert!(countdown.fire_if_due(t1 + TICK));
    }
}
