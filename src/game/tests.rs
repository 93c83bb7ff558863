use crate::game::records::HighScoreStore;
use crate::game::timing::time_for_level;
use crate::game::words::WordBank;
use crate::game::*;

const WORD: &str = "Escritura rápida";

fn make_game() -> (Game, Vec<Effect>) {
    Game::start(WordBank::with_words(vec![WORD.to_string()]))
}

fn validate(text: &str) -> Event {
    Event::Validate { input: text.to_string() }
}

fn tick(text: &str) -> Event {
    Event::Tick { input: text.to_string() }
}

fn run_ticks(game: &mut Game, store: &mut HighScoreStore, n: u32, text: &str) -> Vec<Effect> {
    let mut effects = Vec::new();
    for _ in 0..n {
        effects = game.handle(tick(text), store);
    }
    effects
}

fn session_end(effects: &[Effect]) -> Option<&GameOver> {
    effects.iter().find_map(|e| match e {
        Effect::SessionEnded(over) => Some(over),
        _ => None,
    })
}

#[test]
fn start_enters_level_one_with_timer() {
    let (game, effects) = make_game();
    assert_eq!(game.state(), State::AwaitingInput);
    assert_eq!(game.level(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.word(), WORD);
    assert_eq!(game.time_budget(), 20);
    assert_eq!(game.seconds_remaining(), 20);
    assert_eq!(game.progress(), 1.0);
    assert_eq!(game.feedback(), Feedback::None);
    assert!(game.timer_running());
    assert_eq!(
        effects,
        vec![Effect::RoundStarted { level: 1, time_budget: 20 }, Effect::StartTimer]
    );
}

#[test]
fn wrong_attempts_then_correct_advances() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();

    for attempt in ["Escritura", "", "escritura rápida"] {
        let effects = game.handle(validate(attempt), &mut store);
        assert_eq!(effects, vec![Effect::Incorrect]);
        assert_eq!(game.state(), State::AwaitingInput);
        assert_eq!(game.feedback(), Feedback::Incorrect);
        assert!(game.timer_running());
    }

    run_ticks(&mut game, &mut store, 5, "wrong");
    assert_eq!(game.seconds_remaining(), 15);

    let effects = game.handle(validate(WORD), &mut store);
    assert_eq!(
        effects,
        vec![
            Effect::StopTimer,
            Effect::Correct,
            Effect::RoundStarted { level: 2, time_budget: 20 },
            Effect::StartTimer,
        ]
    );
    assert_eq!(game.level(), 2);
    assert_eq!(game.score(), 10);
    assert_eq!(game.seconds_remaining(), 20);
    assert_eq!(game.feedback(), Feedback::Correct);
    assert_eq!(game.state(), State::AwaitingInput);
}

#[test]
fn validation_trims_whitespace_and_is_case_sensitive() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();

    game.handle(validate("ESCRITURA RÁPIDA"), &mut store);
    assert_eq!(game.score(), 0);

    game.handle(validate("   Escritura rápida \t"), &mut store);
    assert_eq!(game.score(), 10);
}

#[test]
fn ticks_count_down_and_progress_shrinks() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();

    let effects = game.handle(tick(""), &mut store);
    assert!(effects.is_empty());
    assert_eq!(game.seconds_remaining(), 19);
    assert!((game.progress() - 0.95).abs() < 1e-9);

    run_ticks(&mut game, &mut store, 9, "");
    assert_eq!(game.seconds_remaining(), 10);
    assert!((game.progress() - 0.5).abs() < 1e-9);
}

#[test]
fn timeout_with_wrong_input_ends_session() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();
    game.handle(validate(WORD), &mut store);
    game.handle(validate(WORD), &mut store);
    assert_eq!(game.score(), 20);

    let budget = game.time_budget();
    let before = run_ticks(&mut game, &mut store, budget - 1, "Escritura");
    assert!(before.is_empty());
    assert_eq!(game.state(), State::AwaitingInput);

    let effects = game.handle(tick("Escritura"), &mut store);
    assert_eq!(effects[0], Effect::StopTimer);
    let over = session_end(&effects).unwrap();
    assert_eq!(over.reason, FailReason::TimeExpired);
    assert_eq!(over.reason.as_str(), "time expired");
    assert_eq!(over.score, 20);
    assert_eq!(over.level, 3);
    assert!(over.new_high_score);

    assert_eq!(game.state(), State::SessionEnded);
    assert_eq!(game.seconds_remaining(), 0);
    assert_eq!(game.progress(), 0.0);
    assert!(!game.timer_running());
    assert_eq!(game.feedback(), Feedback::Failed(FailReason::TimeExpired));
    assert_eq!(store.load(), 20);
}

#[test]
fn timeout_with_correct_input_succeeds() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();

    run_ticks(&mut game, &mut store, 19, WORD);
    let effects = game.handle(tick(WORD), &mut store);

    assert!(session_end(&effects).is_none());
    assert!(effects.contains(&Effect::Correct));
    assert_eq!(game.state(), State::AwaitingInput);
    assert_eq!(game.level(), 2);
    assert_eq!(game.score(), 10);
    assert_eq!(game.seconds_remaining(), 20);
}

#[test]
fn reset_ends_session_regardless_of_input() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();
    game.handle(validate(WORD), &mut store);
    run_ticks(&mut game, &mut store, 3, WORD);

    let effects = game.handle(Event::Reset, &mut store);
    assert_eq!(effects[0], Effect::StopTimer);
    let over = session_end(&effects).unwrap();
    assert_eq!(over.reason, FailReason::UserReset);
    assert_eq!(over.reason.to_string(), "user reset");
    assert_eq!(over.score, 10);
    assert_eq!(game.state(), State::SessionEnded);
    assert_eq!(game.seconds_remaining(), 17);
}

#[test]
fn reset_right_after_start_records_nothing() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();

    let effects = game.handle(Event::Reset, &mut store);
    let over = session_end(&effects).unwrap();
    assert_eq!(over.score, 0);
    assert!(!over.new_high_score);
    assert_eq!(store.load(), 0);
}

fn finish_with_score(words: u32, store: &mut HighScoreStore) -> GameOver {
    let (mut game, _) = make_game();
    for _ in 0..words {
        game.handle(validate(WORD), store);
    }
    let effects = game.handle(Event::Reset, store);
    session_end(&effects).cloned().unwrap()
}

#[test]
fn lower_final_score_leaves_high_score_untouched() {
    let mut store = HighScoreStore::in_memory();
    store.save(50);

    let over = finish_with_score(3, &mut store);
    assert_eq!(over.score, 30);
    assert!(!over.new_high_score);
    assert_eq!(store.load(), 50);
}

#[test]
fn higher_final_score_replaces_high_score() {
    let mut store = HighScoreStore::in_memory();
    store.save(50);

    let over = finish_with_score(8, &mut store);
    assert_eq!(over.score, 80);
    assert!(over.new_high_score);
    assert_eq!(store.load(), 80);
}

#[test]
fn equal_final_score_is_not_a_new_high_score() {
    let mut store = HighScoreStore::in_memory();
    store.save(50);

    let over = finish_with_score(5, &mut store);
    assert!(!over.new_high_score);
    assert_eq!(store.load(), 50);
}

#[test]
fn budgets_follow_level_timer() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();

    for _ in 0..12 {
        let effects = game.handle(validate(WORD), &mut store);
        let level = game.level();
        assert!(effects.contains(&Effect::RoundStarted {
            level,
            time_budget: time_for_level(level),
        }));
        assert_eq!(game.time_budget(), time_for_level(level));
    }
    assert_eq!(game.level(), 13);
    assert_eq!(game.time_budget(), 16);
    assert_eq!(game.score(), 120);
}

#[test]
fn level_and_score_never_decrease() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();
    let mut last = (game.level(), game.score());

    let script = [WORD, "x", WORD, "", "nope", WORD];
    for text in script {
        game.handle(validate(text), &mut store);
        game.handle(tick(text), &mut store);
        let now = (game.level(), game.score());
        assert!(now.0 >= last.0 && now.1 >= last.1);
        last = now;
    }
}

#[test]
fn wrong_validation_with_one_second_left_is_not_terminal() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();

    run_ticks(&mut game, &mut store, 19, "");
    assert_eq!(game.seconds_remaining(), 1);

    let effects = game.handle(validate("typo"), &mut store);
    assert_eq!(effects, vec![Effect::Incorrect]);
    assert_eq!(game.state(), State::AwaitingInput);
    assert!(game.timer_running());
}

#[test]
fn every_timer_start_is_paired_with_a_stop() {
    let (mut game, mut effects) = make_game();
    let mut store = HighScoreStore::in_memory();

    for _ in 0..3 {
        effects.extend(game.handle(validate(WORD), &mut store));
    }
    effects.extend(run_ticks(&mut game, &mut store, 20, ""));

    let mut running = false;
    for effect in &effects {
        match effect {
            Effect::StartTimer => {
                assert!(!running, "timer started twice");
                running = true;
            }
            Effect::StopTimer => {
                assert!(running, "timer stopped while not running");
                running = false;
            }
            Effect::SessionEnded(_) => assert!(!running, "session ended with a live timer"),
            _ => {}
        }
    }
    assert!(!running);
}

#[test]
#[cfg_attr(debug_assertions, should_panic)]
fn events_after_session_end_are_rejected() {
    let (mut game, _) = make_game();
    let mut store = HighScoreStore::in_memory();
    game.handle(Event::Reset, &mut store);

    let effects = game.handle(validate(WORD), &mut store);
    assert!(effects.is_empty());
    assert_eq!(game.score(), 0);
    assert_eq!(game.state(), State::SessionEnded);
}

#[test]
fn feedback_messages() {
    assert_eq!(Feedback::None.message(), "");
    assert_eq!(Feedback::Correct.message(), "Correct! +10");
    assert_eq!(Feedback::Incorrect.message(), "Wrong, try again.");
    assert_eq!(
        Feedback::Failed(FailReason::TimeExpired).message(),
        "Game over: time expired"
    );
}
