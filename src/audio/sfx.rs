#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sfx {
    Key,
    Correct,
    Wrong,
    Warning(u32),
    LevelUp,
    GameOver,
    NewRecord,
    MenuMove,
    MenuSelect,
    MenuBack,
    Toggle,
}

impl Sfx {
    /// `(frequency_hz, duration_ms)` pairs played back to back. A zero frequency is a rest.
    pub(super) fn notes(&self) -> Vec<(f32, u32)> {
        match self {
            Sfx::Key => vec![(1200.0, 8)],
            Sfx::Correct => vec![(523.0, 50), (659.0, 50), (784.0, 70)],
            Sfx::Wrong => vec![(220.0, 60), (0.0, 20), (196.0, 90)],
            Sfx::Warning(n) => {
                let pitch = 880.0 + (3u32.saturating_sub(*n)) as f32 * 110.0;
                vec![(pitch, 40)]
            }
            Sfx::LevelUp => vec![
                (523.0, 50),
                (659.0, 50),
                (784.0, 50),
                (1047.0, 80),
                (1319.0, 100),
            ],
            Sfx::GameOver => vec![(440.0, 150), (370.0, 150), (311.0, 150), (247.0, 300)],
            Sfx::NewRecord => vec![
                (784.0, 80), (988.0, 80), (1175.0, 80),
                (1568.0, 100), (1175.0, 60), (1568.0, 150),
            ],
            Sfx::MenuMove => vec![(660.0, 15)],
            Sfx::MenuSelect => vec![(523.0, 40), (784.0, 40), (1047.0, 60)],
            Sfx::MenuBack => vec![(523.0, 30), (392.0, 50)],
            Sfx::Toggle => vec![(784.0, 20), (988.0, 30)],
        }
    }
}
