use crossterm::{
    cursor, execute,
    style::{Color, Stylize},
};
use std::io;

use crate::game::{Feedback, Game};

use super::{centered, centered_colored, display_width, draw_panel, draw_title, progress_bar, PANEL_W};

const BAR_W: usize = PANEL_W - 8;
const INPUT_W: usize = PANEL_W - 8;

fn header(game: &Game) -> String {
    let left = format!("LEVEL {:<3}", game.level());
    let right = format!("SCORE {:>5}", game.score());
    let gap = PANEL_W.saturating_sub(display_width(&left) + display_width(&right) + 4);
    format!("  {}{:gap$}{}  ", left, "", right)
}

/// Shows the tail of `input` when it is wider than the box.
fn input_box(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let visible: String = if chars.len() >= INPUT_W {
        chars[chars.len() + 1 - INPUT_W..].iter().collect()
    } else {
        input.to_string()
    };
    let text = format!("{}_", visible);
    let pad = INPUT_W.saturating_sub(display_width(&text));
    format!("    {}{:pad$}    ", text.as_str().with(Color::White).bold(), "")
}

pub fn draw(stdout: &mut io::Stdout, game: &Game, input: &str) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout)?;

    let seconds = game.seconds_remaining();
    let timer_color = if seconds <= 3 { Color::Red } else { Color::White };
    let timer = format!("{:>4}", format!("{}s", seconds));
    let bar = format!("    {}{}", progress_bar(game.progress(), BAR_W), timer.as_str().with(timer_color));

    let feedback = match game.feedback() {
        Feedback::None => centered("", PANEL_W),
        Feedback::Correct => centered_colored(&Feedback::Correct.message(), Color::Green, PANEL_W),
        other => centered_colored(&other.message(), Color::Red, PANEL_W),
    };

    let content: Vec<Option<String>> = vec![
        Some(header(game)),
        None,
        Some(bar),
        None,
        None,
        Some(centered_colored(game.word(), Color::Cyan, PANEL_W)),
        None,
        None,
        Some(input_box(input)),
        None,
        Some(feedback),
        None,
        Some(centered("Enter: check   Esc: give up", PANEL_W)),
    ];

    draw_panel(stdout, &content)
}
