use crossterm::{cursor, execute, style::Color};
use std::io;

use crate::game::settings::Settings;
use crate::game::GameOver;

use super::{
    centered, centered_colored, draw_panel, draw_title, menu_item, settings_toggle, stat_line, PANEL_W,
};

pub const MENU_ITEMS: [&str; 5] = ["Start", "Instructions", "Settings", "Reset high score", "Quit"];

pub fn draw_menu(
    stdout: &mut io::Stdout,
    high_score: u32,
    selected: usize,
    notice: Option<&str>,
) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout)?;

    let mut content: Vec<Option<String>> = vec![
        Some(centered("Type the word before time runs out", PANEL_W)),
        None,
        Some(stat_line("HIGH SCORE", &high_score.to_string(), PANEL_W)),
        None,
    ];
    for (i, label) in MENU_ITEMS.iter().enumerate() {
        content.push(Some(menu_item(label, selected == i, PANEL_W)));
    }
    content.push(None);
    content.push(Some(match notice {
        Some(text) => centered_colored(text, Color::Cyan, PANEL_W),
        None => centered("", PANEL_W),
    }));

    draw_panel(stdout, &content)
}

pub fn draw_instructions(stdout: &mut io::Stdout) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout)?;

    let lines = [
        "A word appears with a countdown.",
        "Type it exactly, accents and case",
        "included, then press Enter.",
        "",
        "Each correct word: +10 points and",
        "the next level. Every 5 levels the",
        "countdown is 2 seconds shorter.",
        "",
        "Wrong guesses can be retried until",
        "time runs out. When it hits zero,",
        "whatever is typed gets checked.",
    ];

    let mut content: Vec<Option<String>> = vec![
        Some(centered("INSTRUCTIONS", PANEL_W)),
        None,
    ];
    for line in lines {
        content.push(Some(centered(line, PANEL_W)));
    }
    content.push(None);
    content.push(Some(centered("Enter: check   Esc: give up", PANEL_W)));
    content.push(None);
    content.push(Some(menu_item("Back", true, PANEL_W)));

    draw_panel(stdout, &content)
}

pub fn draw_settings(
    stdout: &mut io::Stdout,
    settings: &Settings,
    audio_available: bool,
    selected: usize,
) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout)?;

    let word_list = match &settings.word_list {
        Some(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        None => "built-in".to_string(),
    };

    let mut content: Vec<Option<String>> = vec![
        Some(centered("SETTINGS", PANEL_W)),
        None,
        Some(settings_toggle("SFX", settings.sfx_enabled, selected == 0, PANEL_W, !audio_available)),
        None,
        Some(centered(&format!("Words: {}", word_list), PANEL_W)),
    ];
    if !audio_available {
        content.push(Some(centered_colored("(no audio device)", Color::DarkGrey, PANEL_W)));
    }
    content.push(None);
    content.push(Some(menu_item("Back", selected == 1, PANEL_W)));

    draw_panel(stdout, &content)
}

pub fn draw_game_over(stdout: &mut io::Stdout, over: &GameOver, selected: usize) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout)?;

    let mut content: Vec<Option<String>> = vec![
        Some(centered_colored("GAME  OVER", Color::Red, PANEL_W)),
        None,
        Some(stat_line("SCORE", &over.score.to_string(), PANEL_W)),
        Some(stat_line("LEVEL", &over.level.to_string(), PANEL_W)),
        Some(stat_line("REASON", over.reason.as_str(), PANEL_W)),
    ];
    if over.new_high_score {
        content.push(None);
        content.push(Some(centered_colored("NEW HIGH SCORE!", Color::Yellow, PANEL_W)));
    }
    content.push(None);
    content.push(Some(menu_item("Retry", selected == 0, PANEL_W)));
    content.push(Some(menu_item("Menu", selected == 1, PANEL_W)));
    content.push(Some(menu_item("Quit", selected == 2, PANEL_W)));

    draw_panel(stdout, &content)
}
