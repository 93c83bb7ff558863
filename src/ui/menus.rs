use crossterm::{event::KeyCode, execute, terminal};
use std::io;

use crate::audio::{Sfx, SfxPlayer};
use crate::game::settings::Settings;
use crate::render::{self, MENU_ITEMS};

use super::{menu_nav, play_sfx, read_key, wait_for_dismiss};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MenuAction {
    Start,
    Instructions,
    Settings,
    ResetHighScore,
    Quit,
}

impl MenuAction {
    fn from_index(sel: usize) -> Self {
        match sel {
            0 => MenuAction::Start,
            1 => MenuAction::Instructions,
            2 => MenuAction::Settings,
            3 => MenuAction::ResetHighScore,
            _ => MenuAction::Quit,
        }
    }
}

pub(crate) fn run_menu(
    stdout: &mut io::Stdout,
    sfx: &Option<SfxPlayer>,
    high_score: u32,
    notice: Option<&str>,
) -> io::Result<MenuAction> {
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    let mut sel: usize = 0;
    let count = MENU_ITEMS.len();

    loop {
        render::draw_menu(stdout, high_score, sel, notice)?;
        match read_key()? {
            Some(code @ (KeyCode::Up | KeyCode::Down)) => {
                sel = menu_nav(sel, count, code);
                play_sfx(sfx, Sfx::MenuMove);
            }
            Some(KeyCode::Enter) => {
                let action = MenuAction::from_index(sel);
                if action != MenuAction::Quit {
                    play_sfx(sfx, Sfx::MenuSelect);
                }
                return Ok(action);
            }
            Some(KeyCode::Esc) | Some(KeyCode::Char('q')) => return Ok(MenuAction::Quit),
            _ => {}
        }
    }
}

pub(crate) fn run_instructions(stdout: &mut io::Stdout, sfx: &Option<SfxPlayer>) -> io::Result<()> {
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    render::draw_instructions(stdout)?;
    wait_for_dismiss(sfx)
}

pub(crate) fn run_settings(
    stdout: &mut io::Stdout,
    sfx: &mut Option<SfxPlayer>,
    settings: &mut Settings,
) -> io::Result<()> {
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    let mut sel: usize = 0;
    let count: usize = 2;

    loop {
        render::draw_settings(stdout, settings, sfx.is_some(), sel)?;
        match read_key()? {
            Some(code @ (KeyCode::Up | KeyCode::Down)) => {
                sel = menu_nav(sel, count, code);
                play_sfx(sfx, Sfx::MenuMove);
            }
            Some(KeyCode::Left | KeyCode::Right) if sel == 0 => toggle_sfx(sfx, settings),
            Some(KeyCode::Enter) if sel == 0 => toggle_sfx(sfx, settings),
            Some(KeyCode::Enter | KeyCode::Esc) => {
                settings.save();
                play_sfx(sfx, Sfx::MenuBack);
                return Ok(());
            }
            _ => {}
        }
    }
}

fn toggle_sfx(sfx: &mut Option<SfxPlayer>, settings: &mut Settings) {
    settings.sfx_enabled = !settings.sfx_enabled;
    if let Some(player) = sfx.as_mut() {
        player.set_enabled(settings.sfx_enabled);
        player.play(Sfx::Toggle);
    }
    log::info!("Sound effects {}.", if settings.sfx_enabled { "enabled" } else { "disabled" });
}
