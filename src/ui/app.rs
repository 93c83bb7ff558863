use std::io;

use crate::audio::SfxPlayer;
use crate::game::records::HighScoreStore;
use crate::game::settings::Settings;

use super::menus::{self, MenuAction};
use super::session::{self, Exit};

pub fn run_app(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut settings = Settings::load();
    let mut sfx = SfxPlayer::new(settings.sfx_enabled);
    let mut store = HighScoreStore::open();
    let mut notice: Option<&str> = None;

    loop {
        let high_score = store.load();
        match menus::run_menu(stdout, &sfx, high_score, notice.take())? {
            MenuAction::Start => match session::run_game(stdout, &sfx, &settings, &mut store)? {
                Exit::Menu => continue,
                Exit::Quit => return Ok(()),
            },
            MenuAction::Instructions => menus::run_instructions(stdout, &sfx)?,
            MenuAction::Settings => menus::run_settings(stdout, &mut sfx, &mut settings)?,
            MenuAction::ResetHighScore => {
                store.save(0);
                log::info!("High score reset from the menu.");
                notice = Some("High score reset");
            }
            MenuAction::Quit => return Ok(()),
        }
    }
}
