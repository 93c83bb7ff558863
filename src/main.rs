mod audio;
mod error;
mod game;
mod logging;
mod render;
mod ui;

use crossterm::{cursor, execute, terminal};
use std::io;

fn main() -> io::Result<()> {
    logging::init();
    log::info!("Starting velocitexto {}.", env!("CARGO_PKG_VERSION"));

    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )?;

    let result = ui::run_app(&mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    match result {
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            log::info!("Interrupted, exiting.");
            Ok(())
        }
        Err(e) => {
            log::error!("Terminal error: '{}'.", e);
            Err(e)
        }
        Ok(()) => Ok(()),
    }
}
