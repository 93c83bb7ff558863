use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::audio::{Sfx, SfxPlayer};

fn force_quit() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "force quit")
}

pub(crate) fn read_key_event() -> io::Result<Option<KeyEvent>> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Err(force_quit());
        }
        Ok(Some(key))
    } else {
        Ok(None)
    }
}

pub(crate) fn read_key() -> io::Result<Option<KeyCode>> {
    Ok(read_key_event()?.map(|key| key.code))
}

/// Printable character for a key press. Control and Alt chords are not text.
pub(crate) fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
        _ => None,
    }
}

/// Discards key presses queued while the previous screen was up.
pub(crate) fn drain_pending() -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}

/// Blocks until Enter or Esc.
pub(crate) fn wait_for_dismiss(sfx: &Option<SfxPlayer>) -> io::Result<()> {
    loop {
        if let Some(KeyCode::Enter | KeyCode::Esc) = read_key()? {
            play_sfx(sfx, Sfx::MenuBack);
            return Ok(());
        }
    }
}

pub(crate) fn play_sfx(sfx: &Option<SfxPlayer>, cue: Sfx) {
    if let Some(player) = sfx.as_ref() {
        player.play(cue);
    }
}

pub(crate) fn menu_nav(sel: usize, count: usize, code: KeyCode) -> usize {
    match code {
        KeyCode::Up => sel.checked_sub(1).unwrap_or(count - 1),
        KeyCode::Down => (sel + 1) % count,
        _ => sel,
    }
}
