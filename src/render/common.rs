use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

pub(crate) const LEFT_W: usize = 4;
pub(crate) const PANEL_W: usize = 44;
pub(crate) const PANEL_H: usize = 16;

pub(crate) fn display_width(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn centered(text: &str, inner_w: usize) -> String {
    let total_pad = inner_w.saturating_sub(display_width(text));
    let left_pad = total_pad / 2;
    format!("{:ls$}{}{:rs$}", "", text, "", ls = left_pad, rs = total_pad - left_pad)
}

pub(crate) fn centered_colored(text: &str, color: Color, inner_w: usize) -> String {
    format!("{}", centered(text, inner_w).as_str().with(color))
}

pub(crate) fn centered_line(text: &str, selected: bool, inner_w: usize, dim: bool) -> String {
    let prefix = if selected { "> " } else { "  " };
    let prefix_len = prefix.len();
    let total_pad = inner_w.saturating_sub(display_width(text));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let overflow = prefix_len.saturating_sub(left_pad);
    let line = format!(
        "{:ls$}{}{}{:rs$}",
        "", prefix, text, "",
        ls = left_pad.saturating_sub(prefix_len),
        rs = right_pad.saturating_sub(overflow),
    );
    if dim {
        format!("{}", line.as_str().with(Color::DarkGrey))
    } else if selected {
        format!("{}", line.as_str().with(Color::Yellow))
    } else {
        line
    }
}

pub(crate) fn menu_item(label: &str, selected: bool, inner_w: usize) -> String {
    centered_line(label, selected, inner_w, false)
}

pub(crate) fn settings_toggle(label: &str, on: bool, selected: bool, inner_w: usize, dim: bool) -> String {
    let state = if on { "ON" } else { "OFF" };
    let formatted = format!("{:>5}:  < {:^4} >", label, state);
    centered_line(&formatted, selected, inner_w, dim)
}

pub(crate) fn stat_line(label: &str, value: &str, inner_w: usize) -> String {
    centered(&format!("{:>9}: {:<9}", label, value), inner_w)
}

/// Fixed-width bar, `fraction` of it filled. Colour shifts as time runs out.
pub(crate) fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    let color = if fraction > 0.5 {
        Color::Green
    } else if fraction > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    format!(
        "{}{}",
        "█".repeat(filled).with(color),
        "░".repeat(width - filled).with(Color::DarkGrey)
    )
}

pub(crate) fn draw_title(stdout: &mut io::Stdout) -> io::Result<()> {
    const LETTERS: [(char, Color); 11] = [
        ('V', Color::Red),
        ('E', Color::DarkYellow),
        ('L', Color::Yellow),
        ('O', Color::Green),
        ('C', Color::Cyan),
        ('I', Color::Blue),
        ('T', Color::Magenta),
        ('E', Color::Red),
        ('X', Color::DarkYellow),
        ('T', Color::Yellow),
        ('O', Color::Green),
    ];

    write!(stdout, "\x1b[K\r\n")?;
    let title_w = LETTERS.len() * 2 - 1;
    let pad = LEFT_W + 1 + (PANEL_W.saturating_sub(title_w)) / 2;
    write!(stdout, "{:pad$}", "")?;
    for (i, (letter, color)) in LETTERS.iter().enumerate() {
        if i > 0 {
            write!(stdout, " ")?;
        }
        write!(stdout, "{}", letter.to_string().bold().with(*color))?;
    }
    write!(stdout, "\x1b[K\r\n")?;
    write!(stdout, "\x1b[K\r\n")?;
    Ok(())
}

/// Boxed panel with `content` vertically centred. `None` rows are blank.
pub(crate) fn draw_panel(stdout: &mut io::Stdout, content: &[Option<String>]) -> io::Result<()> {
    let start_row = PANEL_H.saturating_sub(content.len()) / 2;

    write!(stdout, "{:LEFT_W$}╔{}╗\x1b[K\r\n", "", "═".repeat(PANEL_W))?;

    for row in 0..PANEL_H.max(content.len()) {
        write!(stdout, "{:LEFT_W$}║", "")?;
        match row.checked_sub(start_row).and_then(|i| content.get(i)) {
            Some(Some(text)) => write!(stdout, "{}", text)?,
            _ => write!(stdout, "{:width$}", "", width = PANEL_W)?,
        }
        write!(stdout, "║\x1b[K\r\n")?;
    }

    write!(stdout, "{:LEFT_W$}╚{}╝\x1b[K\r\n", "", "═".repeat(PANEL_W))?;

    write!(stdout, "\x1b[J")?;
    stdout.flush()?;
    Ok(())
}
