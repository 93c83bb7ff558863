mod common;
mod game;
mod menus;

pub use game::draw;
pub use menus::{draw_game_over, draw_instructions, draw_menu, draw_settings, MENU_ITEMS};

pub(crate) use common::*;
