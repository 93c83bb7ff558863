mod app;
mod input;
mod menus;
mod session;

pub use app::run_app;
pub(crate) use input::{
    drain_pending, menu_nav, play_sfx, read_key, read_key_event, typed_char, wait_for_dismiss,
};
