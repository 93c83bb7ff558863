use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

fn log_path() -> Option<PathBuf> {
    let mut path = dirs::data_local_dir()?;
    path.push("velocitexto");
    path.push("velocitexto.log");
    Some(path)
}

/// The terminal belongs to the game, so log records go to a file. Logging stays off if it can't be opened.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
