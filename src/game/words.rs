use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

pub const DEFAULT_WORDS: [&str; 20] = [
    "Hola",
    "Programación",
    "Rust",
    "Escritura rápida",
    "Terminal",
    "Interfaz gráfica",
    "Crossterm",
    "Evento",
    "Teclado",
    "Contador",
    "Correcto",
    "Incorrecto",
    "Nivel",
    "Puntuación",
    "Persistencia",
    "VelociTexto",
    "Aplicación",
    "Desafío",
    "Rendimiento",
    "Practica",
];

pub struct WordBank {
    words: Vec<String>,
    rng: StdRng,
}

impl WordBank {
    pub fn new() -> Self {
        Self::with_rng(default_words(), StdRng::from_entropy())
    }

    /// Falls back to the built-in list when `words` is empty, so `next_word` always has something to draw.
    pub fn with_words(words: Vec<String>) -> Self {
        Self::with_rng(words, StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn with_seed(words: Vec<String>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<String>, rng: StdRng) -> Self {
        let words = if words.is_empty() {
            log::error!("Word bank created without words, defaulting to the built-in list.");
            default_words()
        } else {
            words
        };
        Self { words, rng }
    }

    /// Loads one word or phrase per line. Blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => {
                let words = parse_word_list(&data);
                if words.is_empty() {
                    log::error!(
                        "Word list '{}' has no usable entries, using the built-in list.",
                        path.display()
                    );
                } else {
                    log::info!("Loaded {} words from '{}'.", words.len(), path.display());
                }
                Self::with_words(words)
            }
            Err(error) => {
                log::error!(
                    "Unable to read word list '{}', using the built-in list. Error: '{}'.",
                    path.display(),
                    error
                );
                Self::new()
            }
        }
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniform draw with replacement.
    pub fn next_word(&mut self) -> String {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_WORDS[0].to_string())
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new()
    }
}

fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

pub fn parse_word_list(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
