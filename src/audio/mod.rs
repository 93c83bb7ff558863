mod player;
mod sfx;
mod synth;

pub use player::SfxPlayer;
pub use sfx::Sfx;

const SAMPLE_RATE: u32 = 44100;
const DUTY_CYCLE: f32 = 0.25;
const SFX_AMPLITUDE: f32 = 0.35;
