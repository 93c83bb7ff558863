use rodio::source::Source;
use std::time::Duration;

use super::{DUTY_CYCLE, SAMPLE_RATE, SFX_AMPLITUDE};

/// Square-wave sequence of `(frequency_hz, duration_ms)` notes.
pub(super) struct SfxSource {
    sample_idx: u64,
    note_idx: usize,
    note_sample: u32,
    notes: Vec<(f32, u32)>,
    total_samples: u64,
}

fn samples_for(ms: u32) -> u32 {
    (SAMPLE_RATE as u64 * ms as u64 / 1000) as u32
}

impl SfxSource {
    pub fn new(notes: Vec<(f32, u32)>) -> Self {
        let notes: Vec<(f32, u32)> = notes.into_iter().filter(|&(_, ms)| samples_for(ms) > 0).collect();
        let total_samples = notes.iter().map(|&(_, ms)| samples_for(ms) as u64).sum();
        Self {
            sample_idx: 0,
            note_idx: 0,
            note_sample: 0,
            notes,
            total_samples,
        }
    }

    fn current_note_samples(&self) -> u32 {
        samples_for(self.notes[self.note_idx].1)
    }
}

impl Iterator for SfxSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.note_idx >= self.notes.len() {
            return None;
        }

        let note_total = self.current_note_samples();
        let (freq, _) = self.notes[self.note_idx];

        let value = if freq <= 0.0 {
            0.0
        } else {
            let period = SAMPLE_RATE as f32 / freq;
            let phase = (self.sample_idx as f32 % period) / period;
            if phase < DUTY_CYCLE {
                SFX_AMPLITUDE
            } else {
                -SFX_AMPLITUDE
            }
        };

        self.sample_idx += 1;
        self.note_sample += 1;

        if self.note_sample >= note_total {
            self.note_sample = 0;
            self.note_idx += 1;
        }

        Some(value)
    }
}

impl Source for SfxSource {
    fn current_frame_len(&self) -> Option<usize> {
        if self.note_idx >= self.notes.len() {
            return Some(0);
        }
        Some((self.current_note_samples() - self.note_sample) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_micros(self.total_samples * 1_000_000 / SAMPLE_RATE as u64))
    }
}
