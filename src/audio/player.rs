use rodio::{OutputStream, OutputStreamHandle, Sink};

use super::synth::SfxSource;
use super::Sfx;

#[cfg(unix)]
mod quiet {
    use std::os::unix::io::AsRawFd;

    unsafe extern "C" {
        fn dup(fd: i32) -> i32;
        fn dup2(oldfd: i32, newfd: i32) -> i32;
        fn close(fd: i32) -> i32;
    }

    const STDERR: i32 = 2;

    /// Points stderr at /dev/null until dropped. Audio backends print probe noise there.
    pub(super) struct QuietStderr {
        saved: i32,
    }

    impl QuietStderr {
        pub fn new() -> Self {
            let saved = unsafe { dup(STDERR) };
            if saved >= 0 {
                if let Ok(devnull) = std::fs::File::open("/dev/null") {
                    unsafe { dup2(devnull.as_raw_fd(), STDERR) };
                }
            }
            Self { saved }
        }
    }

    impl Drop for QuietStderr {
        fn drop(&mut self) {
            if self.saved >= 0 {
                unsafe {
                    dup2(self.saved, STDERR);
                    close(self.saved);
                }
            }
        }
    }
}

fn open_output() -> Option<(OutputStream, OutputStreamHandle)> {
    let result = {
        #[cfg(unix)]
        let _quiet = quiet::QuietStderr::new();
        OutputStream::try_default()
    };
    result
        .map_err(|error| log::info!("No audio output, sound effects disabled. Error: '{}'.", error))
        .ok()
}

pub struct SfxPlayer {
    _stream: OutputStream,
    sink: Sink,
    enabled: bool,
}

impl SfxPlayer {
    /// `None` when the host has no usable audio device.
    pub fn new(enabled: bool) -> Option<Self> {
        let (stream, stream_handle) = open_output()?;
        let sink = Sink::try_new(&stream_handle).ok()?;
        Some(Self {
            _stream: stream,
            sink,
            enabled,
        })
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.sink.clear();
        }
    }

    pub fn play(&self, sfx: Sfx) {
        if !self.enabled {
            return;
        }
        self.sink.clear();
        self.sink.append(SfxSource::new(sfx.notes()));
        self.sink.play();
    }
}
