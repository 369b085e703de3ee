//! Sound effects (rodio). Sin assets el demo sigue en silencio.

use std::io::{BufReader, Cursor, Read};
use std::sync::Arc;
use std::fs::File;

use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),
}

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    for p in paths {
        if let Some(b) = load_bytes(p) {
            return Some(b);
        }
    }
    None
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    shot: Option<Arc<Vec<u8>>>,
}

impl AudioManager {
    pub fn new() -> Result<Self, AudioError> {
        let (_stream, handle) = OutputStream::try_default()?;
        Ok(Self { _stream, handle, shot: None })
    }

    pub fn load_sfx_auto(&mut self) {
        self.shot = load_bytes_any(&[
            "assets/sfx_shot.wav",
            "assets/sounds/shot.wav",
            "assets/sounds/shoot.wav",
            "assets/sounds/gun.wav",
        ])
        .map(Arc::new);
        if self.shot.is_none() {
            warn!("no se encontró sample de disparo; audio deshabilitado");
        }
    }

    /// Cada disparo en su propio sink para que varios en el mismo frame
    /// suenen todos.
    pub fn play_shot(&self) {
        if let Some(d) = self.shot.clone() {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec);
                    sink.detach();
                }
            }
        }
    }
}
