//! Pipeline lifecycle.
//!
//! A session starts `Idle`. Capturing a decoded image moves it to `Ready`;
//! from there every export re-runs the full conversion against the captured
//! buffer. Exports never change the state, and an export requested while
//! `Idle` produces nothing.

use rgb565_codec::{ExportArtifact, ExportFormat, PixelBuffer};
use std::sync::Arc;

/// Current pipeline state.
#[derive(Debug, Clone, Default)]
pub enum PipelineState {
    /// No image captured yet
    #[default]
    Idle,
    /// An image is captured and can be exported
    Ready(Arc<PixelBuffer>),
}

/// Owns the single captured image and runs exports from it.
#[derive(Debug, Default)]
pub struct Session {
    state: PipelineState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the captured image. The session is `Ready` afterwards.
    pub fn capture(&mut self, buffer: PixelBuffer) {
        tracing::info!(
            width = buffer.width(),
            height = buffer.height(),
            "Image captured"
        );
        self.state = PipelineState::Ready(Arc::new(buffer));
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, PipelineState::Ready(_))
    }

    /// `(width, height)` of the captured image.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.snapshot().map(|b| (b.width(), b.height()))
    }

    /// A shared handle to the captured image.
    ///
    /// Holding the snapshot keeps exporting the same pixels even if a new
    /// image is captured meanwhile.
    pub fn snapshot(&self) -> Option<Arc<PixelBuffer>> {
        match &self.state {
            PipelineState::Idle => None,
            PipelineState::Ready(buffer) => Some(Arc::clone(buffer)),
        }
    }

    /// Convert the captured image and render it.
    ///
    /// Returns `None` while `Idle`; that is not an error.
    pub fn export(&self, format: ExportFormat, name: &str) -> Option<ExportArtifact> {
        let Some(buffer) = self.snapshot() else {
            tracing::debug!(format = format.as_str(), "Export ignored: no image captured");
            return None;
        };

        let artifact = rgb565_codec::export(&buffer, format, name);
        tracing::debug!(
            format = format.as_str(),
            name,
            bytes = artifact.as_bytes().len(),
            "Export rendered"
        );
        Some(artifact)
    }
}
