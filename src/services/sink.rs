//! Delivery of export artifacts to the host environment.
//!
//! The conversion pipeline never touches files or the clipboard itself; it
//! hands a finished [`ExportArtifact`] to an [`ArtifactSink`]. A failed
//! delivery is final for that export and is not retried.

use rgb565_codec::{ExportArtifact, ExportFormat};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SinkError;

/// Capability to accept an artifact.
pub trait ArtifactSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError>;
}

/// Writes artifacts into a directory under their suggested filename.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where `artifact` will be written.
    pub fn path_for(&self, artifact: &ExportArtifact) -> PathBuf {
        self.dir.join(artifact.filename())
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError> {
        let path = self.path_for(artifact);
        write_file(&path, artifact)
    }
}

/// Writes artifacts to one explicit path, ignoring the suggested filename.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactSink for FileSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError> {
        write_file(&self.path, artifact)
    }
}

/// Streams artifact bytes to any writer, e.g. stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ArtifactSink for WriterSink<W> {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError> {
        self.writer.write_all(artifact.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Places source artifacts on the system clipboard as plain text.
///
/// On X11 and Wayland the text only lives as long as the owning process
/// serves it. A sink built with [`ClipboardSink::until_taken`] blocks in
/// `deliver` until a clipboard manager or another program takes ownership,
/// so a process that exits right afterwards still hands the text off.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardSink {
    wait_for_handoff: bool,
}

impl ClipboardSink {
    /// Sets the text and returns immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text and waits until another owner takes it over (Linux).
    pub fn until_taken() -> Self {
        Self {
            wait_for_handoff: true,
        }
    }

    pub fn waits_for_handoff(&self) -> bool {
        self.wait_for_handoff
    }
}

impl ArtifactSink for ClipboardSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError> {
        let Some(text) = artifact.as_text() else {
            return Err(SinkError::Unsupported {
                sink: "clipboard",
                format: ExportFormat::Binary.as_str(),
            });
        };

        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SinkError::Clipboard(e.to_string()))?;
        set_clipboard_text(&mut clipboard, text, self.wait_for_handoff)
            .map_err(|e| SinkError::Clipboard(e.to_string()))?;

        tracing::info!(chars = text.len(), "Copied to clipboard");
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_clipboard_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    wait_for_handoff: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait_for_handoff {
        tracing::debug!("Waiting for the clipboard to be taken over");
        clipboard.set().wait().text(text.to_owned())
    } else {
        clipboard.set_text(text.to_owned())
    }
}

#[cfg(not(target_os = "linux"))]
fn set_clipboard_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _wait_for_handoff: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

fn write_file(path: &Path, artifact: &ExportArtifact) -> Result<(), SinkError> {
    fs::write(path, artifact.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        bytes = artifact.as_bytes().len(),
        "Artifact written"
    );
    Ok(())
}
