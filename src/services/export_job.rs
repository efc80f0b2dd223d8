//! One-shot exports as run by the command line.
//!
//! A job decodes a single image, renders it and hands the artifact to a
//! sink. Input that is not an image ends the job without delivering
//! anything. Only a delivered source export updates the last-used name.

use rgb565_codec::{ExportArtifact, ExportFormat, PixelBuffer};
use std::path::PathBuf;

use super::ingest;
use super::preference_store::{resolve_name, PreferenceStore, LAST_NAME_KEY};
use super::sink::ArtifactSink;
use crate::error::{IngestError, JobError};

/// Where the image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Clipboard,
}

impl ImageSource {
    pub async fn capture(&self, max_pixels: u64) -> Result<PixelBuffer, IngestError> {
        match self {
            ImageSource::File(path) => ingest::from_file(path, max_pixels).await,
            ImageSource::Clipboard => ingest::from_clipboard(max_pixels).await,
        }
    }

    /// Name used when neither an explicit nor a stored name exists:
    /// the file stem, verbatim.
    pub fn default_name(&self) -> Option<String> {
        match self {
            ImageSource::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned()),
            ImageSource::Clipboard => None,
        }
    }
}

/// What a finished job did.
#[derive(Debug)]
pub enum JobOutcome {
    /// The artifact reached the sink.
    Delivered(ExportArtifact),
    /// The input was not an image; nothing was written.
    NothingToConvert(IngestError),
}

#[derive(Debug, Clone)]
pub struct ExportJob {
    pub source: ImageSource,
    pub format: ExportFormat,
    pub name: Option<String>,
    pub max_pixels: u64,
}

impl ExportJob {
    pub fn new(source: ImageSource, format: ExportFormat) -> Self {
        Self {
            source,
            format,
            name: None,
            max_pixels: ingest::DEFAULT_MAX_DECODED_PIXELS,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    pub async fn run(
        self,
        preferences: &dyn PreferenceStore,
        sink: &mut dyn ArtifactSink,
    ) -> Result<JobOutcome, JobError> {
        let buffer = match self.source.capture(self.max_pixels).await {
            Ok(buffer) => buffer,
            Err(e) if e.is_unsupported() => {
                tracing::info!(%e, "Input ignored");
                return Ok(JobOutcome::NothingToConvert(e));
            }
            Err(e) => return Err(e.into()),
        };

        let name = resolve_name(preferences, self.name, self.source.default_name()).await?;
        let artifact = rgb565_codec::export(&buffer, self.format, &name);

        sink.deliver(&artifact)?;

        if self.format == ExportFormat::Source {
            preferences.set(LAST_NAME_KEY, &name).await?;
        }

        Ok(JobOutcome::Delivered(artifact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{DirectorySink, InMemoryPreferences, WriterSink};
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use std::path::Path;

    fn write_png(path: &Path, color: [u8; 4]) {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(1, 1, Rgba(color))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    fn delivered(outcome: JobOutcome) -> ExportArtifact {
        match outcome {
            JobOutcome::Delivered(artifact) => artifact,
            JobOutcome::NothingToConvert(e) => panic!("nothing delivered: {e}"),
        }
    }

    #[test]
    fn test_default_name_is_file_stem() {
        let source = ImageSource::File(PathBuf::from("assets/my logo.png"));
        assert_eq!(source.default_name(), Some("my logo".to_string()));
        assert_eq!(ImageSource::Clipboard.default_name(), None);
    }

    #[tokio::test]
    async fn test_code_falls_back_to_file_stem_and_stores_it() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("splash.png");
        write_png(&input, [255, 255, 255, 255]);
        let preferences = InMemoryPreferences::new();
        let mut sink = WriterSink::new(Vec::new());

        let outcome = ExportJob::new(ImageSource::File(input), ExportFormat::Source)
            .run(&preferences, &mut sink)
            .await
            .unwrap();

        assert_eq!(delivered(outcome).filename(), "splash.h");
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("const uint8_t splash_map[] PROGMEM = {\n    0xff, 0xff\n  };\n"));
        assert_eq!(
            preferences.get(LAST_NAME_KEY).await.unwrap(),
            Some("splash".to_string())
        );
    }

    #[tokio::test]
    async fn test_stored_name_wins_over_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        write_png(&input, [0, 0, 0, 255]);
        let preferences = InMemoryPreferences::new();
        preferences.set(LAST_NAME_KEY, "icon").await.unwrap();
        let mut sink = DirectorySink::new(dir.path());

        let outcome = ExportJob::new(ImageSource::File(input), ExportFormat::Binary)
            .run(&preferences, &mut sink)
            .await
            .unwrap();

        assert_eq!(delivered(outcome).filename(), "icon.bin");
        assert_eq!(std::fs::read(dir.path().join("icon.bin")).unwrap(), vec![0, 0]);
    }

    #[tokio::test]
    async fn test_explicit_name_wins_over_stored_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        write_png(&input, [255, 0, 0, 255]);
        let preferences = InMemoryPreferences::new();
        preferences.set(LAST_NAME_KEY, "icon").await.unwrap();
        let mut sink = WriterSink::new(Vec::new());

        ExportJob::new(ImageSource::File(input), ExportFormat::Source)
            .with_name(Some("logo".to_string()))
            .run(&preferences, &mut sink)
            .await
            .unwrap();

        assert_eq!(
            preferences.get(LAST_NAME_KEY).await.unwrap(),
            Some("logo".to_string())
        );
    }

    #[tokio::test]
    async fn test_binary_export_does_not_store_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("red.png");
        write_png(&input, [255, 0, 0, 255]);
        let preferences = InMemoryPreferences::new();
        let mut sink = WriterSink::new(Vec::new());

        let outcome = ExportJob::new(ImageSource::File(input), ExportFormat::Binary)
            .with_name(Some("red".to_string()))
            .run(&preferences, &mut sink)
            .await
            .unwrap();

        assert_eq!(delivered(outcome).filename(), "red.bin");
        assert_eq!(sink.into_inner(), vec![0xF8, 0x00]);
        assert_eq!(preferences.get(LAST_NAME_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_image_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        std::fs::write(&input, "just some text").unwrap();
        let preferences = InMemoryPreferences::new();
        let mut sink = WriterSink::new(Vec::new());

        let outcome = ExportJob::new(ImageSource::File(input), ExportFormat::Source)
            .with_name(Some("notes".to_string()))
            .run(&preferences, &mut sink)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            JobOutcome::NothingToConvert(IngestError::UnsupportedPaste(_))
        ));
        assert!(sink.into_inner().is_empty());
        assert_eq!(preferences.get(LAST_NAME_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let preferences = InMemoryPreferences::new();
        let mut sink = WriterSink::new(Vec::new());

        let result = ExportJob::new(
            ImageSource::File(dir.path().join("missing.png")),
            ExportFormat::Binary,
        )
        .run(&preferences, &mut sink)
        .await;

        assert!(matches!(result, Err(JobError::Ingest(IngestError::Io(_)))));
    }

    #[tokio::test]
    async fn test_failed_delivery_does_not_store_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("logo.png");
        write_png(&input, [0, 255, 0, 255]);
        let preferences = InMemoryPreferences::new();
        let mut sink = DirectorySink::new(dir.path().join("missing-dir"));

        let result = ExportJob::new(ImageSource::File(input), ExportFormat::Source)
            .run(&preferences, &mut sink)
            .await;

        assert!(matches!(result, Err(JobError::Sink(_))));
        assert_eq!(preferences.get(LAST_NAME_KEY).await.unwrap(), None);
    }
}
