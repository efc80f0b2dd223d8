//! Export artifact types.

/// Media type of binary artifacts.
pub const BINARY_MEDIA_TYPE: &str = "application/octet-stream";

/// Media type of source artifacts.
pub const SOURCE_MEDIA_TYPE: &str = "text/plain";

/// A headerless RGB565 blob with its suggested download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryArtifact {
    bytes: Vec<u8>,
    filename: String,
}

impl BinaryArtifact {
    pub(crate) fn new(bytes: Vec<u8>, filename: String) -> Self {
        Self { bytes, filename }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `"<name>.bin"`
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// A rendered `PROGMEM` array declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArtifact {
    text: String,
    name: String,
    filename: String,
}

impl SourceArtifact {
    pub(crate) fn new(text: String, name: String, filename: String) -> Self {
        Self {
            text,
            name,
            filename,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The user-chosen name the array identifier was derived from.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `"<name>.h"`, used only when the text is written to a file.
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Which sink format to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Raw big-endian RGB565 bytes
    Binary,
    /// Arduino header declaring a `PROGMEM` byte array
    Source,
}

impl ExportFormat {
    /// Short name used in logs and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Binary => "bin",
            ExportFormat::Source => "code",
        }
    }
}

/// Output of one export: either a binary blob or source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportArtifact {
    Binary(BinaryArtifact),
    Source(SourceArtifact),
}

impl ExportArtifact {
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportArtifact::Binary(_) => ExportFormat::Binary,
            ExportArtifact::Source(_) => ExportFormat::Source,
        }
    }

    /// Artifact content as bytes (UTF-8 for source artifacts).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ExportArtifact::Binary(artifact) => artifact.bytes(),
            ExportArtifact::Source(artifact) => artifact.text().as_bytes(),
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            ExportArtifact::Binary(artifact) => artifact.filename(),
            ExportArtifact::Source(artifact) => artifact.filename(),
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportArtifact::Binary(_) => BINARY_MEDIA_TYPE,
            ExportArtifact::Source(_) => SOURCE_MEDIA_TYPE,
        }
    }

    /// Take the content, e.g. as a response body.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ExportArtifact::Binary(artifact) => artifact.into_bytes(),
            ExportArtifact::Source(artifact) => artifact.into_text().into_bytes(),
        }
    }

    /// Source text, if this is a source artifact.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExportArtifact::Binary(_) => None,
            ExportArtifact::Source(artifact) => Some(artifact.text()),
        }
    }
}

impl From<BinaryArtifact> for ExportArtifact {
    fn from(artifact: BinaryArtifact) -> Self {
        ExportArtifact::Binary(artifact)
    }
}

impl From<SourceArtifact> for ExportArtifact {
    fn from(artifact: SourceArtifact) -> Self {
        ExportArtifact::Source(artifact)
    }
}
