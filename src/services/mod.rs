pub mod export_job;
pub mod ingest;
pub mod preference_store;
pub mod session;
pub mod sink;

pub use export_job::{ExportJob, ImageSource, JobOutcome};
pub use preference_store::{
    last_used_name, resolve_name, FilePreferences, InMemoryPreferences, PreferenceStore,
    LAST_NAME_KEY,
};
pub use session::{PipelineState, Session};
pub use sink::{ArtifactSink, ClipboardSink, DirectorySink, FileSink, WriterSink};
