use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use image_to_code::api;
use image_to_code::models::AppConfig;
use image_to_code::server;
use image_to_code::services::{
    last_used_name, ArtifactSink, ClipboardSink, DirectorySink, ExportJob, FilePreferences,
    FileSink, ImageSource, JobOutcome, WriterSink,
};
use rgb565_codec::{ExportArtifact, ExportFormat};

#[derive(Parser)]
#[command(name = "image-to-code")]
#[command(about = "Convert images to RGB565 binaries and Arduino PROGMEM headers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the image as raw big-endian RGB565 (<name>.bin)
    Bin {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory the .bin file is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Emit the image as an Arduino header declaring <name>_map[]
    Code {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the header to this file instead of stdout
        #[arg(short, long, conflicts_with = "copy")]
        output: Option<PathBuf>,

        /// Copy the header to the clipboard instead of stdout
        #[arg(long)]
        copy: bool,
    },
    /// Start the HTTP server
    Serve,
}

#[derive(Args)]
struct SourceArgs {
    /// Image file to convert
    #[arg(required_unless_present = "paste")]
    input: Option<PathBuf>,

    /// Read the image from the clipboard
    #[arg(long, conflicts_with = "input")]
    paste: bool,

    /// Symbol name (defaults to the last-used name, then the file stem)
    #[arg(short, long)]
    name: Option<String>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "image-to-code API",
        description = "Convert images to RGB565 binaries and Arduino PROGMEM headers",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_upload,
        api::handle_export_bin,
        api::handle_export_code,
        api::handle_name,
    ),
    components(schemas(api::UploadResponse, api::NameResponse)),
    tags(
        (name = "Image", description = "Image capture"),
        (name = "Export", description = "RGB565 export")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bin { source, out_dir }) => {
            init_cli_tracing();
            let mut sink = DirectorySink::new(&out_dir);
            if let Some(artifact) =
                run_export_command(source, ExportFormat::Binary, &mut sink).await?
            {
                println!(
                    "Wrote {} ({} bytes)",
                    sink.path_for(&artifact).display(),
                    artifact.as_bytes().len()
                );
            }
            Ok(())
        }
        Some(Commands::Code {
            source,
            output,
            copy,
        }) => {
            init_cli_tracing();
            let mut sink: Box<dyn ArtifactSink> = match (&output, copy) {
                (Some(path), _) => Box::new(FileSink::new(path)),
                (None, true) => Box::new(ClipboardSink::until_taken()),
                (None, false) => Box::new(WriterSink::new(std::io::stdout().lock())),
            };
            if let Some(artifact) =
                run_export_command(source, ExportFormat::Source, sink.as_mut()).await?
            {
                if let Some(path) = &output {
                    eprintln!("Wrote {}", path.display());
                } else if copy {
                    eprintln!("Copied {} to clipboard", artifact.filename());
                }
            }
            Ok(())
        }
        Some(Commands::Serve) => run_server().await,
        None => run_status_command().await,
    }
}

/// Minimal logging for CLI
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "image_to_code=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Run one export job against the CLI preference file.
///
/// Returns `None` when the input was not an image; that is reported on
/// stderr and is not a failure.
async fn run_export_command(
    source: SourceArgs,
    format: ExportFormat,
    sink: &mut dyn ArtifactSink,
) -> anyhow::Result<Option<ExportArtifact>> {
    let config = AppConfig::from_env();
    let preferences = FilePreferences::new(config.cli_state_file());

    let image_source = match source.input {
        Some(path) if !source.paste => ImageSource::File(path),
        _ => ImageSource::Clipboard,
    };

    let outcome = ExportJob::new(image_source, format)
        .with_name(source.name)
        .with_max_pixels(config.max_decoded_pixels)
        .run(&preferences, sink)
        .await?;

    match outcome {
        JobOutcome::Delivered(artifact) => Ok(Some(artifact)),
        JobOutcome::NothingToConvert(e) => {
            eprintln!("Nothing to convert: {e}");
            Ok(None)
        }
    }
}

/// Display status and configuration information
async fn run_status_command() -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config = AppConfig::from_env();
    let state_file = config.cli_state_file();
    let preferences = FilePreferences::new(&state_file);
    let stored = last_used_name(&preferences).await?;

    println!("image-to-code v{VERSION}");
    println!("RGB565 exporter for microcontroller displays\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR          = {}",
        std::env::var("BIND_ADDR").unwrap_or_else(|_| format!("{} (default)", config.bind_addr))
    );
    println!(
        "  STATE_FILE         = {}",
        std::env::var("STATE_FILE")
            .unwrap_or_else(|_| format!("{} (default)", state_file.display()))
    );
    println!("  MAX_UPLOAD_BYTES   = {}", config.max_upload_bytes);
    println!("  MAX_DECODED_PIXELS = {}", config.max_decoded_pixels);

    println!("\nLast-used name: {}", stored.as_deref().unwrap_or("(none)"));

    println!("\nCommands:");
    println!("  image-to-code bin <IMAGE>    Write <name>.bin");
    println!("  image-to-code code <IMAGE>   Print an Arduino header");
    println!("  image-to-code serve          Start the HTTP server");
    println!("\nUse --paste instead of <IMAGE> to read from the clipboard.");
    println!("Run 'image-to-code --help' for more details.");

    Ok(())
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "image_to_code=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    tracing::info!(
        state_file = ?config.state_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "in-memory".to_string()),
        max_upload_bytes = config.max_upload_bytes,
        max_decoded_pixels = config.max_decoded_pixels,
        "Configuration loaded"
    );

    let state = server::create_app_state(config);

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "image-to-code server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
