use std::path::PathBuf;

use artifact_store::{ArtifactStore, HttpBlobStore, LocalArtifactStore, TieredArtifactStore};
use clap::{ArgGroup, Parser, ValueEnum};
use video_digest::{
    gemini::GeminiClient, openai::OpenAIClient, tracing::init_tracing_subscriber,
    whisper::WhisperTranscriber, yt::fetcher::YtDlpFetcher, BatchRunner, Transcriber,
    VideoProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "video-digest", about = "Cached YouTube summarization pipeline")]
#[command(group(ArgGroup::new("input").required(true).args(["youtube_url", "channels"])))]
struct Cli {
    /// Watch URL of a single video to process
    #[arg(long = "youtube_url")]
    youtube_url: Option<String>,

    /// Channel references to process in batch mode
    #[arg(long, num_args = 1..)]
    channels: Vec<String>,

    /// Most recent uploads to take per channel
    #[arg(long = "videos-per-channel", default_value = "1")]
    videos_per_channel: usize,

    /// Gemini API key for summary generation
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_key: String,

    /// OpenAI API key, required for cloud transcription
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: Option<String>,

    /// Transcription backend
    #[arg(long, value_enum, default_value = "local")]
    transcription_mode: TranscriptionMode,

    /// Path to the ggml whisper model for local transcription
    #[arg(long, env = "WHISPER_MODEL_PATH", default_value = "models/ggml-base.bin")]
    whisper_model: PathBuf,

    /// Local artifact tier root
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Remote artifact tier base URL; storage stays local-only when absent
    #[arg(long, env = "REMOTE_STORE_URL")]
    remote_store_url: Option<String>,

    /// Bearer token for the remote tier
    #[arg(long, env = "REMOTE_STORE_TOKEN", hide_env_values = true)]
    remote_store_token: Option<String>,

    /// Path to a yt-dlp cookies file
    #[arg(long, env = "YTDLP_COOKIES_PATH")]
    cookies_path: Option<PathBuf>,

    /// Override the summary instruction template
    #[arg(long)]
    prompt: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TranscriptionMode {
    Local,
    Cloud,
}

async fn run<S, T>(store: S, transcriber: T, cli: &Cli) -> anyhow::Result<()>
where
    S: ArtifactStore + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    let fetcher = match &cli.cookies_path {
        Some(cookies) => YtDlpFetcher::with_cookies(cookies.clone()),
        None => YtDlpFetcher::new(),
    };

    let mut builder = VideoProcessorBuilder::new()
        .store(store)
        .fetcher(fetcher)
        .transcriber(transcriber)
        .summarizer(GeminiClient::new(cli.gemini_key.clone()));
    if let Some(prompt) = &cli.prompt {
        builder = builder.prompt(prompt.clone());
    }
    let processor = builder.build();

    if let Some(url) = &cli.youtube_url {
        let report_path = processor.process_video(url).await?;
        tracing::info!(report = %report_path.display(), "Report ready");
        println!("{}", report_path.display());
        return Ok(());
    }

    let runner = BatchRunner::new(processor, cli.videos_per_channel);
    let report = runner.run(&cli.channels).await;
    report.log_summary();
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(path) => println!("ok   {} -> {}", outcome.url, path.display()),
            Err(e) => println!("fail {} ({e})", outcome.url),
        }
    }
    Ok(())
}

async fn with_store<S>(store: S, cli: &Cli) -> anyhow::Result<()>
where
    S: ArtifactStore + Send + Sync + 'static,
{
    match cli.transcription_mode {
        TranscriptionMode::Local => {
            run(
                store,
                WhisperTranscriber::new(cli.whisper_model.clone()),
                cli,
            )
            .await
        }
        TranscriptionMode::Cloud => {
            let openai_key = cli.openai_key.clone().ok_or_else(|| {
                anyhow::anyhow!("OPENAI_API_KEY is required for cloud transcription mode")
            })?;
            run(store, OpenAIClient::new(openai_key), cli).await
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let local = LocalArtifactStore::new(cli.data_dir.clone())?;
    match &cli.remote_store_url {
        Some(base_url) => {
            let mut remote = HttpBlobStore::new(base_url.clone());
            if let Some(token) = &cli.remote_store_token {
                remote = remote.with_token(token.clone());
            }
            with_store(TieredArtifactStore::new(local, remote), &cli).await
        }
        None => with_store(local, &cli).await,
    }
}
