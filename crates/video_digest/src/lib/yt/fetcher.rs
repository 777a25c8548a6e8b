use std::path::{Path, PathBuf};

use artifact_store::VideoMetadata;
use serde::Deserialize;
use tokio::process::Command;

use crate::yt::MediaFetcher;

/// Drives the `yt-dlp` binary for metadata lookups, audio extraction and
/// flattened channel listings.
#[derive(Debug, Clone, Default)]
pub struct YtDlpFetcher {
    cookies_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to run yt-dlp: {0}")]
    Io(#[from] std::io::Error),
    #[error("yt-dlp exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("yt-dlp produced unparseable JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yt-dlp did not produce expected file: {0}")]
    MissingOutput(PathBuf),
}

impl YtDlpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookies(cookies_path: impl Into<PathBuf>) -> Self {
        Self {
            cookies_path: Some(cookies_path.into()),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("yt-dlp");
        if let Some(cookies) = &self.cookies_path {
            cmd.arg("--cookies").arg(cookies);
        }
        cmd
    }

    async fn run(mut cmd: Command) -> Result<Vec<u8>, FetchError> {
        let output = cmd.output().await?;
        if !output.status.success() {
            return Err(FetchError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output.stdout)
    }

    fn channel_uploads_url(channel: &str) -> String {
        if channel.starts_with("http://") || channel.starts_with("https://") {
            channel.to_string()
        } else if channel.starts_with('@') {
            format!("{}/{}/videos", Self::BASE_URL, channel)
        } else {
            format!("{}/channel/{}/videos", Self::BASE_URL, channel)
        }
    }
}

#[derive(Debug, Deserialize)]
struct FlatPlaylistEntry {
    id: String,
}

impl MediaFetcher for YtDlpFetcher {
    const BASE_URL: &'static str = "https://www.youtube.com";

    type Error = FetchError;

    #[tracing::instrument(skip(self))]
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, Self::Error> {
        let mut cmd = self.command();
        cmd.arg("-j").arg("--skip-download").arg(url);
        let stdout = Self::run(cmd)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to fetch metadata"))?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    #[tracing::instrument(skip(self))]
    async fn download_audio(&self, url: &str, dest: &Path) -> Result<(), Self::Error> {
        let mut cmd = self.command();
        cmd.arg("-f")
            .arg("bestaudio/best")
            .arg("-x")
            .arg("--audio-format")
            .arg("mp3")
            .arg("--audio-quality")
            .arg("192K")
            .arg("-o")
            .arg(dest)
            .arg(url);
        Self::run(cmd)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to download audio"))?;

        if !dest.exists() {
            return Err(FetchError::MissingOutput(dest.to_path_buf()));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_channel_uploads(
        &self,
        channel: &str,
        limit: usize,
    ) -> Result<Vec<String>, Self::Error> {
        let mut cmd = self.command();
        cmd.arg("--flat-playlist")
            .arg("-j")
            .arg("--playlist-end")
            .arg(limit.to_string())
            .arg(Self::channel_uploads_url(channel));
        let stdout = Self::run(cmd)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to list channel uploads"))?;

        let mut urls = Vec::new();
        for line in stdout.split(|b| *b == b'\n') {
            if line.is_empty() {
                continue;
            }
            let entry: FlatPlaylistEntry = serde_json::from_slice(line)?;
            urls.push(format!("{}/watch?v={}", Self::BASE_URL, entry.id));
        }
        Ok(urls)
    }
}
