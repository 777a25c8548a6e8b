use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use artifact_store::VideoMetadata;
use video_digest::yt::MediaFetcher;

/// Fake media fetcher. Records metadata and download calls; audio
/// "downloads" write fixed bytes to the destination path. A single watch URL
/// or channel reference can be set up to fail.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pub metadata: VideoMetadata,
    pub channels: HashMap<String, Vec<String>>,
    pub fail_download_for: Option<String>,
    pub fail_listing_for: Option<String>,
    pub metadata_calls: Arc<Mutex<Vec<String>>>,
    pub download_calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(metadata: VideoMetadata) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }

    pub fn watch_url(video_id: &str) -> String {
        format!("{}/watch?v={video_id}", Self::BASE_URL)
    }

    pub fn with_channel(mut self, channel: &str, video_ids: &[&str]) -> Self {
        let urls = video_ids.iter().map(|id| Self::watch_url(id)).collect();
        self.channels.insert(channel.to_string(), urls);
        self
    }

    pub fn failing_download(mut self, url: impl Into<String>) -> Self {
        self.fail_download_for = Some(url.into());
        self
    }

    pub fn failing_listing(mut self, channel: impl Into<String>) -> Self {
        self.fail_listing_for = Some(channel.into());
        self
    }
}

impl MediaFetcher for MockFetcher {
    const BASE_URL: &'static str = "https://youtube.test";
    type Error = anyhow::Error;

    async fn fetch_metadata(&self, url: &str) -> anyhow::Result<VideoMetadata> {
        self.metadata_calls.lock().unwrap().push(url.to_string());
        Ok(self.metadata.clone())
    }

    async fn download_audio(&self, url: &str, dest: &Path) -> anyhow::Result<()> {
        if self.fail_download_for.as_deref() == Some(url) {
            anyhow::bail!("download refused for {url}");
        }
        self.download_calls.lock().unwrap().push(url.to_string());
        std::fs::write(dest, b"mp3-bytes")?;
        Ok(())
    }

    async fn list_channel_uploads(&self, channel: &str, limit: usize) -> anyhow::Result<Vec<String>> {
        if self.fail_listing_for.as_deref() == Some(channel) {
            anyhow::bail!("channel listing failed for {channel}");
        }
        let urls = self.channels.get(channel).cloned().unwrap_or_default();
        Ok(urls.into_iter().take(limit).collect())
    }
}
