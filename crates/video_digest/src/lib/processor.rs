pub mod batch;
pub mod builder;

use std::path::PathBuf;

use artifact_store::{ArtifactKind, ArtifactPayload, ArtifactStore, VideoId};

use crate::{
    error::{Error, Result},
    llm::{summarizer::Summarizer, transcriber::Transcriber},
    parser, render,
    yt::MediaFetcher,
};

/// Instruction template prepended to the transcript when the caller does not
/// supply one.
pub const DEFAULT_PROMPT: &str = "Provide a one-paragraph summary and a list of key takeaways \
    from the following transcript. Please do this in the original language of the transcript.";

// The core video digest pipeline
#[derive(Debug)]
pub struct VideoProcessor<S, F, T, G>
where
    S: ArtifactStore + Send + Sync + 'static,
    F: MediaFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Summarizer + Send + Sync + 'static,
{
    store: S,
    fetcher: F,
    transcriber: T,
    summarizer: G,
    prompt: String,
}

impl<S, F, T, G> VideoProcessor<S, F, T, G>
where
    S: ArtifactStore + Send + Sync + 'static,
    F: MediaFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Summarizer + Send + Sync + 'static,
{
    /// Runs the full pipeline for one watch URL and returns the location of
    /// the rendered report. A report already in the store short-circuits the
    /// whole run without touching any collaborator.
    #[tracing::instrument(skip(self))]
    pub async fn process_video(&self, url: &str) -> Result<PathBuf> {
        let id = parser::video_id_from_url(url)?;

        if self.store.exists(ArtifactKind::Report, &id).await? {
            tracing::info!(%id, "Report found in cache");
            return Ok(self.store.local_path(ArtifactKind::Report, &id));
        }

        self.fetch(url, &id).await?;
        let transcript = self.transcribe(&id).await?;
        self.summarize(&id, &transcript).await
    }

    /// Fetch stage: metadata and audio, guarded independently. Cached
    /// metadata does not imply cached audio, or the reverse.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, url: &str, id: &VideoId) -> Result<()> {
        if !self.store.exists(ArtifactKind::Metadata, id).await? {
            tracing::info!(%id, "Downloading metadata");
            let metadata = self
                .fetcher
                .fetch_metadata(url)
                .await
                .map_err(|e| Error::Fetch(anyhow::anyhow!("{e:?}")))?;
            self.store
                .write(
                    ArtifactKind::Metadata,
                    id,
                    &ArtifactPayload::Metadata(metadata),
                )
                .await?;
        } else {
            tracing::debug!(%id, "Metadata found in cache");
        }

        if !self.store.exists(ArtifactKind::Audio, id).await? {
            tracing::info!(%id, "Downloading audio");
            let dest = self.store.local_path(ArtifactKind::Audio, id);
            self.fetcher
                .download_audio(url, &dest)
                .await
                .map_err(|e| Error::Fetch(anyhow::anyhow!("{e:?}")))?;
        } else {
            tracing::debug!(%id, "Audio found in cache");
        }

        Ok(())
    }

    /// Transcribe stage: a cached transcript is returned unchanged;
    /// otherwise the audio artifact is transcribed and the result stored.
    #[tracing::instrument(skip(self))]
    pub async fn transcribe(&self, id: &VideoId) -> Result<String> {
        if self.store.exists(ArtifactKind::Transcript, id).await? {
            tracing::debug!(%id, "Transcript found in cache");
            return Ok(self.store.read_text(ArtifactKind::Transcript, id).await?);
        }

        let audio_path = self.store.local_path(ArtifactKind::Audio, id);
        if !audio_path.exists() {
            // audio may live in the remote tier only; one read hydrates it
            self.store.read(ArtifactKind::Audio, id).await?;
        }

        tracing::info!(%id, model = T::TRANSCRIBER_MODEL, "Transcribing audio");
        let response = self
            .transcriber
            .transcribe(&audio_path)
            .await
            .map_err(|e| Error::Transcribe(anyhow::anyhow!("{e:?}")))?;

        self.store
            .write(
                ArtifactKind::Transcript,
                id,
                &ArtifactPayload::Text(response.text.clone()),
            )
            .await?;
        Ok(response.text)
    }

    /// Summarize stage: no guard of its own; it always regenerates the
    /// summary and the rendered report. Idempotency for this stage comes
    /// from the report check in [`Self::process_video`].
    #[tracing::instrument(skip(self, transcript))]
    pub async fn summarize(&self, id: &VideoId, transcript: &str) -> Result<PathBuf> {
        tracing::info!(%id, model = G::SUMMARIZER_MODEL, "Generating summary");
        let full_prompt = format!("{}\n\n{}", self.prompt, transcript);
        let response = self
            .summarizer
            .summarize(&full_prompt)
            .await
            .map_err(|e| Error::Summarize(anyhow::anyhow!("{e:?}")))?;

        self.store
            .write(
                ArtifactKind::Summary,
                id,
                &ArtifactPayload::Text(response.summary.clone()),
            )
            .await?;

        let metadata = self.store.read_metadata(id).await?;
        let page = render::summary_page(id, &response.summary, &metadata);
        self.store
            .write(ArtifactKind::Report, id, &ArtifactPayload::Text(page))
            .await?;

        Ok(self.store.local_path(ArtifactKind::Report, id))
    }
}
