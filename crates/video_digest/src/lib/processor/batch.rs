use std::path::PathBuf;

use artifact_store::ArtifactStore;
use itertools::Itertools;

use crate::{
    error::Error,
    llm::{summarizer::Summarizer, transcriber::Transcriber},
    processor::VideoProcessor,
    yt::MediaFetcher,
};

/// Outcome of one attempted batch item. `url` is the watch URL, or the raw
/// channel reference when resolving the channel listing itself failed.
#[derive(Debug)]
pub struct ItemOutcome {
    pub channel: String,
    pub url: String,
    pub result: Result<PathBuf, Error>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn log_summary(&self) {
        if self.failed() == 0 {
            tracing::info!(processed = self.succeeded(), "Batch finished");
            return;
        }
        let failed_urls = self.failures().map(|o| o.url.as_str()).join(", ");
        tracing::warn!(
            processed = self.succeeded(),
            failed = self.failed(),
            %failed_urls,
            "Batch finished with failures"
        );
    }
}

/// Drives the pipeline across channel listings. Every resolved item is
/// attempted: a failing video or an unresolvable channel is recorded as an
/// outcome and the run moves on to the next item, never aborting the batch.
pub struct BatchRunner<S, F, T, G>
where
    S: ArtifactStore + Send + Sync + 'static,
    F: MediaFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Summarizer + Send + Sync + 'static,
{
    processor: VideoProcessor<S, F, T, G>,
    videos_per_channel: usize,
}

impl<S, F, T, G> BatchRunner<S, F, T, G>
where
    S: ArtifactStore + Send + Sync + 'static,
    F: MediaFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Summarizer + Send + Sync + 'static,
{
    pub fn new(processor: VideoProcessor<S, F, T, G>, videos_per_channel: usize) -> Self {
        BatchRunner {
            processor,
            videos_per_channel,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn run(&self, channels: &[String]) -> BatchReport {
        let mut report = BatchReport::default();

        for channel in channels {
            let urls = match self
                .processor
                .fetcher
                .list_channel_uploads(channel, self.videos_per_channel)
                .await
            {
                Ok(urls) => urls,
                Err(e) => {
                    tracing::error!(%channel, error = ?e, "Failed to resolve channel uploads");
                    report.outcomes.push(ItemOutcome {
                        channel: channel.clone(),
                        url: channel.clone(),
                        result: Err(Error::Fetch(anyhow::anyhow!("{e:?}"))),
                    });
                    continue;
                }
            };
            tracing::info!(%channel, count = urls.len(), "Resolved channel uploads");

            for url in urls {
                let result = self.processor.process_video(&url).await;
                if let Err(e) = &result {
                    tracing::error!(%channel, %url, error = %e, "Failed to process video");
                }
                report.outcomes.push(ItemOutcome {
                    channel: channel.clone(),
                    url,
                    result,
                });
            }
        }

        report
    }
}
