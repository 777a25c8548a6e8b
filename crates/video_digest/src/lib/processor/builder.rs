use artifact_store::ArtifactStore;

use crate::{
    llm::{summarizer::Summarizer, transcriber::Transcriber},
    processor::{VideoProcessor, DEFAULT_PROMPT},
    yt::MediaFetcher,
};

pub struct VideoProcessorBuilder<S = (), F = (), T = (), G = ()> {
    store: S,
    fetcher: F,
    transcriber: T,
    summarizer: G,
    prompt: String,
}

impl VideoProcessorBuilder {
    pub fn new() -> Self {
        Self {
            store: (),
            fetcher: (),
            transcriber: (),
            summarizer: (),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Default for VideoProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, F, T, G> VideoProcessorBuilder<S, F, T, G> {
    pub fn store<S2: ArtifactStore + Send + Sync + 'static>(
        self,
        store: S2,
    ) -> VideoProcessorBuilder<S2, F, T, G> {
        VideoProcessorBuilder {
            store,
            fetcher: self.fetcher,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }

    pub fn fetcher<F2: MediaFetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> VideoProcessorBuilder<S, F2, T, G> {
        VideoProcessorBuilder {
            store: self.store,
            fetcher,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> VideoProcessorBuilder<S, F, T2, G> {
        VideoProcessorBuilder {
            store: self.store,
            fetcher: self.fetcher,
            transcriber,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }

    pub fn summarizer<G2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: G2,
    ) -> VideoProcessorBuilder<S, F, T, G2> {
        VideoProcessorBuilder {
            store: self.store,
            fetcher: self.fetcher,
            transcriber: self.transcriber,
            summarizer,
            prompt: self.prompt,
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl<S, F, T, G> VideoProcessorBuilder<S, F, T, G>
where
    S: ArtifactStore + Send + Sync + 'static,
    F: MediaFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> VideoProcessor<S, F, T, G> {
        VideoProcessor {
            store: self.store,
            fetcher: self.fetcher,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            prompt: self.prompt,
        }
    }
}
