use artifact_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not extract a video id from url `{url}`")]
    InvalidReference { url: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("media fetch failed: {0}")]
    Fetch(#[source] anyhow::Error),

    #[error("transcription failed: {0}")]
    Transcribe(#[source] anyhow::Error),

    #[error("summary generation failed: {0}")]
    Summarize(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
