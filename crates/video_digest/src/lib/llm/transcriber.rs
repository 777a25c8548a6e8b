use std::{fmt::Debug, future::Future, path::Path};

use serde::Deserialize;

/// Speech-to-text collaborator. Two backends exist: the on-machine
/// [`WhisperTranscriber`](crate::whisper::WhisperTranscriber) and the network
/// [`OpenAIClient`](crate::openai::OpenAIClient); the pipeline picks one at
/// construction.
pub trait Transcriber {
    const TRANSCRIBER_MODEL: &'static str;

    type Error: Debug;

    fn transcribe(
        &self,
        audio_path: &Path,
    ) -> impl Future<Output = Result<TranscribeResponse, Self::Error>> + Send;
}

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}
