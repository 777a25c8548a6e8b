use std::path::{Path, PathBuf};

use tokio::process::Command;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::llm::transcriber::{TranscribeResponse, Transcriber};

/// Local-compute transcription backend running a ggml whisper model on this
/// machine. The source audio is transcoded to 16 kHz mono WAV via ffmpeg
/// first; the WAV is kept next to the source so reruns skip the transcode.
pub struct WhisperTranscriber {
    model_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum WhisperTranscribeError {
    #[error("ffmpeg failed: {0}")]
    Ffmpeg(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),
    #[error("whisper error: {0}")]
    Model(#[from] whisper_rs::WhisperError),
}

impl WhisperTranscriber {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    async fn transcode_to_wav(
        audio_path: &Path,
        wav_path: &Path,
    ) -> Result<(), WhisperTranscribeError> {
        let output = Command::new("ffmpeg")
            .arg("-y")
            .arg("-i")
            .arg(audio_path)
            .arg("-ar")
            .arg("16000")
            .arg("-ac")
            .arg("1")
            .arg(wav_path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(WhisperTranscribeError::Ffmpeg(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }

    fn run_model(&self, wav_path: &Path) -> Result<String, WhisperTranscribeError> {
        let mut reader = hound::WavReader::open(wav_path)?;
        let samples = reader
            .samples::<i16>()
            .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
            .collect::<Result<Vec<_>, _>>()?;

        let model_path = self.model_path.to_string_lossy();
        let ctx =
            WhisperContext::new_with_params(&model_path, WhisperContextParameters::default())?;
        let mut state = ctx.create_state()?;

        let params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        state.full(params, &samples)?;

        let mut text = String::new();
        for segment in state.as_iter() {
            let Ok(seg_text) = segment.to_str() else {
                continue;
            };
            text.push_str(seg_text);
        }

        Ok(text.trim().to_string())
    }
}

impl Transcriber for WhisperTranscriber {
    const TRANSCRIBER_MODEL: &'static str = "ggml-base";
    type Error = WhisperTranscribeError;

    async fn transcribe(&self, audio_path: &Path) -> Result<TranscribeResponse, Self::Error> {
        let wav_path = audio_path.with_extension("wav");
        if !wav_path.exists() {
            tracing::info!(audio = %audio_path.display(), "Transcoding audio for local transcription");
            Self::transcode_to_wav(audio_path, &wav_path).await?;
        }

        let text = self.run_model(&wav_path)?;
        Ok(TranscribeResponse { text })
    }
}
