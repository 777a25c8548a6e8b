mod error;
mod llm;
pub mod parser;
mod processor;
pub mod render;
pub mod tracing;
pub mod yt;

pub use error::{Error, Result};
pub use llm::{gemini, openai, whisper};
pub use llm::{
    summarizer::{Summarizer, SummaryResponse},
    transcriber::{TranscribeResponse, Transcriber},
};
pub use processor::{
    batch::{BatchReport, BatchRunner, ItemOutcome},
    builder::VideoProcessorBuilder,
    VideoProcessor, DEFAULT_PROMPT,
};
