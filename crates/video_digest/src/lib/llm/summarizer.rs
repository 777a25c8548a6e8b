use std::{fmt::Debug, future::Future};

/// Text-generation collaborator that turns an instruction prompt plus
/// transcript into a markdown summary.
pub trait Summarizer {
    /// Budget for the content handed to the model, in tokens.
    const CONTEXT_WINDOW_LIMIT: usize = 128_000 - 18_000;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug)]
pub struct SummaryResponse {
    pub summary: String,
}
