pub mod fetcher;

use std::{fmt::Debug, future::Future, path::Path};

use artifact_store::VideoMetadata;

/// Media-fetch collaborator: metadata-only lookups, audio downloads to a
/// store-supplied location, and bounded flattened channel listings.
pub trait MediaFetcher {
    const BASE_URL: &'static str;

    type Error: Debug;

    fn fetch_metadata(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<VideoMetadata, Self::Error>> + Send;

    /// Downloads the audio track to exactly `dest`. The caller supplies the
    /// location up front; the collaborator never picks its own.
    fn download_audio(
        &self,
        url: &str,
        dest: &Path,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// The `limit` most recent upload URLs of a channel, newest first.
    fn list_channel_uploads(
        &self,
        channel: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send;
}
