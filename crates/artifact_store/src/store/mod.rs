use std::{future::Future, path::PathBuf};

pub mod http_remote;
pub mod local;
pub mod tiered;

use crate::domain::{ArtifactKind, ArtifactPayload, VideoId, VideoMetadata};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} artifact for video {id} not found in any tier")]
    NotFound { kind: ArtifactKind, id: String },

    #[error("unexpected payload shape for {kind} artifact of video {id}")]
    UnexpectedPayload { kind: ArtifactKind, id: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed metadata record: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("artifact is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("remote tier: {0}")]
    Remote(#[source] anyhow::Error),
}

/// Capability set the pipeline drives. Implemented by the local-only store
/// and the tiered local+remote store; callers never depend on which.
pub trait ArtifactStore {
    fn exists(
        &self,
        kind: ArtifactKind,
        id: &VideoId,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Fails with [`StoreError::NotFound`] when the artifact is absent in
    /// every tier.
    fn read(
        &self,
        kind: ArtifactKind,
        id: &VideoId,
    ) -> impl Future<Output = Result<ArtifactPayload, StoreError>> + Send;

    /// Artifacts are create-once: nothing in the store deletes or expires
    /// them afterwards.
    fn write(
        &self,
        kind: ArtifactKind,
        id: &VideoId,
        payload: &ArtifactPayload,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Fast-tier location of the artifact, valid before it exists.
    /// Collaborators that write files directly are handed this path up
    /// front, and it is the report location `process_video` returns.
    fn local_path(&self, kind: ArtifactKind, id: &VideoId) -> PathBuf;

    fn read_text(
        &self,
        kind: ArtifactKind,
        id: &VideoId,
    ) -> impl Future<Output = Result<String, StoreError>> + Send
    where
        Self: Sync,
    {
        async move {
            match self.read(kind, id).await? {
                ArtifactPayload::Text(text) => Ok(text),
                _ => Err(StoreError::UnexpectedPayload {
                    kind,
                    id: id.to_string(),
                }),
            }
        }
    }

    fn read_metadata(
        &self,
        id: &VideoId,
    ) -> impl Future<Output = Result<VideoMetadata, StoreError>> + Send
    where
        Self: Sync,
    {
        async move {
            match self.read(ArtifactKind::Metadata, id).await? {
                ArtifactPayload::Metadata(metadata) => Ok(metadata),
                _ => Err(StoreError::UnexpectedPayload {
                    kind: ArtifactKind::Metadata,
                    id: id.to_string(),
                }),
            }
        }
    }
}

impl<T: ArtifactStore + Send + Sync> ArtifactStore for &T {
    async fn exists(&self, kind: ArtifactKind, id: &VideoId) -> Result<bool, StoreError> {
        (**self).exists(kind, id).await
    }

    async fn read(&self, kind: ArtifactKind, id: &VideoId) -> Result<ArtifactPayload, StoreError> {
        (**self).read(kind, id).await
    }

    async fn write(
        &self,
        kind: ArtifactKind,
        id: &VideoId,
        payload: &ArtifactPayload,
    ) -> Result<(), StoreError> {
        (**self).write(kind, id, payload).await
    }

    fn local_path(&self, kind: ArtifactKind, id: &VideoId) -> PathBuf {
        (**self).local_path(kind, id)
    }
}
