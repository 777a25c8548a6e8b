use std::{future::Future, path::PathBuf};

use crate::{
    domain::{ArtifactKind, ArtifactPayload, VideoId},
    store::{local::LocalArtifactStore, ArtifactStore, StoreError},
};

/// Durable blob backend behind the local tier. Keys are the same relative
/// paths the local tier uses under its root.
pub trait BlobStore {
    fn exists(&self, key: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// `None` when the key is absent.
    fn download(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<Vec<u8>>>> + Send;

    fn upload(&self, key: &str, bytes: &[u8]) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Two-tier store: a [`LocalArtifactStore`] working cache in front of a
/// durable remote blob backend.
///
/// Reads hydrate lazily: a local miss downloads the remote blob into the
/// local location, after which the remote tier is never consulted again for
/// that artifact. Writes go through to both tiers before returning.
#[derive(Debug, Clone)]
pub struct TieredArtifactStore<R> {
    local: LocalArtifactStore,
    remote: R,
}

impl<R: BlobStore + Send + Sync> TieredArtifactStore<R> {
    pub fn new(local: LocalArtifactStore, remote: R) -> Self {
        TieredArtifactStore { local, remote }
    }

    pub fn local(&self) -> &LocalArtifactStore {
        &self.local
    }

    /// Copies the remote blob into the local tier. `false` when the remote
    /// does not have it either.
    async fn hydrate(&self, kind: ArtifactKind, id: &VideoId) -> Result<bool, StoreError> {
        let key = kind.rel_path(id);
        let Some(bytes) = self
            .remote
            .download(&key)
            .await
            .map_err(StoreError::Remote)?
        else {
            return Ok(false);
        };
        tokio::fs::write(self.local.local_path(kind, id), bytes).await?;
        tracing::debug!(%key, "Hydrated artifact from remote tier");
        Ok(true)
    }
}

impl<R: BlobStore + Send + Sync> ArtifactStore for TieredArtifactStore<R> {
    async fn exists(&self, kind: ArtifactKind, id: &VideoId) -> Result<bool, StoreError> {
        if self.local.exists(kind, id).await? {
            return Ok(true);
        }
        // a pure existence check never hydrates
        self.remote
            .exists(&kind.rel_path(id))
            .await
            .map_err(StoreError::Remote)
    }

    async fn read(&self, kind: ArtifactKind, id: &VideoId) -> Result<ArtifactPayload, StoreError> {
        if !self.local.exists(kind, id).await? && !self.hydrate(kind, id).await? {
            return Err(StoreError::NotFound {
                kind,
                id: id.to_string(),
            });
        }
        self.local.read(kind, id).await
    }

    async fn write(
        &self,
        kind: ArtifactKind,
        id: &VideoId,
        payload: &ArtifactPayload,
    ) -> Result<(), StoreError> {
        self.local.write(kind, id, payload).await?;
        let key = kind.rel_path(id);
        let bytes = payload.to_bytes()?;
        // on upload failure the local copy stays; nothing rolls it back
        self.remote
            .upload(&key, &bytes)
            .await
            .map_err(StoreError::Remote)
            .inspect_err(|e| tracing::error!(error = ?e, %key, "Write-through upload failed"))?;
        Ok(())
    }

    fn local_path(&self, kind: ArtifactKind, id: &VideoId) -> PathBuf {
        self.local.local_path(kind, id)
    }
}
