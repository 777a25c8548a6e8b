use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{
    domain::{ArtifactKind, ArtifactPayload, VideoId},
    store::{ArtifactStore, StoreError},
};

/// Filesystem tier. Maps `(kind, id)` to `{base_dir}/{subdir}/{id}.{ext}`.
///
/// There is no locking: two processes writing the same `(kind, id)` race and
/// the last writer wins. Within one run the pipeline's read-before-write
/// guards are the only safeguard.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    base_dir: PathBuf,
}

impl LocalArtifactStore {
    /// Creates the per-kind directory layout eagerly. Idempotent; safe to
    /// call repeatedly on the same root.
    pub fn new(base_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let base_dir = base_dir.into();
        for kind in ArtifactKind::ALL {
            std::fs::create_dir_all(base_dir.join(kind.subdir()))?;
        }
        Ok(LocalArtifactStore { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn artifact_path(&self, kind: ArtifactKind, id: &VideoId) -> PathBuf {
        self.base_dir.join(kind.rel_path(id))
    }
}

impl ArtifactStore for LocalArtifactStore {
    async fn exists(&self, kind: ArtifactKind, id: &VideoId) -> Result<bool, StoreError> {
        Ok(tokio::fs::try_exists(self.artifact_path(kind, id)).await?)
    }

    async fn read(&self, kind: ArtifactKind, id: &VideoId) -> Result<ArtifactPayload, StoreError> {
        let path = self.artifact_path(kind, id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    kind,
                    id: id.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        ArtifactPayload::from_bytes(kind, bytes)
    }

    async fn write(
        &self,
        kind: ArtifactKind,
        id: &VideoId,
        payload: &ArtifactPayload,
    ) -> Result<(), StoreError> {
        let bytes = payload.to_bytes()?;
        tokio::fs::write(self.artifact_path(kind, id), bytes).await?;
        Ok(())
    }

    fn local_path(&self, kind: ArtifactKind, id: &VideoId) -> PathBuf {
        self.artifact_path(kind, id)
    }
}
