//! # Artifact Store
//!
//! Two-tier content store for derived video artifacts (audio, metadata,
//! transcript, summary, rendered report), keyed by video identifier and
//! artifact kind.
//!
//! The [`ArtifactStore`] trait abstracts over a filesystem-only store and a
//! tiered store that mirrors every write into a durable remote blob backend
//! and lazily hydrates reads from it. Artifacts are immutable once written;
//! the store exposes no delete or expiry operation.

mod domain;
mod store;

pub use domain::{ArtifactKind, ArtifactPayload, VideoId, VideoMetadata};
pub use store::http_remote::HttpBlobStore;
pub use store::local::LocalArtifactStore;
pub use store::tiered::{BlobStore, TieredArtifactStore};
pub use store::{ArtifactStore, StoreError};
