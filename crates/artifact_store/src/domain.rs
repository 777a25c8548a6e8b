use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Opaque identifier for one video's artifact family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        VideoId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cached output kind. Each kind has a fixed subdirectory and file
/// extension shared by both storage tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Audio,
    Metadata,
    Transcript,
    Summary,
    Report,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Audio,
        ArtifactKind::Metadata,
        ArtifactKind::Transcript,
        ArtifactKind::Summary,
        ArtifactKind::Report,
    ];

    pub fn subdir(self) -> &'static str {
        match self {
            ArtifactKind::Audio => "audio",
            ArtifactKind::Metadata => "video-metadata",
            ArtifactKind::Transcript => "transcripts",
            // the rendered report lives next to the summary it was built from
            ArtifactKind::Summary | ArtifactKind::Report => "summaries",
        }
    }

    pub fn ext(self) -> &'static str {
        match self {
            ArtifactKind::Audio => "mp3",
            ArtifactKind::Metadata => "json",
            ArtifactKind::Transcript => "txt",
            ArtifactKind::Summary => "md",
            ArtifactKind::Report => "html",
        }
    }

    pub fn file_name(self, id: &VideoId) -> String {
        format!("{}.{}", id, self.ext())
    }

    /// Relative location under a tier root. The local tier joins this onto
    /// its base directory; the remote tier uses it as the object key.
    pub fn rel_path(self, id: &VideoId) -> String {
        format!("{}/{}", self.subdir(), self.file_name(id))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Audio => "audio",
            ArtifactKind::Metadata => "metadata",
            ArtifactKind::Transcript => "transcript",
            ArtifactKind::Summary => "summary",
            ArtifactKind::Report => "report",
        };
        f.write_str(name)
    }
}

/// Metadata record produced once by the fetch collaborator and consumed by
/// the report renderer. Fields the collaborator did not supply stay `None`;
/// unknown fields in its JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    /// 8-digit YYYYMMDD
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// seconds
    #[serde(default)]
    pub duration: Option<u64>,
}

/// Payload of one artifact: raw bytes for audio, a structured record for
/// metadata, UTF-8 text for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactPayload {
    Bytes(Vec<u8>),
    Metadata(VideoMetadata),
    Text(String),
}

impl ArtifactPayload {
    /// Canonical byte serialization written to either tier.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        match self {
            ArtifactPayload::Bytes(bytes) => Ok(bytes.clone()),
            ArtifactPayload::Metadata(metadata) => Ok(serde_json::to_vec_pretty(metadata)?),
            ArtifactPayload::Text(text) => Ok(text.clone().into_bytes()),
        }
    }

    /// Symmetric decode of [`Self::to_bytes`] output, driven by the kind the
    /// bytes were stored under.
    pub fn from_bytes(kind: ArtifactKind, bytes: Vec<u8>) -> Result<Self, StoreError> {
        match kind {
            ArtifactKind::Audio => Ok(ArtifactPayload::Bytes(bytes)),
            ArtifactKind::Metadata => Ok(ArtifactPayload::Metadata(serde_json::from_slice(
                &bytes,
            )?)),
            ArtifactKind::Transcript | ArtifactKind::Summary | ArtifactKind::Report => {
                Ok(ArtifactPayload::Text(String::from_utf8(bytes)?))
            }
        }
    }
}
