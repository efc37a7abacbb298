//! Playback descriptors
//!
//! Value types describing a resolved playable stream. They are produced by the
//! source-resolution collaborator and handed to the player untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Quality label used when a source does not advertise one
pub const QUALITY_AUTO: &str = "auto";

/// Errors that can occur when decoding a stream type tag
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceTypeError {
    /// The tag is not one of the known stream types
    #[error("Unknown video source type: {0}")]
    UnknownSourceType(u8),
}

/// Container or streaming protocol of a video source
///
/// Serialized as its numeric tag (1 = MP4, 2 = M3U8, 3 = DASH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VideoSourceType {
    Mp4,
    M3u8,
    Dash,
}

impl TryFrom<u8> for VideoSourceType {
    type Error = SourceTypeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(VideoSourceType::Mp4),
            2 => Ok(VideoSourceType::M3u8),
            3 => Ok(VideoSourceType::Dash),
            other => Err(SourceTypeError::UnknownSourceType(other)),
        }
    }
}

impl From<VideoSourceType> for u8 {
    fn from(source_type: VideoSourceType) -> Self {
        match source_type {
            VideoSourceType::Mp4 => 1,
            VideoSourceType::M3u8 => 2,
            VideoSourceType::Dash => 3,
        }
    }
}

impl fmt::Display for VideoSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoSourceType::Mp4 => write!(f, "mp4"),
            VideoSourceType::M3u8 => write!(f, "m3u8"),
            VideoSourceType::Dash => write!(f, "dash"),
        }
    }
}

/// A subtitle track attached to a video source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSubtitle {
    pub url: String,
    pub id: String,
    /// Language code, e.g. "en"
    pub language: String,
    /// Whether the player should enable this track by default
    #[serde(default)]
    pub is_default: bool,
}

/// A playable stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    pub url: String,
    #[serde(rename = "type")]
    pub source_type: VideoSourceType,
    #[serde(default = "default_quality")]
    pub quality: String,
    #[serde(default)]
    pub subtitles: Vec<VideoSubtitle>,
}

fn default_quality() -> String {
    QUALITY_AUTO.to_string()
}

impl VideoSource {
    /// Creates a source with automatic quality and no subtitles
    pub fn new(url: impl Into<String>, source_type: VideoSourceType) -> Self {
        Self {
            url: url.into(),
            source_type,
            quality: default_quality(),
            subtitles: Vec::new(),
        }
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: VideoSubtitle) -> Self {
        self.subtitles.push(subtitle);
        self
    }

    /// Returns true if the source did not pin a specific quality
    pub fn is_auto_quality(&self) -> bool {
        self.quality == QUALITY_AUTO
    }

    /// Returns the first subtitle track flagged as default
    pub fn default_subtitle(&self) -> Option<&VideoSubtitle> {
        self.subtitles.iter().find(|subtitle| subtitle.is_default)
    }
}
