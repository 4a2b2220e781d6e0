//! Data structures for video information

use serde::{Deserialize, Serialize};

/// One selectable output format for a resolved video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityOption {
    pub id: String,
    pub label: String,
    pub resolution: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_audio: bool,
}

impl QualityOption {
    pub fn video(id: &str, resolution: &str, size: &str) -> Self {
        Self {
            id: id.to_string(),
            label: "Vídeo MP4".to_string(),
            resolution: resolution.to_string(),
            size: size.to_string(),
            is_audio: false,
        }
    }

    pub fn audio(id: &str, resolution: &str, size: &str) -> Self {
        Self {
            id: id.to_string(),
            label: "Apenas Áudio".to_string(),
            resolution: resolution.to_string(),
            size: size.to_string(),
            is_audio: true,
        }
    }

    /// Container name shown to the user ("MP3" or "MP4")
    pub fn container(&self) -> &'static str {
        if self.is_audio {
            "MP3"
        } else {
            "MP4"
        }
    }
}

/// Video information structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub creator: String,
    pub duration: String,
    pub thumbnail: String,
    pub qualities: Vec<QualityOption>,
}

impl VideoInfo {
    /// Look up a quality option by id
    pub fn quality(&self, id: &str) -> Option<&QualityOption> {
        self.qualities.iter().find(|q| q.id == id)
    }

    pub fn audio_qualities(&self) -> Vec<&QualityOption> {
        self.qualities.iter().filter(|q| q.is_audio).collect()
    }

    pub fn video_qualities(&self) -> Vec<&QualityOption> {
        self.qualities.iter().filter(|q| !q.is_audio).collect()
    }
}
