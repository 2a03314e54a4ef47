// NEXTGEN Studio Tool Catalogue
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// The four generation modes and everything static about them: names,
// accent colours, input hints and the canned result templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terms appended to the user's idea by the prompt enhancer, in order.
pub const PROMPT_ENHANCEMENTS: &[&str] = &[
    "ultra detailed",
    "professional quality",
    "cinematic lighting",
    "vibrant colors",
    "masterpiece",
    "trending on artstation",
    "8k resolution",
    "highly detailed textures",
    "atmospheric depth",
    "dramatic composition",
];

const VIDEO_RESULT: &str = "🎬 Video generated: A stunning cinematic scene based on your description. Duration: 10s, Resolution: 1920x1080, Format: MP4";
const IMAGE_RESULT: &str = "🖼️ Image generated: High-quality artistic render of your prompt. Resolution: 2048x2048, Style: Photorealistic, Format: PNG";
const MUSIC_RESULT: &str = "🎵 Music track generated: Original composition matching your mood. Duration: 3:30, Genre: Electronic, BPM: 128, Format: MP3";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Video,
    Image,
    Music,
    Prompt,
}

impl ToolKind {
    /// Picker order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Video,
        ToolKind::Image,
        ToolKind::Music,
        ToolKind::Prompt,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ToolKind::Video => "video",
            ToolKind::Image => "image",
            ToolKind::Music => "music",
            ToolKind::Prompt => "prompt",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::Video => "Video Generator",
            ToolKind::Image => "Image Generator",
            ToolKind::Music => "Music Generator",
            ToolKind::Prompt => "Prompt Generator",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Video => "🎬",
            ToolKind::Image => "🖼",
            ToolKind::Music => "🎵",
            ToolKind::Prompt => "✨",
        }
    }

    /// Start and end colours of the card gradient, as RGB.
    pub fn accent(self) -> ([u8; 3], [u8; 3]) {
        match self {
            ToolKind::Video => ([168, 85, 247], [236, 72, 153]),
            ToolKind::Image => ([59, 130, 246], [6, 182, 212]),
            ToolKind::Music => ([34, 197, 94], [16, 185, 129]),
            ToolKind::Prompt => ([249, 115, 22], [234, 179, 8]),
        }
    }

    pub fn input_label(self) -> &'static str {
        match self {
            ToolKind::Prompt => "Enter your basic idea:",
            _ => "Describe what you want to create:",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ToolKind::Video => "e.g., A futuristic cityscape at sunset with flying cars",
            ToolKind::Image => "e.g., A serene mountain landscape with aurora borealis",
            ToolKind::Music => "e.g., Uplifting electronic track for a workout",
            ToolKind::Prompt => "e.g., A magical forest",
        }
    }

    /// Download/Share are offered for media results only.
    pub fn has_result_actions(self) -> bool {
        self != ToolKind::Prompt
    }

    /// Canned result for this tool. `input` is only embedded by the prompt
    /// enhancer and is expected to be trimmed already.
    pub fn render_result(self, input: &str) -> String {
        match self {
            ToolKind::Video => VIDEO_RESULT.to_string(),
            ToolKind::Image => IMAGE_RESULT.to_string(),
            ToolKind::Music => MUSIC_RESULT.to_string(),
            ToolKind::Prompt => format!(
                "✨ Enhanced Prompt:\n\n\"{}, {}\"",
                input,
                PROMPT_ENHANCEMENTS.join(", ")
            ),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ToolKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.id() == needle)
            .ok_or_else(|| {
                anyhow::anyhow!("unknown tool '{}' (expected video, image, music or prompt)", s)
            })
    }
}
