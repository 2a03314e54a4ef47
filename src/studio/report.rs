// NEXTGEN Studio Headless Report
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Input checks and output shape for the `generate` subcommand.

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::studio::tools::ToolKind;

/// Trimmed CLI input, or an error when there is nothing to generate from.
pub fn require_input(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("--input must contain some text");
    }
    Ok(trimmed)
}

#[derive(Debug, Serialize)]
pub struct GenerationReport<'a> {
    pub tool: ToolKind,
    pub input: &'a str,
    pub result: &'a str,
}

impl<'a> GenerationReport<'a> {
    pub fn new(tool: ToolKind, input: &'a str, result: &'a str) -> Self {
        Self {
            tool,
            input: input.trim(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to encode result")
    }

    pub fn to_text(&self) -> String {
        format!("✓ Generation Complete\n{}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        for blank in ["", "   ", "\n\t"] {
            let err = require_input(blank).unwrap_err();
            assert!(err.to_string().contains("--input"));
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(require_input("  A magical forest ").unwrap(), "A magical forest");
    }

    #[test]
    fn test_json_report_for_prompt() {
        let result = ToolKind::Prompt.render_result("A magical forest");
        let report = GenerationReport::new(ToolKind::Prompt, "  A magical forest ", &result);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["tool"], "prompt");
        assert_eq!(object["input"], "A magical forest");
        assert_eq!(object["result"], result.as_str());
    }

    #[test]
    fn test_text_report() {
        let result = ToolKind::Music.render_result("beat");
        let report = GenerationReport::new(ToolKind::Music, "beat", &result);
        let text = report.to_text();
        assert!(text.starts_with("✓ Generation Complete\n"));
        assert!(text.ends_with("Format: MP3"));
    }
}
