// NEXTGEN Studio Session State
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Transient state for one window session. Pure and synchronous: timing
// lives in the generator, sharing lives in the controller.

use uuid::Uuid;

use crate::studio::tools::ToolKind;

/// Snapshot of what a generation was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub id: Uuid,
    pub tool: ToolKind,
    /// Trimmed input.
    pub input: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub selected_tool: ToolKind,
    pub input_text: String,
    pub result_text: Option<String>,
    pub is_busy: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tools. Always clears input and result; an in-flight generation
    /// keeps the busy flag and still delivers its result.
    pub fn select_tool(&mut self, tool: ToolKind) {
        self.selected_tool = tool;
        self.input_text.clear();
        self.result_text = None;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn has_input(&self) -> bool {
        !self.input_text.trim().is_empty()
    }

    pub fn can_generate(&self) -> bool {
        self.has_input() && !self.is_busy
    }

    /// Enter the busy state. Returns `None` (and leaves the state untouched)
    /// when the input is blank or a generation is already running.
    pub fn begin_generation(&mut self) -> Option<GenerationTicket> {
        if !self.can_generate() {
            return None;
        }
        self.is_busy = true;
        self.result_text = None;
        Some(GenerationTicket {
            id: Uuid::new_v4(),
            tool: self.selected_tool,
            input: self.input_text.trim().to_string(),
        })
    }

    /// Leave the busy state and store the result rendered for the ticket's tool.
    pub fn complete_generation(&mut self, result: String) {
        self.is_busy = false;
        self.result_text = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(tool: ToolKind, input: &str) -> SessionState {
        let mut session = SessionState::new();
        session.select_tool(tool);
        session.set_input(input);
        session
    }

    #[test]
    fn test_defaults() {
        let session = SessionState::new();
        assert_eq!(session.selected_tool, ToolKind::Video);
        assert!(session.input_text.is_empty());
        assert!(session.result_text.is_none());
        assert!(!session.is_busy);
    }

    #[test]
    fn test_select_tool_resets_input_and_result() {
        for tool in ToolKind::ALL {
            let mut session = session_with(ToolKind::Music, "some idea");
            session.result_text = Some("old".into());
            session.select_tool(tool);
            assert_eq!(session.selected_tool, tool);
            assert!(session.input_text.is_empty());
            assert!(session.result_text.is_none());
        }
    }

    #[test]
    fn test_begin_rejects_blank_input() {
        for blank in ["", "   ", "\n\t "] {
            let mut session = session_with(ToolKind::Video, blank);
            let before = session.clone();
            assert!(session.begin_generation().is_none());
            assert_eq!(session, before);
        }
    }

    #[test]
    fn test_begin_rejects_when_busy() {
        let mut session = session_with(ToolKind::Image, "mountains");
        let first = session.begin_generation();
        assert!(first.is_some());
        let before = session.clone();
        assert!(session.begin_generation().is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_begin_clears_result_and_trims_input() {
        let mut session = session_with(ToolKind::Prompt, "  A magical forest \n");
        session.result_text = Some("stale".into());
        let ticket = session.begin_generation().unwrap();
        assert!(session.is_busy);
        assert!(session.result_text.is_none());
        assert_eq!(ticket.tool, ToolKind::Prompt);
        assert_eq!(ticket.input, "A magical forest");
        // The text box itself is left as typed.
        assert_eq!(session.input_text, "  A magical forest \n");
    }

    #[test]
    fn test_complete_stores_result() {
        let mut session = session_with(ToolKind::Video, "city");
        session.begin_generation().unwrap();
        session.complete_generation("done".into());
        assert!(!session.is_busy);
        assert_eq!(session.result_text.as_deref(), Some("done"));
    }

    #[test]
    fn test_tool_switch_mid_flight_keeps_result() {
        let mut session = session_with(ToolKind::Video, "city");
        let ticket = session.begin_generation().unwrap();
        session.select_tool(ToolKind::Music);
        assert!(session.is_busy);
        assert!(!session.can_generate());

        session.complete_generation(ticket.tool.render_result(&ticket.input));
        assert!(!session.is_busy);
        assert_eq!(ticket.tool, ToolKind::Video);
        assert_eq!(
            session.result_text.as_deref(),
            Some(ToolKind::Video.render_result("").as_str())
        );
        assert_eq!(session.selected_tool, ToolKind::Music);
    }
}
