// NEXTGEN Studio Controller
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Owns the session behind a lock so the window thread and background
// generation tasks can both reach it. The lock is never held across an await.

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

use crate::studio::generator::Generator;
use crate::studio::session::SessionState;
use crate::studio::tools::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankInput,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Preconditions failed; nothing changed.
    Skipped(SkipReason),
    Completed(String),
}

#[derive(Clone)]
pub struct StudioController {
    session: Arc<Mutex<SessionState>>,
    generator: Generator,
}

impl Default for StudioController {
    fn default() -> Self {
        Self::new(Generator::default())
    }
}

impl StudioController {
    pub fn new(generator: Generator) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState::new())),
            generator,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn select_tool(&self, tool: ToolKind) {
        let mut session = self.lock();
        if session.is_busy {
            debug!("[STUDIO] Tool switched to {} mid-generation", tool);
        }
        session.select_tool(tool);
        info!("[STUDIO] Selected tool: {}", tool.display_name());
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.lock().set_input(text);
    }

    /// Run one generation to completion for the current tool and input.
    pub async fn generate(&self) -> GenerateOutcome {
        let ticket = {
            let mut session = self.lock();
            match session.begin_generation() {
                Some(ticket) => ticket,
                None => {
                    let reason = if session.is_busy {
                        SkipReason::Busy
                    } else {
                        SkipReason::BlankInput
                    };
                    debug!("[STUDIO] Generate ignored: {:?}", reason);
                    return GenerateOutcome::Skipped(reason);
                }
            }
        };
        info!("[STUDIO] Job {} started for {}", ticket.id, ticket.tool);

        let result = self.generator.run(&ticket).await;

        self.lock().complete_generation(result.clone());
        info!("[STUDIO] Job {} complete", ticket.id);
        GenerateOutcome::Completed(result)
    }

    /// Fire-and-forget variant for the window. `on_done` runs after the
    /// session has been updated, whatever the outcome.
    pub fn spawn_generate<F>(&self, handle: &tokio::runtime::Handle, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let controller = self.clone();
        handle.spawn(async move {
            controller.generate().await;
            on_done();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_blank_input_reports_reason() {
        let controller = StudioController::new(Generator::new(Duration::ZERO));
        controller.set_input("   ");
        assert_eq!(
            controller.generate().await,
            GenerateOutcome::Skipped(SkipReason::BlankInput)
        );
        assert!(!controller.snapshot().is_busy);
    }

    #[tokio::test]
    async fn test_spawn_generate_signals_completion() {
        let controller = StudioController::new(Generator::new(Duration::ZERO));
        controller.select_tool(ToolKind::Image);
        controller.set_input("aurora");

        let (tx, rx) = tokio::sync::oneshot::channel();
        controller.spawn_generate(&tokio::runtime::Handle::current(), move || {
            let _ = tx.send(());
        });
        rx.await.unwrap();

        let session = controller.snapshot();
        assert!(!session.is_busy);
        assert!(session.result_text.unwrap().starts_with("🖼️ Image generated"));
    }
}
