// NEXTGEN Studio Generator
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Stand-in for a model backend: waits a fixed interval, then answers with
// the canned template for the ticket's tool. Never fails.

use std::time::{Duration, Instant};
use tracing::info;

use crate::studio::session::GenerationTicket;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct Generator {
    delay: Duration,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Generator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn run(&self, ticket: &GenerationTicket) -> String {
        let started = Instant::now();
        info!(
            "[GENERATOR] Job {} ({}) sleeping {:?}",
            ticket.id, ticket.tool, self.delay
        );

        tokio::time::sleep(self.delay).await;

        let result = ticket.tool.render_result(&ticket.input);
        info!(
            "[GENERATOR] Job {} rendered {} chars in {:.2}s",
            ticket.id,
            result.chars().count(),
            started.elapsed().as_secs_f64()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::session::SessionState;
    use crate::studio::tools::ToolKind;

    #[tokio::test]
    async fn test_run_waits_full_delay() {
        tokio::time::pause();
        let mut session = SessionState::new();
        session.set_input("A futuristic cityscape");
        let ticket = session.begin_generation().unwrap();

        let generator = Generator::default();
        let start = tokio::time::Instant::now();
        let result = generator.run(&ticket).await;

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(result, ToolKind::Video.render_result(""));
    }

    #[tokio::test]
    async fn test_zero_delay() {
        let mut session = SessionState::new();
        session.select_tool(ToolKind::Prompt);
        session.set_input("neon koi");
        let ticket = session.begin_generation().unwrap();

        let result = Generator::new(Duration::ZERO).run(&ticket).await;
        assert!(result.contains("\"neon koi, ultra detailed"));
    }
}
