// NEXTGEN Studio Modules
// Copyright (c) 2026 Xing_The_Creator | SYNOID

pub mod controller;
pub mod generator;
pub mod report;
pub mod session;
pub mod tools;

pub use controller::{GenerateOutcome, SkipReason, StudioController};
pub use generator::Generator;
pub use report::{require_input, GenerationReport};
pub use session::{GenerationTicket, SessionState};
pub use tools::ToolKind;
