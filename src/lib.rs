// NEXTGEN Studio Library Root
// Copyright (c) 2026 Xing_The_Creator | SYNOID

pub mod config;
pub mod studio;
pub mod window;
