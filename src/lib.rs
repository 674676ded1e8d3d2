//! Hostess - hosts file manipulation tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hosts;
pub mod platform;
pub mod report;
