//! Configuration module for Ledig.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{AgentSettings, GeneralSettings, ScheduleSettings, Settings};
