//! Doctor command - verify configuration and calendar health.

use crate::cli::Output;
use crate::config::Settings;
use crate::schedule::Schedule;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Ledig Doctor");
    println!();
    println!("Checking configuration and calendar...\n");

    let mut checks = Vec::new();

    // Check API key
    println!("{}", style("API Configuration").bold());
    let api_check = check_openai_api_key();
    api_check.print();
    checks.push(api_check);

    println!();

    // Check calendar seed
    println!("{}", style("Calendar").bold());
    let seed_check = check_schedule(settings);
    seed_check.print();
    checks.push(seed_check);

    println!();

    // Check configuration
    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    println!();

    // Summary
    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using Ledig.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Ledig is ready to use.");
    }

    Ok(())
}

/// Check if OpenAI API key is configured.
fn check_openai_api_key() -> CheckResult {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if key.starts_with("sk-") && key.len() > 20 => {
            let masked = format!("{}...{}", &key[..7], &key[key.len() - 4..]);
            CheckResult::ok("OPENAI_API_KEY", &format!("configured ({})", masked))
        }
        Ok(key) if key.is_empty() => CheckResult::error(
            "OPENAI_API_KEY",
            "empty",
            "Set with: export OPENAI_API_KEY='sk-...'",
        ),
        Ok(_) => CheckResult::warning(
            "OPENAI_API_KEY",
            "set but format looks unusual",
            "Expected format: sk-... (OpenAI API key)",
        ),
        Err(_) => CheckResult::warning(
            "OPENAI_API_KEY",
            "not set",
            "Only needed for 'ledig ask' and 'ledig chat'. Set with: export OPENAI_API_KEY='sk-...'",
        ),
    }
}

/// Check that the calendar loads from its configured source.
fn check_schedule(settings: &Settings) -> CheckResult {
    let source = match &settings.schedule.seed_path {
        Some(path) => path.clone(),
        None => "built-in demo calendar".to_string(),
    };

    match Schedule::load(&settings.schedule) {
        Ok(schedule) => CheckResult::ok(
            "Schedule",
            &format!(
                "{} ({} dates, {} slots)",
                source,
                schedule.dates().len(),
                schedule.slot_count()
            ),
        ),
        Err(e) => CheckResult::error(
            "Schedule",
            &format!("failed to load: {}", e),
            "Fix or unset schedule.seed_path in the config file",
        ),
    }
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: ledig config edit",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_ok() {
        let result = CheckResult::ok("test", "passed");
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.hint.is_none());
    }

    #[test]
    fn test_check_result_error() {
        let result = CheckResult::error("test", "failed", "fix it");
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.hint, Some("fix it".to_string()));
    }

    #[test]
    fn test_check_schedule_default_seed() {
        let result = check_schedule(&Settings::default());
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.message.contains("3 dates"));
    }

    #[test]
    fn test_check_schedule_missing_seed_file() {
        let mut settings = Settings::default();
        settings.schedule.seed_path = Some("/nonexistent/seed.json".to_string());

        let result = check_schedule(&settings);
        assert_eq!(result.status, CheckStatus::Error);
    }
}
