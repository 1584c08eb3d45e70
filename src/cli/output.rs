//! Colored terminal output for the `better-health-server` CLI.

use crate::types::{HealthReport, HealthStatus};
use owo_colors::OwoColorize;

pub struct Output {
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self { colored: true }
    }

    pub fn no_color() -> Self {
        Self { colored: false }
    }

    pub fn banner(&self) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!(
                "\n   {} {}",
                "✚ Better Health AI".bright_magenta().bold(),
                version.dimmed()
            );
            println!("   {}\n", "Health assistant relay server".bright_white());
        } else {
            println!("\n   + Better Health AI {}", version);
            println!("   Health assistant relay server\n");
        }
    }

    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// One-line verdict for a model health probe.
    pub fn health_report(&self, endpoint: &str, report: &HealthReport) {
        let summary = format!("{} ({})", endpoint, status_label(report));
        match report.status {
            HealthStatus::Healthy => self.success(&summary),
            HealthStatus::Degraded => self.warning(&summary),
            HealthStatus::Unavailable => {
                self.error(&summary);
                if let Some(err) = &report.error {
                    self.kv("error", err);
                }
            }
        }
    }
}

fn status_label(report: &HealthReport) -> &'static str {
    match report.status {
        HealthStatus::Healthy => "healthy, responsive",
        HealthStatus::Degraded => "degraded, responding with errors",
        HealthStatus::Unavailable => "unavailable, offline",
    }
}
