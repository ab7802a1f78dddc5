//! Output Rendering
//!
//! Text and JSON rendering for command results that are not stage events:
//! errors, config warnings and the doctor report.

use is_terminal::IsTerminal;

use crate::application::DoctorReport;
use crate::config::ConfigWarning;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
        }
    }
}

/// Unicode icons only when stdout is an interactive terminal
pub fn stdout_supports_unicode() -> bool {
    std::io::stdout().is_terminal()
}

/// Render the doctor report as text
pub fn render_doctor_text(report: &DoctorReport, unicode: bool) -> String {
    let icons = if unicode {
        Icons::unicode()
    } else {
        Icons::ascii()
    };

    let mut out = String::new();
    for check in &report.checks {
        let (icon, note) = if check.available {
            (icons.check, "")
        } else {
            (icons.cross, " (not found)")
        };
        out.push_str(&format!(
            "{} {}: {}{}\n",
            icon, check.role, check.program, note
        ));
    }
    out
}

/// Render the doctor report as a single JSON event
pub fn render_doctor_json(report: &DoctorReport) -> serde_json::Value {
    serde_json::json!({
        "event": "doctor",
        "healthy": report.is_healthy(),
        "checks": report.checks,
    })
}

/// Render a command error as a JSON event
pub fn render_error_json(message: &str, exit_code: i32) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "message": message,
        "exit_code": exit_code,
    })
}

/// One stderr line per config warning
pub fn render_config_warning(warning: &ConfigWarning) -> String {
    format!("linkchain: warning: {}", warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ToolCheck;
    use std::path::PathBuf;

    fn report(ar_available: bool) -> DoctorReport {
        DoctorReport {
            checks: vec![
                ToolCheck {
                    role: "compiler",
                    program: "cc".to_string(),
                    available: true,
                },
                ToolCheck {
                    role: "archiver",
                    program: "ar".to_string(),
                    available: ar_available,
                },
            ],
        }
    }

    #[test]
    fn doctor_text_ascii() {
        insta::assert_snapshot!(render_doctor_text(&report(false), false), @r###"
        [OK] compiler: cc
        [FAIL] archiver: ar (not found)
        "###);
    }

    #[test]
    fn doctor_text_unicode() {
        let text = render_doctor_text(&report(true), true);
        assert_eq!(text, "✓ compiler: cc\n✓ archiver: ar\n");
    }

    #[test]
    fn doctor_json_reports_health() {
        let json = render_doctor_json(&report(false));
        assert_eq!(json["event"], "doctor");
        assert_eq!(json["healthy"], false);
        assert_eq!(json["checks"][1]["role"], "archiver");
    }

    #[test]
    fn error_json_carries_exit_code() {
        let json = render_error_json("compile: 'cc' failed with exit status 1", 1);
        assert_eq!(json["event"], "error");
        assert_eq!(json["exit_code"], 1);
    }

    #[test]
    fn config_warning_line() {
        let warning = ConfigWarning {
            key: "arr".to_string(),
            file: PathBuf::from("linkchain.toml"),
            line: Some(3),
            suggestion: Some("ar".to_string()),
        };
        assert_eq!(
            render_config_warning(&warning),
            "linkchain: warning: unknown config key 'arr' in linkchain.toml:3 (did you mean 'ar'?)"
        );
    }
}
