//! Headless `--report` mode: a blocking synchronous loop that reads
//! scenario JSON from stdin and writes break-even reports to stdout.
//!
//! Each line of stdin is a JSON object overriding any subset of the five
//! scenario fields (`{}` runs the default scenario). Each line of stdout is
//! either a serialized [`engine::BreakEvenReport`] or an error object.
//! Non-finite figures serialize as JSON null (serde_json convention). Logs
//! go to stderr so stdout stays machine-readable.

use std::io::{BufRead, Write};

use engine::{compute, ScenarioInputs};

pub fn run_report_mode() {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    eprintln!("breakeven report mode ready — scenario JSON per line on stdin");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = respond(&line);
        let _ = writeln!(stdout, "{response}");
        let _ = stdout.flush();
    }

    eprintln!("breakeven report mode shutting down");
}

/// Builds the JSON response line for one input line.
fn respond(line: &str) -> String {
    match serde_json::from_str::<ScenarioInputs>(line) {
        Ok(inputs) => match serde_json::to_string(&compute(&inputs)) {
            Ok(report) => report,
            Err(e) => error_line(&format!("serialize error: {e}")),
        },
        Err(e) => error_line(&format!("parse error: {e}")),
    }
}

fn error_line(message: &str) -> String {
    serde_json::json!({ "type": "error", "message": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_report() {
        let response = respond("{}");
        assert!(response.contains("\"break_even_point\":69.4"));
        assert!(response.contains("\"fixed_costs\":2.775"));
        assert!(response.contains("\"series\""));
    }

    #[test]
    fn test_partial_override_applies() {
        let response = respond(r#"{"rd_cost": 3.0}"#);
        assert!(response.contains("\"rd_cost\":3.0"));
        assert!(response.contains("\"fixed_costs\":4.275"));
    }

    #[test]
    fn test_degenerate_scenario_serializes_as_null() {
        // Zero profit per plane: the break-even figure is non-finite and
        // serde_json renders it as null instead of failing the response.
        let response = respond(r#"{"unit_production_cost": 105.0}"#);
        assert!(response.contains("\"break_even_point\":null"));
    }

    #[test]
    fn test_malformed_line_yields_error_payload() {
        let response = respond("not json");
        assert!(response.contains("\"type\":\"error\""));
        assert!(response.contains("parse error"));
    }
}
