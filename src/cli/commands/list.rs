//! Scenario listing command
//!
//! Prints the built-in scenarios grouped by category, or as a JSON array.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::HandshakePdaError;
use crate::scenarios::{self, BuiltinScenario, ScenarioCategory};

#[derive(Serialize)]
struct ScenarioView {
    id: u8,
    name: &'static str,
    title: &'static str,
    category: ScenarioCategory,
    tags: &'static [&'static str],
    packets: usize,
    description: &'static str,
}

impl From<&BuiltinScenario> for ScenarioView {
    fn from(s: &BuiltinScenario) -> Self {
        Self {
            id: s.id,
            name: s.name,
            title: s.title,
            category: s.category,
            tags: s.tags,
            packets: s.feed.len(),
            description: s.description,
        }
    }
}

/// List available built-in scenarios.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn run(args: &ListArgs) -> Result<(), HandshakePdaError> {
    let results = scenarios::list_scenarios(args.category, args.tag.as_deref());
    let mut out = io::stdout().lock();

    match args.format {
        OutputFormat::Json => {
            let views: Vec<ScenarioView> = results.iter().map(|s| ScenarioView::from(*s)).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?;
        }
        OutputFormat::Human => {
            if results.is_empty() {
                writeln!(out, "No scenarios match the given filters.")?;
                return Ok(());
            }

            writeln!(out, "Built-in Scenarios ({} available)\n", results.len())?;

            for cat in [ScenarioCategory::Benign, ScenarioCategory::Adversarial] {
                let in_cat: Vec<_> = results.iter().filter(|s| s.category == cat).collect();
                if in_cat.is_empty() {
                    continue;
                }

                writeln!(out, "  {}", cat.label())?;
                for s in in_cat {
                    writeln!(out, "    {}  {:<16}{}", s.id, s.name, s.description)?;
                }
                writeln!(out)?;
            }

            writeln!(out, "Run a scenario: handshake-pda run <id|name>")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_counts_feed_packets() {
        let scenario = scenarios::find_by_id(4).unwrap();
        let json = serde_json::to_value(ScenarioView::from(scenario)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["name"], "nmap-scan");
        assert_eq!(json["category"], "adversarial");
        assert_eq!(json["packets"], scenario.feed.len());
    }
}
