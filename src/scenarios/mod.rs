//! Built-in scenarios
//!
//! Four fixed packet feeds: two benign sessions and two attacks. All of them
//! run through the same transition table; what separates an attack from a
//! session is only the packets it sends.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::automaton::Packet;
use crate::error::ScenarioError;

mod feeds;

// ============================================================================
// Types
// ============================================================================

/// One packet of a scenario feed, with the text shown while it is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    /// Packet fed to the automaton.
    pub packet: Packet,
    /// One-line log text.
    pub desc: &'static str,
    /// Protocol-theoretic explanation of the step.
    pub analysis: &'static str,
    /// Whether the scenario's author designated this packet as hostile.
    pub malicious: bool,
}

impl FeedEntry {
    /// A packet from a legitimate peer.
    #[must_use]
    pub const fn benign(packet: Packet, desc: &'static str, analysis: &'static str) -> Self {
        Self {
            packet,
            desc,
            analysis,
            malicious: false,
        }
    }

    /// A packet sent by the attacker.
    #[must_use]
    pub const fn malicious(packet: Packet, desc: &'static str, analysis: &'static str) -> Self {
        Self {
            packet,
            desc,
            analysis,
            malicious: true,
        }
    }
}

/// A built-in scenario.
#[derive(Debug)]
pub struct BuiltinScenario {
    /// Numeric selector (1-4).
    pub id: u8,

    /// Unique identifier (kebab-case, e.g., "nmap-scan").
    pub name: &'static str,

    /// Title shown in listings.
    pub title: &'static str,

    /// One-line description, emitted in the `init` record.
    pub description: &'static str,

    /// Benign or adversarial.
    pub category: ScenarioCategory,

    /// Tags for filtering.
    pub tags: &'static [&'static str],

    /// Ordered packet feed.
    pub feed: &'static [FeedEntry],
}

impl BuiltinScenario {
    /// Whether the scenario models an attack.
    #[must_use]
    pub fn is_adversarial(&self) -> bool {
        self.category == ScenarioCategory::Adversarial
    }

    /// Returns the feed entry at `index`, if any.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&'static FeedEntry> {
        self.feed.get(index)
    }
}

/// Scenario category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    /// Legitimate traffic that must end in `Closed`.
    Benign,
    /// Attack traffic that must end in `Trap`.
    Adversarial,
}

impl ScenarioCategory {
    /// Returns the human-readable title-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Benign => "Benign",
            Self::Adversarial => "Adversarial",
        }
    }
}

impl fmt::Display for ScenarioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Benign => write!(f, "benign"),
            Self::Adversarial => write!(f, "adversarial"),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Global registry of all built-in scenarios, in selector order.
static BUILTIN_SCENARIOS: LazyLock<Vec<BuiltinScenario>> = LazyLock::new(|| {
    vec![
        BuiltinScenario {
            id: 1,
            name: "web-browsing",
            title: "Web Browsing",
            description: "Web Browsing (benign): HTTP client opens a connection, fetches a page, and closes",
            category: ScenarioCategory::Benign,
            tags: &["http", "handshake", "graceful-close"],
            feed: feeds::WEB_BROWSING,
        },
        BuiltinScenario {
            id: 2,
            name: "ssh-session",
            title: "SSH Session",
            description: "SSH Session (benign): key exchange and one encrypted command over an established session",
            category: ScenarioCategory::Benign,
            tags: &["ssh", "handshake", "graceful-close"],
            feed: feeds::SSH_SESSION,
        },
        BuiltinScenario {
            id: 3,
            name: "session-hijack",
            title: "Session Hijack",
            description: "Session Hijack (attack): blind ACK with a predicted sequence number races the real handshake",
            category: ScenarioCategory::Adversarial,
            tags: &["hijack", "spoofing", "sequence-prediction"],
            feed: feeds::SESSION_HIJACK,
        },
        BuiltinScenario {
            id: 4,
            name: "nmap-scan",
            title: "Nmap Scan",
            description: "Nmap Scan (attack): half-open SYN probes torn down with RST before a session forms",
            category: ScenarioCategory::Adversarial,
            tags: &["scan", "half-open", "reconnaissance"],
            feed: feeds::NMAP_SCAN,
        },
    ]
});

// ============================================================================
// Public API
// ============================================================================

/// Look up a scenario by numeric id.
#[must_use]
pub fn find_by_id(id: u8) -> Option<&'static BuiltinScenario> {
    BUILTIN_SCENARIOS.iter().find(|s| s.id == id)
}

/// Look up a scenario by exact name.
#[must_use]
pub fn find_scenario(name: &str) -> Option<&'static BuiltinScenario> {
    BUILTIN_SCENARIOS.iter().find(|s| s.name == name)
}

/// Resolve a selector: a numeric id (`"1"`..`"4"`) or a scenario name.
///
/// # Errors
///
/// Returns [`ScenarioError::MissingSelector`] for blank input and
/// [`ScenarioError::UnknownSelector`] for anything that does not name a
/// built-in scenario. There is no default scenario.
pub fn resolve(selector: &str) -> Result<&'static BuiltinScenario, ScenarioError> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(ScenarioError::MissingSelector);
    }

    // Ids are bare digits; `parse` alone would also take a leading `+`.
    let found = if selector.bytes().all(|b| b.is_ascii_digit()) {
        selector.parse::<u8>().ok().and_then(find_by_id)
    } else {
        find_scenario(selector)
    };

    found.ok_or_else(|| ScenarioError::UnknownSelector {
        input: selector.to_owned(),
        suggestion: suggest_scenario(selector),
    })
}

/// List all scenarios, optionally filtered by category and/or tag.
#[must_use]
pub fn list_scenarios(
    category: Option<ScenarioCategory>,
    tag: Option<&str>,
) -> Vec<&'static BuiltinScenario> {
    BUILTIN_SCENARIOS
        .iter()
        .filter(|s| category.is_none_or(|c| s.category == c))
        .filter(|s| tag.is_none_or(|t| s.tags.contains(&t)))
        .collect()
}

/// Suggest a similar scenario name for typo correction.
///
/// Returns the closest match if its Damerau-Levenshtein distance is <= 3.
#[must_use]
pub fn suggest_scenario(input: &str) -> Option<String> {
    BUILTIN_SCENARIOS
        .iter()
        .map(|s| (s.name, strsim::damerau_levenshtein(input, s.name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::automaton::{PushdownAutomaton, State};

    #[test]
    fn four_scenarios_in_selector_order() {
        let ids: Vec<u8> = list_scenarios(None, None).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn no_duplicate_scenario_names() {
        let names: Vec<&str> = list_scenarios(None, None).iter().map(|s| s.name).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len(), "Duplicate scenario names found");
    }

    #[test]
    fn resolve_by_id_and_name() {
        assert_eq!(resolve("1").unwrap().name, "web-browsing");
        assert_eq!(resolve(" 3\n").unwrap().name, "session-hijack");
        assert_eq!(resolve("nmap-scan").unwrap().id, 4);
    }

    #[test]
    fn resolve_rejects_out_of_range_ids() {
        for input in ["0", "5", "255", "256", "-1", "1.0", "+1", "+4"] {
            assert!(
                matches!(resolve(input), Err(ScenarioError::UnknownSelector { .. })),
                "selector {input:?} should be refused"
            );
        }
    }

    #[test]
    fn resolve_rejects_blank_input() {
        assert!(matches!(resolve(""), Err(ScenarioError::MissingSelector)));
        assert!(matches!(resolve("  \n"), Err(ScenarioError::MissingSelector)));
    }

    #[test]
    fn resolve_suggests_close_names() {
        match resolve("ssh-sesion") {
            Err(ScenarioError::UnknownSelector { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("ssh-session"));
            }
            other => panic!("expected UnknownSelector, got {other:?}"),
        }
    }

    #[test]
    fn suggest_scenario_far() {
        assert!(suggest_scenario("xyzabc123").is_none());
    }

    #[test]
    fn list_filter_by_category() {
        let benign = list_scenarios(Some(ScenarioCategory::Benign), None);
        assert_eq!(benign.len(), 2);
        assert!(benign.iter().all(|s| !s.is_adversarial()));

        let adversarial = list_scenarios(Some(ScenarioCategory::Adversarial), None);
        assert_eq!(adversarial.len(), 2);
        assert!(adversarial.iter().all(|s| s.is_adversarial()));
    }

    #[test]
    fn list_filter_by_tag() {
        let closes = list_scenarios(None, Some("graceful-close"));
        assert_eq!(closes.len(), 2);
        assert!(list_scenarios(Some(ScenarioCategory::Adversarial), Some("http")).is_empty());
    }

    #[test]
    fn benign_feeds_carry_no_malicious_packets() {
        for scenario in list_scenarios(Some(ScenarioCategory::Benign), None) {
            assert!(
                scenario.feed.iter().all(|e| !e.malicious),
                "benign scenario '{}' has a malicious packet",
                scenario.name
            );
        }
    }

    #[test]
    fn adversarial_feeds_designate_malicious_packets() {
        for scenario in list_scenarios(Some(ScenarioCategory::Adversarial), None) {
            assert!(
                scenario.feed.iter().any(|e| e.malicious),
                "adversarial scenario '{}' has no malicious packet",
                scenario.name
            );
        }
    }

    #[test]
    fn scenario_metadata_populated() {
        for scenario in list_scenarios(None, None) {
            assert!(!scenario.title.is_empty());
            assert!(!scenario.description.is_empty());
            assert!(!scenario.tags.is_empty());
            assert!(!scenario.feed.is_empty());
            for entry in scenario.feed {
                assert!(!entry.desc.is_empty(), "empty desc in '{}'", scenario.name);
                assert!(
                    !entry.analysis.is_empty(),
                    "empty analysis in '{}'",
                    scenario.name
                );
            }
        }
    }

    // Feeds are static, so their terminal state is a property of the data.
    #[test]
    fn feeds_reach_the_expected_terminal_state() {
        for scenario in list_scenarios(None, None) {
            let mut pda = PushdownAutomaton::new();
            for entry in scenario.feed {
                pda.step(entry.packet).unwrap();
                if pda.is_terminated() {
                    break;
                }
            }
            let expected = if scenario.is_adversarial() {
                State::Trap
            } else {
                State::Closed
            };
            assert_eq!(pda.state(), expected, "scenario '{}'", scenario.name);
        }
    }

    #[test]
    fn category_display_and_label() {
        assert_eq!(ScenarioCategory::Benign.to_string(), "benign");
        assert_eq!(ScenarioCategory::Adversarial.to_string(), "adversarial");
        assert_eq!(ScenarioCategory::Adversarial.label(), "Adversarial");
    }
}
