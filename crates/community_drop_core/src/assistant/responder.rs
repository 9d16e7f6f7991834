//! Reply selection over the rule table.
//!
//! # Invariants
//! - First matching rule in table order wins, even if a later rule also
//!   matches.
//! - No rule match yields the fallback reply, so selection is total.
//! - Selection is a pure function of input and table.

use crate::assistant::rules::{builtin_rules, CannedReply, Rule, HELP_MENU};
use crate::model::message::Reply;
use log::debug;

/// Rule id reported when the fallback reply was used.
pub const FALLBACK_RULE_ID: &str = "fallback";

/// Case-folds user text before rule evaluation.
pub fn normalize_input(text: &str) -> String {
    text.to_lowercase()
}

/// Reply plus the id of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub rule_id: &'static str,
    pub reply: Reply,
}

/// Rule-table responder.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<Rule>,
    fallback: CannedReply,
}

impl Responder {
    /// Creates a responder over caller-provided rules and fallback.
    pub fn new(rules: Vec<Rule>, fallback: CannedReply) -> Self {
        Self { rules, fallback }
    }

    /// Responder over the built-in rule table and help menu.
    pub fn builtin() -> Self {
        Self::new(builtin_rules().to_vec(), HELP_MENU)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the canned reply for `user_text`.
    pub fn respond(&self, user_text: &str) -> Reply {
        self.select(user_text).reply
    }

    /// Returns the reply together with the winning rule id.
    pub fn select(&self, user_text: &str) -> Selection {
        let normalized = normalize_input(user_text);
        let selection = match self.rules.iter().find(|rule| rule.matches(&normalized)) {
            Some(rule) => Selection {
                rule_id: rule.id,
                reply: rule.reply.to_reply(),
            },
            None => Selection {
                rule_id: FALLBACK_RULE_ID,
                reply: self.fallback.to_reply(),
            },
        };
        debug!(
            "event=assistant_select module=assistant status=ok rule={} input_chars={}",
            selection.rule_id,
            user_text.chars().count()
        );
        selection
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_input, Responder, FALLBACK_RULE_ID};
    use crate::assistant::rules::{CannedReply, Rule, RulePredicate};

    const FIRST: CannedReply = CannedReply {
        content: "first",
        suggestions: &["a"],
    };
    const SECOND: CannedReply = CannedReply {
        content: "second",
        suggestions: &["b"],
    };
    const FALLBACK: CannedReply = CannedReply {
        content: "fallback",
        suggestions: &[],
    };

    #[test]
    fn normalize_case_folds_unicode() {
        assert_eq!(normalize_input("HUB Straße"), "hub straße");
        assert_eq!(normalize_input("ÉCOLE"), "école");
    }

    #[test]
    fn fixture_rules_resolve_by_declaration_order() {
        let responder = Responder::new(
            vec![
                Rule {
                    id: "first",
                    predicate: RulePredicate::Keywords(&[&["alpha"]]),
                    reply: FIRST,
                },
                Rule {
                    id: "second",
                    predicate: RulePredicate::Keywords(&[&["alpha", "beta"]]),
                    reply: SECOND,
                },
            ],
            FALLBACK,
        );

        assert_eq!(responder.select("ALPHA beta").rule_id, "first");
        assert_eq!(responder.select("beta").rule_id, "second");
        let miss = responder.select("gamma");
        assert_eq!(miss.rule_id, FALLBACK_RULE_ID);
        assert_eq!(miss.reply.content, "fallback");
        assert!(miss.reply.suggestions.is_empty());
    }

    #[test]
    fn empty_rule_table_always_falls_back() {
        let responder = Responder::new(Vec::new(), FALLBACK);
        assert_eq!(responder.respond("track hub").content, "fallback");
    }
}
