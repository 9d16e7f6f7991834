//! Static rule table for the chat assistant.
//!
//! Each rule is a predicate over case-folded input plus a canned reply.
//! Keyword predicates are a conjunction of keyword groups: every group must
//! contribute at least one substring hit.

use crate::model::message::Reply;

/// Match condition of one rule, evaluated on normalized (lowercased) text.
#[derive(Debug, Clone, Copy)]
pub enum RulePredicate {
    /// All groups must match; a group matches when any keyword is a substring.
    /// An empty group list matches every input.
    Keywords(&'static [&'static [&'static str]]),
    /// Arbitrary test over normalized text.
    Custom(fn(&str) -> bool),
}

impl RulePredicate {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Keywords(groups) => groups
                .iter()
                .all(|group| group.iter().any(|keyword| normalized.contains(keyword))),
            Self::Custom(test) => test(normalized),
        }
    }
}

/// Fixed reply text with its suggestion chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedReply {
    pub content: &'static str,
    pub suggestions: &'static [&'static str],
}

impl CannedReply {
    pub fn to_reply(&self) -> Reply {
        Reply {
            content: self.content.to_string(),
            suggestions: self
                .suggestions
                .iter()
                .map(|chip| (*chip).to_string())
                .collect(),
        }
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable id used in logs and tests.
    pub id: &'static str,
    pub predicate: RulePredicate,
    pub reply: CannedReply,
}

impl Rule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.predicate.matches(normalized)
    }
}

pub const RULE_FIND_HUB: &str = "find_hub";
pub const RULE_TRACK_PACKAGE: &str = "track_package";
pub const RULE_HOW_IT_WORKS: &str = "how_it_works";
pub const RULE_BECOME_PARTNER: &str = "become_partner";
pub const RULE_QR_HELP: &str = "qr_help";
pub const RULE_OPERATING_HOURS: &str = "operating_hours";
pub const RULE_PRICING: &str = "pricing";

/// Opening message of a fresh conversation.
pub const GREETING: CannedReply = CannedReply {
    content: "Hi! I'm your Community Drop assistant. I can help you find nearby hubs, track packages, or answer questions about our service. How can I help you today?",
    suggestions: &[
        "Find nearby hubs",
        "Track my package",
        "How does it work?",
        "Become a hub partner",
    ],
};

/// Reply used when no rule matches.
pub const HELP_MENU: CannedReply = CannedReply {
    content: "I'm here to help with Community Drop services! I can assist with:\n\n🗺️ Finding nearby hubs\n📦 Package tracking\n🤝 Hub partnership info\n🔒 QR code assistance\n❓ General questions\n\nWhat would you like to know more about?",
    suggestions: &["Find hubs", "Track package", "Become partner", "Contact support"],
};

const BUILTIN_RULES: &[Rule] = &[
    Rule {
        id: RULE_FIND_HUB,
        predicate: RulePredicate::Keywords(&[&["hub"], &["find", "nearby", "locate"]]),
        reply: CannedReply {
            content: "I can help you find nearby hubs! Based on your location, here are some options:\n\n📍 Downtown Mini Mart (0.3 miles) - Open 7AM-11PM\n📍 Community Warehouse (1.2 miles) - Open 6AM-10PM\n📍 Sarah's Home Hub (0.8 miles) - Open 9AM-6PM\n\nWould you like directions to any of these locations?",
            suggestions: &["Get directions", "Check hub capacity", "See operating hours"],
        },
    },
    Rule {
        id: RULE_TRACK_PACKAGE,
        predicate: RulePredicate::Keywords(&[&["track", "package"]]),
        reply: CannedReply {
            content: "To track your package, I'll need your tracking number. You can find it in your confirmation email or text message.\n\nAlternatively, you can scan the QR code on your pickup notification. Would you like me to guide you through the QR scanning process?",
            suggestions: &["Enter tracking number", "Scan QR code", "Package status"],
        },
    },
    Rule {
        id: RULE_HOW_IT_WORKS,
        predicate: RulePredicate::Keywords(&[&["how"], &["work"]]),
        reply: CannedReply {
            content: "Here's how Community Drop works:\n\n1️⃣ Choose a nearby hub when placing an order\n2️⃣ Your package is delivered to the secure hub\n3️⃣ You get a notification with QR code\n4️⃣ Visit the hub and scan QR to pick up\n\nIt's that simple! Any specific questions about the process?",
            suggestions: &["Security features", "Pickup process", "Hub locations"],
        },
    },
    Rule {
        id: RULE_BECOME_PARTNER,
        predicate: RulePredicate::Keywords(&[&["partner", "become", "register"]]),
        reply: CannedReply {
            content: "Great! Becoming a hub partner is a fantastic way to earn extra income. Here's what you need to know:\n\n✅ Earn money for each package stored\n✅ Set your own operating hours\n✅ Full insurance coverage included\n✅ Easy setup process\n\nWould you like me to guide you through the registration process?",
            suggestions: &["Start registration", "Partner benefits", "Requirements"],
        },
    },
    Rule {
        id: RULE_QR_HELP,
        predicate: RulePredicate::Keywords(&[&["qr", "scan"]]),
        reply: CannedReply {
            content: "Our QR system ensures secure package pickup:\n\n📱 You receive a unique QR code via email/SMS\n🔒 Present code at the hub for verification\n📦 Hub partner scans to release your package\n✅ Transaction is logged for security\n\nDo you need help with scanning or have issues with your QR code?",
            suggestions: &["QR code issues", "Pickup process", "Contact hub"],
        },
    },
    Rule {
        id: RULE_OPERATING_HOURS,
        predicate: RulePredicate::Keywords(&[&["hours", "time", "open"]]),
        reply: CannedReply {
            content: "Hub operating hours vary by location:\n\n🏪 Retail hubs: Usually 7AM-11PM\n🏭 Warehouses: Typically 6AM-10PM\n🏠 Home hubs: Often 9AM-6PM\n\nMany hubs offer after-hours pickup with advance notice. Would you like specific hours for a particular hub?",
            suggestions: &["Find hub hours", "After-hours pickup", "Weekend availability"],
        },
    },
    Rule {
        id: RULE_PRICING,
        predicate: RulePredicate::Keywords(&[&["cost", "price", "fee"]]),
        reply: CannedReply {
            content: "Community Drop is free for customers! 🎉\n\nThere are no additional fees for using our hub network. You only pay the standard shipping costs from the retailer. Hub partners earn a small fee from us for each package handled.\n\nWant to know more about our service?",
            suggestions: &["Hub partner earnings", "Premium features", "Business accounts"],
        },
    },
];

/// Built-in rules in evaluation order.
pub fn builtin_rules() -> &'static [Rule] {
    BUILTIN_RULES
}

#[cfg(test)]
mod tests {
    use super::{builtin_rules, RulePredicate, HELP_MENU};
    use std::collections::BTreeSet;

    #[test]
    fn keyword_groups_are_conjunctive() {
        let predicate = RulePredicate::Keywords(&[&["hub"], &["find", "nearby"]]);
        assert!(predicate.matches("find a hub"));
        assert!(predicate.matches("hubs nearby?"));
        assert!(!predicate.matches("find my parcel"));
        assert!(!predicate.matches("hub hours"));
    }

    #[test]
    fn empty_group_list_matches_everything() {
        assert!(RulePredicate::Keywords(&[]).matches("anything"));
    }

    #[test]
    fn custom_predicate_receives_normalized_text() {
        let predicate = RulePredicate::Custom(|text| text.starts_with("hello"));
        assert!(predicate.matches("hello there"));
        assert!(!predicate.matches("oh hello"));
    }

    #[test]
    fn builtin_rule_ids_are_unique_and_replies_non_empty() {
        let mut ids = BTreeSet::new();
        for rule in builtin_rules() {
            assert!(ids.insert(rule.id), "duplicate rule id {}", rule.id);
            assert!(!rule.reply.content.is_empty());
            assert!(!rule.reply.suggestions.is_empty());
        }
        assert_eq!(ids.len(), 7);
        assert!(!HELP_MENU.content.is_empty());
    }

    #[test]
    fn keywords_are_lowercase() {
        for rule in builtin_rules() {
            if let RulePredicate::Keywords(groups) = rule.predicate {
                for keyword in groups.iter().flat_map(|group| group.iter()) {
                    assert_eq!(*keyword, keyword.to_lowercase());
                }
            }
        }
    }
}
