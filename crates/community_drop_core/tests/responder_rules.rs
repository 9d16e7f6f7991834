use community_drop_core::assistant::responder::FALLBACK_RULE_ID;
use community_drop_core::assistant::rules::{
    HELP_MENU, RULE_BECOME_PARTNER, RULE_FIND_HUB, RULE_HOW_IT_WORKS, RULE_OPERATING_HOURS,
    RULE_PRICING, RULE_QR_HELP, RULE_TRACK_PACKAGE,
};
use community_drop_core::{builtin_rules, Responder};

#[test]
fn every_builtin_rule_is_reachable() {
    let responder = Responder::builtin();
    let cases = [
        ("Find nearby hubs", RULE_FIND_HUB),
        ("Track my package", RULE_TRACK_PACKAGE),
        ("How does it work?", RULE_HOW_IT_WORKS),
        ("Become a hub partner", RULE_BECOME_PARTNER),
        ("I have a QR question", RULE_QR_HELP),
        ("When are you open?", RULE_OPERATING_HOURS),
        ("what does it cost", RULE_PRICING),
    ];

    for (input, expected) in cases {
        assert_eq!(responder.select(input).rule_id, expected, "input: {input}");
    }
}

#[test]
fn matching_is_case_insensitive() {
    let responder = Responder::builtin();
    assert_eq!(responder.select("WHERE IS THE NEAREST HUB, PLEASE FIND").rule_id, RULE_FIND_HUB);
    assert_eq!(responder.select("PrIcE").rule_id, RULE_PRICING);
}

#[test]
fn overlapping_keywords_resolve_to_earliest_rule() {
    let responder = Responder::builtin();

    // "hub" + "find" (rule 1) and "track" (rule 2).
    assert_eq!(responder.select("find a hub to track my parcel").rule_id, RULE_FIND_HUB);
    // "package" (rule 2) and "how ... work" (rule 3).
    assert_eq!(responder.select("how does package pickup work").rule_id, RULE_TRACK_PACKAGE);
    // "register" (rule 4) and "scan" (rule 5).
    assert_eq!(responder.select("register my scanner").rule_id, RULE_BECOME_PARTNER);
    // "qr" (rule 5) and "fee" (rule 7).
    assert_eq!(responder.select("qr fee").rule_id, RULE_QR_HELP);
}

#[test]
fn overlapping_reply_equals_earlier_rule_reply() {
    let responder = Responder::builtin();
    let rules = builtin_rules();
    let find_hub = rules
        .iter()
        .find(|rule| rule.id == RULE_FIND_HUB)
        .expect("find_hub rule");

    let reply = responder.respond("Locate a hub, and track it");
    assert_eq!(reply, find_hub.reply.to_reply());
}

#[test]
fn hub_without_search_verb_does_not_hit_find_rule() {
    let responder = Responder::builtin();
    assert_eq!(responder.select("hub").rule_id, FALLBACK_RULE_ID);
    assert_eq!(responder.select("hub hours").rule_id, RULE_OPERATING_HOURS);
}

#[test]
fn unmatched_input_returns_help_menu() {
    let responder = Responder::builtin();
    for input in ["Contact support", "¿Dónde está?", "!!!", "12345", "zzz"] {
        let selection = responder.select(input);
        assert_eq!(selection.rule_id, FALLBACK_RULE_ID, "input: {input}");
        assert_eq!(selection.reply, HELP_MENU.to_reply());
        assert_eq!(
            selection.reply.suggestions,
            vec!["Find hubs", "Track package", "Become partner", "Contact support"]
        );
    }
}

#[test]
fn substring_matching_follows_keyword_containment() {
    let responder = Responder::builtin();
    // "sometimes" contains "time".
    assert_eq!(responder.select("sometimes").rule_id, RULE_OPERATING_HOURS);
    // "coffee" contains "fee".
    assert_eq!(responder.select("coffee").rule_id, RULE_PRICING);
}

#[test]
fn every_non_empty_input_yields_non_empty_content() {
    let responder = Responder::builtin();
    let inputs = [
        "a",
        " ",
        "\u{1F600}",
        "Find hubs",
        "track",
        "HOW WORK",
        "partner",
        "scan",
        "open",
        "fee",
        "random words here",
    ];
    for input in inputs {
        assert!(!responder.respond(input).content.is_empty(), "input: {input:?}");
    }
}

#[test]
fn respond_is_idempotent() {
    let responder = Responder::builtin();
    for input in ["Track my package", "nothing matches", "How does it work?"] {
        let first = responder.respond(input);
        let second = responder.respond(input);
        assert_eq!(first, second);
    }
}

#[test]
fn suggestion_chips_route_to_expected_rules() {
    let responder = Responder::builtin();
    assert_eq!(responder.select("Find hubs").rule_id, RULE_FIND_HUB);
    assert_eq!(responder.select("Track package").rule_id, RULE_TRACK_PACKAGE);
    assert_eq!(responder.select("Become partner").rule_id, RULE_BECOME_PARTNER);
    assert_eq!(responder.select("Contact support").rule_id, FALLBACK_RULE_ID);
}
