use community_drop_core::assistant::rules::GREETING;
use community_drop_core::{Conversation, InputError, Responder, Sender};

#[test]
fn new_conversation_starts_with_greeting() {
    let conversation = Conversation::default();
    let history = conversation.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].sender, Sender::Assistant);
    assert_eq!(history[0].content, GREETING.content);
    assert_eq!(
        history[0].suggestions.as_deref(),
        Some(
            &[
                "Find nearby hubs".to_string(),
                "Track my package".to_string(),
                "How does it work?".to_string(),
                "Become a hub partner".to_string(),
            ][..]
        )
    );
    assert!(!conversation.is_typing());
}

#[test]
fn submit_then_resolve_appends_reply_after_user_message() {
    let mut conversation = Conversation::empty(Responder::builtin());
    let user = conversation.submit("Track my package").expect("submit");
    assert!(conversation.is_typing());
    assert_eq!(conversation.history().len(), 1);

    let reply = conversation.resolve_pending().expect("pending reply");
    assert!(!conversation.is_typing());

    let history = conversation.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], user);
    assert_eq!(history[1], reply);
    assert_eq!(reply.sender, Sender::Assistant);
    assert_eq!(
        reply.content,
        Responder::builtin().respond("Track my package").content
    );
    assert!(user.suggestions.is_none());
}

#[test]
fn second_submit_flushes_first_reply_before_appending() {
    let mut conversation = Conversation::empty(Responder::builtin());
    let first = conversation.submit("How does it work?").expect("first submit");
    let second = conversation.submit("What does it cost?").expect("second submit");
    conversation.resolve_pending().expect("second reply");

    let history = conversation.history();
    let senders: Vec<Sender> = history.iter().map(|message| message.sender).collect();
    assert_eq!(
        senders,
        vec![Sender::User, Sender::Assistant, Sender::User, Sender::Assistant]
    );
    assert_eq!(history[0].id, first.id);
    assert_eq!(history[2].id, second.id);

    let responder = Responder::builtin();
    assert_eq!(history[1].content, responder.respond("How does it work?").content);
    assert_eq!(history[3].content, responder.respond("What does it cost?").content);
}

#[test]
fn append_user_also_flushes_pending_reply() {
    let mut conversation = Conversation::empty(Responder::builtin());
    conversation.submit("scan").expect("submit");
    conversation.append_user("typed while waiting");

    let history = conversation.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].sender, Sender::Assistant);
    assert_eq!(history[2].content, "typed while waiting");
    assert!(!conversation.is_typing());
}

#[test]
fn choose_suggestion_behaves_like_submit() {
    let mut conversation = Conversation::default();
    let chip = conversation.history()[0]
        .suggestions
        .as_ref()
        .and_then(|chips| chips.first().cloned())
        .expect("greeting chip");

    let user = conversation.choose_suggestion(&chip).expect("chip submit");
    assert_eq!(user.content, "Find nearby hubs");
    let reply = conversation.resolve_pending().expect("reply");
    assert!(reply.content.contains("Downtown Mini Mart"));
}

#[test]
fn blank_input_is_rejected() {
    let mut conversation = Conversation::empty(Responder::builtin());
    assert_eq!(conversation.submit(""), Err(InputError::Blank));
    assert_eq!(conversation.submit(" \n\t"), Err(InputError::Blank));
    assert!(conversation.exchange("   ").is_err());
    assert!(conversation.history().is_empty());
}

#[test]
fn close_discards_pending_reply() {
    let mut conversation = Conversation::empty(Responder::builtin());
    conversation.submit("hours").expect("submit");
    assert!(conversation.close());
    assert!(conversation.resolve_pending().is_none());
    assert_eq!(conversation.history().len(), 1);
    assert!(!conversation.close());
}

#[test]
fn exchange_appends_pair_synchronously() {
    let mut conversation = Conversation::empty(Responder::builtin());
    let (user, reply) = conversation.exchange("become a partner").expect("exchange");
    assert_eq!(conversation.history(), &[user, reply.clone()]);
    assert!(reply.content.starts_with("Great! Becoming a hub partner"));
}

#[test]
fn message_ids_are_unique_and_log_only_grows() {
    let mut conversation = Conversation::default();
    let mut previous_len = conversation.history().len();
    for text in ["hi", "track", "qr", "price", "hub nearby"] {
        conversation.exchange(text).expect("exchange");
        assert_eq!(conversation.history().len(), previous_len + 2);
        previous_len = conversation.history().len();
    }

    let mut ids: Vec<_> = conversation.history().iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), conversation.history().len());
}
