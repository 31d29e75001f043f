//! Tests for history bookkeeping, payload assembly, and the failure policy.

use std::sync::Arc;

use super::*;
use crate::testing::ScriptedClient;
use crate::{AiError, Message, Role};

const DIRECTIVE: &str = "You are a test banking assistant.";

fn session_with(client: &Arc<ScriptedClient>) -> Session {
    Session::new(client.clone(), SessionConfig::new(DIRECTIVE))
}

#[tokio::test]
async fn balance_question_round_trip() {
    let reply = "I can't access real account data, but I can explain how to check your balance.";
    let client = Arc::new(ScriptedClient::new().reply(reply));
    let mut session = session_with(&client);
    assert!(session.is_empty());

    let answer = session.send("What is my balance?").await.unwrap();

    assert_eq!(answer, reply);
    assert_eq!(
        session.history(),
        &[
            Message::user("What is my balance?"),
            Message::assistant(reply),
        ]
    );
}

#[tokio::test]
async fn transport_failure_leaves_history_empty() {
    let client = Arc::new(
        ScriptedClient::new().fail(AiError::NetworkError("connection reset by peer".into())),
    );
    let mut session = session_with(&client);

    let text = session.send_or_error_text("What is my balance?").await;

    assert!(text.starts_with("Error: "), "got {text}");
    assert!(text.contains("connection reset by peer"));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn history_grows_by_two_per_successful_send() {
    let client = Arc::new(ScriptedClient::new());
    let mut session = session_with(&client);

    for n in 1..=4 {
        session.send(&format!("question {n}")).await.unwrap();
        assert_eq!(session.turn_count(), 2 * n);
        assert!(session.is_alternating());
    }
    assert_eq!(session.history()[0].role(), Role::User);
    assert_eq!(session.history()[7].role(), Role::Assistant);
}

#[tokio::test]
async fn payload_carries_directive_and_full_history() {
    let client = Arc::new(ScriptedClient::new());
    let mut session = session_with(&client);

    for n in 1..=3 {
        session.send(&format!("turn {n}")).await.unwrap();
    }

    let payloads = client.payloads();
    assert_eq!(payloads.len(), 3);
    for (i, payload) in payloads.iter().enumerate() {
        let n = i + 1;
        assert_eq!(payload.len(), 1 + 2 * (n - 1) + 1);
        assert_eq!(payload[0], Message::system(DIRECTIVE));
        assert_eq!(payload.last(), Some(&Message::user(format!("turn {n}"))));
    }
    assert_eq!(&payloads[2][1..5], &session.history()[..4]);
}

#[tokio::test]
async fn directive_is_never_stored() {
    let client = Arc::new(ScriptedClient::new().reply("hello"));
    let mut session = session_with(&client);
    session.send("hi").await.unwrap();

    assert!(session.history().iter().all(|m| m.role() != Role::System));
    assert_eq!(session.system_directive(), DIRECTIVE);
}

#[tokio::test]
async fn failed_turn_is_not_resent() {
    let client = Arc::new(
        ScriptedClient::new()
            .reply("first answer")
            .fail(AiError::RateLimited)
            .reply("third answer"),
    );
    let mut session = session_with(&client);

    session.send("one").await.unwrap();
    let err = session.send("two").await.unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
    assert_eq!(session.turn_count(), 2);

    session.send("three").await.unwrap();
    let last = client.payloads().pop().unwrap();
    let texts: Vec<_> = last.iter().map(Message::content).collect();
    assert_eq!(texts, [DIRECTIVE, "one", "first answer", "three"]);
    assert_eq!(session.turn_count(), 4);
}

#[tokio::test]
async fn reset_empties_history_and_is_idempotent() {
    let client = Arc::new(ScriptedClient::new());
    let mut session = session_with(&client);
    session.send("a").await.unwrap();
    session.send("b").await.unwrap();

    session.reset();
    assert!(session.history().is_empty());
    session.reset();
    assert!(session.history().is_empty());

    session.send("c").await.unwrap();
    assert_eq!(client.payloads().last().unwrap().len(), 2);
}

#[test]
fn reset_on_fresh_session_is_noop() {
    let client = Arc::new(ScriptedClient::new());
    let mut session = session_with(&client);
    session.reset();
    assert!(session.is_empty());
}

#[tokio::test]
async fn usage_is_recorded_only_on_success() {
    let client = Arc::new(
        ScriptedClient::new()
            .reply("ok")
            .fail(AiError::Timeout),
    );
    let mut session = session_with(&client);

    session.send("x").await.unwrap();
    let _ = session.send("y").await;

    assert_eq!(session.tracker().call_count(), 1);
    assert!(session.tracker().for_model("scripted").is_some());
}

#[test]
fn build_payload_on_empty_session() {
    let client = Arc::new(ScriptedClient::new());
    let session = session_with(&client);
    let payload = session.build_payload("hello");
    assert_eq!(payload, vec![Message::system(DIRECTIVE), Message::user("hello")]);
}

#[test]
fn render_reply_formats_errors() {
    assert_eq!(render_reply(&Ok("fine".into())), "fine");
    assert_eq!(render_reply(&Err(AiError::Timeout)), "Error: Timeout");
}

#[test]
fn session_config_from_persona() {
    let persona = teller_config::schema::PersonaConfig::default();
    let config = SessionConfig::from(&persona);
    assert_eq!(config.system_directive, teller_config::BANKING_DIRECTIVE);
}
