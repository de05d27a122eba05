//! Integration tests for the NLU -> agent -> decision packet path

use rapport::agent::{Agent, RecordingActionSink};
use rapport::bridge::{DecisionExporter, DialogueActionType, EventMapper, NluPacket, StyleTone};
use rapport::core::config::AgentConfig;
use rapport::core::error::RapportError;
use rapport::core::types::SourceId;
use rapport::perception::event::PerceptionEventType;

fn user() -> SourceId {
    SourceId::from("User")
}

fn run_turn(agent: &mut Agent, json: &str, now: f64) -> usize {
    let packet = NluPacket::from_json(json).unwrap();
    let events = EventMapper::new().map(&packet, &user(), now);
    let count = events.len();
    for ev in events {
        agent.push_event(ev);
    }
    agent.tick(now, &mut RecordingActionSink::default());
    count
}

#[test]
fn test_complaint_turn_ends_in_boundary_packet() {
    let mut agent = Agent::new(&AgentConfig::default(), 0.0).unwrap();
    let processed = run_turn(
        &mut agent,
        r#"model says: {"turn_id": 3, "intent": "complaint", "topic": "deadline",
            "sentiment": -0.8, "politeness": 0.1, "engagement": 0.9,
            "expectation": {"type": "reliability", "violation_score": 0.5},
            "events": [{"type": "PromiseBroken", "intensity": 0.9, "evidence": "you promised"}]}"#,
        5.0,
    );
    assert_eq!(processed, 1);

    let packet = DecisionExporter::new().build(3, &agent, &user());
    assert_eq!(packet.action, DialogueActionType::SetBoundary);
    assert_eq!(packet.memory_summary, vec!["PromiseBroken (you promised)"]);
    assert_eq!(packet.action_params.bullets, vec!["deadline"]);
    assert!(packet.relation_state.violation > 0.55);
    assert!((agent.last_violation_score() - packet.relation_state.violation).abs() < 1e-6);
}

#[test]
fn test_small_talk_without_events_still_perceived() {
    let mut agent = Agent::new(&AgentConfig::default(), 0.0).unwrap();
    let processed = run_turn(&mut agent, r#"{"turn_id": 1, "topic": "weather"}"#, 1.0);
    assert_eq!(processed, 1);

    let record = agent.memory().latest().unwrap();
    assert_eq!(record.event.event_type(), PerceptionEventType::InfoRequest);
    assert_eq!(record.event.intent(), "unknown");

    let packet = DecisionExporter::new().build(1, &agent, &user());
    assert_eq!(packet.style, StyleTone::Neutral);
    assert_eq!(packet.memory_summary, vec!["InfoRequest (fallback)"]);
}

#[test]
fn test_friendly_conversation_reaches_friendly_tone() {
    let config = AgentConfig {
        epsilon: 0.0,
        ..AgentConfig::default()
    };
    let mut agent = Agent::new(&config, 0.0).unwrap();
    let turn = r#"{"turn_id": 1, "intent": "gratitude", "topic": "project",
        "sentiment": 0.9, "politeness": 0.9, "engagement": 0.9,
        "events": [{"type": "Thanks", "intensity": 0.9, "evidence": "thank you"},
                   {"type": "compliment", "intensity": 0.9, "evidence": "great work"}]}"#;

    for i in 0..10 {
        run_turn(&mut agent, turn, i as f64);
    }

    let packet = DecisionExporter::new().build(10, &agent, &user());
    assert_eq!(packet.style, StyleTone::Friendly);
    assert_ne!(packet.action, DialogueActionType::SetBoundary);
    assert_eq!(packet.memory_summary.len(), 3);
    assert_eq!(packet.memory_summary[2], "Praise (great work)");
}

#[test]
fn test_malformed_packet_is_an_error() {
    let err = NluPacket::from_json("the model refused to answer").unwrap_err();
    assert!(matches!(err, RapportError::InvalidPacket(_)));
}
