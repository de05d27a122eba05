//! NLU packet -> perception events
//!
//! Packet-level cues (sentiment, politeness, engagement, expectation score,
//! topic, intent) are shared by every event in the packet. Labels the core
//! does not know fall back to InfoRequest, and a packet with no events still
//! produces one low-intensity InfoRequest so every turn is perceived.

use crate::bridge::nlu::NluPacket;
use crate::core::types::{SimTime, SourceId};
use crate::perception::event::{PerceptionEvent, PerceptionEventType};

const FALLBACK_INTENSITY: f32 = 0.3;

#[derive(Debug, Clone, Copy, Default)]
pub struct EventMapper;

impl EventMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, packet: &NluPacket, source_id: &SourceId, now: SimTime) -> Vec<PerceptionEvent> {
        let mut events: Vec<PerceptionEvent> = packet
            .events
            .iter()
            .map(|e| {
                with_cues(
                    packet,
                    source_id,
                    parse_event_type(&e.kind),
                    e.intensity,
                    &packet.intent,
                    &e.evidence,
                    now,
                )
            })
            .collect();

        if events.is_empty() {
            let intent = if packet.intent.is_empty() { "unknown" } else { packet.intent.as_str() };
            events.push(with_cues(
                packet,
                source_id,
                PerceptionEventType::InfoRequest,
                FALLBACK_INTENSITY,
                intent,
                "fallback",
                now,
            ));
        }

        events
    }
}

fn with_cues(
    packet: &NluPacket,
    source_id: &SourceId,
    event_type: PerceptionEventType,
    intensity: f32,
    intent: &str,
    evidence: &str,
    now: SimTime,
) -> PerceptionEvent {
    PerceptionEvent::new(event_type, source_id.clone(), intensity, packet.topic.clone(), now)
        .with_intent(intent)
        .with_sentiment(packet.sentiment)
        .with_politeness(packet.politeness)
        .with_engagement(packet.engagement)
        .with_expectation_violation(packet.expectation.violation_score)
        .with_evidence(evidence)
}

fn parse_event_type(raw: &str) -> PerceptionEventType {
    if raw.trim().is_empty() {
        return PerceptionEventType::InfoRequest;
    }
    raw.parse().unwrap_or_else(|_| {
        tracing::debug!("Unknown NLU event label {:?}, treating as InfoRequest", raw);
        PerceptionEventType::InfoRequest
    })
}
