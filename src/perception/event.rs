use crate::core::error::RapportError;
use crate::core::types::{clamp01, SimTime, SourceId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social act categories an interaction can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PerceptionEventType {
    Greeting,
    Farewell,
    InfoRequest,
    PoliteRequest,
    Demand,
    Thanks,
    Praise,
    Apology,
    Agreement,
    Disagreement,
    Confusion,
    Criticism,
    Insult,
    Threat,
    BoundaryViolation,
    PromiseMade,
    PromiseKept,
    PromiseBroken,
    TopicShift,
    NoResponse,
}

impl PerceptionEventType {
    pub const ALL: [PerceptionEventType; 20] = [
        PerceptionEventType::Greeting,
        PerceptionEventType::Farewell,
        PerceptionEventType::InfoRequest,
        PerceptionEventType::PoliteRequest,
        PerceptionEventType::Demand,
        PerceptionEventType::Thanks,
        PerceptionEventType::Praise,
        PerceptionEventType::Apology,
        PerceptionEventType::Agreement,
        PerceptionEventType::Disagreement,
        PerceptionEventType::Confusion,
        PerceptionEventType::Criticism,
        PerceptionEventType::Insult,
        PerceptionEventType::Threat,
        PerceptionEventType::BoundaryViolation,
        PerceptionEventType::PromiseMade,
        PerceptionEventType::PromiseKept,
        PerceptionEventType::PromiseBroken,
        PerceptionEventType::TopicShift,
        PerceptionEventType::NoResponse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PerceptionEventType::Greeting => "Greeting",
            PerceptionEventType::Farewell => "Farewell",
            PerceptionEventType::InfoRequest => "InfoRequest",
            PerceptionEventType::PoliteRequest => "PoliteRequest",
            PerceptionEventType::Demand => "Demand",
            PerceptionEventType::Thanks => "Thanks",
            PerceptionEventType::Praise => "Praise",
            PerceptionEventType::Apology => "Apology",
            PerceptionEventType::Agreement => "Agreement",
            PerceptionEventType::Disagreement => "Disagreement",
            PerceptionEventType::Confusion => "Confusion",
            PerceptionEventType::Criticism => "Criticism",
            PerceptionEventType::Insult => "Insult",
            PerceptionEventType::Threat => "Threat",
            PerceptionEventType::BoundaryViolation => "BoundaryViolation",
            PerceptionEventType::PromiseMade => "PromiseMade",
            PerceptionEventType::PromiseKept => "PromiseKept",
            PerceptionEventType::PromiseBroken => "PromiseBroken",
            PerceptionEventType::TopicShift => "TopicShift",
            PerceptionEventType::NoResponse => "NoResponse",
        }
    }

    /// Acts the agent always answers by holding a boundary
    pub fn is_hostile(&self) -> bool {
        matches!(
            self,
            PerceptionEventType::Threat
                | PerceptionEventType::Insult
                | PerceptionEventType::BoundaryViolation
                | PerceptionEventType::PromiseBroken
        )
    }
}

impl fmt::Display for PerceptionEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PerceptionEventType {
    type Err = RapportError;

    /// Case-insensitive; also accepts the older label vocabulary
    /// (`compliment`, `helped`, `threatened`, `ignored`, ...).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let label = raw.trim();
        if let Some(t) = Self::ALL
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(label))
        {
            return Ok(*t);
        }

        match label.to_ascii_lowercase().as_str() {
            "compliment" | "helped" => Ok(PerceptionEventType::Praise),
            "threatened" => Ok(PerceptionEventType::Threat),
            "ignored" => Ok(PerceptionEventType::NoResponse),
            "neutralinteraction" => Ok(PerceptionEventType::InfoRequest),
            "violatedexpectation" => Ok(PerceptionEventType::BoundaryViolation),
            _ => Err(RapportError::UnknownEventType(raw.to_string())),
        }
    }
}

/// An immutable, classified social stimulus
///
/// Bounded fields are clamped on the way in, so everything downstream can
/// treat them as valid. Non-finite inputs fall back to the field's neutral
/// default. Deserialized events go through the same clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPerceptionEvent")]
pub struct PerceptionEvent {
    event_type: PerceptionEventType,
    source_id: SourceId,
    /// 0..1
    intensity: f32,
    context_tag: String,
    /// Free-text label such as "request_help" or "complaint"
    intent: String,
    /// -1..1
    sentiment: f32,
    /// 0..1
    politeness: f32,
    /// 0..1
    engagement: f32,
    /// 0..1
    expectation_violation: f32,
    evidence: String,
    timestamp: SimTime,
}

/// Wire shape of an event before its fields are clamped
#[derive(Deserialize)]
struct RawPerceptionEvent {
    event_type: PerceptionEventType,
    source_id: SourceId,
    intensity: f32,
    context_tag: String,
    intent: String,
    sentiment: f32,
    politeness: f32,
    engagement: f32,
    expectation_violation: f32,
    evidence: String,
    timestamp: SimTime,
}

impl From<RawPerceptionEvent> for PerceptionEvent {
    fn from(raw: RawPerceptionEvent) -> Self {
        PerceptionEvent::new(
            raw.event_type,
            raw.source_id,
            raw.intensity,
            raw.context_tag,
            raw.timestamp,
        )
        .with_intent(raw.intent)
        .with_sentiment(raw.sentiment)
        .with_politeness(raw.politeness)
        .with_engagement(raw.engagement)
        .with_expectation_violation(raw.expectation_violation)
        .with_evidence(raw.evidence)
    }
}

impl PerceptionEvent {
    pub fn new(
        event_type: PerceptionEventType,
        source_id: impl Into<SourceId>,
        intensity: f32,
        context_tag: impl Into<String>,
        timestamp: SimTime,
    ) -> Self {
        Self {
            event_type,
            source_id: source_id.into(),
            intensity: clamp01(intensity),
            context_tag: context_tag.into(),
            intent: String::new(),
            sentiment: 0.0,
            politeness: 0.5,
            engagement: 0.5,
            expectation_violation: 0.0,
            evidence: String::new(),
            timestamp: if timestamp.is_finite() { timestamp } else { 0.0 },
        }
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = intent.into();
        self
    }

    pub fn with_sentiment(mut self, sentiment: f32) -> Self {
        self.sentiment = if sentiment.is_finite() {
            sentiment.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        self
    }

    pub fn with_politeness(mut self, politeness: f32) -> Self {
        self.politeness = if politeness.is_finite() { clamp01(politeness) } else { 0.5 };
        self
    }

    pub fn with_engagement(mut self, engagement: f32) -> Self {
        self.engagement = if engagement.is_finite() { clamp01(engagement) } else { 0.5 };
        self
    }

    pub fn with_expectation_violation(mut self, violation: f32) -> Self {
        self.expectation_violation = clamp01(violation);
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }

    pub fn event_type(&self) -> PerceptionEventType {
        self.event_type
    }

    pub fn source_id(&self) -> &SourceId {
        &self.source_id
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn context_tag(&self) -> &str {
        &self.context_tag
    }

    pub fn intent(&self) -> &str {
        &self.intent
    }

    pub fn sentiment(&self) -> f32 {
        self.sentiment
    }

    pub fn politeness(&self) -> f32 {
        self.politeness
    }

    pub fn engagement(&self) -> f32 {
        self.engagement
    }

    pub fn expectation_violation(&self) -> f32 {
        self.expectation_violation
    }

    pub fn evidence(&self) -> &str {
        &self.evidence
    }

    pub fn timestamp(&self) -> SimTime {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_intensity_and_sets_defaults() {
        let ev = PerceptionEvent::new(PerceptionEventType::Praise, "User", 1.7, "test", 3.0);
        assert_eq!(ev.intensity(), 1.0);
        assert_eq!(ev.sentiment(), 0.0);
        assert!((ev.politeness() - 0.5).abs() < 1e-6);
        assert!((ev.engagement() - 0.5).abs() < 1e-6);
        assert_eq!(ev.expectation_violation(), 0.0);
        assert_eq!(ev.intent(), "");
        assert_eq!(ev.source_id().as_str(), "User");
        assert_eq!(ev.timestamp(), 3.0);
    }

    #[test]
    fn test_deserialized_event_is_clamped() {
        let ev = PerceptionEvent::new(PerceptionEventType::Praise, "User", 0.5, "chat", 2.0)
            .with_intent("compliment");
        let mut json = serde_json::to_value(&ev).unwrap();
        json["intensity"] = serde_json::json!(7.5);
        json["sentiment"] = serde_json::json!(-9.0);
        json["politeness"] = serde_json::json!(-0.5);
        json["expectation_violation"] = serde_json::json!(3.0);

        let loaded: PerceptionEvent = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.intensity(), 1.0);
        assert_eq!(loaded.sentiment(), -1.0);
        assert_eq!(loaded.politeness(), 0.0);
        assert_eq!(loaded.expectation_violation(), 1.0);
        assert_eq!(loaded.intent(), "compliment");
        assert_eq!(loaded.context_tag(), "chat");
        assert_eq!(loaded.timestamp(), 2.0);
    }

    #[test]
    fn test_in_range_event_survives_json() {
        let ev = PerceptionEvent::new(PerceptionEventType::Criticism, "Mika", 0.4, "work", 7.0)
            .with_sentiment(-0.3)
            .with_engagement(0.8)
            .with_evidence("that's wrong");
        let json = serde_json::to_string(&ev).unwrap();
        let loaded: PerceptionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, ev);
    }

    #[test]
    fn test_builders_clamp() {
        let ev = PerceptionEvent::new(PerceptionEventType::Insult, "User", -0.2, "", 0.0)
            .with_sentiment(-3.0)
            .with_politeness(2.0)
            .with_engagement(-1.0)
            .with_expectation_violation(9.0);

        assert_eq!(ev.intensity(), 0.0);
        assert_eq!(ev.sentiment(), -1.0);
        assert_eq!(ev.politeness(), 1.0);
        assert_eq!(ev.engagement(), 0.0);
        assert_eq!(ev.expectation_violation(), 1.0);
    }

    #[test]
    fn test_non_finite_inputs_fall_back() {
        let ev = PerceptionEvent::new(PerceptionEventType::Greeting, "User", f32::NAN, "", f64::NAN)
            .with_sentiment(f32::INFINITY)
            .with_politeness(f32::NAN);

        assert_eq!(ev.intensity(), 0.0);
        assert_eq!(ev.sentiment(), 0.0);
        assert!((ev.politeness() - 0.5).abs() < 1e-6);
        assert_eq!(ev.timestamp(), 0.0);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "promisebroken".parse::<PerceptionEventType>().unwrap(),
            PerceptionEventType::PromiseBroken
        );
        assert_eq!(
            "  Praise ".parse::<PerceptionEventType>().unwrap(),
            PerceptionEventType::Praise
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("compliment".parse::<PerceptionEventType>().unwrap(), PerceptionEventType::Praise);
        assert_eq!("Helped".parse::<PerceptionEventType>().unwrap(), PerceptionEventType::Praise);
        assert_eq!("ignored".parse::<PerceptionEventType>().unwrap(), PerceptionEventType::NoResponse);
        assert_eq!(
            "ViolatedExpectation".parse::<PerceptionEventType>().unwrap(),
            PerceptionEventType::BoundaryViolation
        );
    }

    #[test]
    fn test_parse_unknown_fails() {
        assert!(matches!(
            "tickle".parse::<PerceptionEventType>(),
            Err(RapportError::UnknownEventType(_))
        ));
    }

    #[test]
    fn test_hostile_set() {
        let hostile: Vec<_> = PerceptionEventType::ALL
            .iter()
            .filter(|t| t.is_hostile())
            .collect();
        assert_eq!(hostile.len(), 4);
    }
}
