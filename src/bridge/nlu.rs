//! NLU packet wire format

use crate::core::error::{RapportError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NluPacket {
    pub turn_id: i64,
    /// "request_help", "complaint", ...
    pub intent: String,
    /// Conversation topic, used as the events' context tag
    pub topic: String,
    /// -1..1
    pub sentiment: f32,
    /// 0..1
    pub politeness: f32,
    /// 0..1
    pub engagement: f32,
    pub expectation: ExpectationBlock,
    pub events: Vec<NluEvent>,
    pub constraints: ConstraintBlock,
}

impl Default for NluPacket {
    fn default() -> Self {
        Self {
            turn_id: 0,
            intent: String::new(),
            topic: String::new(),
            sentiment: 0.0,
            politeness: 0.5,
            engagement: 0.5,
            expectation: ExpectationBlock::default(),
            events: Vec::new(),
            constraints: ConstraintBlock::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectationBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub violation_score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintBlock {
    pub language: String,
    pub reply_length: String,
}

impl Default for ConstraintBlock {
    fn default() -> Self {
        Self {
            language: "ru".to_string(),
            reply_length: "short".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NluEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub intensity: f32,
    pub evidence: String,
}

impl NluPacket {
    /// Parse a packet out of a model response, tolerating text around the JSON object
    pub fn from_json(response: &str) -> Result<Self> {
        let json = extract_json(response)?;
        let packet: NluPacket = serde_json::from_str(json).map_err(|e| {
            RapportError::InvalidPacket(format!("{} - Response: {}", e, response))
        })?;
        Ok(packet)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Extract the outermost JSON object from surrounding text
fn extract_json(response: &str) -> Result<&str> {
    let start = response
        .find('{')
        .ok_or_else(|| RapportError::InvalidPacket("No JSON found in response".into()))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| RapportError::InvalidPacket("No closing brace found in response".into()))?;
    if end < start {
        return Err(RapportError::InvalidPacket("Malformed JSON object in response".into()));
    }
    Ok(&response[start..=end])
}
