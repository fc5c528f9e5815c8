//! Typed shapes for model output and advisor inputs.
//!
//! Model output is loosely structured, so nearly every field is defaulted.
//! Keys are camelCase on the wire to match what the prompts ask for and what
//! clients consume.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Serialized lowercase. Deserialization accepts any value: labels are
/// matched by keyword and anything unrecognized becomes `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    /// Map a free-form label such as `"Low priority"` or `"URGENT"`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if ["high", "urgent", "critical", "severe", "immediate"]
            .iter()
            .any(|k| label.contains(k))
        {
            Urgency::High
        } else if ["low", "minor", "routine"].iter().any(|k| label.contains(k)) {
            Urgency::Low
        } else {
            Urgency::Medium
        }
    }
}

impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(label) => Urgency::from_label(&label),
            _ => Urgency::Medium,
        })
    }
}

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"));

/// First number in `value`: a JSON number, or the first numeric run of a
/// string with thousands separators removed (`"5,000 km"` is 5000).
fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let compact = s.replace(',', "");
            NUMBER_RE.find(&compact)?.as_str().parse().ok()
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(loose_number(&value)
        .filter(|n| n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n.round() as u32))
}

/// Rounded and clamped to 0-100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(loose_number(&value)
        .filter(|n| n.is_finite())
        .map(|n| n.round().clamp(0.0, 100.0) as u8))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Structured reading of a free-text search such as "ac blowing hot air".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAnalysis {
    /// Provider-ready search text.
    pub search_query: String,
    #[serde(default)]
    pub possible_issue: String,
    /// Human-readable estimate, e.g. `"AED 150 - 400"`.
    #[serde(default)]
    pub estimated_cost: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub recommended_service: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub diy_possible: Option<bool>,
}

/// Vehicle attributes supplied by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub mileage_km: Option<u32>,
    #[serde(default)]
    pub last_service_date: Option<String>,
    /// Free text such as "mostly highway, summer heat".
    #[serde(default)]
    pub driving_conditions: Option<String>,
}

impl VehicleProfile {
    /// `"2019 Toyota Land Cruiser"`, skipping empty parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.year.trim(), self.make.trim(), self.model.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub service: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub due_in_km: Option<u32>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_cost_aed: Option<String>,
    #[serde(default)]
    pub priority: Urgency,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Maintenance schedule for one vehicle. `summary` and `upcoming` are
/// required; a response without them is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePlan {
    pub summary: String,
    /// 0-100.
    #[serde(default, deserialize_with = "lenient_score")]
    pub health_score: Option<u8>,
    pub upcoming: Vec<ServiceItem>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    #[serde(alias = "model")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub authority: String,
}

// Envelopes the prompts ask the model to fill.

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventsEnvelope {
    #[serde(default)]
    pub events: Vec<EventItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LawsEnvelope {
    #[serde(default)]
    pub laws: Vec<LawItem>,
}

// ---------------------------------------------------------------------------
// Gemini generateContent wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestContent<'a> {
    pub role: &'static str,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, if any.
    pub(crate) fn first_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
