//! Gemini-backed generative helpers: query refinement, review summaries,
//! maintenance plans, chat answers, and UAE motoring events/laws content.
//!
//! Every helper makes one `generateContent` call. Apart from
//! [`Advisor::maintenance_plan`], failures degrade to `None` or a static
//! fallback instead of surfacing an error.

pub mod advisor;
pub mod client;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod prompts;
pub mod types;

pub use advisor::Advisor;
pub use client::GeminiClient;
pub use error::AdvisorError;
pub use extract::{extract_json_object, parse_json_object};
pub use types::{
    ChatRole, ChatTurn, EventItem, LawItem, MaintenancePlan, QueryAnalysis, ServiceItem, Urgency,
    VehicleProfile,
};
