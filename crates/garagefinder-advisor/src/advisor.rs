//! High-level generative operations built on [`GeminiClient`].

use chrono::{NaiveDate, Utc};

use crate::client::GeminiClient;
use crate::error::AdvisorError;
use crate::extract::parse_json_object;
use crate::fallback;
use crate::prompts;
use crate::types::{
    ChatTurn, EventItem, EventsEnvelope, LawItem, LawsEnvelope, MaintenancePlan, QueryAnalysis,
    SummaryEnvelope, VehicleProfile,
};

/// Generative operations. Everything except [`Advisor::maintenance_plan`]
/// is infallible from the caller's point of view: failures are logged and
/// replaced with `None` or static content.
pub struct Advisor {
    client: GeminiClient,
}

impl Advisor {
    #[must_use]
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Rewrite a free-text search into provider-ready text plus a short
    /// diagnosis. `None` on any failure or when the model leaves
    /// `searchQuery` blank.
    pub async fn refine_query(&self, query: &str) -> Option<QueryAnalysis> {
        let result: Result<QueryAnalysis, AdvisorError> = self
            .generate_json(&prompts::refine_query(query), "refine_query")
            .await;
        match result {
            Ok(analysis) if !analysis.search_query.trim().is_empty() => Some(analysis),
            Ok(_) => {
                tracing::warn!("refine_query returned a blank search query");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "query refinement failed");
                None
            }
        }
    }

    /// Summarize up to ten review texts. `None` when there is nothing to
    /// summarize or the call fails.
    pub async fn summarize_reviews(&self, place_name: &str, reviews: &[String]) -> Option<String> {
        let reviews: Vec<String> = reviews
            .iter()
            .filter(|r| !r.trim().is_empty())
            .take(prompts::MAX_SUMMARY_REVIEWS)
            .cloned()
            .collect();
        if reviews.is_empty() {
            return None;
        }

        let result: Result<SummaryEnvelope, AdvisorError> = self
            .generate_json(
                &prompts::summarize_reviews(place_name, &reviews),
                "summarize_reviews",
            )
            .await;
        match result {
            Ok(envelope) => Some(envelope.summary.trim().to_string()).filter(|s| !s.is_empty()),
            Err(e) => {
                tracing::warn!(place = place_name, error = %e, "review summary failed");
                None
            }
        }
    }

    /// Maintenance plan for `vehicle`. Unlike the other operations this one
    /// does not fall back: an unusable model response is an error.
    ///
    /// # Errors
    ///
    /// Any [`AdvisorError`] from the call or from parsing the plan.
    pub async fn maintenance_plan(
        &self,
        vehicle: &VehicleProfile,
    ) -> Result<MaintenancePlan, AdvisorError> {
        let prompt = prompts::maintenance_plan(vehicle, today());
        self.generate_json(&prompt, "maintenance_plan").await
    }

    /// Answer a follow-up question. Only the last four history turns are
    /// sent. Returns the static apology on failure.
    pub async fn chat_answer(
        &self,
        question: &str,
        vehicle: Option<&VehicleProfile>,
        history: &[ChatTurn],
    ) -> String {
        let prompt = prompts::chat(question, vehicle, history);
        match self.client.generate(&prompt, "chat").await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "chat answer failed");
                fallback::CHAT_APOLOGY.to_string()
            }
        }
    }

    /// Motoring events, or the static list when generation fails or
    /// returns nothing.
    pub async fn events(&self) -> Vec<EventItem> {
        let result: Result<EventsEnvelope, AdvisorError> =
            self.generate_json(&prompts::events(today()), "events").await;
        match result {
            Ok(envelope) if !envelope.events.is_empty() => envelope.events,
            Ok(_) => fallback::events(),
            Err(e) => {
                tracing::warn!(error = %e, "events generation failed; using fallback");
                fallback::events()
            }
        }
    }

    /// Traffic regulations, or the static list when generation fails or
    /// returns nothing.
    pub async fn laws(&self) -> Vec<LawItem> {
        let result: Result<LawsEnvelope, AdvisorError> =
            self.generate_json(&prompts::laws(today()), "laws").await;
        match result {
            Ok(envelope) if !envelope.laws.is_empty() => envelope.laws,
            Ok(_) => fallback::laws(),
            Err(e) => {
                tracing::warn!(error = %e, "laws generation failed; using fallback");
                fallback::laws()
            }
        }
    }

    async fn generate_json<T: serde::de::DeserializeOwned>(
        &self,
        prompt: &str,
        context: &str,
    ) -> Result<T, AdvisorError> {
        let text = self.client.generate(prompt, context).await?;
        parse_json_object(&text, context)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
