//! Prompt templates. Each asks for a single JSON object so the response can
//! go through [`crate::extract::parse_json_object`]; chat is the exception
//! and answers in plain text.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::types::{ChatRole, ChatTurn, VehicleProfile};

/// Only this many of the most recent chat turns are forwarded.
pub const CHAT_HISTORY_TURNS: usize = 4;

/// At most this many reviews go into a summary prompt.
pub const MAX_SUMMARY_REVIEWS: usize = 10;

#[must_use]
pub fn refine_query(query: &str) -> String {
    format!(
        r#"You help drivers in the United Arab Emirates find the right garage.
A user typed this search: "{query}"

Rewrite it as a short Google Maps search for a garage or parts shop and
diagnose the likely problem. Costs are in AED at typical UAE workshop rates.

Respond with only this JSON object:
{{
  "searchQuery": "short search text",
  "possibleIssue": "one sentence",
  "estimatedCost": "AED low - high",
  "urgency": "low" | "medium" | "high",
  "recommendedService": "service name",
  "diyPossible": true | false
}}"#
    )
}

#[must_use]
pub fn summarize_reviews(place_name: &str, reviews: &[String]) -> String {
    let mut listing = String::new();
    for (i, review) in reviews.iter().take(MAX_SUMMARY_REVIEWS).enumerate() {
        let _ = writeln!(listing, "{}. {}", i + 1, review.trim());
    }
    format!(
        r#"Summarize these customer reviews of "{place_name}", a UAE auto business,
in two or three neutral sentences. Mention recurring praise and complaints
about price, speed, and honesty when present.

Reviews:
{listing}
Respond with only this JSON object: {{"summary": "..."}}"#
    )
}

#[must_use]
pub fn maintenance_plan(vehicle: &VehicleProfile, today: NaiveDate) -> String {
    let mileage = vehicle
        .mileage_km
        .map_or_else(|| "unknown".to_string(), |km| format!("{km} km"));
    let last_service = vehicle.last_service_date.as_deref().unwrap_or("unknown");
    let conditions = vehicle
        .driving_conditions
        .as_deref()
        .unwrap_or("typical UAE city driving with summer heat and dust");

    format!(
        r#"You are a certified mechanic in the UAE. Today is {today}.
Vehicle: {name}
Mileage: {mileage}
Last service: {last_service}
Driving conditions: {conditions}

Produce a maintenance plan for the next 12 months that accounts for extreme
heat, sand, and stop-and-go traffic. Costs in AED.

Respond with only this JSON object:
{{
  "summary": "two sentences",
  "healthScore": 0-100,
  "upcoming": [
    {{
      "service": "name",
      "dueInKm": number or null,
      "dueDate": "YYYY-MM-DD" or null,
      "estimatedCostAed": "low - high",
      "priority": "low" | "medium" | "high",
      "notes": "short note"
    }}
  ],
  "tips": ["..."],
  "warnings": ["..."]
}}"#,
        name = vehicle.display_name(),
    )
}

/// Last [`CHAT_HISTORY_TURNS`] entries of `history`, oldest first.
#[must_use]
pub fn recent_history(history: &[ChatTurn]) -> &[ChatTurn] {
    let start = history.len().saturating_sub(CHAT_HISTORY_TURNS);
    &history[start..]
}

#[must_use]
pub fn chat(question: &str, vehicle: Option<&VehicleProfile>, history: &[ChatTurn]) -> String {
    let mut prompt = String::from(
        "You are a friendly, practical car mechanic advising a driver in the UAE. \
         Answer in at most 150 words. Quote costs in AED. Recommend a workshop visit \
         when a repair is unsafe to attempt at home.\n",
    );

    if let Some(vehicle) = vehicle {
        let name = vehicle.display_name();
        if !name.is_empty() {
            let _ = writeln!(prompt, "\nThe driver's car: {name}");
        }
        if let Some(km) = vehicle.mileage_km {
            let _ = writeln!(prompt, "Mileage: {km} km");
        }
    }

    let recent = recent_history(history);
    if !recent.is_empty() {
        prompt.push_str("\nConversation so far:\n");
        for turn in recent {
            let speaker = match turn.role {
                ChatRole::User => "Driver",
                ChatRole::Assistant => "Mechanic",
            };
            let _ = writeln!(prompt, "{speaker}: {}", turn.content.trim());
        }
    }

    let _ = write!(prompt, "\nDriver: {}\nMechanic:", question.trim());
    prompt
}

#[must_use]
pub fn events(today: NaiveDate) -> String {
    format!(
        r#"Today is {today}. List 5 upcoming or recurring motoring events in the
United Arab Emirates (car shows, motorsport, owners' meetups, trade fairs).

Respond with only this JSON object:
{{"events": [{{"title": "...", "date": "...", "location": "...", "description": "one sentence"}}]}}"#
    )
}

#[must_use]
pub fn laws(today: NaiveDate) -> String {
    format!(
        r#"Today is {today}. List 5 current UAE traffic or vehicle regulations that
drivers should know about (fines, registration, tinting, inspections).

Respond with only this JSON object:
{{"laws": [{{"title": "...", "summary": "one sentence", "effectiveDate": "...", "authority": "issuing authority"}}]}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: ChatRole, content: &str) -> ChatTurn {
        ChatTurn {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn recent_history_keeps_last_four() {
        let history: Vec<ChatTurn> = (0..7)
            .map(|i| turn(ChatRole::User, &format!("q{i}")))
            .collect();
        let recent = recent_history(&history);
        let contents: Vec<&str> = recent.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["q3", "q4", "q5", "q6"]);
    }

    #[test]
    fn recent_history_short_is_unchanged() {
        let history = vec![turn(ChatRole::User, "hi")];
        assert_eq!(recent_history(&history).len(), 1);
        assert!(recent_history(&[]).is_empty());
    }

    #[test]
    fn chat_prompt_drops_old_turns() {
        let history = vec![
            turn(ChatRole::User, "oldest question"),
            turn(ChatRole::Assistant, "a1"),
            turn(ChatRole::User, "q2"),
            turn(ChatRole::Assistant, "a2"),
            turn(ChatRole::User, "q3"),
        ];
        let prompt = chat("what oil?", None, &history);
        assert!(!prompt.contains("oldest question"));
        assert!(prompt.contains("Mechanic: a1"));
        assert!(prompt.ends_with("Driver: what oil?\nMechanic:"));
    }

    #[test]
    fn summary_prompt_caps_reviews() {
        let reviews: Vec<String> = (1..=15).map(|i| format!("review number {i}")).collect();
        let prompt = summarize_reviews("Test Garage", &reviews);
        assert!(prompt.contains("review number 10"));
        assert!(!prompt.contains("review number 11"));
    }

    #[test]
    fn maintenance_prompt_names_vehicle() {
        let vehicle = VehicleProfile {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2018".to_string(),
            mileage_km: Some(120_000),
            ..VehicleProfile::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let prompt = maintenance_plan(&vehicle, today);
        assert!(prompt.contains("Vehicle: 2018 Toyota Camry"));
        assert!(prompt.contains("Mileage: 120000 km"));
        assert!(prompt.contains("Today is 2026-03-01"));
    }
}
