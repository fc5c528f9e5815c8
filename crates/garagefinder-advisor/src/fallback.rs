//! Static content served when the model is unavailable or answers garbage.

use crate::types::{EventItem, LawItem};

pub const CHAT_APOLOGY: &str = "Sorry, I couldn't work that out right now. \
Please try again in a moment, or visit a nearby garage if the problem affects \
braking, steering, or overheating.";

fn event(title: &str, date: &str, location: &str, description: &str) -> EventItem {
    EventItem {
        title: title.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        description: description.to_string(),
    }
}

fn law(title: &str, summary: &str, effective_date: &str, authority: &str) -> LawItem {
    LawItem {
        title: title.to_string(),
        summary: summary.to_string(),
        effective_date: effective_date.to_string(),
        authority: authority.to_string(),
    }
}

#[must_use]
pub fn events() -> Vec<EventItem> {
    vec![
        event(
            "Abu Dhabi Grand Prix",
            "Late November / early December",
            "Yas Marina Circuit, Abu Dhabi",
            "Formula 1 season finale with concerts and fan zones.",
        ),
        event(
            "Dubai International Motor Show",
            "November",
            "Dubai World Trade Centre",
            "Regional launches from major manufacturers and tuners.",
        ),
        event(
            "Automechanika Dubai",
            "December",
            "Dubai World Trade Centre",
            "Trade fair for parts, workshop equipment, and aftermarket services.",
        ),
        event(
            "Emirates Classic Car Festival",
            "March",
            "Dubai",
            "Display of restored classic cars and heritage vehicles.",
        ),
        event(
            "Dubai Autodrome Track Days",
            "Monthly",
            "Dubai Autodrome, Motor City",
            "Open track sessions for private cars with safety briefing.",
        ),
    ]
}

#[must_use]
pub fn laws() -> Vec<LawItem> {
    vec![
        law(
            "Federal Traffic Law (Decree-Law 14 of 2024)",
            "Raises the minimum driving age to 17 and toughens penalties for hit-and-run and driving under the influence.",
            "29 March 2025",
            "UAE Ministry of Interior",
        ),
        law(
            "Mobile phone use while driving",
            "Using a handheld phone at the wheel carries an AED 800 fine and 4 black points.",
            "In force",
            "UAE Ministry of Interior",
        ),
        law(
            "Window tinting limit",
            "Side and rear windows may be tinted up to 50%; windscreen tinting is not permitted.",
            "In force",
            "UAE Ministry of Interior",
        ),
        law(
            "Annual vehicle registration inspection",
            "Vehicles older than three years must pass a technical inspection before registration renewal.",
            "In force",
            "Emirate traffic authorities (RTA, ITC, SRTA)",
        ),
        law(
            "Tailgating penalty",
            "Failing to keep a safe following distance carries an AED 400 fine and 4 black points.",
            "In force",
            "UAE Ministry of Interior",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_lists_are_populated() {
        assert!(!events().is_empty());
        assert!(!laws().is_empty());
        assert!(events().iter().all(|e| !e.title.is_empty()));
        assert!(laws().iter().all(|l| !l.authority.is_empty()));
    }
}
