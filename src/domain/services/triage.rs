//! Keyword triage for incoming contact tickets. Runs once on first save;
//! later edits never re-categorize.

const BOOKING_KEYWORDS: [&str; 4] = ["booking", "reservation", "reschedule", "slot"];
const PRICING_KEYWORDS: [&str; 5] = ["price", "pricing", "cost", "payment", "refund"];
const CORPORATE_KEYWORDS: [&str; 4] = ["corporate", "company", "team event", "team building"];
const COMPLAINT_KEYWORDS: [&str; 4] = ["complaint", "disappointed", "unacceptable", "terrible"];
const FEEDBACK_KEYWORDS: [&str; 3] = ["feedback", "suggestion", "loved"];

const URGENT_KEYWORDS: [&str; 4] = ["urgent", "asap", "immediately", "emergency"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Picks a category from subject + message. Order matters: complaints win
/// over everything so an angry booking mail lands with the right team.
pub fn categorize(subject: &str, message: &str) -> String {
    let text = format!("{} {}", subject, message).to_lowercase();

    if contains_any(&text, &COMPLAINT_KEYWORDS) {
        "complaint"
    } else if contains_any(&text, &CORPORATE_KEYWORDS) {
        "corporate"
    } else if contains_any(&text, &BOOKING_KEYWORDS) {
        "booking"
    } else if contains_any(&text, &PRICING_KEYWORDS) {
        "pricing"
    } else if contains_any(&text, &FEEDBACK_KEYWORDS) {
        "feedback"
    } else {
        "general"
    }
    .to_string()
}

/// Complaints and anything flagged urgent go high, feedback goes low,
/// the rest stays medium.
pub fn prioritize(subject: &str, message: &str, category: &str) -> String {
    let text = format!("{} {}", subject, message).to_lowercase();

    if category == "complaint" || contains_any(&text, &URGENT_KEYWORDS) {
        "high"
    } else if category == "feedback" {
        "low"
    } else {
        "medium"
    }
    .to_string()
}
