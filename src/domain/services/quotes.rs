//! Flat-rate estimates for corporate events: a base rate per team-size
//! bracket scaled by a duration multiplier (stored in tenths to stay in
//! integer cents). Final pricing happens offline when the booking moves to
//! `quoted`; this figure is the number shown on the enquiry confirmation.

fn base_rate_cents(team_size: &str) -> Option<i64> {
    match team_size {
        "10-20" => Some(200_000),
        "21-50" => Some(450_000),
        "51-100" => Some(800_000),
        "100+" => Some(1_500_000),
        _ => None,
    }
}

fn duration_multiplier_tenths(duration: &str) -> Option<i64> {
    match duration {
        "2h" => Some(10),
        "3h" => Some(14),
        "4h" => Some(18),
        "full_day" => Some(25),
        _ => None,
    }
}

/// `None` when either enum value is unknown; callers turn that into a 400.
pub fn estimate_cents(team_size: &str, duration: &str) -> Option<i64> {
    let base = base_rate_cents(team_size)?;
    let mult = duration_multiplier_tenths(duration)?;
    Some(base * mult / 10)
}
