use crate::domain::models::package::Package;
use chrono::NaiveDate;
use serde::Serialize;

/// Hard ceiling on the combined discount percentage.
pub const MAX_TOTAL_DISCOUNT_PCT: i32 = 50;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    #[serde(rename = "originalPrice")]
    pub original_cents: i64,
    #[serde(rename = "finalPrice")]
    pub final_cents: i64,
    #[serde(rename = "discountApplied")]
    pub discount_pct: i32,
    #[serde(rename = "savings")]
    pub savings_cents: i64,
}

/// Prices a session of `participants` people on `date`.
///
/// Discounts are additive: the corporate percentage (only when `corporate`),
/// the group percentage once the headcount reaches the package threshold,
/// and the seasonal percentage when `date` falls inside the configured range
/// (inclusive on both ends). The combined percentage never exceeds
/// [`MAX_TOTAL_DISCOUNT_PCT`]. Savings are rounded to the nearest cent.
pub fn quote(package: &Package, participants: i32, corporate: bool, date: NaiveDate) -> PriceQuote {
    let original_cents = package.price_cents * participants as i64;

    let mut pct = 0;
    if corporate {
        pct += package.corporate_discount_pct;
    }
    if package.group_min_participants > 0 && participants >= package.group_min_participants {
        pct += package.group_discount_pct;
    }
    if let (Some(start), Some(end)) = (package.seasonal_start, package.seasonal_end) {
        if date >= start && date <= end {
            pct += package.seasonal_discount_pct;
        }
    }
    let pct = pct.min(MAX_TOTAL_DISCOUNT_PCT);

    let savings_cents = (original_cents * pct as i64 + 50) / 100;

    PriceQuote {
        original_cents,
        final_cents: original_cents - savings_cents,
        discount_pct: pct,
        savings_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::package::{NewPackageParams, Package};

    fn test_package() -> Package {
        Package::new(NewPackageParams {
            name: "Rage Room".to_string(),
            slug: "rage-room".to_string(),
            description: "Smash everything".to_string(),
            price_cents: 10_000,
            duration_min: 60,
            capacity_min: 1,
            capacity_max: 10,
            corporate_discount_pct: 20,
            group_discount_pct: 10,
            group_min_participants: 5,
            seasonal_discount_pct: 30,
            seasonal_start: Some(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
            seasonal_end: Some(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
            available_from: None,
            available_until: None,
        })
    }

    fn off_season() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_no_discount() {
        let q = quote(&test_package(), 2, false, off_season());
        assert_eq!(q.original_cents, 20_000);
        assert_eq!(q.final_cents, 20_000);
        assert_eq!(q.discount_pct, 0);
        assert_eq!(q.savings_cents, 0);
    }

    #[test]
    fn test_group_discount_at_threshold() {
        let q = quote(&test_package(), 5, false, off_season());
        assert_eq!(q.discount_pct, 10);
        assert_eq!(q.original_cents, 50_000);
        assert_eq!(q.final_cents, 45_000);
        assert_eq!(q.savings_cents, 5_000);
    }

    #[test]
    fn test_group_discount_below_threshold() {
        let q = quote(&test_package(), 4, false, off_season());
        assert_eq!(q.discount_pct, 0);
    }

    #[test]
    fn test_corporate_discount() {
        let q = quote(&test_package(), 2, true, off_season());
        assert_eq!(q.discount_pct, 20);
        assert_eq!(q.final_cents, 16_000);
    }

    #[test]
    fn test_seasonal_boundaries_inclusive() {
        let pkg = test_package();
        let first = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        assert_eq!(quote(&pkg, 1, false, first).discount_pct, 30);
        assert_eq!(quote(&pkg, 1, false, last).discount_pct, 30);
        assert_eq!(quote(&pkg, 1, false, after).discount_pct, 0);
    }

    #[test]
    fn test_total_discount_capped_at_50() {
        // 20 corporate + 10 group + 30 seasonal = 60, must cap at 50
        let pkg = test_package();
        let in_season = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        let q = quote(&pkg, 5, true, in_season);
        assert_eq!(q.discount_pct, 50);
        assert_eq!(q.original_cents, 50_000);
        assert_eq!(q.final_cents, 25_000);
        assert_eq!(q.savings_cents, 25_000);
    }

    #[test]
    fn test_savings_rounded_to_nearest_cent() {
        let mut pkg = test_package();
        pkg.price_cents = 999;
        pkg.group_min_participants = 0;
        // 10% of 999 = 99.9, rounds to 100
        pkg.corporate_discount_pct = 10;
        let q = quote(&pkg, 1, true, off_season());
        assert_eq!(q.savings_cents, 100);
        assert_eq!(q.final_cents, 899);
    }
}
