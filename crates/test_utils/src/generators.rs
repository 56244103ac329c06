//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim submissions. Dates are generated
//! around the 30-day and 7-day rule thresholds so both sides get exercised,
//! including out-of-order dates.

use chrono::{Duration, NaiveDate};
use domain_claims::{ClaimSubmission, IncidentSeverity, InsuranceType, RiskSegment};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for insurance types
pub fn insurance_type_strategy() -> impl Strategy<Value = InsuranceType> {
    prop_oneof![
        Just(InsuranceType::Health),
        Just(InsuranceType::Auto),
        Just(InsuranceType::Property),
        Just(InsuranceType::Life),
        Just(InsuranceType::Travel),
        Just(InsuranceType::Home),
    ]
}

/// Strategy for incident severities
pub fn incident_severity_strategy() -> impl Strategy<Value = IncidentSeverity> {
    prop_oneof![
        Just(IncidentSeverity::Minor),
        Just(IncidentSeverity::Major),
        Just(IncidentSeverity::Total),
    ]
}

/// Strategy for risk segments
pub fn risk_segment_strategy() -> impl Strategy<Value = RiskSegment> {
    prop_oneof![
        Just(RiskSegment::Low),
        Just(RiskSegment::Medium),
        Just(RiskSegment::High),
    ]
}

/// Strategy for currency amounts with two decimal places (0.00 to 100,000.00)
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for premiums, occasionally zero
pub fn premium_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        1 => Just(Decimal::ZERO),
        9 => (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    ]
}

/// Strategy for any claim submission, consistent or not
pub fn claim_submission_strategy() -> impl Strategy<Value = ClaimSubmission> {
    let dates = (0i64..730i64, -60i64..400i64, -10i64..40i64);
    let amounts = (premium_strategy(), amount_strategy());
    let categories = (
        insurance_type_strategy(),
        incident_severity_strategy(),
        risk_segment_strategy(),
    );
    let details = (any::<bool>(), 0u8..24u8, any::<bool>(), 0u32..15u32);

    (dates, amounts, categories, details).prop_map(
        |(
            (start_offset, days_to_loss, days_to_report),
            (premium_amount, claim_amount),
            (insurance_type, incident_severity, risk_segment),
            (police_report_available, incident_hour, any_injury, customer_tenure_years),
        )| {
            let base = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
            let policy_start_date = base + Duration::days(start_offset);
            let loss_date = policy_start_date + Duration::days(days_to_loss);
            let report_date = loss_date + Duration::days(days_to_report);

            ClaimSubmission {
                policy_start_date,
                loss_date,
                report_date,
                insurance_type,
                premium_amount,
                claim_amount,
                incident_severity,
                police_report_available,
                incident_hour,
                any_injury,
                customer_tenure_years,
                risk_segment,
            }
        },
    )
}
