//! Pre-built Test Fixtures
//!
//! Claim submissions and values for the documented scoring scenarios.

use chrono::NaiveDate;
use domain_claims::{ClaimSubmission, IncidentSeverity, InsuranceType, RiskSegment};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use crate::builders::ClaimSubmissionBuilder;

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// Policy start two years before the standard loss date
    pub fn established_policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, 10).unwrap()
    }

    /// Standard loss date (Jan 10, 2024)
    pub fn loss_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }
}

/// Fixture for amounts
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn premium() -> Decimal {
        dec!(1000)
    }

    /// Twice the premium, below the large-claim threshold
    pub fn modest_claim() -> Decimal {
        dec!(2000)
    }
}

/// Fixture for whole claim submissions
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A claim that triggers no rule
    pub fn benign() -> ClaimSubmission {
        ClaimSubmissionBuilder::new().build()
    }

    /// Auto claim 9 days into the policy with no police report (score 45)
    pub fn recent_policy_without_police_report() -> ClaimSubmission {
        ClaimSubmission {
            policy_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            loss_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            report_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            insurance_type: InsuranceType::Auto,
            premium_amount: dec!(1000),
            claim_amount: dec!(5000),
            incident_severity: IncidentSeverity::Major,
            police_report_available: false,
            incident_hour: 14,
            any_injury: false,
            customer_tenure_years: 5,
            risk_segment: RiskSegment::Medium,
        }
    }

    /// A claim that triggers every rule (score 120)
    pub fn every_rule_triggered() -> ClaimSubmission {
        ClaimSubmissionBuilder::new()
            .with_days_to_loss(5)
            .with_days_to_report(20)
            .with_claim_amount(dec!(50000))
            .with_incident_hour(2)
            .with_police_report(false)
            .with_incident_severity(IncidentSeverity::Total)
            .with_risk_segment(RiskSegment::High)
            .with_tenure_years(0)
            .build()
    }

    /// JSON body for the recent-policy scenario as a client would send it
    pub fn recent_policy_json() -> Value {
        json!({
            "policyStartDate": "2024-01-01",
            "lossDate": "2024-01-10",
            "reportDate": "2024-01-12",
            "insuranceType": "Auto",
            "premiumAmount": 1000,
            "claimAmount": 5000,
            "incidentSeverity": "Major Loss",
            "policeReportAvailable": false,
            "incidentHour": 14,
            "anyInjury": false,
            "customerTenureYears": 5,
            "riskSegment": "Medium"
        })
    }
}
