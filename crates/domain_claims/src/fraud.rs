//! Claim fraud risk scoring
//!
//! Seven independent rules each inspect one or two fields of a
//! [`ClaimSubmission`]. A triggered rule contributes a fixed number of points
//! and a [`FraudFlag`]. Rules always run in table order, so flags appear in
//! rule order regardless of which subset fired.
//!
//! | # | Flag                      | Severity | Points |
//! |---|---------------------------|----------|--------|
//! | 1 | Recent Policy             | High     | 25     |
//! | 2 | Delayed Reporting         | Medium   | 15     |
//! | 3 | High Claim Amount         | High     | 20     |
//! | 4 | Late Night Incident       | Medium   | 10     |
//! | 5 | Missing Police Report     | High     | 20     |
//! | 6 | High Risk Profile         | Medium   | 15     |
//! | 7 | New Customer, Large Claim | Medium   | 15     |

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::recommendation::derive_recommendations;
use crate::submission::{ClaimSubmission, IncidentSeverity, RiskSegment};

/// Policies younger than this many days at the loss date are suspicious
pub const RECENT_POLICY_DAYS: i64 = 30;
/// Reports filed more than this many days after the loss are delayed
pub const REPORTING_DELAY_DAYS: i64 = 7;
/// Claim/premium ratio above which a claim is considered high
pub const HIGH_CLAIM_RATIO: Decimal = dec!(10);
/// Incidents at or after this hour count as late night
pub const LATE_NIGHT_FROM_HOUR: u8 = 23;
/// Incidents at or before this hour count as late night
pub const LATE_NIGHT_UNTIL_HOUR: u8 = 4;
/// Customers with fewer years than this are new
pub const NEW_CUSTOMER_TENURE_YEARS: u32 = 2;
/// Claim amount above which a new customer's claim is large
pub const LARGE_CLAIM_AMOUNT: Decimal = dec!(5000);
/// Scores shown to users are clipped to this value
pub const DISPLAY_SCORE_CAP: u32 = 100;

/// Severity attached to a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagSeverity {
    Low,
    Medium,
    High,
}

/// Kind of risk indicator a flag reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagType {
    #[serde(rename = "Recent Policy")]
    RecentPolicy,
    #[serde(rename = "Delayed Reporting")]
    DelayedReporting,
    #[serde(rename = "High Claim Amount")]
    HighClaimAmount,
    #[serde(rename = "Late Night Incident")]
    LateNightIncident,
    #[serde(rename = "Missing Police Report")]
    MissingPoliceReport,
    #[serde(rename = "High Risk Profile")]
    HighRiskProfile,
    #[serde(rename = "New Customer, Large Claim")]
    NewCustomerLargeClaim,
}

impl FlagType {
    pub fn label(&self) -> &'static str {
        match self {
            FlagType::RecentPolicy => "Recent Policy",
            FlagType::DelayedReporting => "Delayed Reporting",
            FlagType::HighClaimAmount => "High Claim Amount",
            FlagType::LateNightIncident => "Late Night Incident",
            FlagType::MissingPoliceReport => "Missing Police Report",
            FlagType::HighRiskProfile => "High Risk Profile",
            FlagType::NewCustomerLargeClaim => "New Customer, Large Claim",
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One triggered risk indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudFlag {
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub description: String,
    pub severity: FlagSeverity,
}

/// Coarse risk bucket derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Maps a score to its tier; every bound is exclusive
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 80 => RiskLevel::VeryHigh,
            s if s > 50 => RiskLevel::High,
            s if s > 25 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// Outcome of scoring one claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudAssessment {
    pub score: u32,
    pub risk_level: RiskLevel,
    pub flags: Vec<FraudFlag>,
    pub recommendations: Vec<String>,
}

impl FraudAssessment {
    /// Score clipped for display
    pub fn display_score(&self) -> u32 {
        self.score.min(DISPLAY_SCORE_CAP)
    }

    pub fn has_flag(&self, flag_type: FlagType) -> bool {
        self.flags.iter().any(|f| f.flag_type == flag_type)
    }
}

/// A single scoring rule
///
/// `check` returns the flag description when the rule triggers.
#[derive(Clone, Copy)]
pub struct FraudRule {
    pub flag_type: FlagType,
    pub severity: FlagSeverity,
    pub points: u32,
    check: fn(&ClaimSubmission) -> Option<String>,
}

impl FraudRule {
    /// Evaluates the rule against a claim
    pub fn evaluate(&self, claim: &ClaimSubmission) -> Option<FraudFlag> {
        (self.check)(claim).map(|description| FraudFlag {
            flag_type: self.flag_type,
            description,
            severity: self.severity,
        })
    }
}

impl fmt::Debug for FraudRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FraudRule")
            .field("flag_type", &self.flag_type)
            .field("severity", &self.severity)
            .field("points", &self.points)
            .finish()
    }
}

/// The rule table, in evaluation order
pub const FRAUD_RULES: [FraudRule; 7] = [
    FraudRule {
        flag_type: FlagType::RecentPolicy,
        severity: FlagSeverity::High,
        points: 25,
        check: recent_policy,
    },
    FraudRule {
        flag_type: FlagType::DelayedReporting,
        severity: FlagSeverity::Medium,
        points: 15,
        check: delayed_reporting,
    },
    FraudRule {
        flag_type: FlagType::HighClaimAmount,
        severity: FlagSeverity::High,
        points: 20,
        check: high_claim_amount,
    },
    FraudRule {
        flag_type: FlagType::LateNightIncident,
        severity: FlagSeverity::Medium,
        points: 10,
        check: late_night_incident,
    },
    FraudRule {
        flag_type: FlagType::MissingPoliceReport,
        severity: FlagSeverity::High,
        points: 20,
        check: missing_police_report,
    },
    FraudRule {
        flag_type: FlagType::HighRiskProfile,
        severity: FlagSeverity::Medium,
        points: 15,
        check: high_risk_profile,
    },
    FraudRule {
        flag_type: FlagType::NewCustomerLargeClaim,
        severity: FlagSeverity::Medium,
        points: 15,
        check: new_customer_large_claim,
    },
];

/// Scores a claim for fraud risk
///
/// Never fails: inconsistent dates are scored with their (possibly negative)
/// day counts, and a missing premium simply disables the ratio rule.
pub fn assess(claim: &ClaimSubmission) -> FraudAssessment {
    let mut score = 0u32;
    let mut flags = Vec::new();

    for rule in &FRAUD_RULES {
        if let Some(flag) = rule.evaluate(claim) {
            score += rule.points;
            flags.push(flag);
        }
    }

    let risk_level = RiskLevel::from_score(score);
    let recommendations = derive_recommendations(&flags, risk_level);

    FraudAssessment {
        score,
        risk_level,
        flags,
        recommendations,
    }
}

fn recent_policy(claim: &ClaimSubmission) -> Option<String> {
    let days = claim.days_to_loss();
    (days < RECENT_POLICY_DAYS)
        .then(|| format!("Policy was purchased only {} days before the incident", days))
}

fn delayed_reporting(claim: &ClaimSubmission) -> Option<String> {
    let days = claim.days_to_report();
    (days > REPORTING_DELAY_DAYS)
        .then(|| format!("Claim was reported {} days after the incident", days))
}

fn high_claim_amount(claim: &ClaimSubmission) -> Option<String> {
    let ratio = claim.claim_to_premium_ratio()?;
    (ratio > HIGH_CLAIM_RATIO).then(|| {
        let rounded = ratio.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("Claim amount is {:.1}x the annual premium", rounded)
    })
}

fn late_night_incident(claim: &ClaimSubmission) -> Option<String> {
    let hour = claim.incident_hour;
    (hour >= LATE_NIGHT_FROM_HOUR || hour <= LATE_NIGHT_UNTIL_HOUR)
        .then(|| format!("Incident occurred at {:02}:00, during late night hours", hour))
}

fn missing_police_report(claim: &ClaimSubmission) -> Option<String> {
    (!claim.police_report_available && claim.incident_severity != IncidentSeverity::Minor)
        .then(|| {
            format!(
                "No police report available for a {} incident",
                claim.incident_severity
            )
        })
}

fn high_risk_profile(claim: &ClaimSubmission) -> Option<String> {
    (claim.risk_segment == RiskSegment::High)
        .then(|| "Customer belongs to the high risk segment".to_string())
}

fn new_customer_large_claim(claim: &ClaimSubmission) -> Option<String> {
    (claim.customer_tenure_years < NEW_CUSTOMER_TENURE_YEARS && claim.claim_amount > LARGE_CLAIM_AMOUNT)
        .then(|| {
            format!(
                "Customer of {} year(s) is claiming more than {}",
                claim.customer_tenure_years, LARGE_CLAIM_AMOUNT
            )
        })
}
