//! Claim submission model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClaimError;

/// Line of business the claim is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceType {
    Health,
    Auto,
    Property,
    Life,
    Travel,
    Home,
}

/// Reported severity of the incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentSeverity {
    #[serde(rename = "Minor Loss", alias = "Minor")]
    Minor,
    #[serde(rename = "Major Loss", alias = "Major")]
    Major,
    #[serde(rename = "Total Loss", alias = "Total")]
    Total,
}

impl fmt::Display for IncidentSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncidentSeverity::Minor => "minor loss",
            IncidentSeverity::Major => "major loss",
            IncidentSeverity::Total => "total loss",
        };
        f.write_str(label)
    }
}

/// Underwriting risk segment of the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskSegment {
    Low,
    Medium,
    High,
}

/// A claim as submitted for fraud screening
///
/// All amounts are in the same currency unit. Chronological ordering of the
/// dates is not enforced on construction; see [`ClaimSubmission::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSubmission {
    pub policy_start_date: NaiveDate,
    pub loss_date: NaiveDate,
    pub report_date: NaiveDate,
    pub insurance_type: InsuranceType,
    pub premium_amount: Decimal,
    pub claim_amount: Decimal,
    pub incident_severity: IncidentSeverity,
    pub police_report_available: bool,
    /// Local hour of day, 0-23
    pub incident_hour: u8,
    pub any_injury: bool,
    pub customer_tenure_years: u32,
    pub risk_segment: RiskSegment,
}

impl ClaimSubmission {
    /// Days between policy start and the loss; negative if the loss predates the policy
    pub fn days_to_loss(&self) -> i64 {
        (self.loss_date - self.policy_start_date).num_days()
    }

    /// Days between the loss and its report; negative if reported before the loss
    pub fn days_to_report(&self) -> i64 {
        (self.report_date - self.loss_date).num_days()
    }

    /// Claim amount divided by premium amount
    ///
    /// Returns `None` when there is no positive premium to compare against.
    /// A quotient too large for `Decimal` saturates at `Decimal::MAX`
    /// (or `Decimal::MIN` for a negative claim).
    pub fn claim_to_premium_ratio(&self) -> Option<Decimal> {
        if self.premium_amount <= Decimal::ZERO {
            return None;
        }
        let ratio = self
            .claim_amount
            .checked_div(self.premium_amount)
            .unwrap_or(if self.claim_amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            });
        Some(ratio)
    }

    /// Checks the submission against the strict input contract
    ///
    /// Every violation is reported, not just the first one.
    pub fn validate(&self) -> Result<(), ClaimError> {
        let mut violations = Vec::new();

        if self.loss_date < self.policy_start_date {
            violations.push(format!(
                "lossDate {} is before policyStartDate {}",
                self.loss_date, self.policy_start_date
            ));
        }
        if self.report_date < self.loss_date {
            violations.push(format!(
                "reportDate {} is before lossDate {}",
                self.report_date, self.loss_date
            ));
        }
        if self.premium_amount <= Decimal::ZERO {
            violations.push("premiumAmount must be greater than zero".to_string());
        }
        if self.claim_amount < Decimal::ZERO {
            violations.push("claimAmount must not be negative".to_string());
        }
        if self.incident_hour > 23 {
            violations.push(format!(
                "incidentHour must be between 0 and 23, got {}",
                self.incident_hour
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ClaimError::InvalidInput { violations })
        }
    }
}
