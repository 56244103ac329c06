//! Test Data Builders
//!
//! The claim builder starts from a submission that triggers no fraud rule,
//! so a test only has to set the fields it cares about.

use chrono::NaiveDate;
use domain_claims::{ClaimSubmission, IncidentSeverity, InsuranceType, RiskSegment};
use rust_decimal::Decimal;

use crate::fixtures::{AmountFixtures, DateFixtures};

/// Builder for claim submissions
#[derive(Debug, Clone)]
pub struct ClaimSubmissionBuilder {
    claim: ClaimSubmission,
}

impl Default for ClaimSubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimSubmissionBuilder {
    /// Creates a builder for a benign claim (score 0)
    pub fn new() -> Self {
        Self {
            claim: ClaimSubmission {
                policy_start_date: DateFixtures::established_policy_start(),
                loss_date: DateFixtures::loss_date(),
                report_date: DateFixtures::loss_date(),
                insurance_type: InsuranceType::Auto,
                premium_amount: AmountFixtures::premium(),
                claim_amount: AmountFixtures::modest_claim(),
                incident_severity: IncidentSeverity::Major,
                police_report_available: true,
                incident_hour: 14,
                any_injury: false,
                customer_tenure_years: 10,
                risk_segment: RiskSegment::Low,
            },
        }
    }

    pub fn with_policy_start_date(mut self, date: NaiveDate) -> Self {
        self.claim.policy_start_date = date;
        self
    }

    pub fn with_loss_date(mut self, date: NaiveDate) -> Self {
        self.claim.loss_date = date;
        self
    }

    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.claim.report_date = date;
        self
    }

    /// Places the policy start `days` before the loss date
    pub fn with_days_to_loss(mut self, days: i64) -> Self {
        self.claim.policy_start_date = self.claim.loss_date - chrono::Duration::days(days);
        self
    }

    /// Places the report `days` after the loss date
    pub fn with_days_to_report(mut self, days: i64) -> Self {
        self.claim.report_date = self.claim.loss_date + chrono::Duration::days(days);
        self
    }

    pub fn with_insurance_type(mut self, insurance_type: InsuranceType) -> Self {
        self.claim.insurance_type = insurance_type;
        self
    }

    pub fn with_premium_amount(mut self, amount: Decimal) -> Self {
        self.claim.premium_amount = amount;
        self
    }

    pub fn with_claim_amount(mut self, amount: Decimal) -> Self {
        self.claim.claim_amount = amount;
        self
    }

    pub fn with_incident_severity(mut self, severity: IncidentSeverity) -> Self {
        self.claim.incident_severity = severity;
        self
    }

    pub fn with_police_report(mut self, available: bool) -> Self {
        self.claim.police_report_available = available;
        self
    }

    pub fn with_incident_hour(mut self, hour: u8) -> Self {
        self.claim.incident_hour = hour;
        self
    }

    pub fn with_injury(mut self, injury: bool) -> Self {
        self.claim.any_injury = injury;
        self
    }

    pub fn with_tenure_years(mut self, years: u32) -> Self {
        self.claim.customer_tenure_years = years;
        self
    }

    pub fn with_risk_segment(mut self, segment: RiskSegment) -> Self {
        self.claim.risk_segment = segment;
        self
    }

    pub fn build(self) -> ClaimSubmission {
        self.claim
    }
}
