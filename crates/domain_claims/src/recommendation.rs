//! Follow-up actions derived from a fraud assessment

use crate::fraud::{FlagSeverity, FlagType, FraudFlag, RiskLevel};

pub const DETAILED_INVESTIGATION: &str = "Conduct detailed investigation with claims adjuster";
pub const REQUEST_POLICE_REPORT: &str = "Request police report or written explanation for its absence";
pub const REQUEST_TIMELINE: &str = "Request detailed timeline of events between incident and reporting";
pub const VERIFY_RECEIPTS: &str = "Verify all claimed items with detailed receipts/documentation";
pub const ON_SITE_INVESTIGATION: &str = "Consider on-site investigation of the claim";
pub const STANDARD_PROCESSING: &str = "Proceed with standard claim processing";

/// Builds the recommendation list for a set of flags
///
/// Order follows the recommendation table, not flag order. Each entry
/// appears at most once.
pub fn derive_recommendations(flags: &[FraudFlag], risk_level: RiskLevel) -> Vec<String> {
    let has_type = |t: FlagType| flags.iter().any(|f| f.flag_type == t);

    let mut recommendations = Vec::new();

    if flags.iter().any(|f| f.severity == FlagSeverity::High) {
        recommendations.push(DETAILED_INVESTIGATION.to_string());
    }
    if has_type(FlagType::MissingPoliceReport) {
        recommendations.push(REQUEST_POLICE_REPORT.to_string());
    }
    if has_type(FlagType::DelayedReporting) {
        recommendations.push(REQUEST_TIMELINE.to_string());
    }
    if has_type(FlagType::HighClaimAmount) {
        recommendations.push(VERIFY_RECEIPTS.to_string());
    }
    if risk_level >= RiskLevel::High {
        recommendations.push(ON_SITE_INVESTIGATION.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(STANDARD_PROCESSING.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(flag_type: FlagType, severity: FlagSeverity) -> FraudFlag {
        FraudFlag {
            flag_type,
            description: String::new(),
            severity,
        }
    }

    #[test]
    fn test_no_flags_means_standard_processing() {
        assert_eq!(
            derive_recommendations(&[], RiskLevel::Low),
            vec![STANDARD_PROCESSING.to_string()]
        );
    }

    #[test]
    fn test_medium_flag_without_matching_action_falls_back() {
        let flags = [flag(FlagType::LateNightIncident, FlagSeverity::Medium)];
        assert_eq!(
            derive_recommendations(&flags, RiskLevel::Low),
            vec![STANDARD_PROCESSING.to_string()]
        );
    }

    #[test]
    fn test_order_follows_table_not_flags() {
        let flags = [
            flag(FlagType::HighClaimAmount, FlagSeverity::High),
            flag(FlagType::DelayedReporting, FlagSeverity::Medium),
            flag(FlagType::MissingPoliceReport, FlagSeverity::High),
        ];

        assert_eq!(
            derive_recommendations(&flags, RiskLevel::High),
            vec![
                DETAILED_INVESTIGATION.to_string(),
                REQUEST_POLICE_REPORT.to_string(),
                REQUEST_TIMELINE.to_string(),
                VERIFY_RECEIPTS.to_string(),
                ON_SITE_INVESTIGATION.to_string(),
            ]
        );
    }

    #[test]
    fn test_high_severity_counted_once() {
        let flags = [
            flag(FlagType::RecentPolicy, FlagSeverity::High),
            flag(FlagType::HighClaimAmount, FlagSeverity::High),
        ];
        let recs = derive_recommendations(&flags, RiskLevel::Medium);
        assert_eq!(recs.iter().filter(|r| *r == DETAILED_INVESTIGATION).count(), 1);
    }

    #[test]
    fn test_very_high_adds_on_site_investigation() {
        let recs = derive_recommendations(&[], RiskLevel::VeryHigh);
        assert_eq!(recs, vec![ON_SITE_INVESTIGATION.to_string()]);
    }
}
