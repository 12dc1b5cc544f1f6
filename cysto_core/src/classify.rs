//! Risk classification rules for non-muscle-invasive bladder tumours.
//!
//! The classification cascade:
//! - Low risk: solitary small low-grade primary tumour without CIS
//! - High risk: any high-grade tumour, or CIS in any combination
//! - Intermediate risk: everything else

use crate::{CaseDescriptor, Grade, RiskCategory, TumourCount, TumourSize};

/// Classify a case into a risk category.
///
/// Rules are evaluated in order, first match wins:
/// 1. Low risk requires every favourable finding at once: low grade,
///    `<3cm`, single tumour, no prior recurrence, no CIS.
/// 2. High risk on high grade or CIS present, regardless of other fields.
/// 3. Intermediate risk otherwise, including partially filled cases.
///
/// Unset fields never raise an error: they fail the low-risk conjunction
/// and are ignored by the high-risk disjunction.
pub fn classify(case: &CaseDescriptor) -> RiskCategory {
    if case.grade == Some(Grade::Low)
        && case.size == Some(TumourSize::UnderThreeCm)
        && case.number == Some(TumourCount::Single)
        && case.recurrence == Some(false)
        && case.cis == Some(false)
    {
        tracing::debug!("all low-risk criteria met");
        return RiskCategory::Low;
    }

    if case.grade == Some(Grade::High) || case.cis == Some(true) {
        tracing::debug!(grade = ?case.grade, cis = ?case.cis, "high-risk criterion met");
        return RiskCategory::High;
    }

    RiskCategory::Intermediate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stage;

    fn low_risk_case() -> CaseDescriptor {
        CaseDescriptor {
            grade: Some(Grade::Low),
            stage: Some(Stage::Ta),
            size: Some(TumourSize::UnderThreeCm),
            number: Some(TumourCount::Single),
            recurrence: Some(false),
            cis: Some(false),
        }
    }

    #[test]
    fn test_all_favourable_findings_are_low_risk() {
        assert_eq!(classify(&low_risk_case()), RiskCategory::Low);
    }

    #[test]
    fn test_high_grade_is_high_risk_regardless_of_other_fields() {
        let case = CaseDescriptor {
            grade: Some(Grade::High),
            ..CaseDescriptor::default()
        };
        assert_eq!(classify(&case), RiskCategory::High);

        // Even with every other finding favourable
        let mut case = low_risk_case();
        case.grade = Some(Grade::High);
        assert_eq!(classify(&case), RiskCategory::High);
    }

    #[test]
    fn test_cis_is_high_risk_even_with_low_grade() {
        let mut case = low_risk_case();
        case.cis = Some(true);
        assert_eq!(classify(&case), RiskCategory::High);
    }

    #[test]
    fn test_large_tumour_breaks_low_risk_but_not_high() {
        let mut case = low_risk_case();
        case.size = Some(TumourSize::OverThreeCm);
        assert_eq!(classify(&case), RiskCategory::Intermediate);
    }

    #[test]
    fn test_multiple_tumours_are_intermediate() {
        let mut case = low_risk_case();
        case.number = Some(TumourCount::Multiple);
        assert_eq!(classify(&case), RiskCategory::Intermediate);
    }

    #[test]
    fn test_prior_recurrence_is_intermediate() {
        let mut case = low_risk_case();
        case.recurrence = Some(true);
        assert_eq!(classify(&case), RiskCategory::Intermediate);
    }

    #[test]
    fn test_empty_case_is_intermediate() {
        assert_eq!(classify(&CaseDescriptor::default()), RiskCategory::Intermediate);
    }

    #[test]
    fn test_partial_case_missing_one_field_is_intermediate() {
        let mut case = low_risk_case();
        case.recurrence = None;
        assert_eq!(classify(&case), RiskCategory::Intermediate);
    }

    #[test]
    fn test_stage_does_not_influence_classification() {
        for stage in [None, Some(Stage::Ta), Some(Stage::T1), Some(Stage::Cis)] {
            let mut case = low_risk_case();
            case.stage = stage;
            assert_eq!(classify(&case), RiskCategory::Low);
        }
    }
}
