//! Treatment recommendations per risk category.

use crate::RiskCategory;

/// Recommended adjuvant treatment for a risk category.
///
/// The mapping is static: one recommendation per category, independent of
/// the underlying tumour characteristics.
pub fn recommend(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Low => {
            "single-dose intravesical chemotherapy within 24 hours of resection; no induction immunotherapy."
        }
        RiskCategory::Intermediate => {
            "six-week induction immunotherapy course plus one year of maintenance, or six weekly chemotherapy instillations."
        }
        RiskCategory::High => {
            "six-week induction immunotherapy course plus maintenance therapy for up to three years."
        }
    }
}
