//! Core domain types for the bladder-tumour risk stratification system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Tumour characteristics recorded at assessment (grade, stage, size, ...)
//! - The case descriptor submitted for classification
//! - Risk categories and their display labels

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Tumour Characteristic Types
// ============================================================================

/// Histological tumour grade
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Low,
    High,
}

/// Clinical tumour stage
///
/// Recorded with the case but not consulted by classification; the risk
/// rules key on grade and CIS presence instead.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stage {
    Ta,
    T1,
    #[serde(rename = "CIS")]
    Cis,
}

/// Largest tumour diameter, bucketed at 3 cm
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TumourSize {
    #[serde(rename = "<3cm")]
    UnderThreeCm,
    #[serde(rename = ">3cm")]
    OverThreeCm,
}

/// Number of distinct tumours found at resection
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TumourCount {
    Single,
    Multiple,
}

// ============================================================================
// Case Descriptor
// ============================================================================

/// A single case submitted for risk classification.
///
/// Every field is optional: the caller may submit a partially filled form
/// and classification stays deterministic (unset fields fail the low-risk
/// conjunction and are ignored by the high-risk disjunction). The
/// descriptor is a plain value with no identity beyond equality; it is
/// rebuilt from scratch on every submission.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseDescriptor {
    pub grade: Option<Grade>,
    pub stage: Option<Stage>,
    pub size: Option<TumourSize>,
    pub number: Option<TumourCount>,
    pub recurrence: Option<bool>,
    pub cis: Option<bool>,
}

// ============================================================================
// Risk Category
// ============================================================================

/// Clinical risk tier derived from tumour characteristics
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Intermediate,
    High,
}

impl RiskCategory {
    /// User-facing label, as printed on reports
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Intermediate => "Intermediate Risk",
            RiskCategory::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
