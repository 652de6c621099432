//! Day-count residency classification for both jurisdictions.
//!
//! Thresholds are fixed policy constants, not configuration. The Indian
//! boundary convention is inclusive at the top of each band: NRI up to and
//! including 110 days, RNOR from 111 through 181, Resident from 182.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Days;

/// Highest day count that still keeps NRI status in India.
pub const INDIA_NRI_MAX_DAYS: Days = 110;

/// First day count at which India treats the individual as a full Resident.
pub const INDIA_RESIDENT_MIN_DAYS: Days = 182;

/// Minimum UAE days for Tax Residency Certificate eligibility. Note this is
/// the statutory threshold; the input validator applies a stricter 190-day
/// floor as a planning margin.
pub const UAE_TRC_MIN_DAYS: Days = 183;

/// Indian residency classification. Ordering follows increasing day count,
/// so `NonResident < ResidentNotOrdinarilyResident < Resident`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndiaResidencyStatus {
    #[serde(rename = "NRI")]
    NonResident,
    #[serde(rename = "RNOR")]
    ResidentNotOrdinarilyResident,
    #[serde(rename = "Resident")]
    Resident,
}

impl fmt::Display for IndiaResidencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IndiaResidencyStatus::NonResident => "Non-Resident (NRI)",
            IndiaResidencyStatus::ResidentNotOrdinarilyResident => {
                "Resident but Not Ordinarily Resident (RNOR)"
            }
            IndiaResidencyStatus::Resident => "Resident (Taxable on Global Income)",
        };
        f.write_str(label)
    }
}

/// UAE residency classification for TRC purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UaeResidencyStatus {
    #[serde(rename = "Not eligible")]
    NotEligible,
    #[serde(rename = "TRC-eligible")]
    TrcEligible,
}

impl fmt::Display for UaeResidencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UaeResidencyStatus::NotEligible => "Not TRC Eligible",
            UaeResidencyStatus::TrcEligible => "UAE Tax Resident (TRC Eligible)",
        };
        f.write_str(label)
    }
}

/// Classify Indian residency from days spent in India during the year.
pub fn classify_india_residency(days_in_india: Days) -> IndiaResidencyStatus {
    if days_in_india <= INDIA_NRI_MAX_DAYS {
        IndiaResidencyStatus::NonResident
    } else if days_in_india < INDIA_RESIDENT_MIN_DAYS {
        IndiaResidencyStatus::ResidentNotOrdinarilyResident
    } else {
        IndiaResidencyStatus::Resident
    }
}

/// Classify UAE TRC eligibility from days spent in the UAE during the year.
pub fn classify_uae_residency(days_in_uae: Days) -> UaeResidencyStatus {
    if days_in_uae >= UAE_TRC_MIN_DAYS {
        UaeResidencyStatus::TrcEligible
    } else {
        UaeResidencyStatus::NotEligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_nri_band() {
        assert_eq!(
            classify_india_residency(0),
            IndiaResidencyStatus::NonResident
        );
        assert_eq!(
            classify_india_residency(110),
            IndiaResidencyStatus::NonResident
        );
    }

    #[test]
    fn test_india_rnor_band_boundaries() {
        // 111 is the first RNOR day, 181 the last
        assert_eq!(
            classify_india_residency(111),
            IndiaResidencyStatus::ResidentNotOrdinarilyResident
        );
        assert_eq!(
            classify_india_residency(181),
            IndiaResidencyStatus::ResidentNotOrdinarilyResident
        );
    }

    #[test]
    fn test_india_resident_from_182() {
        assert_eq!(classify_india_residency(182), IndiaResidencyStatus::Resident);
        assert_eq!(classify_india_residency(365), IndiaResidencyStatus::Resident);
    }

    #[test]
    fn test_india_status_monotonic_in_days() {
        let mut previous = classify_india_residency(0);
        for days in 1..=365 {
            let current = classify_india_residency(days);
            assert!(
                current >= previous,
                "status moved backward at {days} days: {previous:?} -> {current:?}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_uae_trc_boundary() {
        assert_eq!(classify_uae_residency(182), UaeResidencyStatus::NotEligible);
        assert_eq!(classify_uae_residency(183), UaeResidencyStatus::TrcEligible);
        assert_eq!(classify_uae_residency(190), UaeResidencyStatus::TrcEligible);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            IndiaResidencyStatus::NonResident.to_string(),
            "Non-Resident (NRI)"
        );
        assert_eq!(
            UaeResidencyStatus::TrcEligible.to_string(),
            "UAE Tax Resident (TRC Eligible)"
        );
    }

    #[test]
    fn test_serde_categorical_names() {
        let json = serde_json::to_string(&IndiaResidencyStatus::ResidentNotOrdinarilyResident)
            .unwrap();
        assert_eq!(json, "\"RNOR\"");
        let json = serde_json::to_string(&UaeResidencyStatus::TrcEligible).unwrap();
        assert_eq!(json, "\"TRC-eligible\"");
    }
}
