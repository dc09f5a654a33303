//! Subscription plan tiers.
//!
//! Tier identifiers arrive as free-form strings from several sources
//! (profile rows, checkout metadata, transaction SKUs). This module is the
//! single place they are normalized into a tagged variant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Essentiel,
    Premium,
}

impl PlanTier {
    /// Normalize a raw tier or SKU string into a tier.
    ///
    /// Matching is trim- and case-insensitive. Unrecognized or empty input
    /// normalizes to [`PlanTier::Free`]: an unknown tier string means the
    /// member gets no paid features, it is never an error.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "essentiel" | "essential" | "abo_mois_essentiel" => PlanTier::Essentiel,
            "premium" | "abo_mois_premium" => PlanTier::Premium,
            _ => PlanTier::Free,
        }
    }

    /// Display label used in badges and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlanTier::Free => "Gratuit",
            PlanTier::Essentiel => "Essentiel",
            PlanTier::Premium => "Premium",
        }
    }

    #[must_use]
    pub fn is_paying(self) -> bool {
        !matches!(self, PlanTier::Free)
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanTier::Free => write!(f, "free"),
            PlanTier::Essentiel => write!(f, "essentiel"),
            PlanTier::Premium => write!(f, "premium"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_plain_tier_names() {
        assert_eq!(PlanTier::normalize("essentiel"), PlanTier::Essentiel);
        assert_eq!(PlanTier::normalize("premium"), PlanTier::Premium);
        assert_eq!(PlanTier::normalize("free"), PlanTier::Free);
    }

    #[test]
    fn normalize_is_case_and_whitespace_insensitive() {
        assert_eq!(PlanTier::normalize("  ESSENTIEL "), PlanTier::Essentiel);
        assert_eq!(PlanTier::normalize("Premium"), PlanTier::Premium);
    }

    #[test]
    fn normalize_subscription_skus() {
        assert_eq!(
            PlanTier::normalize("ABO_MOIS_ESSENTIEL"),
            PlanTier::Essentiel
        );
        assert_eq!(PlanTier::normalize("ABO_MOIS_PREMIUM"), PlanTier::Premium);
    }

    #[test]
    fn normalize_unknown_defaults_to_free() {
        assert_eq!(PlanTier::normalize(""), PlanTier::Free);
        assert_eq!(PlanTier::normalize("gold-legacy"), PlanTier::Free);
    }

    #[test]
    fn is_paying_only_for_paid_tiers() {
        assert!(!PlanTier::Free.is_paying());
        assert!(PlanTier::Essentiel.is_paying());
        assert!(PlanTier::Premium.is_paying());
    }

    #[test]
    fn display_matches_serde_casing() {
        assert_eq!(PlanTier::Essentiel.to_string(), "essentiel");
        assert_eq!(
            serde_json::to_string(&PlanTier::Essentiel).unwrap(),
            "\"essentiel\""
        );
    }

    #[test]
    fn labels_are_display_ready() {
        assert_eq!(PlanTier::Free.label(), "Gratuit");
        assert_eq!(PlanTier::Premium.label(), "Premium");
    }
}
