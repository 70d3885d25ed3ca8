// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Transaction risk scoring.
//!
//! A fixed rule set, not a statistical model: scores are a pure, total
//! function of (amount, type). No randomness, no external calls. Scores
//! above [`ANOMALY_THRESHOLD`] flag an anomaly; above
//! [`HIGH_SEVERITY_THRESHOLD`] the anomaly is high severity.

use crate::models::{Severity, TransactionType};

/// Scores above this value flag an anomaly.
pub const ANOMALY_THRESHOLD: f64 = 7.0;

/// Flagged scores above this value are high severity, otherwise medium.
pub const HIGH_SEVERITY_THRESHOLD: f64 = 8.0;

/// Amounts above this value dominate every other rule.
pub const LARGE_AMOUNT_LIMIT: f64 = 10_000.0;

const LARGE_AMOUNT_SCORE: f64 = 8.5;
const GRANT_SCORE: f64 = 6.0;
const BASELINE_SCORE: f64 = 2.0;

/// Compute the risk score for a transaction.
///
/// Rules, in priority order: amount over 10 000 scores 8.5; grants score
/// 6.0; everything else scores 2.0.
pub fn score_transaction(amount: f64, tx_type: TransactionType) -> f64 {
    if amount > LARGE_AMOUNT_LIMIT {
        LARGE_AMOUNT_SCORE
    } else if tx_type == TransactionType::Grants {
        GRANT_SCORE
    } else {
        BASELINE_SCORE
    }
}

/// Whether a score is high enough to flag an anomaly.
pub fn flags_anomaly(score: f64) -> bool {
    score > ANOMALY_THRESHOLD
}

/// Severity of a flagged anomaly.
pub fn severity_for(score: f64) -> Severity {
    if score > HIGH_SEVERITY_THRESHOLD {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// Wire representation of a score: one decimal place, e.g. "8.5".
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_amounts_score_8_5_regardless_of_type() {
        for tx_type in [
            TransactionType::Tuition,
            TransactionType::Grants,
            TransactionType::Fees,
            TransactionType::Services,
        ] {
            assert_eq!(score_transaction(10_000.01, tx_type), 8.5);
            assert_eq!(score_transaction(1_000_000.0, tx_type), 8.5);
        }
    }

    #[test]
    fn grants_at_or_below_limit_score_6_0() {
        assert_eq!(score_transaction(500.0, TransactionType::Grants), 6.0);
        // Exactly at the limit is not "over".
        assert_eq!(score_transaction(10_000.0, TransactionType::Grants), 6.0);
    }

    #[test]
    fn everything_else_scores_baseline() {
        assert_eq!(score_transaction(9_999.99, TransactionType::Tuition), 2.0);
        assert_eq!(score_transaction(0.0, TransactionType::Fees), 2.0);
        assert_eq!(score_transaction(10_000.0, TransactionType::Services), 2.0);
    }

    #[test]
    fn only_large_amounts_flag_anomalies() {
        assert!(flags_anomaly(score_transaction(
            15_000.0,
            TransactionType::Tuition
        )));
        // 6.0 and 2.0 sit below the 7.0 threshold.
        assert!(!flags_anomaly(score_transaction(
            5_000.0,
            TransactionType::Grants
        )));
        assert!(!flags_anomaly(score_transaction(
            100.0,
            TransactionType::Fees
        )));
    }

    #[test]
    fn severity_splits_at_8_0() {
        assert_eq!(severity_for(8.5), Severity::High);
        assert_eq!(severity_for(8.0), Severity::Medium);
        assert_eq!(severity_for(7.5), Severity::Medium);
    }

    #[test]
    fn scores_format_with_one_decimal() {
        assert_eq!(format_score(8.5), "8.5");
        assert_eq!(format_score(6.0), "6.0");
        assert_eq!(format_score(2.0), "2.0");
    }
}
