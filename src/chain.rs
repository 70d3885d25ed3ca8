// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Simulated blockchain anchoring.
//!
//! The dashboard presents transcript issuance as anchored on-chain. No real
//! node is involved: receipts, proofs, and network figures are generated
//! locally with plausible shapes so the frontend integration can be built
//! against stable contracts. Operation latencies are recorded so the status
//! endpoint can report per-operation timing summaries.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

/// Address reported for the deployed credential-verification contract.
pub const VERIFICATION_CONTRACT: &str = "0x742d35Cc6634C0532925a3b8d5C9D6A4B34C72e3";

/// Simulated block heights fall in this range.
const BLOCK_NUMBER_BASE: u64 = 18_000_000;
const BLOCK_NUMBER_SPREAD: u64 = 1_000_000;

/// Receipt for a simulated on-chain transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_hash: String,
    pub block_number: u64,
    pub gas_used: u64,
    pub status: String,
}

/// A fresh `0x`-prefixed pseudo transaction hash.
pub fn mock_hash() -> String {
    format!("0x{}", Uuid::new_v4().simple())
}

fn block_number() -> u64 {
    BLOCK_NUMBER_BASE + rand::thread_rng().gen_range(0..BLOCK_NUMBER_SPREAD)
}

/// Receipt for registering a student identity on-chain.
pub fn register_student_receipt() -> Receipt {
    Receipt {
        transaction_hash: mock_hash(),
        block_number: block_number(),
        gas_used: rand::thread_rng().gen_range(21_000..121_000),
        status: "success".to_string(),
    }
}

/// Receipt for anchoring a transcript on-chain.
pub fn issue_transcript_receipt() -> Receipt {
    Receipt {
        transaction_hash: mock_hash(),
        block_number: block_number(),
        gas_used: rand::thread_rng().gen_range(50_000..200_000),
        status: "success".to_string(),
    }
}

/// Simulated network status for the dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub connected: bool,
    pub block_number: u64,
    pub gas_price: String,
}

pub fn network_status() -> NetworkStatus {
    NetworkStatus {
        connected: true,
        block_number: block_number(),
        gas_price: format!("{:.2} Gwei", rand::thread_rng().gen_range(10.0..60.0)),
    }
}

/// Timing summary for one recorded operation, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct OpStats {
    pub avg: f64,
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

/// Per-operation latency samples for the simulated chain.
///
/// Shared via [`crate::state::AppState`] so handlers can record timings and
/// the status endpoint can summarize them.
#[derive(Debug, Default)]
pub struct ChainMetrics {
    samples: RwLock<HashMap<String, Vec<f64>>>,
}

impl ChainMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Record one latency sample for `operation`.
    pub async fn record(&self, operation: &str, millis: f64) {
        let mut samples = self.samples.write().await;
        samples.entry(operation.to_string()).or_default().push(millis);
    }

    /// Summarize all recorded operations.
    pub async fn summary(&self) -> HashMap<String, OpStats> {
        let samples = self.samples.read().await;
        samples
            .iter()
            .filter(|(_, times)| !times.is_empty())
            .map(|(op, times)| {
                let sum: f64 = times.iter().sum();
                let min = times.iter().copied().fold(f64::INFINITY, f64::min);
                let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let stats = OpStats {
                    avg: sum / times.len() as f64,
                    count: times.len(),
                    min,
                    max,
                };
                (op.clone(), stats)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipts_have_plausible_figures() {
        let r = register_student_receipt();
        assert!(r.transaction_hash.starts_with("0x"));
        assert!((BLOCK_NUMBER_BASE..BLOCK_NUMBER_BASE + BLOCK_NUMBER_SPREAD)
            .contains(&r.block_number));
        assert!((21_000..121_000).contains(&r.gas_used));
        assert_eq!(r.status, "success");

        let t = issue_transcript_receipt();
        assert!((50_000..200_000).contains(&t.gas_used));
    }

    #[test]
    fn network_status_is_connected_with_gwei_price() {
        let status = network_status();
        assert!(status.connected);
        assert!(status.gas_price.ends_with(" Gwei"));
    }

    #[test]
    fn mock_hashes_do_not_collide() {
        assert_ne!(mock_hash(), mock_hash());
    }

    #[tokio::test]
    async fn metrics_summarize_recorded_samples() {
        let metrics = ChainMetrics::new();
        metrics.record("transcript_issuance", 10.0).await;
        metrics.record("transcript_issuance", 30.0).await;

        let summary = metrics.summary().await;
        let stats = summary["transcript_issuance"];
        assert_eq!(stats.count, 2);
        assert_eq!(stats.avg, 20.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
    }

    #[tokio::test]
    async fn empty_metrics_summary_is_empty() {
        let metrics = ChainMetrics::new();
        assert!(metrics.summary().await.is_empty());
    }
}
