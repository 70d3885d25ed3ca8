// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! Repository layer providing typed access to the embedded store.
//!
//! Each repository provides CRUD operations for a specific entity type,
//! using the LedgerDb for all table operations.

pub mod anomalies;
pub mod transactions;
pub mod transcripts;
pub mod universities;
pub mod users;

pub use anomalies::{AnomalyRepository, NewAnomaly};
pub use transactions::TransactionRepository;
pub use transcripts::TranscriptRepository;
pub use universities::UniversityRepository;
pub use users::UserRepository;
