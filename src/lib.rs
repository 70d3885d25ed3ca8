// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! EduChainX Server - Academic Credential & Financial Forensics API
//!
//! This crate provides the REST backend for the EduChainX dashboard:
//! credential issuance and verification for partner universities, plus
//! rule-based financial anomaly monitoring with an append-only audit trail.
//! The blockchain surface is simulated end to end.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Session-token authentication (external identity provider)
//! - `chain` - Simulated blockchain network and operation metrics
//! - `risk` - Transaction risk scoring rules
//! - `storage` - Embedded relational store (redb)

pub mod api;
pub mod auth;
pub mod chain;
pub mod config;
pub mod error;
pub mod models;
pub mod risk;
pub mod state;
pub mod storage;
