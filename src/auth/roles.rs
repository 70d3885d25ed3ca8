// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 EduChainX

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User roles for authorization.
///
/// ## Role Hierarchy
///
/// - `SuperAdmin` - Full access to all endpoints and records
/// - `UniversityAdmin` - Manages a single university's transcripts
/// - `Auditor` - Read-only access to audit logs and anomalies
/// - `Student` - Normal user, can view own records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access
    SuperAdmin,
    /// University administrator (issues transcripts)
    UniversityAdmin,
    /// Auditor (read-only audit logs and anomalies)
    Auditor,
    /// Normal student user
    Student,
}

impl Role {
    /// Check if this role has at least the privileges of the required role.
    pub fn has_privilege(&self, required: Role) -> bool {
        match (self, required) {
            // Super admins can do anything
            (Role::SuperAdmin, _) => true,
            // University admins manage their own university
            (Role::UniversityAdmin, Role::UniversityAdmin) => true,
            // Auditors can read audits
            (Role::Auditor, Role::Auditor) => true,
            // Students can do student things
            (Role::Student, Role::Student) => true,
            // Everything else is denied
            _ => false,
        }
    }

    /// Parse role from string (case-insensitive).
    /// Used when extracting roles from session token claims.
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "super_admin" => Some(Role::SuperAdmin),
            "university_admin" => Some(Role::UniversityAdmin),
            "auditor" => Some(Role::Auditor),
            "student" => Some(Role::Student),
            _ => None,
        }
    }
}

impl Default for Role {
    /// Default role is Student (least privilege for authenticated users).
    fn default() -> Self {
        Role::Student
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "super_admin"),
            Role::UniversityAdmin => write!(f, "university_admin"),
            Role::Auditor => write!(f, "auditor"),
            Role::Student => write!(f, "student"),
        }
    }
}
