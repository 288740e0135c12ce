// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Address;
use crate::error::DecodeError;
use crate::schema::{Field, FieldType, Fields, Record, Schema};
use crate::utils::shorten;
use serde::{Deserialize, Serialize};

/// Return tuple of `agentwave_profile::get_agent_profile`. The owner is the
/// lookup key, so it is not part of the payload.
pub static PROFILE_LOOKUP: Schema = Schema {
    name: "AgentProfileLookup",
    fields: &[
        Field::new("avatar", FieldType::String),
        Field::new("name", FieldType::String),
        Field::new("capabilities", FieldType::Vector(&FieldType::String)),
        Field::new("description", FieldType::String),
        Field::new("rating", FieldType::U64),
        Field::new("total_reviews", FieldType::U64),
        Field::new("completed_tasks", FieldType::U64),
        Field::new("created_at", FieldType::U64),
        Field::new("model_type", FieldType::String),
        Field::new("is_active", FieldType::Bool),
    ],
};

/// Element layout of the "list all profiles" query: owner first, then the
/// lookup fields.
pub static PROFILE_LISTING: Schema = Schema {
    name: "AgentProfile",
    fields: &[
        Field::new("owner", FieldType::Address),
        Field::new("avatar", FieldType::String),
        Field::new("name", FieldType::String),
        Field::new("capabilities", FieldType::Vector(&FieldType::String)),
        Field::new("description", FieldType::String),
        Field::new("rating", FieldType::U64),
        Field::new("total_reviews", FieldType::U64),
        Field::new("completed_tasks", FieldType::U64),
        Field::new("created_at", FieldType::U64),
        Field::new("model_type", FieldType::String),
        Field::new("is_active", FieldType::Bool),
    ],
};

/// Marketplace profile of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub owner: Address,
    /// URL or empty.
    pub avatar: String,
    pub name: String,
    /// Order preserving, duplicates allowed.
    pub capabilities: Vec<String>,
    pub description: String,
    /// 0-100 by convention, not enforced.
    pub rating: u64,
    pub total_reviews: u64,
    pub completed_tasks: u64,
    /// Unix milliseconds, 0 when unknown.
    pub created_at: u64,
    pub model_type: String,
    pub is_active: bool,
}

impl AgentProfile {
    /// Build a profile from [`PROFILE_LOOKUP`] fields and the externally
    /// known owner.
    pub fn from_lookup_fields(owner: Address, mut fields: Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            owner,
            avatar: fields.next_string()?,
            name: fields.next_string()?,
            capabilities: fields.next_string_vec()?,
            description: fields.next_string()?,
            rating: fields.next_u64()?,
            total_reviews: fields.next_u64()?,
            completed_tasks: fields.next_u64()?,
            created_at: fields.next_u64()?,
            model_type: fields.next_string()?,
            is_active: fields.next_bool()?,
        })
    }

    /// Stand-in shown when a profile cannot be decoded: only the owner is
    /// known, the name is the shortened address.
    ///
    /// The name is cut from the canonical 64-digit form, so a short owner
    /// such as "0x6" and its zero-padded spelling get the same placeholder.
    pub fn placeholder(owner: Address) -> Self {
        Self {
            owner,
            avatar: String::new(),
            name: shorten(&owner.to_string(), 10),
            capabilities: Vec::new(),
            description: String::new(),
            rating: 0,
            total_reviews: 0,
            completed_tasks: 0,
            created_at: 0,
            model_type: String::new(),
            is_active: true,
        }
    }

    /// Creation time, `None` when the chain reported 0.
    pub fn created_at_ms(&self) -> Option<u64> {
        (self.created_at != 0).then_some(self.created_at)
    }
}

impl Record for AgentProfile {
    const SCHEMA: &'static Schema = &PROFILE_LISTING;

    fn from_fields(mut fields: Fields) -> Result<Self, DecodeError> {
        let owner = fields.next_address()?;
        Self::from_lookup_fields(owner, fields)
    }
}
