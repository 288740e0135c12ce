// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Address;
use crate::error::DecodeError;
use crate::schema::{Field, FieldType, Fields, Record, Schema};
use crate::utils::format_mist;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the Move struct `AgenticEscrowInfo`.
pub static ESCROW_INFO: Schema = Schema {
    name: "AgenticEscrowInfo",
    fields: &[
        Field::new("escrow_id", FieldType::Address),
        Field::new("job_title", FieldType::String),
        Field::new("client", FieldType::Address),
        Field::new("custodian", FieldType::Address),
        Field::new("job_description", FieldType::String),
        Field::new("job_category", FieldType::String),
        Field::new("duration", FieldType::U8),
        Field::new("budget", FieldType::U64),
        Field::new("current_balance", FieldType::U64),
        Field::new("status", FieldType::U8),
        Field::new("main_agent", FieldType::Address),
        Field::new("main_agent_price", FieldType::U64),
        Field::new("main_agent_paid", FieldType::Bool),
        Field::new("total_hired_agents", FieldType::U64),
        Field::new("blob_id", FieldType::Option(&FieldType::String)),
        Field::new("created_at", FieldType::U64),
    ],
};

/// Lifecycle state of an escrow.
///
/// Values the contract may add later are kept as [`EscrowStatus::Other`]
/// instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscrowStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Disputed,
    RefundedClient,
    RefundedAgent,
    Released,
    Cancelled,
    Other(u8),
}

impl EscrowStatus {
    pub fn as_u8(&self) -> u8 {
        match self {
            EscrowStatus::Pending => 0,
            EscrowStatus::Accepted => 1,
            EscrowStatus::InProgress => 2,
            EscrowStatus::Completed => 3,
            EscrowStatus::Disputed => 4,
            EscrowStatus::RefundedClient => 5,
            EscrowStatus::RefundedAgent => 6,
            EscrowStatus::Released => 7,
            EscrowStatus::Cancelled => 8,
            EscrowStatus::Other(raw) => *raw,
        }
    }

    pub fn label(&self) -> String {
        match self {
            EscrowStatus::Pending => "Pending".to_string(),
            EscrowStatus::Accepted => "Accepted".to_string(),
            EscrowStatus::InProgress => "In Progress".to_string(),
            EscrowStatus::Completed => "Completed".to_string(),
            EscrowStatus::Disputed => "Disputed".to_string(),
            EscrowStatus::RefundedClient => "Refunded (Client)".to_string(),
            EscrowStatus::RefundedAgent => "Refunded (Agent)".to_string(),
            EscrowStatus::Released => "Released".to_string(),
            EscrowStatus::Cancelled => "Cancelled".to_string(),
            EscrowStatus::Other(raw) => format!("Unknown ({})", raw),
        }
    }

    /// Funds reached the agent.
    pub fn is_settled(&self) -> bool {
        matches!(self, EscrowStatus::Completed | EscrowStatus::Released)
    }

    /// Ended without paying the agent.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            EscrowStatus::Cancelled | EscrowStatus::RefundedClient | EscrowStatus::RefundedAgent
        )
    }
}

impl From<u8> for EscrowStatus {
    fn from(raw: u8) -> Self {
        match raw {
            0 => EscrowStatus::Pending,
            1 => EscrowStatus::Accepted,
            2 => EscrowStatus::InProgress,
            3 => EscrowStatus::Completed,
            4 => EscrowStatus::Disputed,
            5 => EscrowStatus::RefundedClient,
            6 => EscrowStatus::RefundedAgent,
            7 => EscrowStatus::Released,
            8 => EscrowStatus::Cancelled,
            other => EscrowStatus::Other(other),
        }
    }
}

impl fmt::Display for EscrowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Serialized as the raw on-chain byte.
impl Serialize for EscrowStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for EscrowStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(EscrowStatus::from)
    }
}

/// One agentic escrow as returned by `get_escrows_as_client`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowInfo {
    pub escrow_id: Address,
    pub job_title: String,
    pub client: Address,
    pub custodian: Address,
    pub job_description: String,
    pub job_category: String,
    /// Days, 1-255 by contract convention.
    pub duration: u8,
    /// Smallest currency unit.
    pub budget: u64,
    pub current_balance: u64,
    pub status: EscrowStatus,
    pub main_agent: Address,
    pub main_agent_price: u64,
    pub main_agent_paid: bool,
    pub total_hired_agents: u64,
    /// Set once a deliverable has been uploaded.
    pub blob_id: Option<String>,
    /// Unix milliseconds.
    pub created_at: u64,
}

impl EscrowInfo {
    /// Download URL of the deliverable on a Walrus aggregator.
    pub fn deliverable_url(&self, aggregator: &str) -> Option<String> {
        self.blob_id
            .as_ref()
            .map(|blob_id| format!("{}/v1/blobs/{}", aggregator.trim_end_matches('/'), blob_id))
    }

    /// Display-ready view of this escrow.
    pub fn summary(&self, aggregator: &str) -> EscrowSummary<'_> {
        EscrowSummary {
            escrow: self,
            status_label: self.status.label(),
            budget_display: format_mist(self.budget),
            balance_display: format_mist(self.current_balance),
            deliverable_url: self.deliverable_url(aggregator),
        }
    }
}

/// An [`EscrowInfo`] plus the derived values a client list shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowSummary<'a> {
    #[serde(flatten)]
    pub escrow: &'a EscrowInfo,
    pub status_label: String,
    pub budget_display: String,
    pub balance_display: String,
    pub deliverable_url: Option<String>,
}

impl Record for EscrowInfo {
    const SCHEMA: &'static Schema = &ESCROW_INFO;

    fn from_fields(mut fields: Fields) -> Result<Self, DecodeError> {
        Ok(Self {
            escrow_id: fields.next_address()?,
            job_title: fields.next_string()?,
            client: fields.next_address()?,
            custodian: fields.next_address()?,
            job_description: fields.next_string()?,
            job_category: fields.next_string()?,
            duration: fields.next_u8()?,
            budget: fields.next_u64()?,
            current_balance: fields.next_u64()?,
            status: EscrowStatus::from(fields.next_u8()?),
            main_agent: fields.next_address()?,
            main_agent_price: fields.next_u64()?,
            main_agent_paid: fields.next_bool()?,
            total_hired_agents: fields.next_u64()?,
            blob_id: fields.next_optional_string()?,
            created_at: fields.next_u64()?,
        })
    }
}
