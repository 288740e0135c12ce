// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serde model of a read-only simulation call (`devInspectTransactionBlock`).

use serde::{Deserialize, Serialize};

/// One value returned by a Move call: the BCS bytes and the Move type tag.
///
/// On the wire this is a two-element JSON array `[[bytes...], "type"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnValue(pub Vec<u8>, pub String);

impl ReturnValue {
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn type_tag(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    #[serde(default)]
    pub return_values: Vec<ReturnValue>,
    #[serde(default)]
    pub mutable_reference_outputs: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevInspectResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<ExecutionResult>>,
}

impl DevInspectResults {
    /// Return values of the first command, empty if the call produced none.
    pub fn return_values(&self) -> &[ReturnValue] {
        if let Some(error) = &self.error {
            tracing::warn!(error = %error, "Simulation call reported an execution error");
        }

        self.results
            .as_deref()
            .and_then(|results| results.first())
            .map(|result| result.return_values.as_slice())
            .unwrap_or_default()
    }

    /// Raw byte blobs of the first command's return values.
    pub fn blobs(&self) -> Vec<&[u8]> {
        self.return_values().iter().map(ReturnValue::bytes).collect()
    }
}

/// Error object of a failed JSON-RPC call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// A stored response: a JSON-RPC envelope carrying a result, a JSON-RPC
/// envelope carrying an error, or the bare result object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResponseDocument {
    Envelope { result: DevInspectResults },
    Failed { error: RpcError },
    Bare(DevInspectResults),
}

impl ResponseDocument {
    /// A failed call becomes results with `error` set and nothing returned,
    /// so the recovering decoders fall back instead of aborting.
    pub fn into_results(self) -> DevInspectResults {
        match self {
            ResponseDocument::Envelope { result } => result,
            ResponseDocument::Failed { error } => DevInspectResults {
                error: Some(format!("JSON-RPC error {}: {}", error.code, error.message)),
                ..Default::default()
            },
            ResponseDocument::Bare(results) => results,
        }
    }
}
