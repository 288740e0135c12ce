// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where simulation responses come from.
//!
//! The decoder makes no assumption about how the bytes were obtained; it only
//! needs something that yields a [`DevInspectResults`].

use crate::response::{DevInspectResults, ResponseDocument};
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read response from {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse response from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies the raw response of one read-only simulation call.
pub trait ResponseSource {
    fn fetch(&self) -> Result<DevInspectResults, SourceError>;
}

/// Reads a recorded JSON response from a file, or from stdin for "-".
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn origin(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    fn read_to_string(&self) -> std::io::Result<String> {
        if self.is_stdin() {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        } else {
            std::fs::read_to_string(&self.path)
        }
    }
}

impl ResponseSource for FileSource {
    fn fetch(&self) -> Result<DevInspectResults, SourceError> {
        let content = self.read_to_string().map_err(|source| SourceError::Io {
            origin: self.origin(),
            source,
        })?;

        let document: ResponseDocument =
            serde_json::from_str(&content).map_err(|source| SourceError::Parse {
                origin: self.origin(),
                source,
            })?;

        tracing::debug!(origin = %self.origin(), bytes = content.len(), "Loaded simulation response");
        Ok(document.into_results())
    }
}
