// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use agentwave_decoder::logging::{self, LoggingConfig};
use agentwave_decoder::query;
use agentwave_decoder::source::{FileSource, ResponseSource};
use agentwave_decoder::types::Address;
use anyhow::Context;
use config::{Args, DecoderConfig, QueryKind};

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = DecoderConfig::from_env_file(&args.env_file)?;
    logging::init(LoggingConfig::from(&config.log))?;

    tracing::info!(
        query = ?args.query,
        input = %args.input,
        rpc_url = %config.network.rpc_url,
        package_id = %config.network.package_id,
        agent_registry_id = %config.network.agent_registry_id,
        escrow_table_id = %config.network.agentic_escrow_table_id,
        "Decoding simulation response"
    );

    let response = FileSource::new(&args.input).fetch()?;

    let output = match args.query {
        QueryKind::Profile => {
            let owner: Address = args
                .owner
                .as_deref()
                .context("--owner is required for profile queries")?
                .parse()?;
            serde_json::to_value(query::profile_or_placeholder(owner, &response))?
        }
        QueryKind::Profiles => {
            let profiles = query::profiles_or_empty(&response);
            tracing::info!(count = profiles.len(), "Decoded agent profiles");
            serde_json::to_value(profiles)?
        }
        QueryKind::Escrows => {
            let escrows = query::escrows_or_empty(&response);
            tracing::info!(count = escrows.len(), "Decoded escrows");
            let summaries: Vec<_> = escrows
                .iter()
                .map(|escrow| escrow.summary(&config.network.walrus_aggregator))
                .collect();
            serde_json::to_value(summaries)?
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}
