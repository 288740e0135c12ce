//! Reference encodings and sample records for tests.
//!
//! Buffers are produced by the `bcs` crate from serde mirrors of the Move
//! structs, so round-trip tests check [`crate::bcs::BcsReader`] against an
//! independent encoder.

use crate::types::{Address, AgentProfile, EscrowInfo, EscrowStatus};
use proptest::prelude::*;
use serde::Serialize;

/// BCS encoding of any serializable value.
pub fn to_bcs<T: Serialize + ?Sized>(value: &T) -> Vec<u8> {
    bcs::to_bytes(value).expect("test value must be BCS serializable")
}

/// Return tuple of `get_agent_profile`.
#[derive(Serialize)]
struct ProfileLookup<'a> {
    avatar: &'a str,
    name: &'a str,
    capabilities: &'a [String],
    description: &'a str,
    rating: u64,
    total_reviews: u64,
    completed_tasks: u64,
    created_at: u64,
    model_type: &'a str,
    is_active: bool,
}

impl<'a> From<&'a AgentProfile> for ProfileLookup<'a> {
    fn from(p: &'a AgentProfile) -> Self {
        Self {
            avatar: &p.avatar,
            name: &p.name,
            capabilities: &p.capabilities,
            description: &p.description,
            rating: p.rating,
            total_reviews: p.total_reviews,
            completed_tasks: p.completed_tasks,
            created_at: p.created_at,
            model_type: &p.model_type,
            is_active: p.is_active,
        }
    }
}

/// Element of the "list all profiles" vector.
#[derive(Serialize)]
struct ProfileListing<'a> {
    owner: [u8; 32],
    lookup: ProfileLookup<'a>,
}

impl<'a> From<&'a AgentProfile> for ProfileListing<'a> {
    fn from(p: &'a AgentProfile) -> Self {
        Self {
            owner: *p.owner.as_bytes(),
            lookup: ProfileLookup::from(p),
        }
    }
}

/// Mirror of the Move struct `AgenticEscrowInfo`.
#[derive(Serialize)]
struct AgenticEscrowInfo<'a> {
    escrow_id: [u8; 32],
    job_title: &'a str,
    client: [u8; 32],
    custodian: [u8; 32],
    job_description: &'a str,
    job_category: &'a str,
    duration: u8,
    budget: u64,
    current_balance: u64,
    status: u8,
    main_agent: [u8; 32],
    main_agent_price: u64,
    main_agent_paid: bool,
    total_hired_agents: u64,
    blob_id: Option<&'a str>,
    created_at: u64,
}

impl<'a> From<&'a EscrowInfo> for AgenticEscrowInfo<'a> {
    fn from(e: &'a EscrowInfo) -> Self {
        Self {
            escrow_id: *e.escrow_id.as_bytes(),
            job_title: &e.job_title,
            client: *e.client.as_bytes(),
            custodian: *e.custodian.as_bytes(),
            job_description: &e.job_description,
            job_category: &e.job_category,
            duration: e.duration,
            budget: e.budget,
            current_balance: e.current_balance,
            status: e.status.as_u8(),
            main_agent: *e.main_agent.as_bytes(),
            main_agent_price: e.main_agent_price,
            main_agent_paid: e.main_agent_paid,
            total_hired_agents: e.total_hired_agents,
            blob_id: e.blob_id.as_deref(),
            created_at: e.created_at,
        }
    }
}

/// Deterministic profile varied by `seed`.
pub fn sample_profile(seed: u8) -> AgentProfile {
    AgentProfile {
        owner: Address::new([seed; 32]),
        avatar: format!("https://api.dicebear.com/9.x/bottts-neutral/svg?seed={}", seed),
        name: format!("Agent {}", seed),
        capabilities: vec!["research".to_string(), "writing".to_string()],
        description: format!("Sample agent number {}", seed),
        rating: u64::from(seed) % 101,
        total_reviews: u64::from(seed) * 3,
        completed_tasks: u64::from(seed) * 2,
        created_at: 1_700_000_000_000 + u64::from(seed),
        model_type: "gpt-5".to_string(),
        is_active: seed % 2 == 0,
    }
}

/// Deterministic escrow varied by `seed`.
pub fn sample_escrow(seed: u8, blob_id: Option<&str>) -> EscrowInfo {
    EscrowInfo {
        escrow_id: Address::new([seed; 32]),
        job_title: format!("Job {}", seed),
        client: Address::new([0xc1; 32]),
        custodian: Address::new([0xc2; 32]),
        job_description: "Write a market report".to_string(),
        job_category: "research".to_string(),
        duration: 7,
        budget: 100_000_000,
        current_balance: 50_000_000,
        status: EscrowStatus::InProgress,
        main_agent: Address::new([0xa9; 32]),
        main_agent_price: 50_000_000,
        main_agent_paid: false,
        total_hired_agents: 1,
        blob_id: blob_id.map(str::to_string),
        created_at: 1_700_000_000_000 + u64::from(seed),
    }
}

/// The 10 lookup fields packed into one blob.
pub fn encode_profile_lookup(p: &AgentProfile) -> Vec<u8> {
    to_bcs(&ProfileLookup::from(p))
}

/// The 10 lookup fields as independent blobs.
pub fn encode_profile_lookup_separated(p: &AgentProfile) -> Vec<Vec<u8>> {
    vec![
        to_bcs(&p.avatar),
        to_bcs(&p.name),
        to_bcs(&p.capabilities),
        to_bcs(&p.description),
        to_bcs(&p.rating),
        to_bcs(&p.total_reviews),
        to_bcs(&p.completed_tasks),
        to_bcs(&p.created_at),
        to_bcs(&p.model_type),
        to_bcs(&p.is_active),
    ]
}

/// One listing element: owner followed by the lookup fields.
pub fn encode_profile_listing(p: &AgentProfile) -> Vec<u8> {
    to_bcs(&ProfileListing::from(p))
}

pub fn encode_profile_list(profiles: &[AgentProfile]) -> Vec<u8> {
    let listings: Vec<_> = profiles.iter().map(ProfileListing::from).collect();
    to_bcs(&listings)
}

pub fn encode_escrow(e: &EscrowInfo) -> Vec<u8> {
    to_bcs(&AgenticEscrowInfo::from(e))
}

pub fn encode_escrow_list(escrows: &[EscrowInfo]) -> Vec<u8> {
    let mirrors: Vec<_> = escrows.iter().map(AgenticEscrowInfo::from).collect();
    to_bcs(&mirrors)
}

pub fn arb_address() -> impl Strategy<Value = Address> {
    proptest::array::uniform32(any::<u8>()).prop_map(Address::new)
}

/// Capability lists, including empty ones and ones with a repeated entry.
pub fn arb_capabilities() -> impl Strategy<Value = Vec<String>> {
    (prop::collection::vec(any::<String>(), 0..6), any::<bool>()).prop_map(
        |(mut caps, repeat)| {
            if repeat {
                if let Some(first) = caps.first().cloned() {
                    caps.push(first);
                }
            }
            caps
        },
    )
}

/// Any profile: unicode strings and the full u64 range.
pub fn arb_profile() -> impl Strategy<Value = AgentProfile> {
    (
        arb_address(),
        any::<String>(),
        any::<String>(),
        arb_capabilities(),
        any::<String>(),
        any::<[u64; 4]>(),
        any::<String>(),
        any::<bool>(),
    )
        .prop_map(
            |(owner, avatar, name, capabilities, description, counters, model_type, is_active)| {
                AgentProfile {
                    owner,
                    avatar,
                    name,
                    capabilities,
                    description,
                    rating: counters[0],
                    total_reviews: counters[1],
                    completed_tasks: counters[2],
                    created_at: counters[3],
                    model_type,
                    is_active,
                }
            },
        )
}

/// Any escrow, with every status byte and the blob id present or absent.
pub fn arb_escrow() -> impl Strategy<Value = EscrowInfo> {
    (
        proptest::array::uniform4(arb_address()),
        proptest::array::uniform3(any::<String>()),
        any::<u8>(),
        any::<[u64; 5]>(),
        any::<u8>(),
        any::<bool>(),
        proptest::option::of(any::<String>()),
    )
        .prop_map(
            |(addresses, texts, duration, amounts, status, paid, blob_id)| {
                let [escrow_id, client, custodian, main_agent] = addresses;
                let [job_title, job_description, job_category] = texts;
                EscrowInfo {
                    escrow_id,
                    job_title,
                    client,
                    custodian,
                    job_description,
                    job_category,
                    duration,
                    budget: amounts[0],
                    current_balance: amounts[1],
                    status: EscrowStatus::from(status),
                    main_agent,
                    main_agent_price: amounts[2],
                    main_agent_paid: paid,
                    total_hired_agents: amounts[3],
                    blob_id,
                    created_at: amounts[4],
                }
            },
        )
}
