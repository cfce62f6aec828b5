//! Adforge Core: campaign data model and session context.
//!
//! The shared vocabulary of the workspace: what a campaign brief looks
//! like, what a generation produces, and what gets written to history.
//! All types here are plain data; behavior lives in the sibling crates.

pub mod campaign;
pub mod context;

pub use campaign::{
    ArtifactKind, CampaignBrief, CampaignResult, GenerationRequest, HistoryEntry, Platform,
    SamplingParams, Tone,
};
pub use context::SessionContext;

/// Version of the adforge engine
pub const ADFORGE_VERSION: &str = "0.1.0";
