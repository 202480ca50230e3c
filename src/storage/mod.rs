//! File-backed persistence: profiles, the winners' ledger and session history

pub mod profile_store;
pub mod score_ledger;
pub mod stats_log;

pub use profile_store::{
    format_profile_details, format_profile_list, load_profiles, save_profiles, Persistence,
    ProfileStore, MAX_PROFILES,
};
pub use score_ledger::{format_scoreboard, ScoreEntry, ScoreLedger};
pub use stats_log::StatsLog;
