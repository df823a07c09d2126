//! SignalDesk Data — the static desk catalog.
//!
//! Every number here is a literal. There is no feed, no computation, and no
//! persistence; the crate exists so the TUI and CLI render a realistic desk
//! without a backend. Row-shaped datasets convert into engine records via
//! `signaldesk_core::to_records`.

pub mod baskets;
pub mod dossier;
pub mod feed;
pub mod intel;
pub mod macro_board;
pub mod market;
pub mod performance;
pub mod scanner;
pub mod setups;
pub mod types;
