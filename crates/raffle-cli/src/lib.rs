//! CLI library components for the raffle tool.

pub mod check;
pub mod draw;
pub mod logging;
pub mod session;
