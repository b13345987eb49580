//! Team normalization and reconciliation (pipeline stage 5).
//!
//! The only stage that sees both teams. Each team's attempts are rescaled
//! toward a tier-appropriate score, makes are redrawn at the player's own
//! observed percentages, assists are capped against made shots, and a tied
//! final score is broken with a converted basket.

pub mod normalizer;
pub mod tiebreak;

pub use normalizer::{cap_assists, normalize_team, target_score, Normalization, ASSIST_SHARE_PERCENT};
pub use tiebreak::{break_tie, Bump, TieBreak, HOME_TIE_WEIGHT};
