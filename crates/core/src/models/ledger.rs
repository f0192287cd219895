use serde::{Deserialize, Serialize};

use super::deposit::FixedDeposit;
use super::fund::MutualFund;
use super::user::UserProfile;

/// The main data container. Everything in here gets serialized,
/// encrypted, and saved to the portable .nwtk file.
///
/// Contains: fixed deposits, mutual-fund holdings, and the owner's
/// profile. Derived values (accrued returns, summaries, net worth) are
/// never stored — they are recomputed from these records on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Fixed deposits, most-recently-created first
    pub deposits: Vec<FixedDeposit>,

    /// Mutual-fund holdings, most-recently-created first
    pub funds: Vec<MutualFund>,

    /// The local user, once onboarding has run
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            deposits: Vec::new(),
            funds: Vec::new(),
            user: None,
        }
    }
}
