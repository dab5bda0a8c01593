//! Verification domain types.

use std::collections::BTreeMap;

use evensplit_shared::types::UserId;
use serde::{Deserialize, Serialize};

use super::error::VerificationError;

/// A participant's answer to "is this expense correct?".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// The user confirmed the expense.
    Accepted,
    /// The user has not answered yet.
    #[default]
    Pending,
    /// The user disputes the expense.
    Rejected,
}

impl VerificationStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verification state of one expense, keyed by involved user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseVerification {
    payer: UserId,
    statuses: BTreeMap<UserId, VerificationStatus>,
}

impl ExpenseVerification {
    /// Starts verification: the payer is accepted, everyone else pending.
    ///
    /// The payer is always involved, whether or not `participants` lists them.
    #[must_use]
    pub fn initialize(payer: UserId, participants: &[UserId]) -> Self {
        let mut statuses: BTreeMap<UserId, VerificationStatus> = participants
            .iter()
            .map(|user| (*user, VerificationStatus::Pending))
            .collect();
        statuses.insert(payer, VerificationStatus::Accepted);
        Self { payer, statuses }
    }

    /// The user who paid.
    #[must_use]
    pub const fn payer(&self) -> UserId {
        self.payer
    }

    /// Records `user`'s answer.
    pub fn update(
        &mut self,
        user: UserId,
        status: VerificationStatus,
    ) -> Result<(), VerificationError> {
        let entry = self
            .statuses
            .get_mut(&user)
            .ok_or(VerificationError::NotInvolved(user))?;
        *entry = status;
        Ok(())
    }

    /// Current status of `user`; unknown users read as pending.
    #[must_use]
    pub fn status_of(&self, user: UserId) -> VerificationStatus {
        self.statuses.get(&user).copied().unwrap_or_default()
    }

    /// Everyone involved, payer included.
    pub fn involved_users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.statuses.keys().copied()
    }

    /// True if anyone rejected the expense.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.statuses
            .values()
            .any(|status| *status == VerificationStatus::Rejected)
    }

    /// True only when every involved user has accepted.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.statuses
            .values()
            .all(|status| *status == VerificationStatus::Accepted)
    }
}
