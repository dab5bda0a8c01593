//! Split domain types.

use std::collections::HashSet;

use evensplit_shared::types::{Currency, Money, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SplitError;

/// How an expense is divided between its participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Everyone owes the same amount, give or take leftover minor units.
    #[default]
    Equal,
    /// Each participant's amount is given explicitly.
    Exact,
    /// Each participant owes a percentage of the total.
    Percentage,
}

impl SplitType {
    /// Returns the string representation of the split type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Exact => "exact",
            Self::Percentage => "percentage",
        }
    }
}

impl std::fmt::Display for SplitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One participant's portion of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Share {
    /// Who owes this portion.
    pub participant: UserId,
    /// Amount owed, at the currency's minor-unit scale.
    pub amount: Decimal,
}

/// Per-participant breakdown of one expense.
///
/// Entries keep the order participants were supplied in. The sum of all
/// shares equals the rounded expense total exactly. There are no mutating
/// methods: a changed split is a new allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitAllocation {
    currency: Currency,
    shares: Vec<Share>,
}

impl SplitAllocation {
    /// Builds an allocation from whole minor-unit shares.
    pub(crate) fn from_minor_units(
        currency: Currency,
        shares: impl IntoIterator<Item = (UserId, i128)>,
    ) -> Result<Self, SplitError> {
        let shares = shares
            .into_iter()
            .map(|(participant, units)| {
                Money::from_minor_units(units, currency)
                    .map(|money| Share {
                        participant,
                        amount: money.amount,
                    })
                    .ok_or(SplitError::InvalidAmount)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { currency, shares })
    }

    /// Currency every share is denominated in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// All shares, in participant order.
    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Iterates over the shares in participant order.
    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    /// Number of participants in the allocation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Returns true if the allocation has no shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Looks up what a participant owes.
    #[must_use]
    pub fn get(&self, participant: UserId) -> Option<Money> {
        self.shares
            .iter()
            .find(|share| share.participant == participant)
            .map(|share| Money::new(share.amount, self.currency))
    }

    /// Sum of all shares.
    #[must_use]
    pub fn total(&self) -> Money {
        Money::new(
            self.shares.iter().map(|share| share.amount).sum(),
            self.currency,
        )
    }
}

impl<'a> IntoIterator for &'a SplitAllocation {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

/// Rejects the input if any participant appears more than once.
pub(crate) fn ensure_unique(
    participants: impl IntoIterator<Item = UserId>,
) -> Result<(), SplitError> {
    let mut seen = HashSet::new();
    for participant in participants {
        if !seen.insert(participant) {
            return Err(SplitError::DuplicateParticipant(participant));
        }
    }
    Ok(())
}
