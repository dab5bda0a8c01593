//! Equal-split allocation.
//!
//! The total is converted to whole minor units once, up front. Everything
//! after that is integer arithmetic, so shares reconcile with the total
//! exactly:
//!
//! 1. `base = units / N`, `remainder = units % N`
//! 2. every participant gets `base`
//! 3. the `remainder` minor units are placed according to [`RemainderPolicy`]
//!
//! `base * N + remainder == units`, so the sum invariant holds by construction.

use evensplit_shared::types::{Money, RemainderPolicy, UserId};

use super::error::SplitError;
use super::types::{SplitAllocation, ensure_unique};

/// Splits an expense equally between its participants.
///
/// Stateless apart from the remainder policy; safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualSplitAllocator {
    policy: RemainderPolicy,
}

impl EqualSplitAllocator {
    /// Creates an allocator using the given remainder policy.
    #[must_use]
    pub const fn new(policy: RemainderPolicy) -> Self {
        Self { policy }
    }

    /// The remainder policy this allocator applies.
    #[must_use]
    pub const fn policy(&self) -> RemainderPolicy {
        self.policy
    }

    /// Allocates `total` equally across `participants`.
    ///
    /// `payer` must be one of `participants`. Shares come back in participant
    /// order.
    ///
    /// # Example
    ///
    /// ```
    /// use evensplit_core::split::EqualSplitAllocator;
    /// use evensplit_shared::types::{Currency, Money, RemainderPolicy, UserId};
    /// use rust_decimal_macros::dec;
    ///
    /// let (a, b, c) = (UserId::new(), UserId::new(), UserId::new());
    /// let allocator = EqualSplitAllocator::new(RemainderPolicy::Payer);
    /// let split = allocator
    ///     .allocate(Money::new(dec!(10.00), Currency::Usd), &[a, b, c], a)
    ///     .unwrap();
    ///
    /// assert_eq!(split.get(a).unwrap().amount, dec!(3.34));
    /// assert_eq!(split.get(b).unwrap().amount, dec!(3.33));
    /// assert_eq!(split.total().amount, dec!(10.00));
    /// ```
    pub fn allocate(
        &self,
        total: Money,
        participants: &[UserId],
        payer: UserId,
    ) -> Result<SplitAllocation, SplitError> {
        if !total.is_positive() {
            return Err(SplitError::InvalidAmount);
        }
        if participants.is_empty() {
            return Err(SplitError::EmptyParticipants);
        }
        ensure_unique(participants.iter().copied())?;

        let payer_index = participants
            .iter()
            .position(|participant| *participant == payer)
            .ok_or(SplitError::PayerNotParticipant(payer))?;

        let units = total
            .to_minor_units()
            .filter(|units| *units > 0)
            .ok_or(SplitError::InvalidAmount)?;

        let count = i128::from(participants.len() as u64);
        let base = units / count;
        let remainder = units % count;

        let shares = participants.iter().enumerate().map(|(index, participant)| {
            let units = match self.policy {
                RemainderPolicy::Payer if index == payer_index => base + remainder,
                RemainderPolicy::Payer => base,
                RemainderPolicy::RoundRobin => {
                    let extra = usize::try_from(remainder).unwrap_or(0);
                    if payer_first_rank(index, payer_index) < extra {
                        base + 1
                    } else {
                        base
                    }
                }
            };
            (*participant, units)
        });

        SplitAllocation::from_minor_units(total.currency, shares)
    }
}

/// Position of `index` when the payer is moved to the front and everyone
/// else keeps their relative order.
const fn payer_first_rank(index: usize, payer_index: usize) -> usize {
    if index == payer_index {
        0
    } else if index < payer_index {
        index + 1
    } else {
        index
    }
}

/// Allocates `total` equally with the default policy (payer absorbs the
/// remainder).
pub fn allocate(
    total: Money,
    participants: &[UserId],
    payer: UserId,
) -> Result<SplitAllocation, SplitError> {
    EqualSplitAllocator::default().allocate(total, participants, payer)
}
