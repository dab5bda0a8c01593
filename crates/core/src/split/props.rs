//! Property-based tests for split allocation.
//!
//! - Sum Invariant: shares always add up to the rounded total
//! - Fairness Bound: how far apart shares can be under each policy
//! - Determinism and single-participant identity

use evensplit_shared::types::{Currency, Money, RemainderPolicy, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::equal::EqualSplitAllocator;
use super::types::SplitAllocation;
use super::weighted::allocate_by_percentage;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with more precision than a cent.
fn fine_grained_amount() -> impl Strategy<Value = Decimal> {
    (1_000i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 5))
}

/// Strategy to generate a participant list (1 to 50) and a payer index into it.
fn participants_with_payer() -> impl Strategy<Value = (Vec<UserId>, usize)> {
    (1usize..50).prop_flat_map(|n| {
        let ids: Vec<UserId> = (0..n)
            .map(|i| UserId::from_uuid(Uuid::from_u128(i as u128 + 1)))
            .collect();
        (Just(ids), 0..n)
    })
}

fn policy() -> impl Strategy<Value = RemainderPolicy> {
    prop_oneof![Just(RemainderPolicy::Payer), Just(RemainderPolicy::RoundRobin)]
}

/// Strategy to generate whole-number percentages that sum to 100.
fn percentages_summing_to_100() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..100, 1..10).prop_map(|values| {
        let sum: u32 = values.iter().sum();
        let hundred = Decimal::ONE_HUNDRED;
        let mut pcts: Vec<Decimal> = values
            .iter()
            .map(|v| (hundred * Decimal::from(*v) / Decimal::from(sum)).round_dp(2))
            .collect();
        // Push rounding drift onto the last entry
        let drift = hundred - pcts.iter().copied().sum::<Decimal>();
        if let Some(last) = pcts.last_mut() {
            *last += drift;
        }
        pcts
    })
}

fn units(split: &SplitAllocation) -> Vec<i128> {
    split
        .iter()
        .map(|share| {
            Money::new(share.amount, split.currency())
                .to_minor_units()
                .unwrap()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Sum Invariant
    // =========================================================================

    /// *For any* positive total, participant list, and policy, the shares
    /// SHALL sum to the total.
    #[test]
    fn prop_equal_split_sum_equals_total(
        total in positive_amount(),
        (participants, payer) in participants_with_payer(),
        policy in policy(),
    ) {
        let money = Money::new(total, Currency::Usd);
        let split = EqualSplitAllocator::new(policy)
            .allocate(money, &participants, participants[payer])
            .unwrap();
        prop_assert_eq!(split.total().amount, total);
        prop_assert_eq!(split.len(), participants.len());
    }

    /// *For any* total with sub-cent precision, the shares SHALL sum to the
    /// total rounded to the cent.
    #[test]
    fn prop_equal_split_sum_equals_rounded_total(
        total in fine_grained_amount(),
        (participants, payer) in participants_with_payer(),
    ) {
        let money = Money::new(total, Currency::Usd);
        let split = EqualSplitAllocator::default()
            .allocate(money, &participants, participants[payer])
            .unwrap();
        prop_assert_eq!(split.total().amount, money.rounded().amount);
    }

    // =========================================================================
    // Fairness Bound
    // =========================================================================

    /// Round robin: shares SHALL differ by at most one minor unit.
    #[test]
    fn prop_round_robin_shares_within_one_unit(
        total in positive_amount(),
        (participants, payer) in participants_with_payer(),
    ) {
        let split = EqualSplitAllocator::new(RemainderPolicy::RoundRobin)
            .allocate(Money::new(total, Currency::Usd), &participants, participants[payer])
            .unwrap();
        let units = units(&split);
        let max = units.iter().max().unwrap();
        let min = units.iter().min().unwrap();
        prop_assert!(max - min <= 1);
        // The payer is never short-changed
        prop_assert_eq!(units[payer], *max);
    }

    /// Payer policy: every non-payer share SHALL be equal, and the payer's
    /// surplus SHALL be smaller than the participant count.
    #[test]
    fn prop_payer_absorbs_remainder(
        total in positive_amount(),
        (participants, payer) in participants_with_payer(),
    ) {
        let split = EqualSplitAllocator::new(RemainderPolicy::Payer)
            .allocate(Money::new(total, Currency::Usd), &participants, participants[payer])
            .unwrap();
        let units = units(&split);
        let base = units.iter().min().copied().unwrap();
        for (i, u) in units.iter().enumerate() {
            if i != payer {
                prop_assert_eq!(*u, base);
            }
        }
        let surplus = units[payer] - base;
        prop_assert!(surplus >= 0);
        prop_assert!(surplus < i128::from(participants.len() as u64));
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    /// *For any* input, calling allocate twice SHALL produce the same result.
    #[test]
    fn prop_equal_split_is_deterministic(
        total in positive_amount(),
        (participants, payer) in participants_with_payer(),
        policy in policy(),
    ) {
        let allocator = EqualSplitAllocator::new(policy);
        let money = Money::new(total, Currency::Usd);
        let first = allocator.allocate(money, &participants, participants[payer]).unwrap();
        let second = allocator.allocate(money, &participants, participants[payer]).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* total, a single participant SHALL owe the whole total.
    #[test]
    fn prop_single_participant_identity(total in positive_amount(), policy in policy()) {
        let only = UserId::from_uuid(Uuid::from_u128(7));
        let money = Money::new(total, Currency::Usd);
        let split = EqualSplitAllocator::new(policy).allocate(money, &[only], only).unwrap();
        prop_assert_eq!(split.get(only), Some(money));
    }

    // =========================================================================
    // Percentage Sum Invariant
    // =========================================================================

    /// *For any* total and percentages summing to 100, the shares SHALL sum
    /// to the total.
    #[test]
    fn prop_percentage_split_sum_equals_total(
        total in positive_amount(),
        pcts in percentages_summing_to_100(),
    ) {
        let entries: Vec<(UserId, Decimal)> = pcts
            .iter()
            .enumerate()
            .map(|(i, pct)| (UserId::from_uuid(Uuid::from_u128(i as u128 + 1)), *pct))
            .collect();
        let split = allocate_by_percentage(Money::new(total, Currency::Usd), &entries).unwrap();
        prop_assert_eq!(split.total().amount, total);
    }
}
