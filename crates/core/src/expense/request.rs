//! Create-expense request types and builders.

use chrono::NaiveDate;
use evensplit_shared::types::{Currency, GroupId, Money, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ExpenseError;
use crate::split::{
    EqualSplitAllocator, SplitAllocation, SplitError, SplitType, allocate_by_percentage,
    allocate_exact,
};

/// Input for creating an expense, as entered by the creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Short label, e.g. "Dinner".
    pub title: String,
    /// Optional free-form notes.
    pub description: Option<String>,
    /// Total paid by the creator.
    pub amount: Money,
    /// Group the expense belongs to, if any.
    pub group_id: Option<GroupId>,
    /// Day the expense happened.
    pub expense_date: NaiveDate,
}

/// One `{user_id, amount}` pair in the create-expense payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEntry {
    /// Participant who owes `amount`.
    pub user_id: UserId,
    /// Amount owed, serialized as a decimal string.
    pub amount: Decimal,
    /// Percentage of the total, only for percentage splits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
}

/// Create-expense payload. The creator is implied by the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    /// Expense title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Total amount, rounded to the currency's minor unit.
    pub amount: Decimal,
    /// Currency of `amount` and every split.
    pub currency: Currency,
    /// Owning group, if any.
    pub group_id: Option<GroupId>,
    /// How `splits` was computed.
    pub split_type: SplitType,
    /// Day the expense happened.
    pub expense_date: NaiveDate,
    /// One entry per participant, payer included.
    pub splits: Vec<SplitEntry>,
}

impl CreateExpenseRequest {
    /// Builds an equal-split request.
    ///
    /// The creator pays and is the first participant; `selected` members
    /// follow in selection order. A creator or member selected twice is
    /// counted once.
    pub fn equal_split(
        expense: NewExpense,
        creator: UserId,
        selected: &[UserId],
        allocator: &EqualSplitAllocator,
    ) -> Result<Self, ExpenseError> {
        validate(&expense)?;

        let mut participants = vec![creator];
        for member in selected {
            if !participants.contains(member) {
                participants.push(*member);
            }
        }
        if participants.len() < 2 {
            return Err(ExpenseError::NoMembersSelected);
        }

        let allocation = allocator.allocate(expense.amount, &participants, creator)?;
        Ok(Self::from_allocation(expense, SplitType::Equal, &allocation, None))
    }

    /// Builds a request from explicit per-participant amounts.
    pub fn exact_split(
        expense: NewExpense,
        amounts: &[(UserId, Decimal)],
    ) -> Result<Self, ExpenseError> {
        validate(&expense)?;
        let allocation = allocate_exact(expense.amount, amounts)?;
        Ok(Self::from_allocation(expense, SplitType::Exact, &allocation, None))
    }

    /// Builds a request from per-participant percentages.
    pub fn percentage_split(
        expense: NewExpense,
        percentages: &[(UserId, Decimal)],
    ) -> Result<Self, ExpenseError> {
        validate(&expense)?;
        let allocation = allocate_by_percentage(expense.amount, percentages)?;
        Ok(Self::from_allocation(
            expense,
            SplitType::Percentage,
            &allocation,
            Some(percentages),
        ))
    }

    fn from_allocation(
        expense: NewExpense,
        split_type: SplitType,
        allocation: &SplitAllocation,
        percentages: Option<&[(UserId, Decimal)]>,
    ) -> Self {
        let percentage_of = |user: UserId| {
            percentages.and_then(|pcts| {
                pcts.iter()
                    .find(|(participant, _)| *participant == user)
                    .map(|(_, pct)| *pct)
            })
        };

        let splits = allocation
            .iter()
            .map(|share| SplitEntry {
                user_id: share.participant,
                amount: share.amount,
                percentage: percentage_of(share.participant),
            })
            .collect();

        Self {
            title: expense.title.trim().to_string(),
            description: expense.description,
            amount: allocation.total().amount,
            currency: allocation.currency(),
            group_id: expense.group_id,
            split_type,
            expense_date: expense.expense_date,
            splits,
        }
    }
}

fn validate(expense: &NewExpense) -> Result<(), ExpenseError> {
    if expense.title.trim().is_empty() {
        return Err(ExpenseError::MissingTitle);
    }
    if !expense.amount.is_positive() {
        return Err(SplitError::InvalidAmount.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evensplit_shared::types::RemainderPolicy;
    use rust_decimal_macros::dec;

    fn dinner(amount: Decimal) -> NewExpense {
        NewExpense {
            title: "  Dinner ".to_string(),
            description: None,
            amount: Money::new(amount, Currency::Usd),
            group_id: None,
            expense_date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        }
    }

    #[test]
    fn test_equal_split_creator_pays_and_absorbs_remainder() {
        let (creator, b, c) = (UserId::new(), UserId::new(), UserId::new());
        let request = CreateExpenseRequest::equal_split(
            dinner(dec!(10.00)),
            creator,
            &[b, c],
            &EqualSplitAllocator::default(),
        )
        .unwrap();

        assert_eq!(request.title, "Dinner");
        assert_eq!(request.split_type, SplitType::Equal);
        assert_eq!(request.amount, dec!(10.00));
        let pairs: Vec<(UserId, Decimal)> =
            request.splits.iter().map(|s| (s.user_id, s.amount)).collect();
        assert_eq!(
            pairs,
            vec![(creator, dec!(3.34)), (b, dec!(3.33)), (c, dec!(3.33))]
        );
    }

    #[test]
    fn test_equal_split_collapses_repeated_selection() {
        let (creator, b) = (UserId::new(), UserId::new());
        let request = CreateExpenseRequest::equal_split(
            dinner(dec!(9)),
            creator,
            &[b, creator, b],
            &EqualSplitAllocator::new(RemainderPolicy::RoundRobin),
        )
        .unwrap();
        assert_eq!(request.splits.len(), 2);
    }

    #[test]
    fn test_equal_split_requires_members() {
        let creator = UserId::new();
        let err = CreateExpenseRequest::equal_split(
            dinner(dec!(9)),
            creator,
            &[creator],
            &EqualSplitAllocator::default(),
        )
        .unwrap_err();
        assert_eq!(err, ExpenseError::NoMembersSelected);
    }

    #[test]
    fn test_validation_order_matches_form() {
        let mut expense = dinner(dec!(0));
        expense.title = "   ".to_string();
        assert_eq!(
            CreateExpenseRequest::equal_split(
                expense,
                UserId::new(),
                &[],
                &EqualSplitAllocator::default()
            ),
            Err(ExpenseError::MissingTitle)
        );

        assert_eq!(
            CreateExpenseRequest::equal_split(
                dinner(dec!(-1)),
                UserId::new(),
                &[],
                &EqualSplitAllocator::default()
            ),
            Err(ExpenseError::Split(SplitError::InvalidAmount))
        );
    }

    #[test]
    fn test_percentage_split_carries_percentages() {
        let (a, b) = (UserId::new(), UserId::new());
        let request =
            CreateExpenseRequest::percentage_split(dinner(dec!(80)), &[(a, dec!(75)), (b, dec!(25))])
                .unwrap();
        assert_eq!(request.splits[0].percentage, Some(dec!(75)));
        assert_eq!(request.splits[1].amount, dec!(20.00));
    }

    #[test]
    fn test_exact_split_propagates_mismatch() {
        let (a, b) = (UserId::new(), UserId::new());
        let err =
            CreateExpenseRequest::exact_split(dinner(dec!(80)), &[(a, dec!(40)), (b, dec!(30))])
                .unwrap_err();
        assert!(matches!(
            err,
            ExpenseError::Split(SplitError::ExactSumMismatch { .. })
        ));
    }

    #[test]
    fn test_request_wire_format() {
        let (creator, b) = (UserId::new(), UserId::new());
        let request = CreateExpenseRequest::equal_split(
            dinner(dec!(5)),
            creator,
            &[b],
            &EqualSplitAllocator::default(),
        )
        .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["split_type"], "equal");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["expense_date"], "2026-10-18");
        assert_eq!(json["amount"], "5.00");
        assert_eq!(json["splits"][1]["user_id"], b.to_string());
        assert_eq!(json["splits"][1]["amount"], "2.50");
        assert!(json["splits"][1].get("percentage").is_none());
    }
}
