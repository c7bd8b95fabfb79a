//! Smoothing planner
//!
//! Builds the day-indexed ledger for a window: income deposits, the savings
//! sweeps that keep discretionary spending flat between income dates, the
//! modeled daily spending itself, and savings-funded expense payments.
//!
//! The work is split into small steps over explicit accumulator state:
//! expand incomes, find the first income day, expand (virtual) expenses,
//! compute the ideal rate, walk and smooth, then materialize transfers and
//! expense payments.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::occurrence::{find_occurrences, find_virtual_occurrences};
use crate::models::{Expense, Income, Ledger, Money, Transaction};

/// Per-date totals for one side of the plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyTotals {
    /// Sum across all dates
    pub total: Money,
    /// Amount per date
    pub by_date: BTreeMap<NaiveDate, Money>,
}

impl DailyTotals {
    /// Record an amount on a date
    pub fn add(&mut self, date: NaiveDate, amount: Money) {
        self.total += amount;
        *self.by_date.entry(date).or_default() += amount;
    }

    /// Amount recorded on a date
    pub fn on(&self, date: NaiveDate) -> Money {
        self.by_date.get(&date).copied().unwrap_or_default()
    }

    /// Sum of amounts in `[start, end)`
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Money {
        if start >= end {
            return Money::zero();
        }
        self.by_date.range(start..end).map(|(_, m)| *m).sum()
    }

    /// Dates with a nonzero amount in `[start, end]`, ascending
    pub fn nonzero_dates(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        self.by_date
            .range(start..=end)
            .filter(|(_, m)| !m.is_zero())
            .map(|(d, _)| *d)
            .collect()
    }
}

/// Output of the smoothing walk
#[derive(Debug, Clone, Default)]
pub struct Smoothing {
    /// Signed savings movement per income date; negative sweeps into savings
    pub savings_plan: BTreeMap<NaiveDate, Money>,
    /// Modeled daily discretionary spending
    pub spending: Vec<Transaction>,
}

/// Result of planning a window
#[derive(Debug, Clone, Default)]
pub struct Plan {
    /// Everything that should happen, by day
    pub ledger: Ledger,
    /// Discretionary spending per day if income and expenses were perfectly flat
    pub ideal_daily: Money,
    /// Income received in the window
    pub total_income: Money,
    /// Expenses smoothed over the window
    pub total_expenses: Money,
}

impl Plan {
    /// An empty plan: expenses exceed income
    pub fn insolvent(total_income: Money, total_expenses: Money) -> Self {
        Self {
            ledger: Ledger::new(),
            ideal_daily: Money::zero(),
            total_income,
            total_expenses,
        }
    }

    /// Check if planning gave up because expenses exceed income
    pub fn is_insolvent(&self) -> bool {
        self.ledger.is_empty() && self.total_expenses.greater_than(self.total_income)
    }
}

/// Number of days in the inclusive window `[from, to]`
pub fn days_in_window(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

/// Plans savings sweeps for a set of incomes and expenses
pub struct Planner<'a> {
    incomes: &'a [Income],
    expenses: &'a [Expense],
}

impl<'a> Planner<'a> {
    /// Create a new planner
    pub fn new(incomes: &'a [Income], expenses: &'a [Expense]) -> Self {
        Self { incomes, expenses }
    }

    /// Plan the inclusive window `[from, to]`
    ///
    /// Returns an empty ledger and a zero ideal rate when the window's
    /// expenses exceed its income.
    pub fn plan(&self, from: NaiveDate, to: NaiveDate) -> Plan {
        let (deposits, income) = self.expand_incomes(from, to);
        let first_income_day = first_income_day(&income, from, to);
        let expenses = self.expand_expenses(first_income_day, to);

        if expenses.total.greater_than(income.total) {
            warn!(
                income = %income.total,
                expenses = %expenses.total,
                "Insolvent window, nothing planned"
            );
            return Plan::insolvent(income.total, expenses.total);
        }

        let ideal_daily = ideal_rate(income.total, expenses.total, days_in_window(from, to));
        let smoothing = smooth(from, to, &income, &expenses);

        let mut ledger = Ledger::new();
        ledger.extend(deposits);
        ledger.extend(smoothing.spending);
        ledger.extend(materialize_transfers(&smoothing.savings_plan));
        ledger.extend(self.materialize_expenses(from, to));

        info!(
            transactions = ledger.len(),
            income = %income.total,
            expenses = %expenses.total,
            ideal_daily = %ideal_daily,
            "Plan built"
        );

        Plan {
            ledger,
            ideal_daily,
            total_income: income.total,
            total_expenses: expenses.total,
        }
    }

    /// Income deposits and their per-date totals
    pub fn expand_incomes(&self, from: NaiveDate, to: NaiveDate) -> (Vec<Transaction>, DailyTotals) {
        let mut deposits = Vec::new();
        let mut totals = DailyTotals::default();

        for income in self.incomes {
            for date in find_occurrences(&income.schedule, from, to) {
                deposits.push(Transaction::income(date, income.amount, &income.name));
                totals.add(date, income.amount);
            }
        }

        (deposits, totals)
    }

    /// Virtual expense totals from the first income day onward
    pub fn expand_expenses(&self, from: NaiveDate, to: NaiveDate) -> DailyTotals {
        let mut totals = DailyTotals::default();

        for expense in self.expenses {
            for (date, amount) in find_virtual_occurrences(expense, from, to) {
                totals.add(date, amount);
            }
        }

        totals
    }

    /// Each real expense paid from savings through checking
    pub fn materialize_expenses(&self, from: NaiveDate, to: NaiveDate) -> Vec<Transaction> {
        let mut payments = Vec::new();

        for expense in self.expenses {
            for date in find_occurrences(&expense.schedule, from, to) {
                payments.push(Transaction::from_savings(
                    date,
                    expense.amount,
                    format!("Transfer from Savings for: {}", expense.name),
                ));
                payments.push(Transaction::expense(date, expense.amount, &expense.name));
            }
        }

        payments
    }
}

/// Earliest date on or after `from` with income, or the day after `to`
pub fn first_income_day(income: &DailyTotals, from: NaiveDate, to: NaiveDate) -> NaiveDate {
    income
        .nonzero_dates(from, to)
        .first()
        .copied()
        .unwrap_or(to + Duration::days(1))
}

/// Flat per-day share of what is left after expenses
pub fn ideal_rate(total_income: Money, total_expenses: Money, days: i64) -> Money {
    (total_income - total_expenses)
        .divide(days)
        .first()
        .unwrap_or_default()
}

/// Walk each income date, deciding how much to sweep into or out of savings
///
/// At every income date the rate is recomputed from the income and expenses
/// still ahead plus whatever savings have accumulated, so earlier decisions
/// feed into later ones.
pub fn smooth(
    from: NaiveDate,
    to: NaiveDate,
    income: &DailyTotals,
    expenses: &DailyTotals,
) -> Smoothing {
    let mut smoothing = Smoothing::default();
    let mut remaining_income = income.total;
    let mut remaining_expenses = expenses.total;
    let mut running_savings = Money::zero();

    let income_dates = income.nonzero_dates(from, to);
    let after_window = to + Duration::days(1);

    for (i, &date) in income_dates.iter().enumerate() {
        let received = income.on(date);
        let next_income = income_dates.get(i + 1).copied().unwrap_or(after_window);
        let days_until_next = (next_income - date).num_days();
        let upcoming = expenses.between(date, next_income);

        let days_left = (to - date).num_days().max(1);
        let running_ideal = (remaining_income + running_savings - remaining_expenses)
            .divide(days_left)
            .first()
            .unwrap_or_default();

        let must_transfer = upcoming - running_savings;
        let ideal_transfer = received - running_ideal.multiply(days_until_next);
        let transfer = Money::min(&[Money::max(&[must_transfer, ideal_transfer]), received]);

        running_savings += transfer - upcoming;
        smoothing.savings_plan.insert(date, -transfer);

        debug!(
            date = %date,
            received = %received,
            upcoming = %upcoming,
            running_ideal = %running_ideal,
            transfer = %transfer,
            running_savings = %running_savings,
            "Smoothed income date"
        );

        let discretionary = (received - transfer).divide(days_until_next);
        for (offset, amount) in discretionary.into_parts().into_iter().enumerate() {
            let day = date + Duration::days(offset as i64);
            smoothing.spending.push(Transaction::simulated_spend(day, amount));
        }

        remaining_income -= received;
        remaining_expenses -= upcoming;
    }

    smoothing
}

/// Savings sweeps for every nonzero savings plan entry
pub fn materialize_transfers(savings_plan: &BTreeMap<NaiveDate, Money>) -> Vec<Transaction> {
    savings_plan
        .iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(&date, &amount)| {
            if amount.is_negative() {
                Transaction::to_savings(date, amount.abs())
            } else {
                Transaction::from_savings(date, amount, "Transfer from Savings")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Schedule, TransactionKind};
    use crate::services::simulator::Simulator;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn august() -> (NaiveDate, NaiveDate) {
        (date(2015, 8, 1), date(2015, 8, 31))
    }

    fn incomes() -> Vec<Income> {
        vec![
            Income::new("Philz", Money::from_decimal(500.0), Schedule::bi_monthly()),
            Income::new(
                "Mission Cliffs",
                Money::from_decimal(175.0),
                Schedule::bi_weekly(Weekday::Thu),
            ),
        ]
    }

    fn expenses() -> Vec<Expense> {
        vec![
            Expense::new("Utilities", Money::from_decimal(42.34), Schedule::monthly(25)),
            Expense::new("Rent", Money::from_decimal(400.0), Schedule::monthly(28)),
            Expense::new("Crossfit", Money::from_decimal(40.0), Schedule::weekly(Weekday::Tue)),
        ]
    }

    #[test]
    fn test_daily_totals() {
        let mut totals = DailyTotals::default();
        totals.add(date(2015, 8, 4), Money::from_cents(4000));
        totals.add(date(2015, 8, 4), Money::from_cents(100));
        totals.add(date(2015, 8, 11), Money::from_cents(4000));

        assert_eq!(totals.total.cents(), 8100);
        assert_eq!(totals.on(date(2015, 8, 4)).cents(), 4100);
        assert_eq!(totals.between(date(2015, 8, 1), date(2015, 8, 11)).cents(), 4100);
        assert_eq!(totals.between(date(2015, 8, 11), date(2015, 8, 11)).cents(), 0);
    }

    #[test]
    fn test_first_income_day() {
        let (from, to) = august();
        let mut income = DailyTotals::default();
        income.add(date(2015, 8, 6), Money::from_cents(17500));
        assert_eq!(first_income_day(&income, from, to), date(2015, 8, 6));

        let none = DailyTotals::default();
        assert_eq!(first_income_day(&none, from, to), date(2015, 9, 1));
    }

    #[test]
    fn test_ideal_rate_uses_inclusive_days() {
        let rate = ideal_rate(Money::from_cents(135000), Money::from_cents(60234), 31);
        assert_eq!(rate.cents(), 74766 / 31);
        assert_eq!(ideal_rate(Money::from_cents(100), Money::zero(), 0), Money::zero());
    }

    #[test]
    fn test_insolvent_plan_is_empty() {
        let (from, to) = august();
        let incomes = vec![Income::new("Philz", Money::from_decimal(500.0), Schedule::bi_monthly())];
        let expenses = vec![
            Expense::new("Utilities", Money::from_decimal(42.34), Schedule::monthly(25)),
            Expense::new("Rent", Money::from_decimal(1200.0), Schedule::monthly(28)),
            Expense::new("Crossfit", Money::from_decimal(40.0), Schedule::weekly(Weekday::Tue)),
        ];

        let plan = Planner::new(&incomes, &expenses).plan(from, to);
        assert!(plan.ledger.is_empty());
        assert_eq!(plan.ideal_daily, Money::zero());
        assert!(plan.is_insolvent());
    }

    #[test]
    fn test_smoothing_decisions() {
        let (from, to) = august();
        let incomes = incomes();
        let expenses = expenses();
        let planner = Planner::new(&incomes, &expenses);
        let (_, income) = planner.expand_incomes(from, to);
        let virtuals = planner.expand_expenses(first_income_day(&income, from, to), to);

        let smoothing = smooth(from, to, &income, &virtuals);
        let plan: Vec<i64> = smoothing.savings_plan.values().map(Money::cents).collect();

        // Aug 1 and 15 sweep into savings, Aug 6 and 20 draw back out
        assert_eq!(plan, vec![-37540, 4928, -37540, 9918]);
        let swept: Money = smoothing.savings_plan.values().copied().sum();
        assert_eq!(swept, -Money::from_cents(60234));
    }

    #[test]
    fn test_spending_covers_every_day_from_first_income() {
        let (from, to) = august();
        let incomes = incomes();
        let expenses = expenses();
        let plan = Planner::new(&incomes, &expenses).plan(from, to);

        let spend_days: Vec<NaiveDate> = plan
            .ledger
            .iter()
            .filter(|t| t.kind == TransactionKind::SimulatedSpend)
            .map(|t| t.date)
            .collect();
        assert_eq!(spend_days.len(), 31);
        assert_eq!(spend_days.first(), Some(&from));
        assert_eq!(spend_days.last(), Some(&to));

        let spent: Money = plan
            .ledger
            .iter()
            .filter(|t| t.kind == TransactionKind::SimulatedSpend)
            .map(|t| t.delta)
            .sum();
        assert_eq!(spent, plan.total_income - plan.total_expenses);
    }

    #[test]
    fn test_plan_materializes_expense_pairs() {
        let (from, to) = august();
        let incomes = incomes();
        let expenses = expenses();
        let plan = Planner::new(&incomes, &expenses).plan(from, to);

        let rent_day = plan.ledger.on(date(2015, 8, 28));
        let memos: Vec<&str> = rent_day.iter().map(|t| t.memo.as_str()).collect();
        assert!(memos.contains(&"Transfer from Savings for: Rent"));
        assert!(memos.contains(&"Expense: Rent"));

        let payment = rent_day.iter().find(|t| t.memo == "Expense: Rent").unwrap();
        assert_eq!(payment.from, Account::Checking);
        assert_eq!(payment.to, Account::External);
        assert_eq!(payment.delta, Money::from_decimal(400.0));
    }

    #[test]
    fn test_ideal_daily_for_august() {
        let (from, to) = august();
        let incomes = incomes();
        let expenses = expenses();
        let plan = Planner::new(&incomes, &expenses).plan(from, to);

        assert_eq!(plan.total_income.cents(), 135000);
        assert_eq!(plan.total_expenses.cents(), 60234);
        assert_eq!(plan.ideal_daily.cents(), 2411);
    }

    #[test]
    fn test_materialize_transfers_direction() {
        let mut savings_plan = BTreeMap::new();
        savings_plan.insert(date(2015, 8, 1), Money::from_cents(-100));
        savings_plan.insert(date(2015, 8, 2), Money::zero());
        savings_plan.insert(date(2015, 8, 3), Money::from_cents(50));

        let transfers = materialize_transfers(&savings_plan);
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].kind, TransactionKind::SavingsTransfer);
        assert_eq!(transfers[0].to, Account::Savings);
        assert_eq!(transfers[0].delta.cents(), 100);
        assert_eq!(transfers[1].kind, TransactionKind::SavingsDraw);
        assert_eq!(transfers[1].from, Account::Savings);
    }

    #[test]
    fn test_no_income_plans_nothing() {
        let (from, to) = august();
        let plan = Planner::new(&[], &[]).plan(from, to);
        assert!(plan.ledger.is_empty());
        assert!(!plan.is_insolvent());
        assert_eq!(plan.ideal_daily, Money::zero());
    }

    #[test]
    fn test_income_on_last_day_is_spent_that_day() {
        let (from, to) = august();
        let incomes = vec![Income::new("Bonus", Money::from_cents(10000), Schedule::one_time(to))];
        let expenses = vec![Expense::new("Dinner", Money::from_cents(4000), Schedule::one_time(to))];

        let plan = Planner::new(&incomes, &expenses).plan(from, to);
        assert_eq!(plan.ideal_daily, Money::from_cents(193));

        let spending: Vec<&Transaction> = plan
            .ledger
            .iter()
            .filter(|t| t.kind == TransactionKind::SimulatedSpend)
            .collect();
        assert_eq!(spending.len(), 1);
        assert_eq!(spending[0].date, to);
        assert_eq!(spending[0].delta, Money::from_cents(6000));

        let simulation = Simulator::new().simulate(from, to, &plan.ledger, None).unwrap();
        assert!(simulation.balances.all_zero());
        assert_eq!(simulation.average_spending, plan.ideal_daily);
    }

    #[test]
    fn test_income_on_last_day_without_expenses() {
        let (from, to) = august();
        let incomes = vec![Income::new("Bonus", Money::from_cents(10000), Schedule::one_time(to))];

        let plan = Planner::new(&incomes, &[]).plan(from, to);
        assert_eq!(plan.ideal_daily, Money::from_cents(322));
        assert_eq!(plan.ledger.on(to).len(), 2);

        let simulation = Simulator::new().simulate(from, to, &plan.ledger, None).unwrap();
        assert!(simulation.balances.all_zero());
        assert_eq!(simulation.average_spending, Money::from_cents(322));
    }
}
