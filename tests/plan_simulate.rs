//! End-to-end planning and replay

use chrono::{NaiveDate, Weekday};
use smoother::models::{Account, Expense, Income, Ledger, Money, Schedule, Transaction, TransactionKind};
use smoother::scenario::Scenario;
use smoother::services::{Planner, Simulator};
use smoother::SmootherError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_basic_august_closes_to_zero() {
    let scenario = Scenario::builtin("basic").unwrap();
    let plan = Planner::new(&scenario.incomes, &scenario.expenses).plan(scenario.from, scenario.to);

    assert_eq!(plan.total_income, Money::from_cents(135_000));
    assert_eq!(plan.total_expenses, Money::from_cents(60_234));
    assert_eq!(plan.ideal_daily, Money::from_cents(2411));

    let simulation = Simulator::new()
        .simulate(scenario.from, scenario.to, &plan.ledger, None)
        .unwrap();

    for account in Account::ALL {
        assert_eq!(simulation.balances.get(account), Money::zero(), "{account}");
    }
    assert_eq!(simulation.days, 31);
    assert_eq!(simulation.total_spending, Money::from_cents(74_766));
    assert_eq!(simulation.average_spending, Money::from_cents(2411));
}

#[test]
fn test_basic_ratio_within_five_percent() {
    let scenario = Scenario::builtin("basic").unwrap();
    let plan = Planner::new(&scenario.incomes, &scenario.expenses).plan(scenario.from, scenario.to);
    let simulation = Simulator::new()
        .simulate(scenario.from, scenario.to, &plan.ledger, None)
        .unwrap();

    let ratio = simulation.ratio_to(plan.ideal_daily).unwrap();
    assert!((ratio - 1.0).abs() <= 0.05, "ratio {ratio}");
}

#[test]
fn test_insolvent_window_plans_nothing() {
    let scenario = Scenario::builtin("insolvent").unwrap();
    let plan = Planner::new(&scenario.incomes, &scenario.expenses).plan(scenario.from, scenario.to);

    assert!(plan.ledger.is_empty());
    assert!(plan.is_insolvent());
    assert_eq!(plan.ideal_daily, Money::zero());

    let simulation = Simulator::new()
        .simulate(scenario.from, scenario.to, &plan.ledger, None)
        .unwrap();
    assert!(simulation.balances.all_zero());
    assert_eq!(simulation.average_spending, Money::zero());
}

#[test]
fn test_one_time_vacation_is_saved_for() {
    let scenario = Scenario::builtin("one-time").unwrap();
    let plan = Planner::new(&scenario.incomes, &scenario.expenses).plan(scenario.from, scenario.to);

    let christmas = plan.ledger.on(date(2015, 12, 25));
    assert!(christmas
        .iter()
        .any(|t| t.kind == TransactionKind::Expense && t.delta == Money::from_cents(60_000)));

    let simulation = Simulator::new()
        .simulate(scenario.from, scenario.to, &plan.ledger, None)
        .unwrap();
    assert!(simulation.balances.all_zero());
    assert_eq!(simulation.days, 153);
    assert_eq!(plan.ideal_daily, Money::from_cents(2688));

    let ratio = simulation.ratio_to(plan.ideal_daily).unwrap();
    assert!((ratio - 1.0).abs() <= 0.05, "ratio {ratio}");
}

#[test]
fn test_savings_plan_draws_before_large_expenses() {
    let scenario = Scenario::builtin("basic").unwrap();
    let plan = Planner::new(&scenario.incomes, &scenario.expenses).plan(scenario.from, scenario.to);

    let draws: Vec<&Transaction> = plan
        .ledger
        .iter()
        .filter(|t| t.kind == TransactionKind::SavingsDraw && t.memo == "Transfer from Savings")
        .collect();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].date, date(2015, 8, 6));
    assert_eq!(draws[0].delta, Money::from_cents(4928));
    assert_eq!(draws[1].date, date(2015, 8, 20));
    assert_eq!(draws[1].delta, Money::from_cents(9918));
}

#[test]
fn test_every_day_has_spending_after_first_income() {
    let from = date(2015, 8, 1);
    let to = date(2015, 8, 31);
    let incomes = vec![Income::new("Job", Money::from_decimal(1000.0), Schedule::monthly(10))];
    let expenses = vec![Expense::new("Phone", Money::from_decimal(60.0), Schedule::monthly(20))];

    let plan = Planner::new(&incomes, &expenses).plan(from, to);
    let simulation = Simulator::new().simulate(from, to, &plan.ledger, None).unwrap();

    for day in 10..=31 {
        let spent = plan
            .ledger
            .on(date(2015, 8, day))
            .iter()
            .any(|t| t.kind == TransactionKind::SimulatedSpend);
        assert!(spent, "no spending on day {day}");
    }
    assert!(plan.ledger.on(date(2015, 8, 9)).is_empty());
    assert!(simulation.balances.all_zero());
}

#[test]
fn test_expense_before_first_income_overdraws_savings() {
    let from = date(2015, 8, 1);
    let to = date(2015, 8, 31);
    let incomes = vec![Income::new("Job", Money::from_decimal(1000.0), Schedule::monthly(10))];
    let expenses = vec![Expense::new("Gym", Money::from_decimal(40.0), Schedule::weekly(Weekday::Tue))];

    let plan = Planner::new(&incomes, &expenses).plan(from, to);
    assert_eq!(plan.total_expenses, Money::from_decimal(120.0));

    let err = Simulator::new().simulate(from, to, &plan.ledger, None).unwrap_err();
    match &err {
        SmootherError::NegativeBalance { date: failed_on, account, .. } => {
            assert_eq!(*failed_on, date(2015, 8, 4));
            assert_eq!(*account, Account::Savings);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.shortfall(), Some(Money::from_decimal(-40.0)));
}

#[test]
fn test_replay_reports_first_negative_balance() {
    let mut ledger = Ledger::new();
    ledger.push(Transaction::income(date(2015, 8, 1), Money::from_cents(10_000), "Job"));
    ledger.push(Transaction::expense(date(2015, 8, 3), Money::from_cents(6_000), "Rent"));
    ledger.push(Transaction::expense(date(2015, 8, 4), Money::from_cents(6_000), "Rent again"));
    ledger.push(Transaction::expense(date(2015, 8, 5), Money::from_cents(6_000), "Never reached"));

    let err = Simulator::new()
        .simulate(date(2015, 8, 1), date(2015, 8, 31), &ledger, None)
        .unwrap_err();

    match &err {
        SmootherError::NegativeBalance {
            date: failed_on,
            account,
            balances,
        } => {
            assert_eq!(*failed_on, date(2015, 8, 4));
            assert_eq!(*account, Account::Checking);
            assert_eq!(balances.get(Account::Checking), Money::from_cents(-2_000));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "Balance dipped below zero! Checking is (20.00) on 2015.08.04"
    );
}
