//! Plan and scenario display formatting
//!
//! Formats scenarios, plan totals and replay results for terminal output.

use chrono::NaiveDate;

use super::report::{format_header, format_percentage, separator, truncate};
use crate::models::{Money, DATE_FORMAT};
use crate::scenario::Scenario;
use crate::services::{Balances, Plan, Simulation};

const REPORT_WIDTH: usize = 60;

/// Format the cash flows of a scenario as two tables
pub fn format_scenario(scenario: &Scenario) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} ({} - {})\n",
        scenario.name,
        scenario.from.format(DATE_FORMAT),
        scenario.to.format(DATE_FORMAT)
    ));
    if !scenario.description.is_empty() {
        output.push_str(&format!("{}\n", scenario.description));
    }

    let flows = scenario
        .incomes
        .iter()
        .map(|i| ("Income", i.name.as_str(), i.amount, i.schedule.to_string()))
        .chain(
            scenario
                .expenses
                .iter()
                .map(|e| ("Expense", e.name.as_str(), e.amount, e.schedule.to_string())),
        );

    output.push('\n');
    output.push_str(&format!(
        "{:<8}  {:<20}  {:>10}  {}\n",
        "Type", "Name", "Amount", "Schedule"
    ));
    output.push_str(&format!("{:-<8}  {:-<20}  {:->10}  {:-<24}\n", "", "", "", ""));

    for (kind, name, amount, schedule) in flows {
        output.push_str(&format!(
            "{:<8}  {:<20}  {:>10}  {}\n",
            kind,
            truncate(name, 20),
            amount,
            schedule
        ));
    }

    output
}

/// Format the built-in scenario listing
pub fn format_scenario_list(scenarios: &[Scenario]) -> String {
    if scenarios.is_empty() {
        return "No scenarios available.".to_string();
    }

    let name_width = scenarios
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<23}  {}\n",
        "Name",
        "Window",
        "Description",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<23}  {:-<20}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for scenario in scenarios {
        output.push_str(&format!(
            "{:<name_width$}  {} - {}  {}\n",
            scenario.name,
            scenario.from.format(DATE_FORMAT),
            scenario.to.format(DATE_FORMAT),
            scenario.description,
            name_width = name_width,
        ));
    }

    output
}

/// Format the totals of a plan
pub fn format_plan_summary(plan: &Plan, from: NaiveDate, to: NaiveDate) -> String {
    let mut output = String::new();
    let title = format!(
        "Plan {} - {}",
        from.format(DATE_FORMAT),
        to.format(DATE_FORMAT)
    );

    output.push_str(&format_header(&title, REPORT_WIDTH));
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    if plan.is_insolvent() {
        output.push_str("Insolvent :(\n");
        output.push_str(&format!(
            "Expenses of {} exceed income of {}\n",
            plan.total_expenses, plan.total_income
        ));
        return output;
    }

    output.push_str(&format!("{:<30} {:>12}\n", "Total income:", plan.total_income));
    output.push_str(&format!("{:<30} {:>12}\n", "Total expenses:", plan.total_expenses));
    output.push_str(&format!("{:<30} {:>12}\n", "Ideal daily spending:", plan.ideal_daily));
    output.push_str(&format!("{:<30} {:>12}\n", "Planned transactions:", plan.ledger.len()));

    output
}

/// Format account balances as a table
pub fn format_balances(balances: &Balances) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<10}  {:>12}\n", "Account", "Balance"));
    output.push_str(&format!("{:-<10}  {:->12}\n", "", ""));

    for (account, balance) in balances.iter() {
        output.push_str(&format!("{:<10}  {:>12}\n", account, balance));
    }

    let total: Money = balances.iter().map(|(_, m)| m).sum();
    output.push_str(&format!("{:-<10}  {:->12}\n", "", ""));
    output.push_str(&format!("{:<10}  {:>12}\n", "Total", total));

    output
}

/// Format ideal vs realized spending
pub fn format_spending_comparison(ideal_daily: Money, simulation: &Simulation) -> String {
    let mut output = format!(
        "Ideal Average Spending {}  Actual Average Spending {}\n",
        ideal_daily, simulation.average_spending
    );

    match simulation.ratio_to(ideal_daily) {
        Some(ratio) => output.push_str(&format!("Actual: {} of ideal\n", format_percentage(ratio))),
        None => output.push_str("Actual: n/a (no discretionary income)\n"),
    }

    output
}
