//! Result projection: solved variable values → per-(function, role) rows.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::formulation::Formulation;
use crate::domain::{AllocationRow, FunctionSummary, ModelInput, OptimizationReport};
use crate::port::outbound::solver::{LpSolution, SolutionStatus};

/// Decimal places used for hour values in the report.
pub const HOURS_DP: u32 = 2;

/// Convert a successful solution into a report.
///
/// Staffing values are rounded to the nearest integer and clamped to
/// `[0, N[f,r]]` so solver tolerance never leaks into headcounts. Shortage is
/// clamped at zero. Rows are grouped by function, then role, in declaration
/// order.
#[must_use]
pub fn project(
    input: &ModelInput,
    formulation: &Formulation,
    solution: &LpSolution,
) -> OptimizationReport {
    let layout = formulation.layout;
    let mut rows = Vec::with_capacity(input.pair_count());
    let mut summaries = Vec::with_capacity(input.functions.len());

    for (fi, function) in input.functions.iter().enumerate() {
        let optimal: Vec<u32> = input
            .roles
            .iter()
            .enumerate()
            .map(|(ri, role)| {
                let value = value_at(solution, layout.staff(fi, ri));
                headcount(value, input.current(function, role))
            })
            .collect();

        let optimal_total = optimal.iter().copied().fold(0, u32::saturating_add);
        let workload = input.workload(function).round_dp(HOURS_DP);
        let capacity = Decimal::from(optimal_total)
            .saturating_mul(input.capacity)
            .round_dp(HOURS_DP);
        let shortage = value_at(solution, layout.shortage(fi))
            .max(Decimal::ZERO)
            .round_dp(HOURS_DP);

        for (role, optimal) in input.roles.iter().zip(optimal) {
            let current = input.current(function, role);
            rows.push(AllocationRow {
                function: function.clone(),
                role: role.clone(),
                current,
                optimal,
                removed: current - optimal,
                workload,
                capacity,
                shortage,
            });
        }

        let current_total = input.headcount.function_total(function, &input.roles);
        summaries.push(FunctionSummary {
            function: function.clone(),
            current: current_total,
            optimal: optimal_total,
            removed: current_total.saturating_sub(optimal_total),
            workload,
            capacity,
            shortage,
        });
    }

    OptimizationReport {
        rows,
        summaries,
        objective: formulation.objective_offset.saturating_add(solution.objective),
        big_m: formulation.big_m,
        proven_optimal: solution.status == SolutionStatus::Optimal,
    }
}

fn value_at(solution: &LpSolution, index: usize) -> Decimal {
    solution.values.get(index).copied().unwrap_or(Decimal::ZERO)
}

fn headcount(value: Decimal, ceiling: u32) -> u32 {
    let rounded = value.round().to_i64().unwrap_or(0).max(0);
    u32::try_from(rounded).unwrap_or(u32::MAX).min(ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use rust_decimal_macros::dec;

    use crate::application::formulation::formulate;
    use crate::domain::{FunctionName, HeadcountKey, HeadcountMatrix, RoleName, ShortagePenalty};

    fn input() -> ModelInput {
        let mut headcount = HeadcountMatrix::new();
        headcount.set(HeadcountKey::new("Ops", "Manager"), 2);
        headcount.set(HeadcountKey::new("Ops", "Officer"), 3);
        headcount.set(HeadcountKey::new("Legal", "Manager"), 1);
        ModelInput {
            functions: vec![FunctionName::new("Ops"), FunctionName::new("Legal")],
            roles: vec![RoleName::new("Manager"), RoleName::new("Officer")],
            workload: HashMap::from([
                (FunctionName::new("Ops"), dec!(20)),
                (FunctionName::new("Legal"), dec!(10.456)),
            ]),
            capacity: dec!(6.5),
            headcount,
            alpha: HashMap::new(),
            penalty: HashMap::new(),
        }
    }

    fn solution(values: Vec<Decimal>) -> LpSolution {
        LpSolution {
            values,
            objective: dec!(-5),
            status: SolutionStatus::Optimal,
        }
    }

    #[test]
    fn rows_follow_function_then_role_order() {
        let input = input();
        let formulation = formulate(&input, &ShortagePenalty::default());
        let solved = solution(vec![
            dec!(2),
            dec!(1.9999999),
            dec!(1),
            dec!(0),
            dec!(0),
            dec!(3.956),
        ]);

        let report = project(&input, &formulation, &solved);
        let order: Vec<(&str, &str)> = report
            .rows
            .iter()
            .map(|row| (row.function.as_str(), row.role.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Ops", "Manager"),
                ("Ops", "Officer"),
                ("Legal", "Manager"),
                ("Legal", "Officer"),
            ]
        );

        let officer = &report.rows[1];
        assert_eq!(officer.optimal, 2);
        assert_eq!(officer.removed, 1);
        assert_eq!(officer.capacity, dec!(26.00));
        assert_eq!(report.rows[0].capacity, officer.capacity);

        let legal = &report.rows[2];
        assert_eq!(legal.workload, dec!(10.46));
        assert_eq!(legal.capacity, dec!(6.50));
        assert_eq!(legal.shortage, dec!(3.96));
    }

    #[test]
    fn clamps_noise_into_ceiling_and_zero() {
        let input = input();
        let formulation = formulate(&input, &ShortagePenalty::default());
        let solved = solution(vec![
            dec!(2.0000004),
            dec!(-0.0000001),
            dec!(1),
            dec!(0),
            dec!(-0.0000002),
            dec!(0),
        ]);

        let report = project(&input, &formulation, &solved);
        assert_eq!(report.rows[0].optimal, 2);
        assert_eq!(report.rows[1].optimal, 0);
        assert_eq!(report.rows[1].removed, 3);
        assert_eq!(report.rows[0].shortage, Decimal::ZERO);
    }

    #[test]
    fn summaries_total_each_function() {
        let input = input();
        let formulation = formulate(&input, &ShortagePenalty::default());
        let solved = solution(vec![
            dec!(1),
            dec!(3),
            dec!(1),
            dec!(0),
            dec!(0),
            dec!(3.956),
        ]);

        let report = project(&input, &formulation, &solved);
        let ops = &report.summaries[0];
        assert_eq!((ops.current, ops.optimal, ops.removed), (5, 4, 1));
        assert!(ops.is_covered());
        assert!(!report.summaries[1].is_covered());
        assert_eq!(report.total_removed(), 1);
        assert_eq!(report.total_shortage(), dec!(3.96));
        // offset 6 (every penalty defaults to 1) plus solver objective -5
        assert_eq!(report.objective, dec!(1));
        assert!(report.proven_optimal);
    }
}
