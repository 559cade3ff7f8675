//! Report invariants shared by the integration suites.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rightsize::domain::OptimizationReport;
use rightsize::port::inbound::optimize::OptimizeRequest;

/// No recommendation exceeds the current headcount of its pair.
pub fn assert_ceiling(report: &OptimizationReport) {
    for row in &report.rows {
        assert!(
            row.optimal <= row.current,
            "{}|{}: optimal {} exceeds current {}",
            row.function,
            row.role,
            row.optimal,
            row.current
        );
        assert_eq!(row.removed, row.current - row.optimal);
    }
}

/// Covered hours plus shortage reach the workload of every function.
pub fn assert_covered_or_short(report: &OptimizationReport) {
    for summary in &report.summaries {
        assert!(
            summary.capacity + summary.shortage >= summary.workload - dec!(0.01),
            "{}: capacity {} + shortage {} < workload {}",
            summary.function,
            summary.capacity,
            summary.shortage,
            summary.workload
        );
    }
}

/// Every role keeps at least its share of the function's recommended total.
pub fn assert_role_shares(report: &OptimizationReport, request: &OptimizeRequest) {
    let Some(alpha) = &request.alpha else {
        return;
    };
    for summary in &report.summaries {
        for row in report.rows_for(&summary.function) {
            let share = alpha.get(row.role.as_str()).copied().unwrap_or(Decimal::ZERO);
            assert!(
                Decimal::from(row.optimal) >= share * Decimal::from(summary.optimal),
                "{}|{}: {} below share {} of {}",
                row.function,
                row.role,
                row.optimal,
                share,
                summary.optimal
            );
        }
    }
}

/// All three invariants at once.
pub fn assert_report_invariants(report: &OptimizationReport, request: &OptimizeRequest) {
    assert_ceiling(report);
    assert_covered_or_short(report);
    assert_role_shares(report, request);
}
