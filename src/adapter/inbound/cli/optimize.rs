//! Handler for the `optimize` command.

use std::io::Read;
use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;

use super::command::OptimizeArgs;
use super::{output, paths};
use crate::adapter::inbound::contract::OptimizeResponse;
use crate::domain::{AllocationRow, FunctionSummary, OptimizationReport};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::optimizer::build_optimizer;
use crate::port::inbound::optimize::{OptimizePort, OptimizeRequest};

#[derive(Tabled)]
struct RowView {
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Current")]
    current: u32,
    #[tabled(rename = "Optimal")]
    optimal: u32,
    #[tabled(rename = "Removed")]
    removed: u32,
}

impl From<&AllocationRow> for RowView {
    fn from(row: &AllocationRow) -> Self {
        Self {
            role: row.role.to_string(),
            current: row.current,
            optimal: row.optimal,
            removed: row.removed,
        }
    }
}

/// Execute `optimize`.
///
/// With `--json` the contract envelope is printed on stdout for both outcomes;
/// the error is still returned so the process exits non-zero.
pub fn execute(args: &OptimizeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.init_logging(output::verbosity());

    let outcome = read_request(args).and_then(|request| {
        let optimizer = build_optimizer(&config)?;
        debug!(
            solver = optimizer.solver_name(),
            functions = request.functions.len(),
            "Request loaded"
        );

        let pb = output::spinner("Solving");
        match optimizer.optimize(&request) {
            Ok(report) => {
                output::spinner_success(&pb, "Solved");
                Ok(report)
            }
            Err(e) => {
                output::spinner_fail(&pb, "Solve failed");
                Err(e)
            }
        }
    });

    if output::is_json() {
        let (response, result) = match outcome {
            Ok(report) => (OptimizeResponse::from_result(Ok(report)), Ok(())),
            Err(e) => (OptimizeResponse::from_error(&e), Err(e)),
        };
        output::json_output(&serde_json::to_value(&response)?);
        return result;
    }

    let report = outcome?;
    render_report(&report);
    Ok(())
}

/// Explicit paths must exist; the default location falls back to defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(paths::default_config()),
    }
}

fn read_request(args: &OptimizeArgs) -> Result<OptimizeRequest> {
    let content = if args.reads_stdin() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.request)?
    };
    Ok(serde_json::from_str(&content)?)
}

fn render_report(report: &OptimizationReport) {
    output::header(env!("CARGO_PKG_VERSION"));

    for summary in &report.summaries {
        output::section(summary.function.as_str());
        let rows: Vec<RowView> = report
            .rows_for(&summary.function)
            .map(RowView::from)
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        output::lines(&table.to_string());
        render_summary(summary);
    }

    output::section("Total");
    output::field("Removed", report.total_removed());
    let shortage = report.total_shortage();
    if shortage.is_zero() {
        output::field("Shortage", output::positive("none"));
    } else {
        output::field("Shortage", output::negative(format!("{shortage} h")));
    }
    output::field("Shortage/h", output::muted(report.big_m));
    if !report.proven_optimal {
        output::warning("Solver stopped early; result is feasible but not proven optimal");
    }
}

fn render_summary(summary: &FunctionSummary) {
    output::field(
        "Workload",
        format!("{} h required, {} h covered", summary.workload, summary.capacity),
    );
    output::field(
        "Headcount",
        format!("{} of {} kept", summary.optimal, summary.current),
    );
    if summary.is_covered() {
        output::field("Shortage", output::positive("none"));
    } else {
        output::field("Shortage", output::negative(format!("{} h", summary.shortage)));
        output::hint("workload exceeds what current staff can cover");
    }
}
