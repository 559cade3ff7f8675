//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your policy", path.display()));
    output::note(&format!(
        "2. Run: rightsize config validate -c {}",
        path.display()
    ));
    output::note(&format!(
        "3. Run: rightsize optimize -r request.json -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        let solver = &config.solver;
        let policy = &config.policy;
        output::json_output(&json!({
            "logging": { "level": config.logging.level, "format": config.logging.format },
            "solver": {
                "backend": solver.backend,
                "time_limit_secs": solver.time_limit_secs,
                "verbose": solver.verbose,
            },
            "policy": {
                "roles": policy.roles,
                "alpha": policy.alpha,
                "penalty": policy.penalty,
                "shortage_penalty": policy.shortage_penalty,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Solver");
    output::field("Backend", &config.solver.backend);
    output::field(
        "Time limit",
        config
            .solver
            .time_limit_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s")),
    );
    output::field("Verbose", config.solver.verbose);

    output::section("Policy");
    if config.policy.roles.is_empty() {
        output::note("(no default roles; requests must declare R)");
    } else {
        output::field("Roles", config.policy.roles.join(", "));
    }
    for (role, share) in &config.policy.alpha {
        output::field("Min share", format!("{role} {share}"));
    }
    for (role, weight) in &config.policy.penalty {
        output::field("Penalty", format!("{role} {weight}"));
    }
    output::field("Shortage", config.policy.shortage_penalty.mode());

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    if config.policy.roles.is_empty() {
        output::warning("No default roles; every request must declare R");
    }

    if output::is_json() {
        output::json_output(&json!({ "valid": true, "path": path.display().to_string() }));
    }
    output::field(
        "Next",
        format!("rightsize config show -c {}", path.display()),
    );

    Ok(())
}
