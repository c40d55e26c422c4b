use crate::conf::types::ProxyConfig;
use crate::conf::validation::ValidationReport;
use crate::conf::{LoadError, load_profile};
use crate::logging::LogMode;
use anyhow::bail;
use std::path::PathBuf;

pub fn check(path: PathBuf, mode: LogMode) -> anyhow::Result<()> {
    match load_profile(&path) {
        Ok(cfg) => {
            for line in summary(&cfg) {
                println!("{line}");
            }
            Ok(())
        }
        Err(LoadError::Validation { source, .. }) => {
            print_report(&ValidationReport::from(&source), mode)?;
            bail!("{} is not a valid proxy profile", path.display())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn summary(cfg: &ProxyConfig) -> Vec<String> {
    let instance = &cfg.instance;
    let options = match &instance.protocol_options.payload {
        Some(_) => "with options",
        None => "without options",
    };

    vec![
        "✔ Config loaded successfully".to_string(),
        format!("✔ service {}", cfg.service_name),
        format!(
            "✔ listener {} (connection limit {})",
            instance.listener.address, instance.listener.connection_limit
        ),
        format!("✔ load balance {}", instance.load_balance),
        format!(
            "✔ {} health check (fall {}, rise {})",
            instance.health_check.checker_kind(),
            instance.health_check.fall_threshold,
            instance.health_check.rise_threshold
        ),
        format!("✔ protocol {} {}", instance.protocol(), options),
    ]
}

pub(crate) fn print_report(report: &ValidationReport, mode: LogMode) -> anyhow::Result<()> {
    match mode {
        LogMode::Plain => eprint!("{}", report.render_plain()),
        LogMode::Pretty => eprint!("{}", report.render_pretty()),
        LogMode::Json => println!("{}", report.render_json()?),
    }
    Ok(())
}
