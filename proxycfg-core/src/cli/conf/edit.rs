use crate::cli::conf::check::print_report;
use crate::conf::paths;
use crate::conf::types::{CheckerKind, ProtocolKind, ProxyConfig, ProxyConfigSpec};
use crate::conf::validation::{ValidationErrors, ValidationReport};
use crate::conf::{ConfigError, ConfigStore, DirStore, EditSession, SaveMode, ValidationError};
use crate::logging::LogMode;
use anyhow::{Result, bail};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Service name of the profile
    pub name: String,

    /// Directory holding one JSON document per service
    #[arg(long, env = "PROXYCFG_STORE", default_value = "profiles")]
    pub store: PathBuf,

    /// Create a new profile instead of editing an existing one
    #[arg(long)]
    pub create: bool,

    /// Health checker to select (TCP, ATCP, MySQL, Redis)
    #[arg(long)]
    pub checker: Option<CheckerKind>,

    /// Protocol to select (TCP, REDIS, MYSQL)
    #[arg(long)]
    pub protocol: Option<ProtocolKind>,

    /// Field edit as path=value, applied after the selections
    #[arg(long = "set", value_parser = parse_assignment)]
    pub sets: Vec<(String, String)>,

    /// Validate without saving
    #[arg(long)]
    pub dry_run: bool,
}

pub fn edit(args: EditArgs, mode: LogMode) -> Result<()> {
    let mut store = DirStore::new(&args.store);
    let cfg = apply_edit(&args, &mut store, mode)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&ProxyConfigSpec::from(&cfg))?
    );
    Ok(())
}

/// Run one edit session against `store` and save the accepted result.
pub fn apply_edit<S: ConfigStore>(
    args: &EditArgs,
    store: &mut S,
    mode: LogMode,
) -> Result<ProxyConfig> {
    let mut session = if args.create {
        let mut session = EditSession::create();
        session.set(paths::SERVICE_NAME, args.name.as_str())?;
        session
    } else {
        EditSession::load(&store.load(&args.name)?)
    };

    if let Some(kind) = args.checker {
        session.select_checker(kind);
    }
    if let Some(protocol) = args.protocol {
        session.select_protocol(protocol);
    }

    let rejected: Vec<_> = args
        .sets
        .iter()
        .filter_map(|(path, value)| set_field(&mut session, &args.name, path, value).err())
        .collect();
    if !rejected.is_empty() {
        let errors = ValidationErrors(rejected);
        print_report(&ValidationReport::from(&errors), mode)?;
        bail!("{} edits rejected", errors.len());
    }

    let cfg = match session.submit() {
        Ok(cfg) => cfg,
        Err(errors) => {
            warn!(service = %args.name, errors = errors.len(), "profile rejected");
            print_report(&ValidationReport::from(&errors), mode)?;
            bail!("profile '{}' was not saved", args.name);
        }
    };

    if !args.dry_run {
        let save_mode = if session.is_new() {
            SaveMode::Create
        } else {
            SaveMode::Update
        };
        store.save(&cfg, save_mode)?;
        info!(service = %cfg.service_name, "profile saved");
    }
    Ok(cfg)
}

/// The profile is always saved under the name it was opened with.
fn set_field(
    session: &mut EditSession,
    name: &str,
    path: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if path == paths::SERVICE_NAME && value != name {
        return Err(ConfigError::validation(
            path,
            ValidationError::Immutable {
                original: name.to_owned(),
            },
        ));
    }
    session.set(path, value)
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(path, value)| (path.trim().to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected path=value, got '{s}'"))
}
