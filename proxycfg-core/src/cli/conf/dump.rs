use crate::conf::types::ProxyConfigSpec;
use crate::conf::{flatten, load_profile};
use serde::Serialize;
use std::path::PathBuf;

pub fn dump(path: PathBuf, flat: bool, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_profile(&path)?;
    if flat {
        emit(&flatten(Some(&cfg)), yaml)
    } else {
        emit(&ProxyConfigSpec::from(&cfg), yaml)
    }
}

fn emit<T: Serialize>(value: &T, yaml: bool) -> anyhow::Result<()> {
    let s = if yaml {
        serde_yaml::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{s}");
    Ok(())
}
