use crate::conf::EditSession;
use crate::conf::paths;
use crate::conf::types::ProxyConfigSpec;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

pub fn init(name: &str, address: &str, out: Option<PathBuf>) -> Result<()> {
    let text = render_new_profile(name, address)?;

    let Some(path) = out else {
        println!("{text}");
        return Ok(());
    };

    // Refuse to overwrite an existing profile
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    fs::write(&path, text).with_context(|| format!("failed to create {}", path.display()))?;

    println!("✔ Initialized proxy profile '{name}' in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  proxycfg conf check {}", path.display());
    Ok(())
}

/// A minimal accepted profile as a pretty JSON wire document.
pub fn render_new_profile(name: &str, address: &str) -> Result<String> {
    let mut session = EditSession::create();
    session.set(paths::SERVICE_NAME, name)?;
    session.set(paths::LISTENER_ADDRESS, address)?;

    let cfg = session.submit()?;
    Ok(serde_json::to_string_pretty(&ProxyConfigSpec::from(&cfg))?)
}
