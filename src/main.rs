use anyhow::{Context, Result};
use missing_tool::{
    config::HookConfig,
    console::{console, init_console},
    detection::default_registry,
    hook::MissingToolHook,
};
use std::io;

fn main() {
    // Failures are swallowed; the exit status is always zero.
    if let Err(e) = run() {
        console().debug(&format!("{:#}", e));
    }
}

fn run() -> Result<()> {
    let config = HookConfig::default();
    init_console(config.get_verbosity());

    let hook = MissingToolHook::new(default_registry(), config);
    hook.run(io::stdin().lock(), io::stdout().lock())
        .context("missing tool hook failed")?;

    Ok(())
}
