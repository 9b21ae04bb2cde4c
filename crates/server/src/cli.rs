//! CLI argument parsing and subcommand dispatch.

/// Parse CLI arguments and dispatch to the appropriate subcommand.
///
/// Returns `Ok(true)` if a subcommand was handled, `Ok(false)` if `serve`
/// should be started (handled by the caller).
pub fn dispatch(config: &sagdec_core::Config, args: &[String]) -> anyhow::Result<bool> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("serve") => Ok(false),
        Some("config") => {
            let rendered = serde_json::to_string_pretty(&config.redacted_summary())?;
            println!("{rendered}");
            Ok(true)
        }
        _ => {
            print_usage();
            Ok(true)
        }
    }
}

fn print_usage() {
    println!("sagdec-server v{}", env!("CARGO_PKG_VERSION"));
    println!("Usage: sagdec-server <command>");
    println!("  serve     Start HTTP server (default)");
    println!("  config    Print the effective configuration");
}
