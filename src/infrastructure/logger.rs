use log::LevelFilter;

/// Initialize the logger; `--verbose` shows every hop as it is requested
///
/// Without `--verbose`, `RUST_LOG` decides and warnings are shown by default.
/// Log records go to stderr so they never end up in a report.
pub fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("followme", LevelFilter::Debug);
    }
    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    log::debug!("Logger initialized (verbose: {verbose})");
}
