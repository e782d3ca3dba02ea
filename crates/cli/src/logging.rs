use tracing_subscriber::EnvFilter;

const CRATES: [&str; 5] = [
    "jdkwatch_cli",
    "jdkwatch_core",
    "jdkwatch_upstream",
    "jdkwatch_readme",
    "jdkwatch_manifest",
];

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `verbose` when set.
///
/// Later calls are no-ops, which keeps repeated in-process runs working.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
