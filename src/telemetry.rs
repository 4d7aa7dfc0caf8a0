//! Log output for hosts embedding `plot-items`.
//!
//! Import, export and validation emit `tracing` events under the `plot_items`
//! target and never install a subscriber themselves. With the `telemetry`
//! feature, [`init_tracing`] installs a compact stderr subscriber for tools and
//! tests.

/// Directives used when neither the caller nor the environment picks any.
pub const DEFAULT_FILTER: &str = "plot_items=info";

/// Environment variable read before `RUST_LOG`.
pub const FILTER_ENV: &str = "PLOT_ITEMS_LOG";

/// Installs a subscriber filtered by `directives`, or by the environment when
/// `None` (see [`filter_directives`]).
///
/// Returns `false` when the `telemetry` feature is off, the directives do not
/// parse, or the host already installed a global subscriber.
#[must_use]
pub fn init_tracing(directives: Option<&str>) -> bool {
    let directives = filter_directives(
        directives,
        std::env::var(FILTER_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );

    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(&directives) else {
            return false;
        };
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

/// [`init_tracing`] with filters from the environment.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(None)
}

/// Picks the first non-blank source: explicit directives, `PLOT_ITEMS_LOG`,
/// `RUST_LOG`, then [`DEFAULT_FILTER`].
#[must_use]
pub fn filter_directives(
    explicit: Option<&str>,
    crate_env: Option<String>,
    rust_log: Option<String>,
) -> String {
    explicit
        .map(str::to_owned)
        .into_iter()
        .chain(crate_env)
        .chain(rust_log)
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}
