use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise clitree crates log at info, or at
/// debug with `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose {
        "clitree=debug,clitree_codegen=debug,clitree_codegen_click=debug,clitree_reflect=debug"
    } else {
        "clitree=info,clitree_codegen=info,clitree_codegen_click=info,clitree_reflect=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
