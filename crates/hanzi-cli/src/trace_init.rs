use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a stderr `fmt` subscriber. `RUST_LOG` overrides the default
/// `hanzi_core=warn` filter.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("hanzi_core=warn,hanzi_cli=warn")),
            )
            .init();
    });
}
