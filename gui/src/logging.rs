use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the stderr subscriber. `RUST_LOG` adds to the default directive.
pub fn init() -> Result<()> {
    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::from_default_env().add_directive("token_dashboard=info".parse()?));

    tracing_subscriber::registry().with(stderr).try_init()?;
    Ok(())
}
