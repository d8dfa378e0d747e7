use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
