use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, FmtSubscriber};

use crate::formatter::TickFormatter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Installs the global subscriber. `RUST_LOG` overrides the default of `info` for
/// this crate and `warn` elsewhere. Safe to call more than once.
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME"))));

        let subscriber = FmtSubscriber::builder()
            .with_ansi(cfg!(not(target_os = "emscripten")))
            .event_format(TickFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("A global tracing subscriber was already installed");
        }
    });
}
