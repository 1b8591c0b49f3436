use std::sync::Once;
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

static INIT: Once = Once::new();

/// Console logging facade. Code logs through the `log` macros; the
/// subscriber picks those records up via the tracing-log bridge.
pub struct Logger;

impl Logger {
    /// Initialize the global subscriber. `RUST_LOG` overrides `level`.
    /// Safe to call more than once; only the first call takes effect.
    pub fn init(level: &str) {
        let level = level.to_string();
        INIT.call_once(move || {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

            let console_layer = fmt::layer()
                .with_timer(UtcTime::rfc_3339())
                .with_target(false);

            Registry::default().with(filter).with(console_layer).init();
        });
    }
}
