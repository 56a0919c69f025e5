//! Standardized initialization for the lambda binary: env files, panic
//! hook, and tracing configuration.

use tracing_subscriber::EnvFilter;

/// The environment the process is running in, read from the `ENVIRONMENT`
/// variable. Anything other than `local` is treated as production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Environment {
    Production,
    Local,
}

impl Environment {
    fn from_env() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("local") => Environment::Local,
            _ => Environment::Production,
        }
    }
}

/// Initializes the process. Must be called once, before any clients are
/// constructed, so panics and SDK internals land in the subscriber.
pub fn init() {
    dotenv::dotenv().ok();
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    match Environment::from_env() {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Production => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}
