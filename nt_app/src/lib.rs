use figment::{Figment, providers::Env};

/// Prefix of the environment variables read into the service config,
/// e.g. `NOTIFICATIONS_POLL_ENDPOINT` sets `poll_endpoint`.
pub const ENV_PREFIX: &str = "NOTIFICATIONS_";

pub trait ContextProvider<Config> {
    fn new(config: Config) -> impl Future<Output = Self>;
}

/// Installs the global JSON log subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // no ANSI color codes, the output is collected as JSON lines.
        .with_ansi(false)
        // the log collector adds the ingestion time.
        .without_time()
        // remove the name of the function from every log entry
        .with_target(false)
        .init();
}

/// Extract the configuration from `NOTIFICATIONS_*` environment variables.
///
/// # Errors
/// If a variable cannot be parsed into the matching config field.
pub fn extract_config<'a, Config: serde::Deserialize<'a>>()
-> Result<Config, figment::Error> {
    Figment::new().merge(Env::prefixed(ENV_PREFIX)).extract()
}

/// Initialize the application context with configuration from environment variables.
/// The configuration is extracted using figment.
///
/// # Returns
/// The application context built from the configuration as specified by the
/// trait.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
///
pub async fn create_app_context<'a, A, Config: serde::Deserialize<'a>>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    init_tracing();

    let config: Config = extract_config()?;

    tracing::info!("configuration loaded");

    let context = A::new(config).await;

    Ok(context)
}
