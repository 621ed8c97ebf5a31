use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use smart_grocery_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, SmartGroceryConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "smart-grocery", version, about = "Smart Grocery API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix mounted in front of every route, e.g. `/api`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Skip the Prometheus recorder and the `/metrics` route.
    #[arg(long = "disable-metrics", env = "DISABLE_METRICS")]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,

    #[arg(long = "gemini-timeout-secs", env = "GEMINI_TIMEOUT_SECS", default_value_t = 60)]
    pub gemini_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Overrides `RUST_LOG` when set.
    #[arg(long = "log-filter", env = "LOG_FILTER")]
    pub filter: Option<String>,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl LogArgs {
    /// `--log-filter`, else `RUST_LOG`, else `info`.
    pub fn env_filter(&self) -> EnvFilter {
        let filter = match &self.filter {
            Some(directives) => EnvFilter::try_new(directives).ok(),
            None => EnvFilter::try_from_default_env().ok(),
        };

        filter.unwrap_or_else(|| EnvFilter::new("info"))
    }
}

impl From<Args> for SmartGroceryConfig {
    fn from(args: Args) -> Self {
        SmartGroceryConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                request_timeout: Duration::from_secs(args.llm.gemini_timeout_secs),
            },
        }
    }
}
