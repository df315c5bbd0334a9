use env_logger::Env;

use crate::config::Config;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Inicializa o logger global (`RUST_LOG`, se definido, tem prioridade)
///
/// Returns `false` if a logger was already installed (e.g. by the host binary).
pub fn init_logger(config: &Config) -> bool {
    env_logger::Builder::from_env(Env::new().default_filter_or(config.log_filter.as_str()))
        .try_init()
        .is_ok()
}
