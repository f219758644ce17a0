use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] game_core::ConfigError),
}
