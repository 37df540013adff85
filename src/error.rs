use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Defensive surface for caller-side precondition violations the kernel
    /// refuses to turn into `NaN` output.
    #[error("invalid zone configuration: {0}")]
    ConfigurationInvalid(String),
    #[error("forecast collaborator error: {0}")]
    WeatherError(String),
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("unknown error")]
    Unknown,
}
