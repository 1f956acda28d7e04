mod application;
mod logging;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use logging::{LogLevel, setup_tracing};
pub use runtime_config::RuntimeConfig;
