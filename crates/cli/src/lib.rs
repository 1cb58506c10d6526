//! Exoplanet Predict CLI
//!
//! Parses a JSON light-curve argument, runs the predictor and renders the
//! `{"predictions": [...]}` / `{"error": "..."}` response.

mod config;
mod output;

pub use config::{LogFormat, ServiceConfig, CONFIG_FILE};
pub use output::{render, Response};

use inference_engine::{InferenceError, PredictionResult, Predictor};
use preprocessor::RawInput;
use std::ffi::OsString;
use thiserror::Error;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Problems with the command-line argument itself
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No input data provided")]
    Missing,
    #[error("Input is not valid UTF-8: {0:?}")]
    InvalidEncoding(OsString),
    #[error("Invalid JSON input: {0}")]
    InvalidJson(serde_json::Error),
    #[error("Input must be a numeric array or an array of numeric arrays: {0}")]
    NotNumericArray(serde_json::Error),
}

/// Any failure that ends an invocation
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Parse the JSON argument into a raw light-curve payload
pub fn parse_input(arg: &str) -> Result<RawInput, InputError> {
    let value: serde_json::Value = serde_json::from_str(arg).map_err(InputError::InvalidJson)?;
    serde_json::from_value(value).map_err(InputError::NotNumericArray)
}

/// Take the first command-line argument as the request.
///
/// Runs before configuration is read, so argument problems are reported
/// even when the config file is broken. Extra arguments are ignored.
pub fn read_input<I>(args: I) -> Result<RawInput, InputError>
where
    I: IntoIterator<Item = OsString>,
{
    let arg = args
        .into_iter()
        .next()
        .ok_or(InputError::Missing)?
        .into_string()
        .map_err(InputError::InvalidEncoding)?;
    parse_input(&arg)
}

/// Classify the light-curves given as the first argument
pub fn run<I>(args: I, config: &ServiceConfig) -> Result<Vec<PredictionResult>, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let input = read_input(args.by_ref())?;
    let extra = args.count();
    if extra > 0 {
        debug!("Ignoring {} extra argument(s)", extra);
    }
    predict(input, config)
}

/// Classify an already parsed request
pub fn predict(input: RawInput, config: &ServiceConfig) -> Result<Vec<PredictionResult>, CliError> {
    let predictor = Predictor::new(config.predictor_config());
    Ok(predictor.predict(input)?)
}

/// Initialize logging on stderr; stdout is reserved for the response
pub fn init_logging(config: &ServiceConfig) {
    let level = config.log_level.parse::<Level>().unwrap_or_else(|_| {
        eprintln!("Unknown log level {:?}, using warn", config.log_level);
        Level::WARN
    });

    let result = match config.log_format {
        LogFormat::Text => tracing::subscriber::set_global_default(
            FmtSubscriber::builder()
                .with_max_level(level)
                .with_target(true)
                .with_writer(std::io::stderr)
                .finish(),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            FmtSubscriber::builder()
                .with_max_level(level)
                .with_target(true)
                .with_writer(std::io::stderr)
                .json()
                .finish(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}
