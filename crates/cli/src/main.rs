//! Exoplanet Predict - Main Entry Point

use cli::{init_logging, predict, read_input, render, Response, ServiceConfig};
use std::process::ExitCode;
use tracing::{debug, error, info};

fn fail(message: String) -> ExitCode {
    println!("{}", render(&Response::error(message)));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);

    // argument problems take precedence over a broken config file
    let input = match read_input(args.by_ref()) {
        Ok(input) => input,
        Err(e) => return fail(e.to_string()),
    };

    let config = match ServiceConfig::load() {
        Ok(config) => config,
        Err(e) => return fail(format!("{:#}", e)),
    };
    init_logging(&config);

    info!("=== Exoplanet Predict v{} ===", env!("CARGO_PKG_VERSION"));
    let extra = args.count();
    if extra > 0 {
        debug!("Ignoring {} extra argument(s)", extra);
    }

    match predict(input, &config) {
        Ok(predictions) => {
            println!("{}", render(&Response::Predictions { predictions }));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            fail(e.to_string())
        }
    }
}
