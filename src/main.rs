//! powerplant-dispatch entry point: CLI wiring and config-driven engine construction.

use std::path::Path;
use std::process;

use tracing::info;

use powerplant_dispatch::cli::{self, CliOptions};
use powerplant_dispatch::config::AppConfig;
use powerplant_dispatch::dispatch::{DispatchRequest, DispatchSummary, Engine};
use powerplant_dispatch::io::export::export_csv;
use powerplant_dispatch::{logging, scenario};

/// Loads the configuration named on the command line, or the defaults.
fn load_config(cli: &CliOptions) -> Result<AppConfig, String> {
    let config = match cli.config {
        Some(ref path) => AppConfig::from_toml_file(path).map_err(|e| e.to_string())?,
        None => AppConfig::default(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(messages.join("\n"));
    }

    Ok(config)
}

/// Loads the request: `--payload` takes priority, then `--preset`.
fn load_request(cli: &CliOptions) -> Result<DispatchRequest, String> {
    if let Some(ref path) = cli.payload {
        scenario::from_json_path(path)
    } else {
        scenario::from_preset(cli.preset.as_deref().unwrap_or(cli::DEFAULT_PRESET))
    }
}

fn run_once(cli: &CliOptions, engine: Engine) -> Result<(), String> {
    let request = load_request(cli)?;
    info!(
        load = request.load,
        plants = request.powerplants.len(),
        "dispatching request"
    );

    let result = engine.dispatch(&request).map_err(|e| e.to_string())?;

    let plan = serde_json::to_string_pretty(&result)
        .map_err(|e| format!("failed to serialize plan: {e}"))?;
    println!("{plan}");
    eprintln!("\n{}", DispatchSummary::from_result(&result));

    if let Some(ref path) = cli.plan_out {
        export_csv(&result, Path::new(path))
            .map_err(|e| format!("failed to write CSV \"{}\": {e}", path.display()))?;
        info!(path = %path.display(), "plan written");
    }

    Ok(())
}

#[cfg(feature = "api")]
fn run_server(cli: &CliOptions, config: &AppConfig, engine: Engine) -> Result<(), String> {
    use std::net::{IpAddr, SocketAddr};
    use std::sync::Arc;

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("invalid server.host \"{}\": {e}", config.server.host))?;
    let addr = SocketAddr::new(host, cli.port.unwrap_or(config.server.port));

    let state = Arc::new(powerplant_dispatch::api::AppState { engine });
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to create tokio runtime: {e}"))?;
    rt.block_on(powerplant_dispatch::api::serve(state, addr))
        .map_err(|e| format!("server error on {addr}: {e}"))
}

#[cfg(not(feature = "api"))]
fn run_server(_cli: &CliOptions, _config: &AppConfig, _engine: Engine) -> Result<(), String> {
    Err("this build does not include the HTTP API (enable the `api` feature)".to_string())
}

fn main() {
    let cli = match cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    logging::init(&config.logging.filter);
    let engine = Engine::from_config(&config.dispatch);

    let outcome = if cli.serve {
        run_server(&cli, &config, engine)
    } else {
        run_once(&cli, engine)
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
