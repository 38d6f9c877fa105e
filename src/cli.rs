use std::env;
use std::path::PathBuf;

/// Parsed command-line options.
#[derive(Debug, Default)]
pub struct CliOptions {
    pub payload: Option<PathBuf>,
    pub preset: Option<String>,
    pub config: Option<PathBuf>,
    pub plan_out: Option<PathBuf>,
    pub serve: bool,
    pub port: Option<u16>,
}

/// Preset used when neither `--payload` nor `--preset` is given.
pub const DEFAULT_PRESET: &str = "payload3";

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

pub fn parse_args_from(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--payload" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --payload (expected a JSON file path)",
                )?;
                if opts.payload.replace(PathBuf::from(path)).is_some() {
                    return Err("--payload provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--config" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --config (expected a TOML file path)")?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--plan-out" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --plan-out (expected a file path)")?;
                if opts.plan_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--plan-out provided more than once".to_string());
                }
            }
            "--serve" if cfg!(feature = "api") => {
                opts.serve = true;
            }
            "--port" if cfg!(feature = "api") => {
                i += 1;
                let value = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{value}\" is not a valid u16"))?;
                opts.port = Some(port);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.payload.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--payload` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    if opts.payload.is_none() && opts.preset.is_none() {
        opts.preset = Some(DEFAULT_PRESET.to_string());
    }

    Ok(opts)
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("powerplant-dispatch: merit-order production plan for a load");
    eprintln!();
    eprintln!("Usage:");
    eprintln!(
        "  powerplant-dispatch [--payload <path> | --preset <name>] [--config <path>] [--plan-out <path>]"
    );
    if cfg!(feature = "api") {
        eprintln!("  powerplant-dispatch --serve [--port <u16>] [--config <path>]");
    }
    eprintln!();
    eprintln!("Presets: payload1, payload2, payload3 (default: {DEFAULT_PRESET})");
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PRESET, parse_args_from};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn supports_payload_cli() {
        let opts = parse_args_from(&args(&["--payload", "payload.json"]))
            .expect("parse should succeed");
        assert_eq!(
            opts.payload.as_deref().and_then(|p| p.to_str()),
            Some("payload.json")
        );
        assert!(opts.preset.is_none());
    }

    #[test]
    fn defaults_to_preset() {
        let opts = parse_args_from(&[]).expect("parse should succeed");
        assert_eq!(opts.preset.as_deref(), Some(DEFAULT_PRESET));
        assert!(!opts.serve);
    }

    #[test]
    fn rejects_both_sources() {
        let err = parse_args_from(&args(&["--payload", "a.json", "--preset", "payload1"]))
            .expect_err("must fail");
        assert!(err.contains("mutually exclusive"));
    }

    #[test]
    fn rejects_repeated_flag() {
        let err = parse_args_from(&args(&["--config", "a.toml", "--config", "b.toml"]))
            .expect_err("must fail");
        assert!(err.contains("more than once"));
    }

    #[test]
    fn rejects_missing_value() {
        let err = parse_args_from(&args(&["--plan-out"])).expect_err("must fail");
        assert!(err.contains("--plan-out"));
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = parse_args_from(&args(&["--bogus"])).expect_err("must fail");
        assert!(err.contains("--bogus"));
    }

    #[cfg(feature = "api")]
    #[test]
    fn parses_serve_and_port() {
        let opts =
            parse_args_from(&args(&["--serve", "--port", "9000"])).expect("parse should succeed");
        assert!(opts.serve);
        assert_eq!(opts.port, Some(9000));
    }
}
