use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_base_url, parse_number, parse_precision};
use services::{ClientConfig, ConfigError, DisplaySettings, HttpQuizApi, QuizApi};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Invalid(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Invalid(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    api: Arc<HttpQuizApi>,
    display: DisplaySettings,
}

impl UiApp for DesktopApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        self.api.clone()
    }

    fn display_settings(&self) -> DisplaySettings {
        self.display
    }
}

struct Args {
    config: ClientConfig,
    verbose: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--base-url <url>] [--retries <n>] [--retry-delay-ms <ms>] [--decimals <0|2>] [--verbose]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url http://127.0.0.1:8080");
    eprintln!("  --retries 3 --retry-delay-ms 1000 --decimals 2");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BASE_URL, QUIZ_RETRIES, QUIZ_RETRY_DELAY_MS, QUIZ_DISPLAY_DECIMALS,");
    eprintln!("  QUIZ_ROLLING_WINDOW, RUST_LOG");
}

impl Args {
    /// Flags override whatever the environment configured.
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = ClientConfig::from_env()?;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    config.base_url = parse_base_url("--base-url", &value)?;
                }
                "--retries" => {
                    let value = require_value(args, "--retries")?;
                    config.retry.retries = parse_number("--retries", &value)?;
                }
                "--retry-delay-ms" => {
                    let value = require_value(args, "--retry-delay-ms")?;
                    config.retry.delay =
                        Duration::from_millis(parse_number("--retry-delay-ms", &value)?);
                }
                "--decimals" => {
                    let value = require_value(args, "--decimals")?;
                    config.display.precision = parse_precision("--decimals", &value)?;
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { config, verbose })
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "services=debug,ui=debug,app=debug"
        } else {
            "services=info,ui=info,app=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn log_startup(config: &ClientConfig) {
    tracing::info!(
        base_url = %config.base_url,
        retries = config.retry.retries,
        delay = ?config.retry.delay,
        decimals = ?config.display.precision,
        rolling_window = config.display.rolling_window,
        "starting quiz client"
    );
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(parsed.verbose);
    log_startup(&parsed.config);

    let api = Arc::new(HttpQuizApi::new(&parsed.config)?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        api,
        display: parsed.config.display,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Accuracy Quest")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--base-url",
            "http://quiz.local:9000/",
            "--retries",
            "5",
            "--retry-delay-ms",
            "250",
            "--decimals",
            "0",
            "--verbose",
        ])
        .expect("valid flags");

        assert_eq!(args.config.base_url, "http://quiz.local:9000");
        assert_eq!(args.config.retry.retries, 5);
        assert_eq!(args.config.retry.delay, Duration::from_millis(250));
        assert_eq!(
            args.config.display.precision,
            services::config::parse_precision("k", "0").expect("zero decimals")
        );
        assert!(args.verbose);
    }

    #[test]
    fn missing_value_is_reported() {
        let err = parse(&["--retries"]).err().expect("error");
        assert_eq!(err.to_string(), "--retries requires a value");
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--db", "x"]).err().expect("error");
        assert!(matches!(err, ArgsError::UnknownArg(ref arg) if arg == "--db"));
    }

    #[test]
    fn bad_decimals_are_rejected() {
        let err = parse(&["--decimals", "3"]).err().expect("error");
        assert!(matches!(err, ArgsError::Invalid(_)));
    }

    #[test]
    fn startup_log_accepts_any_retry_delay() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();
        let mut config = ClientConfig::default();
        config.retry.delay = Duration::MAX;

        tracing::subscriber::with_default(subscriber, || log_startup(&config));
    }
}
