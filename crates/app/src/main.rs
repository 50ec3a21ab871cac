use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV, parse_timeout_secs};
use services::{
    ApiConfig, CategoryClient, HistoryClient, HistorySource, RevealCache, RevealController,
    RevealFlowService,
};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};
use wrapped_core::model::SessionContext;

const DB_URL_ENV: &str = "WRAPPED_DB_URL";
const DEFAULT_DB_URL: &str = "sqlite://wrapped.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    reveal: Arc<RevealController>,
    flow: Arc<RevealFlowService>,
    history: Arc<HistoryClient>,
    resumed_flow: Option<SessionContext>,
}

impl UiApp for DesktopApp {
    fn reveal(&self) -> Arc<RevealController> {
        Arc::clone(&self.reveal)
    }

    fn flow(&self) -> Arc<RevealFlowService> {
        Arc::clone(&self.flow)
    }

    fn history(&self) -> Arc<dyn HistorySource> {
        self.history.clone()
    }

    fn resumed_flow(&self) -> Option<SessionContext> {
        self.resumed_flow.clone()
    }
}

struct Args {
    db_url: String,
    /// Flag overrides; unset values fall back to `ApiConfig::from_env`.
    api_base: Option<String>,
    timeout_secs: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--api <url>] [--db <sqlite_url>] [--timeout-secs <n>]");
    eprintln!("  cargo run -p app -- reset [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api {DEFAULT_BASE_URL}");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --timeout-secs 0  (no timeout)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {BASE_URL_ENV}, {DB_URL_ENV}, {TIMEOUT_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var(DB_URL_ENV)
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut api_base = None;
        let mut timeout_secs = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--api" => api_base = Some(require_value(args, "--api")?),
                "--timeout-secs" => timeout_secs = Some(require_value(args, "--timeout-secs")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            api_base,
            timeout_secs,
        })
    }

    fn api_config(&self) -> Result<ApiConfig, services::ConfigError> {
        let mut config = ApiConfig::from_env()?;
        if let Some(base) = &self.api_base {
            config = ApiConfig::new(base)?.with_timeout(config.timeout());
        }
        if let Some(raw) = &self.timeout_secs {
            config = config.with_timeout(parse_timeout_secs(raw)?);
        }
        Ok(config)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    let flow = Arc::new(RevealFlowService::new(Arc::clone(&storage.session)));

    match cmd {
        Command::Ui => {
            let api = parsed.api_config()?;
            tracing::info!(api = %api.base_url(), db = %parsed.db_url, "starting wrapped");

            let categories = Arc::new(CategoryClient::new(api.clone())?);
            let history = Arc::new(HistoryClient::new(api)?);
            let cache = RevealCache::new(Arc::clone(&storage.session));
            let reveal = Arc::new(RevealController::new(categories, cache));

            let resumed_flow = match flow.current().await {
                Ok(ctx) => {
                    tracing::info!(subject = %ctx.subject_id(), "resuming flow");
                    Some(ctx)
                }
                Err(err) if err.is_not_initialized() => None,
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring unreadable saved flow");
                    None
                }
            };

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                reveal,
                flow,
                history,
                resumed_flow,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Wrapped")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Reset => {
            flow.clear().await?;
            tracing::info!(db = %parsed.db_url, "saved flow cleared");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
