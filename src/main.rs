// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::Write;
use std::sync::Arc;

use crate::app_config::Config;
use app_controller::Controller;
use providers::deepl::DeepL;
use vcs::github::GitHub;

mod annotation;
mod app_config;
mod app_controller;
mod diff_scanner;
mod errors;
mod pair_extractor;
mod providers;
mod vcs;
mod verifier;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for transcheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// transcheck - CI translation checker
///
/// Verifies newly added (source)=(target) translation pairs in a commit's
/// diff against a machine-translation service, and optionally writes inline
/// error comments back to the offending files.
#[derive(Parser, Debug)]
#[command(name = "transcheck")]
#[command(version = "1.0.0")]
#[command(about = "Verify translation pairs added by a commit")]
#[command(long_about = "transcheck inspects the diff of a commit, extracts newly added
(source)=(target) translation pairs from changed translation files, and checks
each provided translation against DeepL.

EXAMPLES:
    transcheck                                  # Check the commit from the CI context
    transcheck --file-patterns .po,.i18n        # Override the file patterns
    transcheck -s EN -t DE                      # Check an English-to-German project
    transcheck --no-annotate                    # Report only, never write comments
    transcheck completions bash                 # Generate bash completions

ENVIRONMENT:
    GITHUB_TOKEN        VCS access token (required)
    DEEPL_API_KEY       DeepL API key (required)
    GITHUB_REPOSITORY   Repository in owner/repo form (required)
    GITHUB_SHA          Commit to inspect (required)
    GITHUB_REF          Ref the run executes against; annotation commits land
                        on the branch derived from it")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Comma-separated filename patterns selecting translation files
    #[arg(
        long,
        env = "TRANSLATION_FILE_PATTERNS",
        default_value = "Translations.txt,.i18n"
    )]
    file_patterns: String,

    /// Source language code (e.g. 'EN')
    #[arg(short, long, env = "SOURCE_LANG", default_value = "EN")]
    source_lang: String,

    /// Target language code (e.g. 'RU')
    #[arg(short, long, env = "TARGET_LANG", default_value = "RU")]
    target_lang: String,

    /// VCS access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, default_value = "")]
    github_token: String,

    /// DeepL API key
    #[arg(long, env = "DEEPL_API_KEY", hide_env_values = true, default_value = "")]
    deepl_api_key: String,

    /// Repository in owner/repo form
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "")]
    repository: String,

    /// Commit SHA whose diff is inspected
    #[arg(long, env = "GITHUB_SHA", default_value = "")]
    commit_sha: String,

    /// Ref the run is executing against
    #[arg(long, env = "GITHUB_REF", default_value = "")]
    git_ref: String,

    /// Do not write error comments back to files with mismatches
    #[arg(long)]
    no_annotate: bool,

    /// Maximum number of concurrent verification requests
    #[arg(long, default_value_t = 4)]
    concurrent_requests: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Build the configuration value object from parsed CLI options
fn build_config(cli: &CommandLineOptions) -> Config {
    Config {
        file_patterns: Config::parse_patterns(&cli.file_patterns),
        source_language: cli.source_lang.clone(),
        target_language: cli.target_lang.clone(),
        vcs_token: cli.github_token.clone(),
        oracle_api_key: cli.deepl_api_key.clone(),
        repository: cli.repository.clone(),
        commit_sha: cli.commit_sha.clone(),
        git_ref: cli.git_ref.clone(),
        annotate: !cli.no_annotate,
        concurrent_requests: cli.concurrent_requests,
        timeout_secs: cli.timeout_secs,
        log_level: cli
            .log_level
            .clone()
            .map(Into::into)
            .unwrap_or_default(),
    }
}

/// Emit the machine-readable success status for the CI orchestrator.
/// Appends to the file named by GITHUB_OUTPUT when that variable is set.
fn emit_success_output() {
    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        if path.is_empty() {
            return;
        }
        let result = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .and_then(|mut file| writeln!(file, "status=success"));
        if let Err(e) = result {
            error!("Failed to write status output to {}: {}", path, e);
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize the logger once with info level by default
    // We'll raise or lower it from the CLI option right after parsing
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Failed to initialize logger");
    }

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "transcheck", &mut std::io::stdout());
        return;
    }

    let config = build_config(&cli);
    log::set_max_level(to_level_filter(&config.log_level));

    std::process::exit(run_check(config).await);
}

/// Run the whole check and map the outcome onto the process exit status:
/// 0 on full success, 1 with the causing error's text on a setup failure,
/// 1 with the fixed failure line when any mismatch or verification error
/// was recorded.
async fn run_check(config: Config) -> i32 {
    if let Err(e) = config.validate() {
        error!("Action failed: {}", e);
        return 1;
    }

    // Repository coordinates were just validated
    let owner = config.repo_owner().unwrap_or_default().to_string();
    let repo = config.repo_name().unwrap_or_default().to_string();

    let store = Arc::new(GitHub::new(
        config.vcs_token.clone(),
        owner,
        repo,
        config.timeout_secs,
    ));
    let oracle = Arc::new(DeepL::new(
        config.oracle_api_key.clone(),
        config.timeout_secs,
    ));

    let controller = match Controller::with_config(config, store, oracle) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Action failed: {}", e);
            return 1;
        }
    };

    match controller.run().await {
        Ok(report) => {
            if report.has_errors {
                error!("Translation check failed");
                1
            } else {
                info!("All translation files verified successfully!");
                emit_success_output();
                0
            }
        }
        Err(e) => {
            error!("Action failed: {:#}", e);
            1
        }
    }
}
