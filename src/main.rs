// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info, warn};
use std::io::{BufRead, Write};
use std::path::Path;

use honyaku::app_config::{self, Config};
use honyaku::japanese::{JpStr, KakasiTransliterator, Representation};
use honyaku::language_utils;
use honyaku::translation::TranslatorSession;

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

/// CLI Wrapper for the enrich output selection
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliRepresentation {
    Romaji,
    Hiragana,
    Furigana,
    All,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text through the web translation service
    Translate(TranslateArgs),

    /// Show romaji, hiragana and furigana forms of Japanese text
    Enrich {
        /// Text to enrich
        #[arg(value_name = "TEXT")]
        text: String,

        /// Which form to print
        #[arg(long, value_enum, default_value = "all")]
        show: CliRepresentation,
    },

    /// List supported languages and their codes
    Languages,

    /// Generate shell completions for honyaku
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Texts to translate; read from stdin, one per line, when omitted
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Target language name or code (e.g. 'french', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Source language name or code, 'auto' to detect
    #[arg(short, long)]
    source_language: Option<String>,

    /// Browser engine: chrome, firefox, safari or edge
    #[arg(short, long)]
    browser: Option<String>,

    /// Also print the romaji/hiragana/furigana forms of each input
    #[arg(short, long)]
    enrich: bool,
}

/// Honyaku - translate text by driving a headless browser
#[derive(Parser, Debug)]
#[command(name = "honyaku")]
#[command(version)]
#[command(about = "Browser-driven translation with Japanese reading helpers")]
#[command(long_about = "Honyaku drives a web translation page through a headless browser.

EXAMPLES:
    honyaku translate こんにちは世界               # Detect source, translate to English
    honyaku translate -t french 'good morning'     # Translate to French
    honyaku translate -b firefox -s ja -t en 猫    # Use Firefox with explicit languages
    honyaku enrich こんにちは --show furigana       # Print furigana form
    honyaku languages                              # List language codes
    honyaku completions bash > honyaku.bash        # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config or --log-level says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "honyaku", &mut std::io::stdout());
            Ok(())
        }
        Commands::Languages => {
            for (name, code) in language_utils::supported_languages() {
                println!("{:<6} {}", code, name);
            }
            Ok(())
        }
        Commands::Enrich { text, show } => {
            print_enrichment(&text, show);
            Ok(())
        }
        Commands::Translate(args) => {
            let config = load_config(&cli.config_path, cli.log_level.is_some())?;
            run_translate(config, args).await
        }
    }
}

fn load_config(config_path: &str, log_level_overridden: bool) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    config.validate().context("Configuration validation failed")?;

    if !log_level_overridden {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

async fn run_translate(mut config: Config, args: TranslateArgs) -> Result<()> {
    if let Some(browser) = args.browser {
        config.browser.engine = browser;
    }

    let target = args.target_language.unwrap_or_else(|| config.target_language.clone());
    let source = args.source_language.unwrap_or_else(|| config.source_language.clone());

    let texts = if args.texts.is_empty() {
        read_stdin_lines()?
    } else {
        args.texts
    };

    if texts.is_empty() {
        return Err(anyhow!("Nothing to translate"));
    }

    let mut session = TranslatorSession::create_with_config(&config)
        .await
        .context("Failed to start translator session")?;

    let mut outcome: Result<()> = Ok(());
    for text in &texts {
        if args.enrich {
            print!("{}", JpStr::new(text.as_str()).describe());
        }

        match session.translate(text, &target, &source).await {
            Ok(translated) => println!("{}", translated),
            Err(e) => {
                error!("Translation of '{}' failed: {}", text, e);
                outcome = Err(anyhow!(e));
                break;
            }
        }
    }

    // Close on every path, then report the first failure
    let closed = session.close().await;
    outcome?;
    closed.context("Failed to close translator session")?;

    info!("Translated {} text(s)", texts.len());
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn print_enrichment(text: &str, show: CliRepresentation) {
    let representation = match show {
        CliRepresentation::Romaji => Representation::Romaji,
        CliRepresentation::Hiragana => Representation::Hiragana,
        CliRepresentation::Furigana => Representation::Furigana,
        CliRepresentation::All => {
            print!("{}", JpStr::new(text).describe());
            return;
        }
    };

    let enriched = JpStr::with_transliterator(text, &KakasiTransliterator, representation);
    println!("{}", enriched);
}
