use cats::{
    autocorrect::{DiffFunction, WordList},
    config::{Config, ConfigStore, FileConfigStore},
    game::{fastest_words_report, RawTimes},
    paragraphs::ParagraphSet,
    progress::{Disabled, JsonLines, ProgressSink},
    results_log::ResultsLog,
    runtime::SystemClock,
    session::{AutocorrectOptions, SessionOptions, TypingSession},
};
use clap::{ArgAction, CommandFactory, Parser};
use crossterm::tty::IsTty;
use env_logger::Builder;
use log::LevelFilter;
use std::{
    error::Error,
    fs,
    io::{self, Write},
    path::PathBuf,
};

/// classroom typing test
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Measure typing speed and accuracy on paragraphs about the topics you pick, with optional autocorrect and multiplayer progress reports."
)]
pub struct Cli {
    /// topic words; only paragraphs containing one of them are used
    #[clap(value_name = "TOPIC")]
    topics: Vec<String>,

    /// run the typing test
    #[clap(short = 't', long)]
    typing_test: bool,

    /// file with one paragraph per line (default: bundled paragraphs)
    #[clap(long, value_name = "FILE")]
    paragraphs: Option<PathBuf>,

    /// file with one valid word per line for autocorrect (default: bundled words)
    #[clap(long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// autocorrect typed words before scoring
    #[clap(long, overrides_with = "no_autocorrect")]
    autocorrect: bool,

    /// turn off autocorrect even if the saved config enables it
    #[clap(long, overrides_with = "autocorrect")]
    no_autocorrect: bool,

    /// diff function used to rank autocorrect candidates
    #[clap(long, value_enum)]
    diff: Option<DiffFunction>,

    /// largest difference autocorrect will accept
    #[clap(long)]
    limit: Option<i64>,

    /// send progress reports (JSON lines on stderr)
    #[clap(long, overrides_with = "no_multiplayer")]
    multiplayer: bool,

    /// turn off progress reports even if the saved config enables them
    #[clap(long, overrides_with = "multiplayer")]
    no_multiplayer: bool,

    /// player id used in progress reports
    #[clap(long, default_value_t = 0)]
    id: u64,

    /// append each round's results to the CSV results log
    #[clap(long, overrides_with = "no_log_results")]
    log_results: bool,

    /// do not append to the results log even if the saved config does
    #[clap(long, overrides_with = "log_results")]
    no_log_results: bool,

    /// print which words each player typed fastest, from a JSON file of
    /// {"words": [...], "times": [[...], ...]}
    #[clap(long, value_name = "FILE")]
    fastest: Option<PathBuf>,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,

    /// more output per occurrence
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Layer command-line flags over stored defaults
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(ref p) = self.paragraphs {
            config.paragraphs_path = Some(p.clone());
        }
        if let Some(ref w) = self.words {
            config.words_path = Some(w.clone());
        }
        if let Some(diff) = self.diff {
            config.diff_function = diff;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        config.autocorrect = toggle(config.autocorrect, self.autocorrect, self.no_autocorrect);
        config.enable_multiplayer =
            toggle(config.enable_multiplayer, self.multiplayer, self.no_multiplayer);
        config.log_results = toggle(config.log_results, self.log_results, self.no_log_results);
        config
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Resolve a `--flag` / `--no-flag` pair against the stored value
fn toggle(stored: bool, on: bool, off: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        stored
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let store = FileConfigStore::new();
    let config = cli.apply_to(store.load());
    log::debug!("effective config: {config:?}");

    if cli.save_config {
        store.save(&config)?;
        log::info!("saved config to {}", store.path().display());
    }

    if let Some(ref path) = cli.fastest {
        let mut raw: RawTimes = serde_json::from_slice(&fs::read(path)?)?;
        print!("{}", fastest_words_report(&mut raw.times, &raw.words)?);
    }

    if cli.typing_test {
        run_typing_test(&cli, &config)?;
    } else if cli.fastest.is_none() && !cli.save_config {
        Cli::command().print_help()?;
    }

    Ok(())
}

fn run_typing_test(cli: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let paragraphs = match config.paragraphs_path {
        Some(ref p) => ParagraphSet::from_file(p)?,
        None => ParagraphSet::embedded(),
    };

    let autocorrect = if config.autocorrect {
        let words = match config.words_path {
            Some(ref p) => WordList::from_file(p)?,
            None => WordList::embedded(),
        };
        Some(AutocorrectOptions {
            words,
            diff: config.diff_function,
            limit: config.limit,
        })
    } else {
        None
    };

    let options = SessionOptions {
        topics: cli.topics.clone(),
        autocorrect,
        enable_multiplayer: config.enable_multiplayer,
        player_id: cli.id,
        styled: io::stdout().is_tty(),
    };

    let log = config.log_results.then(ResultsLog::default_location);
    if config.enable_multiplayer {
        run_session(&paragraphs, options, JsonLines::new(io::stderr()), log)
    } else {
        run_session(&paragraphs, options, Disabled, log)
    }
}

fn run_session<S: ProgressSink>(
    paragraphs: &ParagraphSet,
    options: SessionOptions,
    sink: S,
    log: Option<ResultsLog>,
) -> Result<(), Box<dyn Error>> {
    let mut session = TypingSession::new(paragraphs, options, SystemClock, sink);
    if let Some(log) = log {
        session = session.with_results_log(log);
    }
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())?;
    Ok(())
}
