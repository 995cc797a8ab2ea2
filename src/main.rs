use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use typewriter::core::config::{self, LogSettings, Overrides, TypewriterConfig};
use typewriter::tui::{self, Feed};
use typewriter::{Delay, Output, animate_sequence, animate_text};

#[derive(Parser)]
#[command(name = "typewriter", about = "Typewriter text animation for the terminal")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Where to draw the animation
    #[arg(short, long, value_enum, global = true)]
    output: Option<Output>,

    /// Milliseconds per typed character: 80 or 70..100
    #[arg(long, global = true, allow_hyphen_values = true)]
    typing_delay: Option<Delay>,

    /// Milliseconds per erased character: 80 or 70..100
    #[arg(long, global = true, allow_hyphen_values = true)]
    deleting_delay: Option<Delay>,

    /// Pause between words of a sequence, in milliseconds
    #[arg(long, global = true, allow_negative_numbers = true)]
    pause_ms: Option<i64>,

    /// Stop after the last word instead of starting over
    #[arg(long, global = true)]
    no_loop: bool,

    /// Seed for reproducible timing
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Type one text. In the TUI, Enter retargets to the typed line
    Text { text: String },
    /// Cycle through words (default). In the TUI, Enter adds a word
    Sequence { words: Vec<String> },
}

fn init_logging(settings: &LogSettings) {
    // File logger: anything on stderr would tear the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&settings.file) {
        let _ = WriteLogger::init(settings.level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, source) = match config::load_config() {
        Ok((file_config, source)) => (file_config, Some(source)),
        Err(e) => {
            eprintln!("typewriter: {e}; using defaults");
            (TypewriterConfig::default(), None)
        }
    };

    // Logger first, so config resolution can report what it ignores
    init_logging(&config::log_settings(&file_config));
    if let Some(source) = &source {
        source.log();
    }

    let (text, words) = match args.command {
        Some(Command::Text { text }) => (Some(text), Vec::new()),
        Some(Command::Sequence { words }) => (None, words),
        None => (None, Vec::new()),
    };

    let overrides = Overrides {
        output: args.output,
        typing_delay: args.typing_delay,
        deleting_delay: args.deleting_delay,
        pause_ms: args.pause_ms,
        no_loop: args.no_loop,
        seed: args.seed,
        words,
    };
    let resolved = config::resolve(&file_config, &overrides);

    log::info!(
        "Typewriter starting: output={:?}, typing={}, deleting={}, pause={:?}, loop={}",
        resolved.output,
        resolved.sequence.typing_delay,
        resolved.sequence.deleting_delay,
        resolved.sequence.pause,
        resolved.sequence.looping
    );

    let feed = match text {
        Some(text) => Feed::Text(animate_text(text, resolved.sequence.writer_options())),
        None => Feed::Sequence(animate_sequence(resolved.words.clone(), resolved.sequence)),
    };

    match resolved.output {
        Output::Tui => tui::run(feed),
        Output::Plain => tui::run_plain(feed).await,
    }
}
