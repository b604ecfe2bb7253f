//! Command line front end of the Set bot
//!
//! CLI Usage:
//!   set_bot solve --cards "1-red-solid-oval, 1-green-solid-oval, 1-purple-solid-oval"
//!   set_bot classify card_01.png card_02.png
//!   set_bot deck captures/ --pattern "slot_*.png" --all
//!   set_bot screenshot screen.png
//!   set_bot census
//!   set_bot config my_phone.json
//!   set_bot --config my_phone.json --debug screenshot screen.png

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use image::RgbImage;
use separator::Separatable;
use wildmatch::WildMatch;

use set_bot::card::{full_deck, parse_card_list, Card};
use set_bot::solver::{find_all, find_first, SolveMethod};
use set_bot::utils::*;
use set_bot::{BotConfig, ClickPlan, DeckAssembler};

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "set_bot")]
#[command(about = "Reads a Set deck from screenshots and finds the sets", long_about = None)]
struct Args {
    /// JSON configuration file (built-in defaults otherwise)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print debug messages
    #[arg(short, long, global = true)]
    debug: bool,

    /// Also write the messages to a timestamped log file
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find sets among cards given as text, e.g. 2-purple-solid-diamond
    Solve {
        /// Comma separated cards, in slot order
        #[arg(long)]
        cards: String,
        /// List every set instead of the first one
        #[arg(short, long)]
        all: bool,
        #[arg(short, long, value_enum, default_value_t = Method::Completion)]
        method: Method,
    },
    /// Classify card images, one card per image
    Classify {
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Read slot images from a directory (sorted by name) and solve
    Deck {
        dir: PathBuf,
        /// Wildcard pattern selecting the slot images
        #[arg(short, long, default_value = "slot_*.png")]
        pattern: String,
        #[arg(short, long)]
        all: bool,
        #[arg(short, long, value_enum, default_value_t = Method::Completion)]
        method: Method,
    },
    /// Read a whole screenshot with the slot layout, solve and plan the clicks
    Screenshot {
        image: PathBuf,
        #[arg(short, long)]
        all: bool,
    },
    /// Count the sets of the full 81-card deck with both methods
    Census,
    /// Write the configuration (defaults, or --config) to a JSON file
    Config { path: PathBuf },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Method {
    BruteForce,
    Completion,
}

impl From<Method> for SolveMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::BruteForce => SolveMethod::BruteForce,
            Method::Completion => SolveMethod::Completion,
        }
    }
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        debug_print_on();
    }
    if args.log_file {
        init_log_file();
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            test_print(&format!("Error: {}", e));
            let mut source = e.source();
            while let Some(cause) = source {
                test_print(&format!("   caused by: {}", cause));
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> CliResult {
    let config = BotConfig::load_or_default(args.config.as_deref())?;
    if let Some(path) = &args.config {
        debug_print(&format!("configuration loaded from {}", path.display()));
    }

    match args.command {
        Command::Solve { cards, all, method } => {
            let cards = parse_card_list(&cards)?;
            report_sets(&cards, all, method.into(), None);
            Ok(())
        }
        Command::Classify { images } => classify_images(&config, &images),
        Command::Deck { dir, pattern, all, method } => solve_slot_dir(&config, &dir, &pattern, all, method.into()),
        Command::Screenshot { image, all } => solve_screenshot(&config, &image, all),
        Command::Census => {
            census();
            Ok(())
        }
        Command::Config { path } => {
            config.save_json(&path)?;
            test_print(&format!("Configuration written to {}", path.display()));
            Ok(())
        }
    }
}

fn load_rgb(path: &Path) -> Result<RgbImage, Box<dyn Error>> {
    Ok(image::open(path)?.to_rgb8())
}

/// Print the first set (or all of them) and, when a layout is given, where
/// to click
fn report_sets(cards: &[Card], all: bool, method: SolveMethod, layout: Option<&set_bot::config::SlotLayout>) {
    test_print(&format!("{} visible cards:", cards.len()));
    for (slot, card) in cards.iter().enumerate() {
        test_print(&format!("   slot {:>2}: {}", slot, card));
    }
    if all {
        let sets = find_all(cards, method);
        test_print(&format!("Found {} sets:", sets.len()));
        for set in &sets {
            test_print(&format!("   {}", set));
        }
        return;
    }
    match find_first(cards, method) {
        Some(set) => {
            test_print(&format!("Set found: {}", set));
            if let Some(plan) = layout.and_then(|layout| ClickPlan::for_set(cards, &set, layout)) {
                for (slot, (x, y)) in plan.slots.iter().zip(plan.points.iter()) {
                    test_print(&format!("   click slot {:>2} at ({}, {})", slot, x, y));
                }
            }
        }
        None => test_print("No set among the visible cards"),
    }
}

fn classify_images(config: &BotConfig, images: &[PathBuf]) -> CliResult {
    let classifier = set_bot::CardClassifier::new(config.classifier.clone());
    for path in images {
        let region = load_rgb(path)?;
        match classifier.classify_detailed(&region) {
            Ok(found) => test_print(&format!(
                "{}: {}   (colour {:?}, {:.0} px per symbol, {:.2} hollow)",
                path.display(),
                found.card,
                found.sampled_colour,
                found.area_per_symbol,
                found.hollow_fraction
            )),
            Err(e) => test_print(&format!("{}: {}", path.display(), e)),
        }
    }
    Ok(())
}

fn solve_slot_dir(config: &BotConfig, dir: &Path, pattern: &str, all: bool, method: SolveMethod) -> CliResult {
    let matcher = WildMatch::new(pattern);
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| matcher.matches(name))
        })
        .collect();
    paths.sort();
    debug_print(&format!("{} slot images match {} in {}", paths.len(), pattern, dir.display()));

    let regions = paths.iter().map(|path| load_rgb(path)).collect::<Result<Vec<_>, _>>()?;
    let assembler = DeckAssembler::from_config(config);
    let ready = assembler.deck_readiness(&regions);
    if ready == 0 {
        test_print("Warning: the slots do not show a complete deck");
    }
    let cards = assembler.assemble(&regions)?;
    report_sets(&cards, all, method, None);
    Ok(())
}

fn solve_screenshot(config: &BotConfig, image: &Path, all: bool) -> CliResult {
    let screenshot = load_rgb(image)?;
    let assembler = DeckAssembler::from_config(config);
    let regions = assembler.crop_slots(&screenshot)?;
    match assembler.deck_readiness(&regions) {
        0 => test_print("Warning: the screenshot does not show a complete deck"),
        n => debug_print(&format!("deck ready with {} cards", n)),
    }
    let cards = assembler.assemble(&regions)?;
    report_sets(&cards, all, SolveMethod::Completion, Some(assembler.layout()));
    Ok(())
}

fn census() {
    banner("Sets in the full deck");
    let deck = full_deck();
    for method in [SolveMethod::BruteForce, SolveMethod::Completion] {
        let start = Instant::now();
        let sets = find_all(&deck, method);
        test_print(&format!(
            "   {:<12} {:>6} sets in {:>10} µs",
            format!("{:?}", method),
            (sets.len() as u64).separated_string(),
            (start.elapsed().as_micros() as u64).separated_string()
        ));
    }
}
