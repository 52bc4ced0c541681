// src/cli.rs
use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{consts::{ITEM_QUERY, LOG_FILE, MIN_EMBEDDED}, BasePolicy, Branch, OverrideTable, ScrapeOptions},
    core::{ChromeSession, HttpClient},
    file, log,
    progress::Progress,
    scrape,
};

#[derive(Parser)]
#[command(name = "rune_scrape")]
#[command(about = "Resolve Wowhead rune items to the spell effect they grant", long_about = None)]
struct Cli {
    /// Write debug logs to a file (default path if no value given)
    #[arg(long, global = true, num_args = 0..=1, default_missing_value = LOG_FILE)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `effect_id,item_tooltip` lines for every rune item
    Runes {
        /// Output file
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Branch::Ptr)]
        branch: Branch,
        /// Listing path and filter, relative to the branch
        #[arg(long, default_value = ITEM_QUERY)]
        query: String,
        /// `base,effect` override file replacing the built-in table
        #[arg(long)]
        overrides: Option<PathBuf>,
        /// Which embedded spell id is the base for the lookup
        #[arg(long, default_value_t = 0)]
        base_index: usize,
        /// Fewer embedded spell ids than this skips the item
        #[arg(long, default_value_t = MIN_EMBEDDED)]
        min_embedded: usize,
    },
    /// Write `{ "effect_id": "description" }` for enchants listed in a source file
    Descriptions {
        /// File with `SpellId: N` / `EffectId: N` lines
        input: PathBuf,
        /// Output JSON file
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Branch::Live)]
        branch: Branch,
    },
}

/// Prints progress to stdout.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
    skipped: usize,
}

impl ConsoleProgress {
    fn seen(&self) -> usize {
        self.done + self.skipped
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        *self = Self { total, ..Self::default() };
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, id: u32) {
        self.done += 1;
        println!("[{}/{}] {id} ok", self.seen(), self.total);
    }
    fn item_skipped(&mut self, id: u32, reason: &str) {
        self.skipped += 1;
        println!("[{}/{}] {id} skipped: {reason}", self.seen(), self.total);
    }
    fn finish(&mut self) {
        println!("{} ok, {} skipped", self.done, self.skipped);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    log::init(cli.log_file.as_deref()).wrap_err("Failed to set up logging")?;

    match cli.command {
        Command::Runes { out, branch, query, overrides, base_index, min_embedded } => {
            let overrides = match overrides {
                Some(path) => OverrideTable::load(&path)?,
                None => OverrideTable::builtin(),
            };
            let opts = ScrapeOptions {
                branch,
                item_query: query,
                base_policy: BasePolicy { index: base_index, min_embedded },
                ..ScrapeOptions::default()
            };
            runes(&opts, &overrides, out)
        }
        Command::Descriptions { input, out, branch } => {
            let opts = ScrapeOptions { branch, ..ScrapeOptions::default() };
            descriptions(&opts, input, out)
        }
    }
}

fn runes(opts: &ScrapeOptions, overrides: &OverrideTable, out: PathBuf) -> Result<()> {
    let http = HttpClient::new()?;
    // Closed when it goes out of scope, also on the error paths
    let mut session = ChromeSession::launch().wrap_err("Failed to launch browser")?;
    let mut progress = ConsoleProgress::default();

    let records = scrape::run(&mut session, &http, opts, overrides, Some(&mut progress))?;
    session.close();

    let path = file::write_records(&out, &records)?;
    println!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn descriptions(opts: &ScrapeOptions, input: PathBuf, out: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&input)
        .wrap_err_with(|| format!("Failed to read {}", input.display()))?;
    let refs = scrape::parse_enchant_refs(&text);

    let mut session = ChromeSession::launch().wrap_err("Failed to launch browser")?;
    let mut progress = ConsoleProgress::default();
    let described = scrape::collect_descriptions(&mut session, opts, &refs, Some(&mut progress));
    session.close();

    let path = file::write_descriptions(&out, &described)?;
    println!("Wrote {} descriptions to {}", described.len(), path.display());
    Ok(())
}
