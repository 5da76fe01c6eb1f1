use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use tailwind_lookup::classifier::{classify, Match};
use tailwind_lookup::coordinator::{on_installed, InstallReason, Summary};
use tailwind_lookup::logging;
use tailwind_lookup::lookup::{Bundled, ClassDb, DatasetSource, FileSource, MAX_SEARCH_RESULTS};
use tailwind_lookup::message::PageClasses;
use tailwind_lookup::settings::{save_enabled, JsonFileStore, SettingsStore};
use tailwind_lookup::tooltip::{css::overlay_css, html, ElementInfo, TooltipView};

#[derive(Parser)]
#[command(name = "twl", version)]
#[command(about = "Tailwind CSS lookup — classify utility classes and show the CSS they produce")]
struct Cli {
    /// Class table to use instead of the bundled one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Settings file (`{"settings": {...}}`)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which classes look like Tailwind utilities
    Classify {
        /// Class names
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// Show the CSS declaration behind each class
    Lookup {
        /// Class names (variant prefixes are stripped)
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// Search the class table by substring
    Search {
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = MAX_SEARCH_RESULTS)]
        limit: usize,
    },

    /// List the utility classes used in an HTML file
    Scan {
        /// Input HTML file
        file: PathBuf,

        /// Print the `GET_PAGE_CLASSES` reply instead of one class per line
        #[arg(long)]
        json: bool,
    },

    /// Render the hover tooltip for an element
    Render {
        /// Class names on the element
        classes: Vec<String>,

        /// Tag name
        #[arg(long, default_value = "div")]
        tag: String,

        /// `id` attribute
        #[arg(long, default_value = "")]
        id: String,

        /// Output tooltip HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Print the overlay stylesheet
    Stylesheet,

    /// Show, initialise or update the settings file
    Settings {
        /// Switch the extension on
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Switch the extension off
        #[arg(long)]
        disable: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_stderr(logging::level_for_verbosity(cli.verbose));

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Classify { classes } => {
            for class in &classes {
                let c = classify(class);
                let verdict = match c.matched {
                    Some(Match::Prefix(prefix)) => format!("utility (prefix `{prefix}`)"),
                    Some(Match::Arbitrary) => "utility (arbitrary value)".to_string(),
                    None => "not a utility".to_string(),
                };
                if c.base == class.as_str() {
                    println!("{class}\t{verdict}");
                } else {
                    println!("{class}\t{verdict}, base `{}`", c.base);
                }
            }
        }

        Commands::Lookup { classes } => {
            let table = load_table(cli.data.as_deref())?;
            let mut missing = 0;
            for class in &classes {
                match table.declaration(class) {
                    Some(decl) => println!("{class}\t{decl}"),
                    None => {
                        println!("{class}\t-");
                        missing += 1;
                    }
                }
            }
            if missing > 0 {
                eprintln!("{missing} of {} classes not in the table", classes.len());
            }
        }

        Commands::Search { query, limit } => {
            let table = load_table(cli.data.as_deref())?;
            let hits = table.search(&query, limit);
            if hits.is_empty() {
                eprintln!("no classes match '{query}'");
            }
            for hit in hits {
                let marker = if hit.exact { "*" } else { " " };
                println!("{marker} {}\t{}", hit.name, hit.css);
            }
        }

        Commands::Scan { file, json } => {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("cannot read '{}'", file.display()))?;
            let page = PageClasses {
                classes: tailwind_lookup::scan_html(&source),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                for class in &page.classes {
                    println!("{class}");
                }
            }
            eprintln!("{}: {}", file.display(), Summary::from_response(Some(&page)));
        }

        Commands::Render {
            classes,
            tag,
            id,
            html: as_html,
        } => {
            let table = load_table(cli.data.as_deref())?;
            let element = ElementInfo::new(tag, id, classes);
            let view = TooltipView::build(&element, Some(&table));
            if as_html {
                println!("{}", html::render(&view));
            } else {
                print!("{view}");
            }
        }

        Commands::Stylesheet => print!("{}", overlay_css()),

        Commands::Settings { enable, disable } => {
            let Some(path) = cli.settings else {
                bail!("`settings` needs --settings <file>");
            };
            let mut store = JsonFileStore::new(&path);
            let stored = store
                .load()
                .with_context(|| format!("cannot read '{}'", path.display()))?;
            if stored.is_none() {
                on_installed(InstallReason::Install, &mut store)?;
                eprintln!("wrote default settings to {}", path.display());
            }
            let settings = if enable || disable {
                save_enabled(&mut store, enable)?
            } else {
                store.load_or_default()
            };
            println!("{}", settings.to_json()?);
        }
    }
    Ok(())
}

fn load_table(data: Option<&Path>) -> anyhow::Result<ClassDb> {
    let text = match data {
        Some(path) => FileSource(path.to_path_buf())
            .fetch()
            .with_context(|| format!("cannot read '{}'", path.display()))?,
        None => Bundled.fetch()?,
    };
    let table = ClassDb::from_json(&text).context("malformed class table")?;
    log::info!("class table: {} entries", table.len());
    Ok(table)
}
