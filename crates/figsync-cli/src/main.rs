use clap::{Args, Parser, Subcommand};
use figsync_sync::{
    CategoryDiff, Diff, FigmaClient, JsonDumpSource, SnapshotStore, StyleSource, SyncConfig,
    SyncResult, Syncer,
};
use figsync_tokens::Category;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "figsync")]
#[command(about = "figsync: Figma design tokens to CSS variables and utilities")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch styles, update the token snapshot, and regenerate the CSS
    Sync {
        #[command(flatten)]
        figma: FigmaArgs,

        /// Read a saved `{ styles, nodes }` dump instead of calling Figma
        #[arg(long)]
        from: Option<PathBuf>,

        /// Copy the previous snapshot here before replacing it
        #[arg(long)]
        backup: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check that the token can read the file and list its published styles
    Check {
        #[command(flatten)]
        figma: FigmaArgs,
    },

    /// Regenerate the CSS from the existing token snapshot
    Generate {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two token snapshot files
    Diff {
        /// Previous snapshot
        old: PathBuf,
        /// New snapshot
        new: PathBuf,
    },

    /// Print the token identifier for each style name
    Normalize {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Args)]
struct FigmaArgs {
    /// Figma personal access token
    #[arg(long, env = "FIGMA_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Key of the Figma file to read styles from
    #[arg(long, env = "FIGMA_FILE_KEY")]
    file_key: Option<String>,

    /// Figma API base URL
    #[arg(long, default_value = figsync_sync::figma::DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[derive(Args)]
struct OutputArgs {
    /// Token snapshot file
    #[arg(long, default_value = figsync_sync::config::DEFAULT_TOKENS_PATH)]
    tokens: PathBuf,

    /// Stylesheet output
    #[arg(long, default_value = figsync_sync::config::DEFAULT_CSS_PATH)]
    css: PathBuf,

    /// Minified stylesheet output
    #[arg(long, default_value = figsync_sync::config::DEFAULT_MINIFIED_CSS_PATH)]
    min_css: PathBuf,
}

impl OutputArgs {
    fn into_config(self) -> SyncConfig {
        SyncConfig {
            tokens_path: self.tokens,
            css_path: self.css,
            minified_css_path: self.min_css,
            backup_path: None,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sync {
            figma,
            from,
            backup,
            json,
            output,
        } => {
            let mut config = output.into_config();
            config.backup_path = backup;
            let source: Box<dyn StyleSource> = match from {
                Some(path) => Box::new(JsonDumpSource::new(path)),
                None => Box::new(figma_client(figma)),
            };
            cmd_sync(config, source, json);
        }
        Command::Check { figma } => cmd_check(&figma_client(figma)),
        Command::Generate { output } => cmd_generate(&output.into_config()),
        Command::Diff { old, new } => cmd_diff(old, new),
        Command::Normalize { names } => {
            for name in names {
                println!("{}", figsync_tokens::normalize(&name));
            }
        }
    }
}

fn figma_client(args: FigmaArgs) -> FigmaClient {
    let (Some(token), Some(file_key)) = (args.token, args.file_key) else {
        eprintln!(
            "Error: --token and --file-key (or FIGMA_ACCESS_TOKEN and FIGMA_FILE_KEY) are required"
        );
        std::process::exit(2);
    };
    let timeout = Duration::from_secs(args.timeout);
    match FigmaClient::with_options(token, file_key, args.api_url, timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_sync(config: SyncConfig, source: Box<dyn StyleSource>, json: bool) {
    log::debug!("Sync config: {config:?}");
    let result = Syncer::new(config, source).sync();

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error serializing result: {e}"),
        }
    }

    match result {
        SyncResult::Success(report) => {
            if !json {
                let counts = report.counts;
                eprintln!(
                    "Synced {} colors, {} shadows, {} typography tokens",
                    counts.colors, counts.shadows, counts.typography
                );
                print_diff(&report.diff);
                for path in &report.written {
                    eprintln!("Wrote: {}", path.display());
                }
            }
        }
        SyncResult::Failure { error } => {
            if !json {
                eprintln!("Sync failed: {error}");
            }
            std::process::exit(1);
        }
    }
}

fn cmd_check(client: &FigmaClient) {
    println!("File key: {}", client.file_key());
    let report = match client.check_access() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Access check failed: {e}");
            std::process::exit(1);
        }
    };

    println!("File name: {}", report.file.name);
    if let Some(modified) = &report.file.last_modified {
        println!("Last modified: {modified}");
    }
    println!("Published styles: {}", report.styles.len());
    for (style_type, label) in [("FILL", "colors"), ("EFFECT", "effects"), ("TEXT", "text")] {
        println!("  {label}: {}", report.count(style_type));
    }
    for style in report.of_type("FILL") {
        let description = if style.description.is_empty() {
            "No description"
        } else {
            style.description.as_str()
        };
        println!("  - {}: {description}", style.name);
    }
}

fn cmd_generate(config: &SyncConfig) {
    match figsync_sync::regenerate(config) {
        Ok(_) => {
            eprintln!("Built: {}", config.css_path.display());
            eprintln!("Built: {}", config.minified_css_path.display());
        }
        Err(e) => {
            eprintln!("Error generating CSS: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_diff(old: PathBuf, new: PathBuf) {
    let load = |path: PathBuf| match SnapshotStore::new(path).load() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let diff = figsync_sync::diff(&load(old), &load(new));
    print_diff(&diff);
}

fn print_diff(diff: &Diff) {
    if !diff.has_changes() {
        println!("No changes");
        return;
    }
    for category in Category::ALL {
        print_category(category, diff.category(category));
    }
    let counts = diff.counts();
    println!(
        "{} added, {} updated, {} deleted",
        counts.added, counts.updated, counts.deleted
    );
}

fn print_category(category: Category, changes: &CategoryDiff) {
    if changes.is_empty() {
        return;
    }
    println!("{category}:");
    for id in &changes.added {
        println!("  + {id}");
    }
    for id in &changes.updated {
        println!("  ~ {id}");
    }
    for id in &changes.deleted {
        println!("  - {id}");
    }
}
