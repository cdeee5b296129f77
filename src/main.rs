use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use snapdiff::areas::tracker::Tracker;
use snapdiff::artifacts::core::PagerWriter;
use snapdiff::artifacts::diff::HUNK_CONTEXT;
use snapdiff::artifacts::diff::change_set::DiffFilter;
use snapdiff::artifacts::patch::PatchOptions;
use snapdiff::artifacts::snapshot::content::BinaryIdentity;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "snapdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two directory snapshots",
    long_about = "This tool captures two directory trees as path to content snapshots \
    and reports the difference between them as a unified patch, a name-status \
    listing or a JSON summary of the changed files.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct CompareArgs {
    #[arg(index = 1, help = "The directory holding the before state")]
    before: PathBuf,
    #[arg(index = 2, help = "The directory holding the after state")]
    after: PathBuf,
    #[arg(
        long = "diff-filter",
        default_value = "AMD",
        help = "Only report Added (A), Modified (M) and/or Deleted (D) files"
    )]
    diff_filter: DiffFilter,
    #[arg(
        short = 'U',
        long = "unified",
        default_value_t = HUNK_CONTEXT,
        help = "Number of context lines around each change"
    )]
    unified: usize,
    #[arg(
        long,
        default_value = "marker",
        help = "How binary files are compared: marker or digest"
    )]
    binary: BinaryIdentity,
}

impl CompareArgs {
    fn options(&self) -> PatchOptions {
        PatchOptions {
            context_lines: self.unified,
            filter: self.diff_filter,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the patch between two directories",
        long_about = "This command prints a unified patch with one block per changed file: \
        deleted files first, then modified files, then added files."
    )]
    Diff(CompareArgs),
    #[command(
        name = "status",
        about = "List changed files with their status letter",
        long_about = "This command prints one `<A|M|D>\\t<path>` line per changed file."
    )]
    Status(CompareArgs),
    #[command(
        name = "summary",
        about = "Print the changed files and their content as JSON",
        long_about = "This command prints a JSON object with `added`, `modified` and `deleted` \
        maps from path to content. Deleted files carry their previous content."
    )]
    Summary(CompareArgs),
}

impl Commands {
    fn args(&self) -> &CompareArgs {
        match self {
            Commands::Diff(args) | Commands::Status(args) | Commands::Summary(args) => args,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let args = cli.command.args();

    let use_pager = std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none();
    let pager = Pager::new();
    let writer: Box<dyn std::io::Write> = if use_pager {
        Box::new(PagerWriter::new(pager.clone()))
    } else {
        Box::new(std::io::stdout())
    };
    let tracker = Tracker::new(writer, args.binary);

    match &cli.command {
        Commands::Diff(args) => tracker.diff(&args.before, &args.after, &args.options())?,
        Commands::Status(args) => tracker.status(&args.before, &args.after, args.diff_filter)?,
        Commands::Summary(args) => tracker.summary(&args.before, &args.after, &args.options())?,
    }

    if use_pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
