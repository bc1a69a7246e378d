//! Ruler CLI
//!
//! Terminal front-end for the box positioning calculator and the ancestor
//! traversal highlighter.
//!
//! - `ruler boxes --box "10px,,,20px" --box "0,5px,5px,0"` prints the boxes,
//!   their edge differences, and the generated snippets
//! - `ruler traverse page.json --target card` clicks an element of a JSON DOM
//!   fixture and prints the square-like ancestors it collected

mod boxes;
mod traverse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ruler_common::warning::set_quiet;
use ruler_geometry::Strategy;
use ruler_traversal::DEFAULT_HIGHLIGHT_COLOR;

/// Ruler: box positioning snippets and ancestor highlighting
#[derive(Parser, Debug)]
#[command(name = "ruler")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # One box, all four snippets
    ruler boxes --box "10px,5px,,20px"

    # Two nested boxes (innermost first), flexbox snippet only, as JSON
    ruler boxes --box "10px,,,10px" --box "30px,20px,20px,30px" --strategy flexbox --json

    # Copy the grid snippet to the system clipboard
    ruler boxes --box "10px,5px,,20px" --strategy grid --copy grid

    # Click #card in a fixture and highlight its square ancestors
    ruler traverse fixtures/sample.json --target card --highlight
"#)]
struct Cli {
    /// Record warnings without printing them
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build nested boxes and print snippets
    Boxes(BoxesArgs),
    /// Click an element of a DOM fixture and walk its ancestors
    Traverse(TraverseArgs),
}

#[derive(clap::Args, Debug)]
struct BoxesArgs {
    /// Box as "top,right,bottom,left"; blank fields are unset. Repeat for
    /// each box, innermost first.
    #[arg(long = "box", value_name = "T,R,B,L", required = true)]
    boxes: Vec<String>,

    /// Only print this snippet (absolute, flexbox, grid, margin)
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Show details for box N (1-based id)
    #[arg(long, value_name = "N")]
    select: Option<u32>,

    /// Copy this snippet to the clipboard through the terminal (OSC 52)
    #[arg(long, value_name = "STRATEGY")]
    copy: Option<Strategy>,

    /// Also print the nested HTML preview
    #[arg(long)]
    preview: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct TraverseArgs {
    /// JSON DOM fixture
    #[arg(value_name = "FIXTURE")]
    fixture: PathBuf,

    /// Element to click: an id, or a selector (first match wins)
    #[arg(long, value_name = "ID|SELECTOR")]
    target: String,

    /// Id of the element the trigger is mounted on (default: body)
    #[arg(long, value_name = "ID")]
    container: Option<String>,

    /// Selector the click target must match
    #[arg(long, default_value = "*")]
    selector: String,

    /// Highlight the collected elements
    #[arg(short = 'H', long)]
    highlight: bool,

    /// Highlight colour
    #[arg(long, default_value = DEFAULT_HIGHLIGHT_COLOR)]
    color: String,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    match cli.command {
        Command::Boxes(args) => boxes::run(&args),
        Command::Traverse(args) => traverse::run(args),
    }
}
