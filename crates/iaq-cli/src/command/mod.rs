use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, figures::FiguresArg, print_config::PrintConfigArg};

mod analyze;
mod figures;
mod print_config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the survey and sensor statistics tables
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Render the publication figures as PNG files
    Figures(#[clap(flatten)] FiguresArg),
    /// Print the built-in column mapping as JSON
    PrintConfig(#[clap(flatten)] PrintConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match &args.mode {
        Mode::Analyze(arg) => analyze::run(arg)?,
        Mode::Figures(arg) => figures::run(arg)?,
        Mode::PrintConfig(arg) => print_config::run(arg)?,
    }
    Ok(())
}
