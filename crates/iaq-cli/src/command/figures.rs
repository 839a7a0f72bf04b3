use std::path::PathBuf;

use clap::Args;
use iaq_figures::figure;

#[derive(Debug, Clone, Args)]
pub(crate) struct FiguresArg {
    /// Directory the PNG files are written to; it must already exist
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

pub(crate) fn run(arg: &FiguresArg) -> anyhow::Result<()> {
    let FiguresArg { output_dir } = arg;

    println!("Generating Figures for Journal Submission...");
    let results = figure::render_all(output_dir);

    let mut failed = vec![];
    for (figure, result) in &results {
        match result {
            Ok(path) => println!("  {figure}: {}", path.display()),
            Err(e) => {
                tracing::error!(figure = %figure, error = %e, "figure failed");
                failed.push(figure.to_string());
            }
        }
    }

    let saved = results.len() - failed.len();
    println!(
        "{saved} of {} figures saved as PNG files in {}",
        results.len(),
        output_dir.display()
    );

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} figures failed: {}",
            failed.len(),
            results.len(),
            failed.join(", ")
        );
    }
    Ok(())
}
