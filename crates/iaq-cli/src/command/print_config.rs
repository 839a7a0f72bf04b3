use std::path::PathBuf;

use clap::Args;
use iaq_analysis::config::AnalysisConfig;

use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct PrintConfigArg {
    /// Output file path (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PrintConfigArg) -> anyhow::Result<()> {
    Output::save_json(&AnalysisConfig::default(), arg.output.as_deref())
}
