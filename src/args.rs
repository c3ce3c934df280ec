use clap::Parser;
use std::path::PathBuf;

use crate::config::Page;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON configuration file (defaults to <config dir>/edge-showcase/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page to show on startup
    #[arg(long, value_enum)]
    pub page: Option<Page>,

    /// Directory holding the showcase images and the sample frame
    #[arg(long)]
    pub assets: Option<PathBuf>,
}
