use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cubesplit",
    version,
    about = "Split cubes into sections of at most 16 units per axis"
)]
pub struct Cli {
    /// Config file; missing file means defaults
    #[arg(long, global = true, default_value = "cubesplit.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split selected cubes and write the resulting scene
    Split(SplitArgs),
    /// Print cut points and piece counts without changing anything
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Scene file (TOML)
    pub scene: PathBuf,

    /// Cube names to select; defaults to the scene's selection, or every cube
    #[arg(long = "select", value_name = "NAME")]
    pub select: Vec<String>,

    /// Output scene path; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override `split.max_extent` from the config file
    #[arg(long)]
    pub max_extent: Option<f32>,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Scene file (TOML)
    pub scene: PathBuf,

    /// Override `split.max_extent` from the config file
    #[arg(long)]
    pub max_extent: Option<f32>,
}
