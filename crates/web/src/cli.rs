//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

/// Randomly generate terrible indie game titles
#[derive(Debug, Parser)]
#[command(name = "nextindiegame", version, about)]
pub struct Cli {
    /// Location of config file (defaults to ./nextindiegame.{toml,ini,...} when present)
    #[arg(short, long, env = "INDIEGAME_CONFIG")]
    pub config: Option<PathBuf>,
}
