use clap::{Parser, Subcommand};

/// A tool for querying & manipulating RAID devices
#[derive(Parser, Debug)]
#[command(name = "raidtool")]
#[command(version)]
#[command(about = "Query hardware RAID controllers across vendors", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a block device to its WWN identifier
    Wwn {
        /// Block device like '/dev/sdb'
        blockdev: String,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
