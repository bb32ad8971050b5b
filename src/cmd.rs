//! Command line arguments.

use crate::models::Formats;
use clap::{ArgAction, Parser};

/// Display v4 IPs and/or CIDR blocks in dotted-quad, binary, decimal, and hex.
#[derive(Parser, Debug)]
#[command(
    name = "incidr",
    version,
    after_help = "You can specify any combination of the --quad, --binary, --decimal, and \
--hexadecimal options together to get multiple formats. The default is to show all of them.\n\n\
NOTE: a bare number of at most 32 with no '/' is read as a mask length, so `incidr 24` \
shows 255.255.255.0, not 0.0.0.24."
)]
pub struct Cmd {
    /// List of IPs or CIDR blocks to process.
    #[arg(required = true, num_args = 1..)]
    pub addresses: Vec<String>,

    /// The mask to apply to addresses given without one (repeatable).
    #[arg(long, action = ArgAction::Append)]
    pub mask: Vec<String>,

    /// Only display the addresses as dotted quads.
    #[arg(long)]
    pub quad: bool,

    /// Only display the addresses as binary.
    #[arg(long)]
    pub binary: bool,

    /// Only display the addresses as base-10 ints.
    #[arg(long)]
    pub decimal: bool,

    /// Only display the addresses as hexadecimal ints.
    #[arg(long)]
    pub hexadecimal: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cmd {
    pub fn formats(&self) -> Formats {
        Formats::only(self.quad, self.binary, self.decimal, self.hexadecimal)
    }
}
