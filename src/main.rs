use clap::Parser;
use incidr::cmd::Cmd;
use incidr::config::{init_logging, LogConfig};
use incidr::write_report;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cmd = Cmd::parse();
    init_logging(&LogConfig::from_env(cmd.verbose))?;
    log::info!("#Start main()");

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &cmd.addresses, &cmd.mask, cmd.formats())?;

    Ok(())
}
