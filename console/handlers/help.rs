use std::io::Write;

use anyhow::Result;

use crate::state::Session;
use crate::util::prompt::Terminal;

const HELP: &str = "\
Commands
 exit - end program
 quit - same as 'exit'
 help - this
 info - show information about the dataset and neural network
 train - neural network will try to converge
 test - check the classification of inputted features
 options - selection of editing the dataset and neural network

pass --config <file.json> for other datasets and defaults
";

pub fn handle_help(_session: &mut Session, term: &mut Terminal) -> Result<()> {
    write!(term.output, "{HELP}")?;
    Ok(())
}

pub fn handle_exit(session: &mut Session, _term: &mut Terminal) -> Result<()> {
    session.running = false;
    Ok(())
}
