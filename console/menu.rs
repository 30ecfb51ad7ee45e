use std::io::Write;

use anyhow::Result;

use crate::handlers;
use crate::state::Session;
use crate::util::prompt::{parse_value, Terminal};

/// A console command's behaviour.
pub type Effect = fn(&mut Session, &mut Terminal) -> Result<()>;

/// A node of the command tree: either a runnable action or a sub-menu that
/// owns its children.
pub enum MenuItem {
    Action { label: &'static str, effect: Effect },
    Menu { label: &'static str, children: Vec<MenuItem> },
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Action { label, .. } | MenuItem::Menu { label, .. } => *label,
        }
    }

    fn execute(&self, session: &mut Session, term: &mut Terminal) -> Result<()> {
        match self {
            MenuItem::Action { effect, .. } => effect(session, term),
            MenuItem::Menu { label, children } => open_menu(label, children, session, term),
        }
    }
}

fn action(label: &'static str, effect: Effect) -> MenuItem {
    MenuItem::Action { label, effect }
}

fn menu(label: &'static str, children: Vec<MenuItem>) -> MenuItem {
    MenuItem::Menu { label, children }
}

/// Lists `children` by 1-based number and runs the one the user picks.
fn open_menu(label: &str, children: &[MenuItem], session: &mut Session, term: &mut Terminal) -> Result<()> {
    writeln!(term.output, "\n{label}")?;
    for (i, child) in children.iter().enumerate() {
        writeln!(term.output, " {}) {}", i + 1, child.label())?;
    }

    let line = match term.read_line("choose option: ")? {
        Some(line) if !line.trim().is_empty() => line,
        _ => {
            writeln!(term.output, "none selected")?;
            return Ok(());
        }
    };
    // Zero, negative and too-large choices all select nothing.
    let selected: i64 = parse_value(&line)?;
    let index = usize::try_from(selected).ok().and_then(|n| n.checked_sub(1));
    match index.and_then(|i| children.get(i)) {
        Some(child) => child.execute(session, term),
        None => {
            writeln!(term.output, "none selected")?;
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Top-level command loop. Commands are matched by exact label.
pub struct Console {
    commands: Vec<MenuItem>,
}

impl Console {
    pub fn new() -> Console {
        Console {
            commands: vec![
                action("info", handlers::info::handle_info),
                action("train", handlers::train::handle_train),
                action("test", handlers::query::handle_query),
                menu("options", vec![
                    menu("dataset options", vec![
                        action("split into training and testing sets", handlers::dataset::handle_split),
                        action("balance with resampling", handlers::dataset::handle_resample),
                        action("reimport dataset", handlers::dataset::handle_reimport),
                    ]),
                    menu("neural network options", vec![
                        action("change layer sizes", handlers::network::handle_resize),
                        action("randomize weights and biases", handlers::network::handle_randomize),
                        action("test input", handlers::query::handle_query),
                        action("dump", handlers::network::handle_dump),
                    ]),
                ]),
                action("help", handlers::help::handle_help),
                action("exit", handlers::help::handle_exit),
                action("quit", handlers::help::handle_exit),
            ],
        }
    }

    /// Reads commands until `exit`/`quit` or end of input.
    pub fn run(&self, session: &mut Session, term: &mut Terminal) -> Result<()> {
        writeln!(term.output, "type 'exit' to quit; type 'help' for help")?;
        while session.running {
            let line = match term.read_line("\x1b[32m> \x1b[0m")? {
                Some(line) => line,
                None => break,
            };
            self.dispatch(line.trim(), session, term)?;
        }
        Ok(())
    }

    /// Runs one command. Command errors are reported on the terminal and
    /// never end the session; only a failing terminal does.
    pub fn dispatch(&self, line: &str, session: &mut Session, term: &mut Terminal) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }
        match self.commands.iter().find(|c| c.label() == line) {
            Some(command) => {
                if let Err(e) = command.execute(session, term) {
                    tracing::debug!(command = line, error = %e, "command failed");
                    writeln!(term.output, "{e:#}")?;
                }
            }
            None => writeln!(term.output, "unknown command")?,
        }
        Ok(())
    }
}
