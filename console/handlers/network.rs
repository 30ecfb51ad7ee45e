use std::io::Write;

use anyhow::{bail, Result};
use nudgenet::{Network, NetworkSpec};
use tracing::info;

use crate::state::Session;
use crate::util::prompt::Terminal;

/// Replaces the network with a freshly randomized one of a new shape.
/// All learned parameters are discarded.
pub fn handle_resize(session: &mut Session, term: &mut Terminal) -> Result<()> {
    let line = term.read_line("enter new architecture (eg. 4 5 3): ")?.unwrap_or_default();
    let spec = NetworkSpec::parse(&line)?;

    let metadata = &session.config.metadata;
    if spec.input_size() != metadata.feature_count() {
        bail!("first layer must have {} nodes, one per feature", metadata.feature_count());
    }
    if spec.output_size() != metadata.class_count() {
        bail!("last layer must have {} nodes, one per class", metadata.class_count());
    }

    session.network = Network::new(&spec.layer_sizes, &mut session.rng)?;
    info!(layers = ?spec.layer_sizes, "network resized");
    session.config.network = spec;
    Ok(())
}

pub fn handle_randomize(session: &mut Session, _term: &mut Terminal) -> Result<()> {
    session.network.randomize(&mut session.rng);
    info!("network parameters randomized");
    Ok(())
}

pub fn handle_dump(session: &mut Session, term: &mut Terminal) -> Result<()> {
    write!(term.output, "{}", session.network)?;
    Ok(())
}
