use std::io::Write;

use anyhow::Result;
use nudgenet::data::class_counts;

use crate::state::Session;
use crate::util::prompt::Terminal;

/// Per-class instance counts, then the network's shape and its accuracy
/// over the whole dataset.
pub fn handle_info(session: &mut Session, term: &mut Terminal) -> Result<()> {
    let metadata = &session.config.metadata;
    let counts = class_counts(&session.dataset, metadata.class_count());

    writeln!(term.output, "[DATASET INFORMATION]")?;
    for (name, count) in metadata.class_names.iter().zip(counts.iter()) {
        writeln!(term.output, " instances of {name}: {count}")?;
    }
    writeln!(term.output, " total instances: {}", session.dataset.len())?;
    writeln!(term.output, " training / testing: {} / {}", session.train_set.len(), session.test_set.len())?;

    let sizes: Vec<String> = session.network.layer_sizes().iter().map(|s| s.to_string()).collect();
    writeln!(term.output, "\n[NEURAL NETWORK INFORMATION]")?;
    writeln!(term.output, " layer sizes: {}", sizes.join(" "))?;
    writeln!(term.output, " parameters: {}", session.network.parameter_count())?;
    let accuracy = session.network.test(&session.dataset)?;
    writeln!(term.output, " current accuracy (using whole dataset): {accuracy:.6}")?;
    Ok(())
}
