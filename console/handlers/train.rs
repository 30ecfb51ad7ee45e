use std::io::Write;
use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, Result};
use nudgenet::{IterationStats, TrainConfig, TrainReport};

use crate::state::Session;
use crate::util::prompt::Terminal;

/// Prompts for iteration count and learn rate, then trains on the training
/// set while printing one progress line per iteration.
///
/// Training runs on a scoped worker thread so progress can be printed as it
/// arrives; the network is lent to the worker exclusively for the run.
pub fn handle_train(session: &mut Session, term: &mut Terminal) -> Result<()> {
    let defaults = session.config.hyperparams.clone();
    let max_iterations: usize = term.ask_or(
        &format!("enter max iteration (default={}): ", defaults.max_iterations),
        defaults.max_iterations,
    )?;
    let learn_rate: f64 = term.ask_or(
        &format!("enter learn rate: (default={:.1}): ", defaults.learn_rate),
        defaults.learn_rate,
    )?;

    let (tx, rx) = mpsc::channel::<IterationStats>();
    let config = TrainConfig::new(max_iterations, learn_rate).with_progress(tx);

    let Session { network, rng, train_set, test_set, .. } = session;
    let report: TrainReport = thread::scope(|s| -> Result<TrainReport> {
        // `config` moves into the worker so the sender drops when it finishes.
        let worker = s.spawn(move || network.train(train_set, test_set, &config, &*rng));
        for stats in rx {
            writeln!(
                term.output,
                "{}: [loss:{:.6}] [accuracy:{:.6}]",
                stats.iteration, stats.train_loss, stats.test_accuracy
            )?;
        }
        let report = worker.join().map_err(|_| anyhow!("training thread panicked"))??;
        Ok(report)
    })?;

    writeln!(term.output, "stopped after {} iteration(s): {:?}", report.iterations(), report.stop_reason)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::toy_session;

    fn train_with(session: &mut Session, script: &str) -> Result<String> {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        handle_train(session, &mut Terminal::new(&mut input, &mut output))?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn prints_one_line_per_iteration() {
        let mut session = toy_session();
        let before = session.network.clone();
        let text = train_with(&mut session, "3\n0\n").unwrap();

        let progress = text.lines().filter(|l| l.contains("[loss:")).count();
        assert!((1..=3).contains(&progress));
        assert!(text.contains("stopped after"));
        assert_eq!(session.network, before);
    }

    #[test]
    fn learn_rate_accepts_fractions() {
        let mut session = toy_session();
        let text = train_with(&mut session, "1\n0.5\n").unwrap();
        assert!(text.contains("1: [loss:"));
    }

    #[test]
    fn invalid_entry_aborts_before_training() {
        let mut session = toy_session();
        let before = session.network.clone();
        assert!(train_with(&mut session, "many\n").is_err());
        assert_eq!(session.network, before);
    }
}
