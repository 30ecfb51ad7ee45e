use std::io::Write;

use anyhow::Result;
use nudgenet::data::{class_counts, resample};

use crate::state::Session;
use crate::util::prompt::Terminal;

pub fn handle_split(session: &mut Session, term: &mut Terminal) -> Result<()> {
    session.split();
    writeln!(
        term.output,
        "training set: {} instances, testing set: {} instances",
        session.train_set.len(),
        session.test_set.len()
    )?;
    Ok(())
}

/// Over/undersamples the full dataset towards equal class counts.
/// The training and testing sets are left alone until the next split.
pub fn handle_resample(session: &mut Session, term: &mut Terminal) -> Result<()> {
    let ratio: f64 = term.ask_or("enter resampling ratio (default=1.0): ", 1.0)?;
    let class_count = session.config.metadata.class_count();
    resample(&mut session.dataset, ratio, class_count, &mut session.rng);

    let counts: Vec<String> = class_counts(&session.dataset, class_count)
        .iter().map(|c| c.to_string()).collect();
    writeln!(term.output, "class counts: {}", counts.join(" "))?;
    Ok(())
}

pub fn handle_reimport(session: &mut Session, term: &mut Terminal) -> Result<()> {
    session.reimport()?;
    writeln!(term.output, "imported {} instances", session.dataset.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::toy_session;
    use nudgenet::DataInstance;

    #[test]
    fn resample_uses_default_ratio() {
        let mut session = toy_session();
        session.dataset.extend((0..4).map(|_| DataInstance::new(vec![-1.0, -1.0], 0)));

        let mut input = "\n".as_bytes();
        let mut output = Vec::new();
        handle_resample(&mut session, &mut Terminal::new(&mut input, &mut output)).unwrap();

        assert_eq!(class_counts(&session.dataset, 2), vec![12, 12]);
        assert!(String::from_utf8(output).unwrap().contains("class counts: 12 12"));
    }

    #[test]
    fn split_refreshes_sets() {
        let mut session = toy_session();
        session.train_set.clear();
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        handle_split(&mut session, &mut Terminal::new(&mut input, &mut output)).unwrap();
        assert_eq!(session.train_set.len() + session.test_set.len(), 20);
    }

    #[test]
    fn reimport_of_missing_file_fails() {
        let mut session = toy_session();
        session.config.dataset = "does/not/exist.csv".into();
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        let result = handle_reimport(&mut session, &mut Terminal::new(&mut input, &mut output));
        assert!(result.is_err());
        assert_eq!(session.dataset.len(), 20);
    }
}
