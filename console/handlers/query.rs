use std::io::Write;

use anyhow::Result;

use crate::state::Session;
use crate::util::prompt::Terminal;

/// Prompts for every feature by name and prints the predicted class.
pub fn handle_query(session: &mut Session, term: &mut Terminal) -> Result<()> {
    writeln!(term.output, "Input Features")?;

    let mut inputs = Vec::with_capacity(session.config.metadata.feature_count());
    for feature in &session.config.metadata.feature_names {
        let value: f64 = term.ask(&format!("{feature}: "))?;
        inputs.push(value);
    }

    let class = session.network.predict(&inputs)?;
    let name = session.config.metadata.class_name(class).unwrap_or("<unnamed class>");
    writeln!(term.output, "{name}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::toy_session;

    #[test]
    fn prompts_every_feature_and_names_class() {
        let mut session = toy_session();
        let expected = session.network.predict(&[0.5, -2.0]).unwrap();
        let expected_name = session.config.metadata.class_names[expected].clone();

        let mut input = "0.5\n-2\n".as_bytes();
        let mut output = Vec::new();
        handle_query(&mut session, &mut Terminal::new(&mut input, &mut output)).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("x: y: "));
        assert!(text.trim_end().ends_with(&expected_name));
    }

    #[test]
    fn non_numeric_feature_is_an_error() {
        let mut session = toy_session();
        let mut input = "0.5\nwide\n".as_bytes();
        let mut output = Vec::new();
        let err = handle_query(&mut session, &mut Terminal::new(&mut input, &mut output)).unwrap_err();
        assert!(err.to_string().contains("'wide'"));
    }
}
