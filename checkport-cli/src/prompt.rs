//! Interactive confirmation.

use std::io::{self, BufRead, Write};

/// Question printed before an interactive export.
pub const CONFIRM_QUESTION: &str = "Do you want to proceed with the export? (y/N)";

/// Asks for confirmation. Only `y` or `yes` (any case) proceeds.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{CONFIRM_QUESTION} ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str) -> (bool, String) {
        let mut output = Vec::new();
        let confirmed = confirm(&mut text.as_bytes(), &mut output).unwrap();
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        for text in ["y\n", "Y\n", "yes\n", "  YES  \n"] {
            assert!(answer(text).0, "failed for {text:?}");
        }
    }

    #[test]
    fn test_everything_else_cancels() {
        for text in ["\n", "n\n", "no\n", "sure\n", ""] {
            assert!(!answer(text).0, "failed for {text:?}");
        }
    }

    #[test]
    fn test_prints_question() {
        let (_, printed) = answer("n\n");
        assert_eq!(printed, format!("{CONFIRM_QUESTION} "));
    }
}
