//! Prompt loops for the interactive session.
//!
//! Each prompt is a small state machine: print the message, read a line,
//! then Accept, Retry with a specific message, or Exit. The sentinel `exit`
//! (or the short form `e`) and end-of-input both end the session.

use std::io::{self, BufRead, Write};

/// Result of a prompt: either a validated value or the user leaving.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Accepted(T),
    Exit,
}

/// Read one trimmed line, `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("e")
}

/// Ask `message` until `parse` accepts the answer, printing `retry` after
/// each rejected one. The exit sentinel wins over parsing, so a session can
/// always be left from any prompt.
pub fn prompt<T>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> io::Result<Outcome<T>> {
    loop {
        writeln!(out, "{message}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(Outcome::Exit);
        };
        if is_exit(&line) {
            return Ok(Outcome::Exit);
        }
        match parse(&line) {
            Some(value) => return Ok(Outcome::Accepted(value)),
            None => writeln!(out, "{retry}")?,
        }
    }
}

/// Yes/no question; only the exact affirmative `yes` (any case) counts.
/// End of input reads as "no".
pub fn ask_yes(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> io::Result<bool> {
    writeln!(out, "{message}")?;
    out.flush()?;
    match read_line(input)? {
        Some(line) => Ok(line.eq_ignore_ascii_case("yes")),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_prompt(input_text: &str) -> (Outcome<u32>, String) {
        let mut input = Cursor::new(input_text.to_string());
        let mut out = Vec::new();
        let outcome = prompt(&mut input, &mut out, "Pick a number -", "Invalid, try again.", |s| {
            s.parse::<u32>().ok().filter(|n| *n <= 6)
        })
        .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_valid_input_first_try() {
        let (outcome, out) = run_prompt("3\n");
        assert_eq!(outcome, Outcome::Accepted(3));
        assert!(!out.contains("Invalid"));
    }

    #[test]
    fn retries_until_valid() {
        let (outcome, out) = run_prompt("banana\n9\n4\n");
        assert_eq!(outcome, Outcome::Accepted(4));
        assert_eq!(out.matches("Invalid, try again.").count(), 2);
        assert_eq!(out.matches("Pick a number -").count(), 3);
    }

    #[test]
    fn exit_sentinel_wins_over_parsing() {
        let (outcome, _) = run_prompt("exit\n");
        assert_eq!(outcome, Outcome::Exit);
        let (outcome, _) = run_prompt("EXIT\n");
        assert_eq!(outcome, Outcome::Exit);
        let (outcome, _) = run_prompt("e\n");
        assert_eq!(outcome, Outcome::Exit);
    }

    #[test]
    fn end_of_input_is_exit() {
        let (outcome, _) = run_prompt("");
        assert_eq!(outcome, Outcome::Exit);
    }

    #[test]
    fn only_exact_yes_is_affirmative() {
        for (answer, expected) in [
            ("yes\n", true),
            ("YES\n", true),
            ("y\n", false),
            ("no\n", false),
            ("yes please\n", false),
            ("", false),
        ] {
            let mut input = Cursor::new(answer.to_string());
            let mut out = Vec::new();
            assert_eq!(
                ask_yes(&mut input, &mut out, "Continue?").unwrap(),
                expected,
                "answer {answer:?}"
            );
        }
    }
}
