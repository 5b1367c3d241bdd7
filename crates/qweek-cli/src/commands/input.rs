//! Parsing of the in-game commands.

/// A command on the round-1 screen. Indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round1Command {
    Choose { prompt: usize, value: String },
    Clear(usize),
    Submit,
}

/// A command on the round-2 screen. Indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round2Command {
    SelectPrompt(usize),
    ClickAnswer(usize),
    Connect { prompt: usize, answer: usize },
    Cancel,
    Submit,
}

fn is_submit(line: &str) -> bool {
    matches!(line, "enviar" | "send" | "ok")
}

fn parse_index(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().filter(|n| *n > 0).map(|n| n - 1)
}

fn parse_letter(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
        }
        _ => None,
    }
}

/// `3 12` chooses `12` for prompt 3; `borrar 3` clears it.
pub fn parse_round1(line: &str) -> Option<Round1Command> {
    let line = line.trim().to_lowercase();
    if is_submit(&line) {
        return Some(Round1Command::Submit);
    }

    let mut parts = line.split_whitespace();
    let first = parts.next()?;
    let second = parts.next();
    if parts.next().is_some() {
        return None;
    }

    match (first, second) {
        ("borrar" | "clear", Some(n)) => parse_index(n).map(Round1Command::Clear),
        (n, Some(value)) => Some(Round1Command::Choose {
            prompt: parse_index(n)?,
            value: value.to_string(),
        }),
        _ => None,
    }
}

/// `2` selects prompt 2, `c` clicks answer C, `2c` or `2 c` does both.
pub fn parse_round2(line: &str) -> Option<Round2Command> {
    let line: String = line.trim().to_lowercase().split_whitespace().collect();
    if is_submit(&line) {
        return Some(Round2Command::Submit);
    }
    if matches!(line.as_str(), "cancelar" | "cancel" | "x") {
        return Some(Round2Command::Cancel);
    }

    let digits: String = line.chars().take_while(char::is_ascii_digit).collect();
    let rest = &line[digits.len()..];

    match (digits.is_empty(), rest.is_empty()) {
        (false, true) => parse_index(&digits).map(Round2Command::SelectPrompt),
        (true, false) => parse_letter(rest).map(Round2Command::ClickAnswer),
        (false, false) => Some(Round2Command::Connect {
            prompt: parse_index(&digits)?,
            answer: parse_letter(rest)?,
        }),
        (true, true) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round1() {
        assert_eq!(
            parse_round1("2 3"),
            Some(Round1Command::Choose {
                prompt: 1,
                value: "3".to_string()
            })
        );
        assert_eq!(parse_round1("borrar 1"), Some(Round1Command::Clear(0)));
        assert_eq!(parse_round1(" Enviar "), Some(Round1Command::Submit));
        assert_eq!(parse_round1("0 3"), None);
        assert_eq!(parse_round1("2"), None);
        assert_eq!(parse_round1("1 2 3"), None);
    }

    #[test]
    fn test_parse_round2() {
        assert_eq!(parse_round2("3"), Some(Round2Command::SelectPrompt(2)));
        assert_eq!(parse_round2("B"), Some(Round2Command::ClickAnswer(1)));
        assert_eq!(
            parse_round2("1c"),
            Some(Round2Command::Connect { prompt: 0, answer: 2 })
        );
        assert_eq!(
            parse_round2("1 c"),
            Some(Round2Command::Connect { prompt: 0, answer: 2 })
        );
        assert_eq!(parse_round2("cancelar"), Some(Round2Command::Cancel));
        assert_eq!(parse_round2("enviar"), Some(Round2Command::Submit));
        assert_eq!(parse_round2("1cc"), None);
        assert_eq!(parse_round2(""), None);
        assert_eq!(parse_round2("?"), None);
    }
}
