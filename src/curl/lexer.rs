//! Shell-style tokenization of cURL commands
//!
//! Handles single quotes, double quotes, `$'...'` ANSI-C quotes (as copied
//! from browser dev tools), backslash escapes and `\` line continuations.

use crate::errors::EngineError;

/// Split a cURL command into shell words
pub fn tokenize(cmd: &str) -> Result<Vec<String>, EngineError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // a quoted empty string ('') is still a word
    let mut has_word = false;
    let mut chars = cmd.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\n') => {}
                Some('\r') => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                }
                Some(escaped) => {
                    current.push(escaped);
                    has_word = true;
                }
                None => {}
            },
            '\'' => {
                has_word = true;
                read_single_quoted(&mut chars, &mut current)?;
            }
            '"' => {
                has_word = true;
                read_double_quoted(&mut chars, &mut current)?;
            }
            '$' if chars.peek() == Some(&'\'') => {
                chars.next();
                has_word = true;
                read_ansi_quoted(&mut chars, &mut current)?;
            }
            ' ' | '\t' | '\n' | '\r' => {
                if has_word {
                    tokens.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            _ => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if has_word {
        tokens.push(current);
    }

    Ok(tokens)
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

fn read_single_quoted(chars: &mut Chars<'_>, out: &mut String) -> Result<(), EngineError> {
    for c in chars.by_ref() {
        if c == '\'' {
            return Ok(());
        }
        out.push(c);
    }
    Err(EngineError::InvalidCommand("unterminated quote in cURL command".to_string()))
}

fn read_double_quoted(chars: &mut Chars<'_>, out: &mut String) -> Result<(), EngineError> {
    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(()),
            '\\' => match chars.next() {
                Some('\n') => {}
                Some(e @ ('"' | '\\' | '$' | '`')) => out.push(e),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => break,
            },
            _ => out.push(c),
        }
    }
    Err(EngineError::InvalidCommand("unterminated quote in cURL command".to_string()))
}

fn read_ansi_quoted(chars: &mut Chars<'_>, out: &mut String) -> Result<(), EngineError> {
    while let Some(c) = chars.next() {
        match c {
            '\'' => return Ok(()),
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('0') => out.push('\0'),
                Some('u') => {
                    let hex: String = (0..4).filter_map(|_| chars.next()).collect();
                    match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                        Some(decoded) => out.push(decoded),
                        None => {
                            out.push_str("\\u");
                            out.push_str(&hex);
                        }
                    }
                }
                Some(other) => out.push(other),
                None => break,
            },
            _ => out.push(c),
        }
    }
    Err(EngineError::InvalidCommand("unterminated quote in cURL command".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_quotes() {
        let tokens = tokenize(r#"curl -H 'Content-Type: application/json' "https://example.com""#).unwrap();
        assert_eq!(tokens, vec!["curl", "-H", "Content-Type: application/json", "https://example.com"]);
    }

    #[test]
    fn test_line_continuation() {
        let tokens = tokenize("curl \\\n  -X POST \\\r\n  https://example.com").unwrap();
        assert_eq!(tokens, vec!["curl", "-X", "POST", "https://example.com"]);
    }

    #[test]
    fn test_double_quote_escapes() {
        let tokens = tokenize(r#"curl -H "X-Quote: say \"hi\"" -d "{\"a\":\"b\\n\"}""#).unwrap();
        assert_eq!(tokens[2], r#"X-Quote: say "hi""#);
        assert_eq!(tokens[4], r#"{"a":"b\n"}"#);
    }

    #[test]
    fn test_ansi_c_quotes() {
        let tokens = tokenize(r"curl --data-raw $'line1\nit\'s'").unwrap();
        assert_eq!(tokens[2], "line1\nit's");
    }

    #[test]
    fn test_empty_quoted_word() {
        let tokens = tokenize("curl -d '' https://example.com").unwrap();
        assert_eq!(tokens, vec!["curl", "-d", "", "https://example.com"]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(tokenize("curl 'https://example.com"), Err(EngineError::InvalidCommand(_))));
    }

    #[test]
    fn test_concatenated_quotes() {
        let tokens = tokenize(r#"curl -d 'it'"'"'s'"#).unwrap();
        assert_eq!(tokens[2], "it's");
    }
}
