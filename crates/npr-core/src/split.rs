//! Splitting a free-text argument string into tokens.

use npr_util::errors::NprError;

const QUOTES: [char; 3] = ['"', '\'', '`'];

fn is_quote(c: char) -> bool {
    QUOTES.contains(&c)
}

/// Split `input` on whitespace outside quoted spans.
///
/// A span opens at any of `"`, `'` or `` ` `` and closes at the next of any
/// of the three, so in `"it's"` the apostrophe closes the span and the final
/// `"` is left unmatched. Leading and
/// trailing quote characters are stripped from each token; quotes inside a
/// token are kept.
pub fn split_arguments(input: &str) -> Result<Vec<String>, NprError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut open_quote: Option<char> = None;

    for c in input.chars() {
        match open_quote {
            Some(_) => {
                current.push(c);
                if is_quote(c) {
                    open_quote = None;
                }
            }
            None if is_quote(c) => {
                open_quote = Some(c);
                current.push(c);
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(strip_quotes(&current));
                    current.clear();
                }
            }
            None => current.push(c),
        }
    }

    if let Some(quote) = open_quote {
        return Err(NprError::UnmatchedQuote { quote });
    }
    if !current.is_empty() {
        tokens.push(strip_quotes(&current));
    }
    Ok(tokens)
}

fn strip_quotes(token: &str) -> String {
    token.trim_matches(is_quote).to_string()
}
