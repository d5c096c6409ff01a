use super::SyntaxError;

/// A lexical token with its byte position in the source.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl TokenKind {
    /// Describes the token for error messages.
    pub(super) fn describe(&self) -> String {
        match self {
            Self::Number(value) => format!("number {value}"),
            Self::Ident(name) => format!("identifier `{name}`"),
            Self::Plus => "'+'".to_owned(),
            Self::Minus => "'-'".to_owned(),
            Self::Star => "'*'".to_owned(),
            Self::Slash => "'/'".to_owned(),
            Self::Caret => "'^'".to_owned(),
            Self::LParen => "'('".to_owned(),
            Self::RParen => "')'".to_owned(),
        }
    }
}

/// Splits the source into tokens.
///
/// `**` is accepted as an alias for `^`.
pub(super) fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let (value, next) = number(source, &chars, i)?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                pos,
            });
            i = next;
            continue;
        }

        if ch.is_alphabetic() {
            let start = i;
            while i < chars.len() && (chars[i].1.is_alphanumeric() || chars[i].1 == '_') {
                i += 1;
            }
            let end = chars.get(i).map_or(source.len(), |(p, _)| *p);
            tokens.push(Token {
                kind: TokenKind::Ident(source[chars[start].0..end].to_ascii_lowercase()),
                pos,
            });
            continue;
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' if chars.get(i + 1).is_some_and(|(_, c)| *c == '*') => {
                i += 1;
                TokenKind::Caret
            }
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => return Err(SyntaxError::UnexpectedChar { ch, pos }),
        };
        tokens.push(Token { kind, pos });
        i += 1;
    }

    Ok(tokens)
}

/// Scans a number starting at `start`, returning its value and the next index.
///
/// An exponent (`e`/`E`) is only consumed when digits follow it, so `2e` lexes
/// as the number `2` followed by the constant `e`.
fn number(
    source: &str,
    chars: &[(usize, char)],
    start: usize,
) -> Result<(f64, usize), SyntaxError> {
    let digit_at = |i: usize| chars.get(i).is_some_and(|(_, c)| c.is_ascii_digit());

    let mut i = start;
    while i < chars.len() && (chars[i].1.is_ascii_digit() || chars[i].1 == '.') {
        i += 1;
    }

    if chars.get(i).is_some_and(|(_, c)| matches!(c, 'e' | 'E')) {
        let signed = chars.get(i + 1).is_some_and(|(_, c)| matches!(c, '+' | '-'));
        let first_digit = if signed { i + 2 } else { i + 1 };
        if digit_at(first_digit) {
            i = first_digit;
            while digit_at(i) {
                i += 1;
            }
        }
    }

    let pos = chars[start].0;
    let end = chars.get(i).map_or(source.len(), |(p, _)| *p);
    let text = &source[pos..end];

    text.parse::<f64>()
        .map(|value| (value, i))
        .map_err(|_| SyntaxError::InvalidNumber {
            text: text.to_owned(),
            pos,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("valid source")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn scans_operators_and_numbers() {
        assert_eq!(
            kinds("2.5*x - 1e-3"),
            vec![
                TokenKind::Number(2.5),
                TokenKind::Star,
                TokenKind::Ident("x".to_owned()),
                TokenKind::Minus,
                TokenKind::Number(1e-3),
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            kinds("x**2"),
            vec![
                TokenKind::Ident("x".to_owned()),
                TokenKind::Caret,
                TokenKind::Number(2.0),
            ]
        );
    }

    #[test]
    fn trailing_e_is_not_an_exponent() {
        assert_eq!(
            kinds("2e"),
            vec![TokenKind::Number(2.0), TokenKind::Ident("e".to_owned())]
        );
    }

    #[test]
    fn identifiers_are_lowercased() {
        assert_eq!(kinds("Sin"), vec![TokenKind::Ident("sin".to_owned())]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("x # 2"),
            Err(SyntaxError::UnexpectedChar { ch: '#', pos: 2 })
        );
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            tokenize("1.2.3"),
            Err(SyntaxError::InvalidNumber { .. })
        ));
    }
}
