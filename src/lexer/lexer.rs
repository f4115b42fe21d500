use crate::errors::errors::Error;

use super::scanner::{ScanError, ScanResult, Scanner};
use super::tokens::{id_of, Token, KEYWORD_MUNCH, OPERATOR_MUNCH, SYMBOL_MUNCH};

type Recogniser = fn(&mut Scanner) -> ScanResult<Token>;

/// Trial order matters: literal-shaped tokens before reserved words, reserved
/// words before identifiers, and the one-character unknown fallback last so
/// every character is accounted for.
const RECOGNISERS: &[Recogniser] = &[
    number, string, keyword, comment, operator, symbol, identifier, unknown,
];

/// Tries the alternatives left to right. An alternative that fails without
/// consuming input yields to the next one; a failure that consumed input has
/// committed and aborts the whole scan.
fn one_of(sc: &mut Scanner, alternatives: &[Recogniser]) -> ScanResult<Token> {
    for alternative in alternatives {
        let before = sc.offset();
        match alternative(sc) {
            Ok(token) => return Ok(token),
            Err(_) if sc.offset() == before => continue,
            Err(err) => return Err(err),
        }
    }
    Err(ScanError)
}

fn token(sc: &mut Scanner) -> ScanResult<Token> {
    one_of(sc, RECOGNISERS)
}

fn number(sc: &mut Scanner) -> ScanResult<Token> {
    sc.backtrack(|sc| {
        let start = sc.offset();
        sc.chomp_if(|c| c.is_ascii_digit())?;
        sc.chomp_while(|c| c.is_ascii_digit());

        // Radix literals are not part of the language.
        if sc.chomped_since(start) == "0" {
            if let Some('x' | 'o' | 'b') = sc.peek() {
                return Err(ScanError);
            }
        }

        if sc.peek() == Some('.') && matches!(sc.peek_at(1), Some(c) if c.is_ascii_digit()) {
            sc.chomp_if(|c| c == '.')?;
            sc.chomp_while(|c| c.is_ascii_digit());
        }

        let value = sc
            .chomped_since(start)
            .parse::<f64>()
            .map_err(|_| ScanError)?;
        Ok(Token::Number(value))
    })
}

fn string(sc: &mut Scanner) -> ScanResult<Token> {
    sc.literal("\"")?;
    let mut contents = String::new();
    loop {
        match sc.advance() {
            Some('"') => return Ok(Token::Str(contents)),
            Some('\\') => match sc.advance() {
                Some('n') => contents.push('\n'),
                Some('t') => contents.push('\t'),
                Some('r') => contents.push('\r'),
                // Any other escape is invalid, as is a trailing backslash.
                _ => return Err(ScanError),
            },
            Some(c) => contents.push(c),
            None => return Err(ScanError),
        }
    }
}

fn keyword(sc: &mut Scanner) -> ScanResult<Token> {
    for (lexeme, kw) in KEYWORD_MUNCH.iter() {
        let matched = sc.backtrack(|sc| {
            sc.literal(lexeme)?;
            // A reserved word only matches at a word boundary.
            match sc.peek() {
                Some(c) if c.is_ascii_alphanumeric() || c == '_' => Err(ScanError),
                _ => Ok(()),
            }
        });
        if matched.is_ok() {
            return Ok(Token::Keyword(*kw));
        }
    }
    Err(ScanError)
}

fn comment(sc: &mut Scanner) -> ScanResult<Token> {
    let start = sc.offset();
    sc.literal("//")?;
    sc.chomp_until_end_or("\n");
    Ok(Token::Comment(sc.chomped_since(start).to_string()))
}

fn operator(sc: &mut Scanner) -> ScanResult<Token> {
    for (lexeme, op) in OPERATOR_MUNCH.iter() {
        if sc.literal(lexeme).is_ok() {
            return Ok(Token::Operator(*op));
        }
    }
    Err(ScanError)
}

fn symbol(sc: &mut Scanner) -> ScanResult<Token> {
    for (lexeme, sym) in SYMBOL_MUNCH.iter() {
        if sc.literal(lexeme).is_ok() {
            return Ok(Token::Symbol(*sym));
        }
    }
    Err(ScanError)
}

fn identifier(sc: &mut Scanner) -> ScanResult<Token> {
    sc.backtrack(|sc| {
        let start = sc.offset();
        match sc.peek() {
            Some('#') | Some('@') => {
                sc.advance();
                sc.chomp_if(|c| c.is_ascii_lowercase())?;
                sc.chomp_while(is_lower_name_char);
            }
            Some(c) if c.is_ascii_uppercase() => {
                sc.advance();
                sc.chomp_while(is_upper_name_char);
            }
            Some(c) if c.is_ascii_lowercase() => {
                sc.advance();
                sc.chomp_while(is_lower_name_char);
            }
            _ => return Err(ScanError),
        }
        match id_of(sc.chomped_since(start)) {
            Some(id) => Ok(Token::Identifier(id)),
            None => Err(ScanError),
        }
    })
}

fn is_lower_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

fn is_upper_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Last resort: takes exactly one character. Never fails while input
/// remains, which is what guarantees the scan makes progress.
fn unknown(sc: &mut Scanner) -> ScanResult<Token> {
    match sc.advance() {
        Some(c) => Ok(Token::Unknown(c.to_string())),
        None => Err(ScanError),
    }
}

/// Scans the whole source into a flat token stream, discarding whitespace.
/// The stream still contains adjacent comment and unknown tokens; see
/// [`coalesce`].
pub fn scan(source: &str) -> ScanResult<Vec<Token>> {
    let mut sc = Scanner::new(source);
    let mut tokens = Vec::new();

    sc.spaces();
    while !sc.at_end() {
        tokens.push(token(&mut sc)?);
        sc.spaces();
    }

    Ok(tokens)
}

/// Merges maximal runs of adjacent comments (joined with a newline, restoring
/// the line break between consecutive `//` lines) and of adjacent unknown
/// characters (concatenated). All other tokens pass through in order.
pub fn coalesce(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        let merged = match (out.last_mut(), &tok) {
            (Some(Token::Comment(earlier)), Token::Comment(later)) => {
                earlier.push('\n');
                earlier.push_str(later);
                true
            }
            (Some(Token::Unknown(earlier)), Token::Unknown(later)) => {
                earlier.push_str(later);
                true
            }
            _ => false,
        };
        if !merged {
            out.push(tok);
        }
    }

    out
}

/// Lexes a source file into its coalesced token stream. Failure is opaque:
/// the only failing inputs are malformed string literals.
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    let tokens = scan(source).map_err(|_| Error::LexFailed)?;
    Ok(coalesce(tokens))
}
