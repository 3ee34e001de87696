use crate::{
    error::{Error, Result},
    token::{Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

// Lookup is case-sensitive: only the exact spelling `NULL` is the null
// keyword, and variants like `AND` scan as plain identifiers.
static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "or" => TokenKind::Or,
    "true" => TokenKind::True,
    "false" => TokenKind::False,
    "if" => TokenKind::If,
    "else" => TokenKind::Else,
    "funct" => TokenKind::Funct,
    "class" => TokenKind::Class,
    "while" => TokenKind::While,
    "for" => TokenKind::For,
    "this" => TokenKind::This,
    "super" => TokenKind::Super,
    "return" => TokenKind::Return,
    "var" => TokenKind::Var,
    "NULL" => TokenKind::Null,
    "print" => TokenKind::Print,
};

/// Single-pass scanner over one source string. At most two characters of
/// lookahead; lines are counted from 1 as each `\n` is consumed.
///
/// The `Iterator` impl streams `Result<Token>`: malformed constructs come
/// out as `Err` items and scanning continues past them. The stream carries
/// no end-of-input marker; [`Scanner::scan_tokens`] appends it.
pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        let kind = self.next_token_kind();

        let lexeme = self.lexeme_buffer.clone();
        self.lexeme_buffer.clear();

        kind.map(|kind|
            kind.map(|kind| Token {
                kind,
                lexeme,
                line: self.line,
            })
        ).or_else(|| self.next())
    }
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
        }
    }

    /// Scans the whole source, splitting tokens from diagnostics, and
    /// appends exactly one `EndOfFile` token carrying the final line count.
    /// Never fails: malformed input lands in the diagnostic list and the
    /// token sequence stays usable.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<Error>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for result in &mut self {
            match result {
                Ok(token) => tokens.push(token),
                Err(error) => errors.push(error),
            }
        }
        tokens.push(Token {
            kind: TokenKind::EndOfFile,
            lexeme: String::new(),
            line: self.line,
        });
        (tokens, errors)
    }

    // `None` here means "consumed input but produced no token" (whitespace,
    // comments) as well as actual end of input; the Iterator impl retries
    // until one or the other resolves.
    fn next_token_kind(&mut self) -> Option<Result<TokenKind>> {
        let next_char = self.src.next()?;
        self.lexeme_buffer.push(next_char);

        use TokenKind::*;
        match next_char {
            '(' => Some(Ok(LeftParen)),
            ')' => Some(Ok(RightParen)),
            '{' => Some(Ok(LeftBrace)),
            '}' => Some(Ok(RightBrace)),
            ',' => Some(Ok(Comma)),
            '.' => Some(Ok(Dot)),
            '-' => Some(Ok(Minus)),
            '+' => Some(Ok(Plus)),
            ';' => Some(Ok(Semicolon)),
            '*' => Some(Ok(Star)),
            '!' => Some(Ok(if self.does_next_match('=') { BangEqual } else { Bang })),
            '=' => Some(Ok(if self.does_next_match('=') { EqualEqual } else { Equal })),
            '<' => Some(Ok(if self.does_next_match('=') { LessEqual } else { Less })),
            '>' => Some(Ok(if self.does_next_match('=') { GreaterEqual } else { Greater })),
            '/' => {
                if self.does_next_match('/') {
                    self.advance_until_match('\n');
                    None
                } else if self.does_next_match('*') {
                    self.skip_block_comment();
                    None
                } else {
                    Some(Ok(Slash))
                }
            },
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            '"' => Some(self.extract_string()),
            c if c.is_digit(10) => Some(Ok(self.extract_number())),
            c if can_start_identifier(&c) => Some(Ok(self.extract_identifier())),
            c => Some(Err(Error::unexpected_character(self.line, c))),
        }
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.src.peek() {
            Some(next) if c == *next => {
                self.lexeme_buffer.push(self.src.next().unwrap());
                true
            }
            _ => false,
        }
    }

    // A comment left open at end of input absorbs the rest of the source
    // without a diagnostic, matching the language's original behavior.
    fn skip_block_comment(&mut self) {
        while let Some(c) = self.src.next() {
            match c {
                '\n' => self.line += 1,
                '*' if self.src.peek() == Some(&'/') => {
                    self.src.next();
                    return;
                }
                _ => {}
            }
        }
    }

    fn extract_string(&mut self) -> Result<TokenKind> {
        let mut newline_count = 0;
        self.advance_until_for_each(
            |n| n == &'"',
            |c| if c == '\n' { newline_count += 1 },
        );
        self.line += newline_count;
        match self.src.next() {
            None => Err(Error::unterminated_string(self.line)),
            Some(quote) => {
                self.lexeme_buffer.push(quote);
                // Everything strictly between the quotes, backslashes and
                // newlines included; no escape processing.
                let contents = &self.lexeme_buffer[1..self.lexeme_buffer.len() - 1];
                Ok(TokenKind::String(contents.to_string()))
            },
        }
    }

    fn extract_number(&mut self) -> TokenKind {
        self.advance_until(|n| !n.is_digit(10));

        // A dot counts as a fraction only when a digit follows; a trailing
        // dot is left unconsumed for the next iteration to scan as Dot.
        if let Some(&'.') = self.src.peek() {
            if let Some(maybe_digit) = self.src.peek_next() {
                if maybe_digit.is_digit(10) {
                    self.lexeme_buffer.push(self.src.next().unwrap());
                    self.advance_until(|n| !n.is_digit(10));
                }
            }
        }

        // The buffer holds only digits with at most one interior dot, which
        // always parses.
        TokenKind::Number(self.lexeme_buffer.parse().unwrap())
    }

    fn extract_identifier(&mut self) -> TokenKind {
        self.advance_until(|n| !is_part_of_valid_identifier(n));

        let text = self.lexeme_buffer.as_str();
        match KEYWORDS.get(text) {
            Some(keyword) => keyword.clone(),
            None => TokenKind::Identifier,
        }
    }

    fn advance_until_match(&mut self, c: char) {
        self.advance_until(|n| n == &c)
    }

    fn advance_until(&mut self, should_stop: impl Fn(&char) -> bool) {
        self.advance_until_for_each(should_stop, |_| {})
    }

    fn advance_until_for_each(
        &mut self,
        should_stop: impl Fn(&char) -> bool,
        mut f: impl FnMut(char),
    ) {
        let is_done = |nxt: Option<&char>| nxt.map_or(true, &should_stop);
        while !is_done(self.src.peek()) {
            let next = self.src.next().unwrap();
            self.lexeme_buffer.push(next);
            f(next);
        }
    }
}

fn can_start_identifier(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    can_start_identifier(c) || c.is_digit(10)
}
