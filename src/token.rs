/// A classified fragment of source text, the atomic unit handed to a parser.
///
/// `lexeme` is the exact source substring that produced the token (empty for
/// `EndOfFile`). `line` is 1-based; for tokens that span lines (multi-line
/// strings) it is the line where scanning of the token ended.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

/// The closed set of Nocturn lexical categories. Literal values live in the
/// payload: `String` holds the unescaped text between the quotes, `Number`
/// the parsed 64-bit float. Adding a kind means extending the scanner's
/// dispatch to match.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String(String), Number(f64),

    And, Or, True, False, If, Else, Funct, Class,
    While, For, This, Super, Return, Var, Null, Print,

    EndOfFile,
}
