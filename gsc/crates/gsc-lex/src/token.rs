//! Token definitions.
//!
//! A [`Token`] is an immutable record of a [`TokenKind`], its text and the
//! 1-based start/end position. End positions are exclusive.
//!
//! Every kind has a static symbolic name ([`TokenKind::name`]) used in
//! traces and in the `[NAME,"text"]` display form, and fixed-text kinds also
//! carry their source spelling ([`TokenKind::symbol`]).

use std::fmt;
use std::sync::LazyLock;

use gsc_util::{FxHashMap, Span};

use crate::error::LexResult;
use crate::literal::{self, NumericValue};

/// Defines `TokenKind` together with its name and symbol tables.
macro_rules! token_kinds {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $symbol:expr; )*) => {
        /// The kind of a lexical token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            $( $(#[$doc])* $variant, )*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )* ];

            /// The static symbolic name of this kind (e.g. `BSR_ASSIGN`).
            pub const fn name(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $name, )*
                }
            }

            /// The fixed source spelling, for operators, punctuation and
            /// keywords. `None` for kinds whose text varies.
            pub const fn symbol(self) -> Option<&'static str> {
                match self {
                    $( TokenKind::$variant => $symbol, )*
                }
            }
        }
    };
}

token_kinds! {
    // Single characters
    LParen => "LPAREN", Some("(");
    RParen => "RPAREN", Some(")");
    LBracket => "LBRACK", Some("[");
    RBracket => "RBRACK", Some("]");
    LBrace => "LCURLY", Some("{");
    RBrace => "RCURLY", Some("}");
    Colon => "COLON", Some(":");
    Comma => "COMMA", Some(",");
    Tilde => "BNOT", Some("~");
    Semi => "SEMI", Some(";");
    At => "AT", Some("@");

    // Four and three character operators
    BsrAssign => "BSR_ASSIGN", Some(">>>=");
    CompareTo => "COMPARE_TO", Some("<=>");
    Identical => "IDENTICAL", Some("===");
    NotIdentical => "NOT_IDENTICAL", Some("!==");
    SrAssign => "SR_ASSIGN", Some(">>=");
    Bsr => "BSR", Some(">>>");
    SlAssign => "SL_ASSIGN", Some("<<=");
    RangeExclusive => "RANGE_EXCLUSIVE", Some("..<");
    TripleDot => "TRIPLE_DOT", Some("...");
    RegexMatch => "REGEX_MATCH", Some("==~");
    StarStarAssign => "STAR_STAR_ASSIGN", Some("**=");

    // Two character operators
    Equal => "EQUAL", Some("==");
    NotEqual => "NOT_EQUAL", Some("!=");
    PlusAssign => "PLUS_ASSIGN", Some("+=");
    Inc => "INC", Some("++");
    MinusAssign => "MINUS_ASSIGN", Some("-=");
    Dec => "DEC", Some("--");
    StarAssign => "STAR_ASSIGN", Some("*=");
    ModAssign => "MOD_ASSIGN", Some("%=");
    Sr => "SR", Some(">>");
    Ge => "GE", Some(">=");
    Sl => "SL", Some("<<");
    Le => "LE", Some("<=");
    BXorAssign => "BXOR_ASSIGN", Some("^=");
    BOrAssign => "BOR_ASSIGN", Some("|=");
    LOr => "LOR", Some("||");
    BAndAssign => "BAND_ASSIGN", Some("&=");
    LAnd => "LAND", Some("&&");
    RangeInclusive => "RANGE_INCLUSIVE", Some("..");
    SpreadDot => "SPREAD_DOT", Some("*.");
    OptionalDot => "OPTIONAL_DOT", Some("?.");
    Elvis => "ELVIS_OPERATOR", Some("?:");
    MemberPointer => "MEMBER_POINTER", Some(".&");
    RegexFind => "REGEX_FIND", Some("=~");
    StarStar => "STAR_STAR", Some("**");
    ClosureArrow => "CLOSABLE_BLOCK_OP", Some("->");
    DivAssign => "DIV_ASSIGN", Some("/=");

    // One character operators
    Question => "QUESTION", Some("?");
    Dot => "DOT", Some(".");
    Assign => "ASSIGN", Some("=");
    Not => "LNOT", Some("!");
    Plus => "PLUS", Some("+");
    Minus => "MINUS", Some("-");
    Star => "STAR", Some("*");
    Mod => "MOD", Some("%");
    Gt => "GT", Some(">");
    Lt => "LT", Some("<");
    BXor => "BXOR", Some("^");
    BOr => "BOR", Some("|");
    BAnd => "BAND", Some("&");
    Div => "DIV", Some("/");

    // Numeric literals
    NumInt => "NUM_INT", None;
    NumLong => "NUM_LONG", None;
    NumBigInt => "NUM_BIG_INT", None;
    NumFloat => "NUM_FLOAT", None;
    NumDouble => "NUM_DOUBLE", None;
    NumBigDecimal => "NUM_BIG_DECIMAL", None;

    // String and regex literals, whole or in interpolation fragments
    StringLiteral => "STRING_LITERAL", None;
    StringStart => "STRING_CTOR_START", None;
    StringMiddle => "STRING_CTOR_MIDDLE", None;
    StringEnd => "STRING_CTOR_END", None;
    RegexLiteral => "REGEXP_LITERAL", None;
    RegexStart => "REGEXP_CTOR_START", None;
    RegexMiddle => "REGEXP_CTOR_MIDDLE", None;
    RegexEnd => "REGEXP_CTOR_END", None;
    DollarRegexLiteral => "DOLLAR_REGEXP_LITERAL", None;
    DollarRegexStart => "DOLLAR_REGEXP_CTOR_START", None;
    DollarRegexMiddle => "DOLLAR_REGEXP_CTOR_MIDDLE", None;
    DollarRegexEnd => "DOLLAR_REGEXP_CTOR_END", None;

    Identifier => "IDENT", None;

    // Keywords
    Abstract => "LITERAL_abstract", Some("abstract");
    As => "LITERAL_as", Some("as");
    Assert => "LITERAL_assert", Some("assert");
    Boolean => "LITERAL_boolean", Some("boolean");
    Break => "LITERAL_break", Some("break");
    Byte => "LITERAL_byte", Some("byte");
    Case => "LITERAL_case", Some("case");
    Catch => "LITERAL_catch", Some("catch");
    Char => "LITERAL_char", Some("char");
    Class => "LITERAL_class", Some("class");
    Const => "LITERAL_const", Some("const");
    Continue => "LITERAL_continue", Some("continue");
    Def => "LITERAL_def", Some("def");
    Default => "LITERAL_default", Some("default");
    Do => "LITERAL_do", Some("do");
    Double => "LITERAL_double", Some("double");
    Else => "LITERAL_else", Some("else");
    Enum => "LITERAL_enum", Some("enum");
    Extends => "LITERAL_extends", Some("extends");
    False => "LITERAL_false", Some("false");
    Final => "LITERAL_final", Some("final");
    Finally => "LITERAL_finally", Some("finally");
    Float => "LITERAL_float", Some("float");
    For => "LITERAL_for", Some("for");
    Goto => "LITERAL_goto", Some("goto");
    If => "LITERAL_if", Some("if");
    Implements => "LITERAL_implements", Some("implements");
    Import => "LITERAL_import", Some("import");
    In => "LITERAL_in", Some("in");
    Instanceof => "LITERAL_instanceof", Some("instanceof");
    Int => "LITERAL_int", Some("int");
    Interface => "LITERAL_interface", Some("interface");
    Long => "LITERAL_long", Some("long");
    Native => "LITERAL_native", Some("native");
    New => "LITERAL_new", Some("new");
    Null => "LITERAL_null", Some("null");
    Package => "LITERAL_package", Some("package");
    Private => "LITERAL_private", Some("private");
    Protected => "LITERAL_protected", Some("protected");
    Public => "LITERAL_public", Some("public");
    Return => "LITERAL_return", Some("return");
    Short => "LITERAL_short", Some("short");
    Static => "LITERAL_static", Some("static");
    Strictfp => "LITERAL_strictfp", Some("strictfp");
    Super => "LITERAL_super", Some("super");
    Switch => "LITERAL_switch", Some("switch");
    Synchronized => "LITERAL_synchronized", Some("synchronized");
    This => "LITERAL_this", Some("this");
    Threadsafe => "LITERAL_threadsafe", Some("threadsafe");
    Throw => "LITERAL_throw", Some("throw");
    Throws => "LITERAL_throws", Some("throws");
    Transient => "LITERAL_transient", Some("transient");
    True => "LITERAL_true", Some("true");
    Try => "LITERAL_try", Some("try");
    Void => "LITERAL_void", Some("void");
    Volatile => "LITERAL_volatile", Some("volatile");
    While => "LITERAL_while", Some("while");

    // Whitespace and comments
    Whitespace => "WS", None;
    Newline => "NLS", None;
    LineComment => "SL_COMMENT", None;
    BlockComment => "ML_COMMENT", None;
    ShebangComment => "SH_COMMENT", None;

    EndOfInput => "EOF", None;
}

/// Keyword spelling to kind, case-sensitive.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::ALL
        .iter()
        .filter(|kind| kind.is_keyword())
        .filter_map(|&kind| kind.symbol().map(|text| (text, kind)))
        .collect()
});

/// Looks `ident` up in the keyword table.
///
/// # Example
///
/// ```
/// use gsc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("def"), Some(TokenKind::Def));
/// assert_eq!(keyword_from_ident("Def"), None);
/// assert_eq!(keyword_from_ident("println"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::Abstract && self <= TokenKind::While
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::NumInt
                | TokenKind::NumLong
                | TokenKind::NumBigInt
                | TokenKind::NumFloat
                | TokenKind::NumDouble
                | TokenKind::NumBigDecimal
        )
    }

    /// Whitespace, newline and comment kinds.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::ShebangComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::BlockComment | TokenKind::ShebangComment
        )
    }

    /// Kinds that end an operand. A `/` right after one of these is
    /// division; anywhere else it opens a regex.
    pub fn is_expression_ending(self) -> bool {
        use TokenKind::*;
        match self {
            Inc | Dec | RParen | RBracket | RBrace => true,
            StringLiteral | StringEnd | RegexLiteral | RegexEnd | DollarRegexLiteral
            | DollarRegexEnd => true,
            Identifier => true,
            Abstract | Const | Do | Final | Goto | Strictfp => false,
            kind => kind.is_numeric() || kind.is_keyword(),
        }
    }

    /// Start, middle or end fragment of an interpolated literal.
    pub fn is_literal_fragment(self) -> bool {
        matches!(
            self,
            TokenKind::StringStart
                | TokenKind::StringMiddle
                | TokenKind::StringEnd
                | TokenKind::RegexStart
                | TokenKind::RegexMiddle
                | TokenKind::RegexEnd
                | TokenKind::DollarRegexStart
                | TokenKind::DollarRegexMiddle
                | TokenKind::DollarRegexEnd
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token.
///
/// Operators, identifiers, keywords and numbers carry their raw source
/// text. String and regex tokens carry the decoded body without
/// delimiters. A forced line break carries `<newline>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// Text of a forced line break.
    pub const NEWLINE_TEXT: &'static str = "<newline>";

    /// Creates a token covering `span`.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the token and returns its text.
    pub fn into_text(self) -> String {
        self.text
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn start_line(&self) -> u32 {
        self.span.line
    }

    #[inline]
    pub fn start_col(&self) -> u32 {
        self.span.column
    }

    #[inline]
    pub fn end_line(&self) -> u32 {
        self.span.end_line
    }

    #[inline]
    pub fn end_col(&self) -> u32 {
        self.span.end_column
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Decodes a numeric token into its value.
    ///
    /// Returns `None` for non-numeric tokens, and a malformed-literal error
    /// at the token position when an explicitly suffixed value overflows
    /// its type.
    ///
    /// # Example
    ///
    /// ```
    /// use gsc_lex::literal::NumericValue;
    ///
    /// let tokens = gsc_lex::tokenize("1_000_000").unwrap();
    /// let value = tokens[0].numeric_value().unwrap().unwrap();
    /// assert_eq!(value, NumericValue::Int(1_000_000));
    /// ```
    pub fn numeric_value(&self) -> Option<LexResult<NumericValue>> {
        if !self.kind.is_numeric() {
            return None;
        }
        Some(literal::parse_numeric(self.kind, &self.text, self.span))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},\"{}\"]", self.kind.name(), self.text)
    }
}
