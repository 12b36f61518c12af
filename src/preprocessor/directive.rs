use logos::Logos;

use crate::preprocessor::symbols::SymbolTable;

/// Directive keywords recognised at the start of a trimmed line.
///
/// Keywords that take an argument include their separating space, so `#ifFOO`
/// or `#elif` on its own never lex as a keyword. Anything the lexer rejects is
/// an invalid directive.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Keyword {
    /// `#if `
    #[token("#if ")]
    If,
    /// `#elif `
    #[token("#elif ")]
    ElseIf,
    /// `#else`
    #[token("#else")]
    Else,
    /// `#endif`
    #[token("#endif")]
    EndIf,
    /// `#error`
    #[token("#error")]
    Error,
    /// Directives that are kept in the output untouched.
    #[token("#warning")]
    #[token("#line")]
    #[token("#region")]
    #[token("#endregion")]
    #[token("#pragma ")]
    Passthrough,
    /// `#define `
    #[token("#define ")]
    Define,
    /// `#undef `
    #[token("#undef ")]
    Undefine,
}

/// The condition of an `#if` or `#elif` directive.
///
/// Only two forms exist: `SYMBOL`, which holds when the symbol is defined, and
/// `!SYMBOL`, which holds when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition<'a> {
    /// `true` for the `!SYMBOL` form.
    pub negated: bool,
    /// The symbol being tested. Empty when the directive named none.
    pub symbol:  &'a str,
}

impl<'a> Condition<'a> {
    /// Parses the text following `#if ` or `#elif `.
    ///
    /// Everything after the first `!` is the symbol of a negated condition;
    /// without a `!` the whole text is the symbol. Surrounding whitespace is
    /// removed in both cases.
    ///
    /// # Example
    /// ```
    /// use sourcejoin::preprocessor::directive::Condition;
    ///
    /// let condition = Condition::parse("  ! DEBUG ");
    /// assert!(condition.negated);
    /// assert_eq!(condition.symbol, "DEBUG");
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        match text.find('!') {
            Some(index) => Self { negated: true,
                                  symbol:  text[index + 1..].trim(), },
            None => Self { negated: false,
                           symbol:  text.trim(), },
        }
    }

    /// A condition without a symbol cannot be evaluated.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.symbol.is_empty()
    }

    /// Evaluates the condition against the active symbols.
    #[must_use]
    pub fn holds(&self, symbols: &SymbolTable) -> bool {
        symbols.is_defined(self.symbol) != self.negated
    }
}

/// The classification of a single source line.
///
/// Borrowed slices point into the classified line, so classifying never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// An ordinary line, carried unchanged.
    PlainLine(&'a str),
    /// `#if [!]SYMBOL`
    If(Condition<'a>),
    /// `#elif [!]SYMBOL`
    ElseIf(Condition<'a>),
    /// `#else`
    Else,
    /// `#endif`
    EndIf,
    /// `#error [message]`
    Error(&'a str),
    /// `#define SYMBOL`
    Define(&'a str),
    /// `#undef SYMBOL`
    Undefine(&'a str),
    /// `#warning`, `#line`, `#region`, `#endregion` and `#pragma`. The full
    /// source line is carried so it can be emitted as-is.
    Passthrough(&'a str),
    /// A line starting with `#` that matches no known directive.
    Invalid(&'a str),
}

impl Directive<'_> {
    /// Returns `true` when the directive can never be evaluated: an unknown
    /// `#` line, or an `#if`/`#elif` without a symbol.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        match self {
            Self::Invalid(_) => true,
            Self::If(condition) | Self::ElseIf(condition) => !condition.is_valid(),
            _ => false,
        }
    }
}

/// Classifies one line of source text.
///
/// Classification looks at this line only. Leading whitespace is ignored, and
/// so is trailing whitespace after a directive. The rules, in order:
///
/// - blank lines and lines not starting with `#` are plain lines;
/// - `#if ` and `#elif ` are followed by a condition;
/// - `#else` must stand alone;
/// - `#endif`, `#error`, and the passthrough keywords match as prefixes;
/// - `#define ` and `#undef ` take the rest of the line as the symbol;
/// - every other `#` line is invalid.
///
/// # Example
/// ```
/// use sourcejoin::preprocessor::directive::{Condition, Directive, classify};
///
/// assert_eq!(classify("  #if !DEBUG"),
///            Directive::If(Condition { negated: true,
///                                      symbol:  "DEBUG", }));
/// assert_eq!(classify("#else\t"), Directive::Else);
/// assert_eq!(classify("#elifDEBUG"), Directive::Invalid("#elifDEBUG"));
/// assert_eq!(classify("int x;"), Directive::PlainLine("int x;"));
/// ```
#[must_use]
pub fn classify(line: &str) -> Directive<'_> {
    let trimmed = line.trim();
    if !trimmed.starts_with('#') {
        return Directive::PlainLine(line);
    }

    let mut lexer = Keyword::lexer(trimmed);
    let Some(Ok(keyword)) = lexer.next() else {
        return Directive::Invalid(trimmed);
    };
    let rest = lexer.remainder();

    match keyword {
        Keyword::If => Directive::If(Condition::parse(rest)),
        Keyword::ElseIf => Directive::ElseIf(Condition::parse(rest)),
        Keyword::Else if rest.is_empty() => Directive::Else,
        Keyword::Else => Directive::Invalid(trimmed),
        Keyword::EndIf => Directive::EndIf,
        Keyword::Error => Directive::Error(error_message(rest)),
        Keyword::Passthrough => Directive::Passthrough(line),
        Keyword::Define => Directive::Define(rest.trim()),
        Keyword::Undefine => Directive::Undefine(rest.trim()),
    }
}

/// The message of an `#error` directive starts after one separator character.
fn error_message(rest: &str) -> &str {
    let mut chars = rest.chars();
    chars.next();
    chars.as_str()
}
