use crate::preprocessor::{
    evaluator::{Evaluator, Options},
    symbols::SymbolTable,
};

/// Line classification.
///
/// Turns a single line into a [`directive::Directive`] without looking at any
/// other line. This is the only place that knows the directive syntax.
pub mod directive;
/// The conditional compilation state machine.
///
/// Consumes classified lines in order, tracks nested `#if` blocks on an
/// explicit stack, and yields the lines that survive.
pub mod evaluator;
/// Defined symbols.
///
/// Holds the symbols that `#if` conditions are tested against. Each run owns
/// its own table.
pub mod symbols;

/// Starts a preprocessor run over `lines` with default options.
///
/// # Example
/// ```
/// use sourcejoin::preprocessor::{preprocess_lines, symbols::SymbolTable};
///
/// let lines = ["#if !DEBUG", "release", "#endif"];
/// let kept: Vec<_> = preprocess_lines(lines, &SymbolTable::new()).collect::<Result<_, _>>()
///                                                                 .unwrap();
/// assert_eq!(kept, ["release"]);
/// ```
pub fn preprocess_lines<L, S>(lines: L, symbols: &SymbolTable) -> Evaluator<L::IntoIter>
    where L: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Evaluator::new(lines, symbols)
}

/// Starts a preprocessor run over `lines` with explicit options.
pub fn preprocess_lines_with<L, S>(lines: L,
                                   symbols: &SymbolTable,
                                   options: Options)
                                   -> Evaluator<L::IntoIter>
    where L: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Evaluator::with_options(lines, symbols, options)
}
