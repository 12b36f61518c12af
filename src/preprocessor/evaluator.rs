use std::iter::FusedIterator;

use crate::{
    error::PreprocessError,
    preprocessor::{
        directive::{Directive, classify},
        symbols::SymbolTable,
    },
    util::text::is_blank,
};

/// Where the evaluator stands relative to conditional blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Not inside any `#if` block.
    Outside,
    /// Inside a branch whose lines are emitted.
    Keeping,
    /// Inside a branch whose lines are dropped.
    Skipping {
        /// Set once an earlier branch of the chain matched. Everything up to
        /// the closing `#endif` is dropped, including `#error`.
        chain_resolved: bool,
    },
}

/// Evaluator settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Report unterminated blocks and stray `#elif`/`#else`/`#endif` as
    /// errors instead of accepting them.
    pub strict: bool,
}

/// What happens to the line that was just evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Emit,
    Drop,
}

/// A streaming evaluator for conditional compilation directives.
///
/// `Evaluator` pulls one line at a time from the wrapped iterator, and yields
/// each surviving line unchanged. Directive lines never survive, except the
/// passthrough directives (`#warning`, `#line`, `#region`, `#endregion`,
/// `#pragma`).
///
/// Memory use is bounded by the nesting depth: every `#if` saves the enclosing
/// [`Mode`] on a stack and the matching `#endif` restores it.
///
/// The first error ends the run. Lines yielded before it remain valid output.
///
/// # Example
/// ```
/// use sourcejoin::preprocessor::{evaluator::Evaluator, symbols::SymbolTable};
///
/// let symbols = SymbolTable::parse_list("BAR");
/// let source = ["#if FOO", "foo", "#elif BAR", "bar", "#else", "baz", "#endif"];
/// let lines = Evaluator::new(source, &symbols).collect::<Result<Vec<_>, _>>()
///                                            .unwrap();
/// assert_eq!(lines, ["bar"]);
/// ```
#[derive(Debug)]
pub struct Evaluator<I> {
    lines:        I,
    symbols:      SymbolTable,
    options:      Options,
    mode:         Mode,
    /// Saved enclosing modes, one per open `#if`.
    frames:       Vec<Mode>,
    /// Non-blank lines emitted so far, plus one per `#if` entered.
    content_seen: usize,
    line_number:  usize,
    finished:     bool,
}

impl<I, S> Evaluator<I>
    where I: Iterator<Item = S>,
          S: AsRef<str>
{
    /// Creates an evaluator over `lines` with default options.
    ///
    /// `symbols` seeds this run only; `#define` and `#undef` in the input
    /// modify a private copy.
    pub fn new<L>(lines: L, symbols: &SymbolTable) -> Self
        where L: IntoIterator<IntoIter = I>
    {
        Self::with_options(lines, symbols, Options::default())
    }

    /// Creates an evaluator over `lines` with explicit options.
    pub fn with_options<L>(lines: L, symbols: &SymbolTable, options: Options) -> Self
        where L: IntoIterator<IntoIter = I>
    {
        Self { lines: lines.into_iter(),
               symbols: symbols.clone(),
               options,
               mode: Mode::Outside,
               frames: Vec::new(),
               content_seen: 0,
               line_number: 0,
               finished: false }
    }

    /// The current mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of currently open conditional blocks.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The symbols as modified by the input so far.
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Evaluates one line and updates the state.
    fn step(&mut self, line: &str) -> Result<Step, PreprocessError> {
        let directive = classify(line);
        if directive.is_malformed() {
            return Err(PreprocessError::InvalidDirective { directive: line.trim().to_string(), });
        }

        let before = self.mode;
        let step = match self.mode {
            Mode::Outside => self.outside(directive, line),
            Mode::Keeping => self.keeping(directive, line),
            Mode::Skipping { chain_resolved } => self.skipping(directive, line, chain_resolved),
        }?;

        log::trace!("line {}: {:?} -> {:?} (depth {}), {:?}",
                    self.line_number,
                    before,
                    self.mode,
                    self.frames.len(),
                    step);
        Ok(step)
    }

    fn outside(&mut self, directive: Directive<'_>, line: &str) -> Result<Step, PreprocessError> {
        match directive {
            Directive::If(condition) => {
                let mode = if condition.holds(&self.symbols) {
                    Mode::Keeping
                } else {
                    Mode::Skipping { chain_resolved: false }
                };
                self.enter(mode);
                Ok(Step::Drop)
            },
            Directive::Error(message) => {
                Err(PreprocessError::UserError { message: message.to_string() })
            },
            Directive::Define(_) | Directive::Undefine(_) if self.content_seen > 0 => {
                Err(definition_not_at_start(line))
            },
            Directive::Define(symbol) => {
                log::debug!("#define {symbol}");
                self.symbols.define(symbol);
                Ok(Step::Drop)
            },
            Directive::Undefine(symbol) => {
                log::debug!("#undef {symbol}");
                self.symbols.undefine(symbol);
                Ok(Step::Drop)
            },
            Directive::ElseIf(_) | Directive::Else | Directive::EndIf => self.unmatched(line),
            _ => Ok(self.emit(line)),
        }
    }

    fn keeping(&mut self, directive: Directive<'_>, line: &str) -> Result<Step, PreprocessError> {
        match directive {
            Directive::If(condition) => {
                let mode = if condition.holds(&self.symbols) {
                    Mode::Keeping
                } else {
                    Mode::Skipping { chain_resolved: false }
                };
                self.enter(mode);
                Ok(Step::Drop)
            },
            Directive::EndIf => {
                self.leave();
                Ok(Step::Drop)
            },
            Directive::ElseIf(_) => {
                self.mode = Mode::Skipping { chain_resolved: true };
                Ok(Step::Drop)
            },
            // The else body is dropped but its `#error` lines still apply.
            Directive::Else => {
                self.mode = Mode::Skipping { chain_resolved: false };
                Ok(Step::Drop)
            },
            Directive::Error(message) => {
                Err(PreprocessError::UserError { message: message.to_string() })
            },
            Directive::Define(_) | Directive::Undefine(_) => Err(definition_not_at_start(line)),
            _ => Ok(self.emit(line)),
        }
    }

    fn skipping(&mut self,
                directive: Directive<'_>,
                line: &str,
                chain_resolved: bool)
                -> Result<Step, PreprocessError> {
        match directive {
            Directive::If(_) => {
                self.enter(Mode::Skipping { chain_resolved });
                Ok(Step::Drop)
            },
            Directive::EndIf => {
                self.leave();
                Ok(Step::Drop)
            },
            Directive::Define(_) | Directive::Undefine(_) => Err(definition_not_at_start(line)),
            _ if chain_resolved => Ok(Step::Drop),
            // A block nested in a dropped branch never takes a branch.
            Directive::ElseIf(_) | Directive::Else if self.enclosed_in_skipped() => Ok(Step::Drop),
            Directive::ElseIf(condition) => {
                if condition.holds(&self.symbols) {
                    self.mode = Mode::Keeping;
                }
                Ok(Step::Drop)
            },
            Directive::Else => {
                self.mode = Mode::Keeping;
                Ok(Step::Drop)
            },
            Directive::Error(message) => {
                Err(PreprocessError::UserError { message: message.to_string() })
            },
            _ => Ok(Step::Drop),
        }
    }

    fn enter(&mut self, mode: Mode) {
        self.frames.push(self.mode);
        self.mode = mode;
        self.content_seen += 1;
    }

    fn leave(&mut self) {
        if let Some(mode) = self.frames.pop() {
            self.mode = mode;
        }
    }

    /// Whether the innermost open block was entered from a dropped branch.
    fn enclosed_in_skipped(&self) -> bool {
        matches!(self.frames.last(), Some(Mode::Skipping { .. }))
    }

    fn emit(&mut self, line: &str) -> Step {
        if !is_blank(line) {
            self.content_seen += 1;
        }
        Step::Emit
    }

    /// `#elif`, `#else` or `#endif` with no open block.
    fn unmatched(&self, line: &str) -> Result<Step, PreprocessError> {
        if self.options.strict {
            return Err(PreprocessError::UnexpectedDirective { directive: line.trim().to_string(), });
        }
        log::warn!("line {}: ignoring '{}' without matching #if", self.line_number, line.trim());
        Ok(Step::Drop)
    }

    /// Checks the state once the input is exhausted.
    fn finish(&self) -> Result<(), PreprocessError> {
        let depth = self.frames.len();
        if depth == 0 {
            return Ok(());
        }
        if self.options.strict {
            return Err(PreprocessError::UnterminatedConditional { depth });
        }
        log::warn!("end of input with {depth} unterminated #if block(s)");
        Ok(())
    }
}

fn definition_not_at_start(line: &str) -> PreprocessError {
    PreprocessError::DefinitionNotAtStart { directive: line.trim().to_string(), }
}

impl<I, S> Iterator for Evaluator<I>
    where I: Iterator<Item = S>,
          S: AsRef<str>
{
    type Item = Result<S, PreprocessError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(line) = self.lines.next() else {
                self.finished = true;
                return self.finish().err().map(Err);
            };
            self.line_number += 1;

            match self.step(line.as_ref()) {
                Ok(Step::Emit) => return Some(Ok(line)),
                Ok(Step::Drop) => {},
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                },
            }
        }
    }
}

impl<I, S> FusedIterator for Evaluator<I>
    where I: Iterator<Item = S>,
          S: AsRef<str>
{
}
