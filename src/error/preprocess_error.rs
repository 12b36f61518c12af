#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can stop a preprocessor run.
///
/// Every variant is fatal: the run that produced it yields nothing further.
/// Lines handed out before the error remain valid output.
pub enum PreprocessError {
    /// A line starting with `#` matched no known directive, or an `#if` /
    /// `#elif` carried no usable symbol.
    InvalidDirective {
        /// The offending line, trimmed.
        directive: String,
    },
    /// An `#error` directive was reached.
    UserError {
        /// Text following `#error`, possibly empty.
        message: String,
    },
    /// A `#define` or `#undef` appeared after content or inside a conditional
    /// block.
    DefinitionNotAtStart {
        /// The offending line, trimmed.
        directive: String,
    },
    /// Input ended while conditional blocks were still open. Only reported in
    /// strict mode.
    UnterminatedConditional {
        /// Number of blocks left open.
        depth: usize,
    },
    /// An `#elif`, `#else` or `#endif` appeared with no open `#if`. Only
    /// reported in strict mode.
    UnexpectedDirective {
        /// The offending line, trimmed.
        directive: String,
    },
}

impl std::fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDirective { directive } => {
                write!(f, "Invalid preprocessor directive: {directive}")
            },
            Self::UserError { message } => write!(f, "{message}"),
            Self::DefinitionNotAtStart { directive } => write!(f,
                                                               "Cannot define/undefine preprocessor symbols after first token in file: {directive}"),
            Self::UnterminatedConditional { depth } => {
                write!(f, "Unexpected end of input: {depth} conditional block(s) left open.")
            },
            Self::UnexpectedDirective { directive } => {
                write!(f, "Unexpected preprocessor directive without matching #if: {directive}")
            },
        }
    }
}

impl std::error::Error for PreprocessError {}
