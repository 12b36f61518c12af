/// Preprocessor errors.
///
/// Defines the fatal conditions raised while evaluating conditional
/// compilation directives: malformed directives, explicit `#error` lines and
/// misplaced symbol definitions.
pub mod preprocess_error;
/// Join errors.
///
/// Contains the errors raised around the preprocessor when a whole directory
/// is processed: missing input, bad output names, I/O failures, and
/// preprocessor failures tagged with the file they came from.
pub mod join_error;

pub use join_error::JoinError;
pub use preprocess_error::PreprocessError;
