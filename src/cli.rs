use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{
    config::{Config, DEFAULT_EXTENSION},
    preprocessor::{evaluator::Options, symbols::SymbolTable},
};

/// sourcejoin merges a folder of source files into one single file. Code
/// between `#if`/`#endif` directives whose symbols are not defined is left out.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The folder containing the source files to merge.
    pub input: PathBuf,

    /// Target file name (e.g. 'output.cs'). When omitted, the result is
    /// written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Preprocessor symbols to define, comma-separated. May be repeated.
    #[arg(short, long = "define", value_name = "SYMBOLS", value_delimiter = ',', action = ArgAction::Append)]
    pub defines: Vec<String>,

    /// Extension of the source files, without the dot.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Folder names below the input folder to skip. Defaults to 'bin' and
    /// 'obj'.
    #[arg(long = "exclude", value_name = "DIR", action = ArgAction::Append)]
    pub excluded: Vec<String>,

    /// Reject unterminated `#if` blocks and stray `#elif`/`#else`/`#endif`.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Builds the configuration, adding `env_symbols` before the symbols
    /// given on the command line.
    #[must_use]
    pub fn into_config(self, env_symbols: SymbolTable) -> Config {
        let mut config = Config::new(self.input);
        config.output = self.output;
        config.symbols = env_symbols;
        config.symbols.extend(self.defines
                                  .iter()
                                  .map(|symbol| symbol.trim())
                                  .filter(|symbol| !symbol.is_empty()));
        config.extension = self.extension.trim_start_matches('.').to_string();
        if !self.excluded.is_empty() {
            config.excluded = self.excluded;
        }
        config.options = Options { strict: self.strict };
        config
    }
}
