use std::collections::HashSet;

/// The set of defined preprocessor symbols.
///
/// One table belongs to one preprocessor run. Runs over different sources
/// start from clones of the same caller-supplied table, so a `#define` in one
/// source never leaks into another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashSet<String>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a comma-separated list such as `DEBUG,TRACE`.
    ///
    /// Names are trimmed and empty entries are skipped.
    ///
    /// # Example
    /// ```
    /// use sourcejoin::preprocessor::symbols::SymbolTable;
    ///
    /// let symbols = SymbolTable::parse_list(" DEBUG, ,NETFRAMEWORK");
    /// assert!(symbols.is_defined("DEBUG"));
    /// assert!(symbols.is_defined("NETFRAMEWORK"));
    /// assert_eq!(symbols.len(), 2);
    /// ```
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Adds a symbol. Returns `false` if it was already defined.
    pub fn define(&mut self, symbol: impl Into<String>) -> bool {
        self.symbols.insert(symbol.into())
    }

    /// Removes a symbol. Returns `false` if it was not defined.
    pub fn undefine(&mut self, symbol: &str) -> bool {
        self.symbols.remove(symbol)
    }

    /// Returns `true` if `symbol` is defined.
    #[must_use]
    pub fn is_defined(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Number of defined symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if no symbol is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the defined symbols in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self { symbols: iter.into_iter().map(Into::into).collect(), }
    }
}

impl<S: Into<String>> Extend<S> for SymbolTable {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.symbols.extend(iter.into_iter().map(Into::into));
    }
}
