//! Property-based tests using proptest.
//!
//! These tests check the evaluator's inclusion rules over randomly generated
//! symbol sets, chains and nestings, complementing the scenario tests in
//! `preprocessor.rs`.

use proptest::prelude::*;
use sourcejoin::{preprocess, preprocessor::symbols::SymbolTable};

// ── Strategies ──────────────────────────────────────────────────────────

/// Symbol names drawn from a small pool so that collisions are common.
fn arb_symbol() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["A", "B", "C", "D", "DEBUG", "TRACE"])
}

fn arb_symbols() -> impl Strategy<Value = SymbolTable> {
    prop::collection::vec(arb_symbol(), 0..6).prop_map(|names| names.into_iter().collect::<SymbolTable>())
}

/// Lines that are never mistaken for directives.
fn arb_plain_line() -> impl Strategy<Value = String> {
    "[a-z {};=0-9]{0,20}"
}

/// A condition as written after `#if ` / `#elif `, with its expected value.
fn arb_condition() -> impl Strategy<Value = (bool, &'static str)> {
    (any::<bool>(), arb_symbol())
}

fn condition_text((negated, symbol): (bool, &str)) -> String {
    if negated { format!("!{symbol}") } else { symbol.to_string() }
}

fn holds((negated, symbol): (bool, &str), symbols: &SymbolTable) -> bool {
    symbols.is_defined(symbol) != negated
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn directive_free_input_round_trips(body in prop::collection::vec(arb_plain_line(), 0..40),
                                        symbols in arb_symbols()) {
        // The final line keeps trailing blank lines significant.
        let src = format!("{}\nend", body.join("\n"));
        prop_assert_eq!(preprocess(&src, &symbols).unwrap(), src);
    }

    #[test]
    fn single_block_follows_its_condition(condition in arb_condition(),
                                          symbols in arb_symbols()) {
        let src = format!("before\n#if {}\nbody\n#endif\nafter", condition_text(condition));
        let expected = if holds(condition, &symbols) { "before\nbody\nafter" } else { "before\nafter" };
        prop_assert_eq!(preprocess(&src, &symbols).unwrap(), expected);
    }

    #[test]
    fn chain_keeps_first_matching_branch(conditions in prop::collection::vec(arb_condition(), 1..6),
                                         has_else in any::<bool>(),
                                         symbols in arb_symbols()) {
        let mut src = String::new();
        for (i, condition) in conditions.iter().enumerate() {
            let keyword = if i == 0 { "#if" } else { "#elif" };
            src.push_str(&format!("{keyword} {}\nbranch{i}\n", condition_text(*condition)));
        }
        if has_else {
            src.push_str("#else\nfallback\n");
        }
        src.push_str("#endif");

        let expected = match conditions.iter().position(|c| holds(*c, &symbols)) {
            Some(i) => format!("branch{i}"),
            None if has_else => "fallback".to_string(),
            None => String::new(),
        };
        prop_assert_eq!(preprocess(&src, &symbols).unwrap(), expected);
    }

    #[test]
    fn nested_blocks_require_every_enclosing_condition(
        conditions in prop::collection::vec(arb_condition(), 1..8),
        symbols in arb_symbols())
    {
        // One marker line per level, opened outermost first.
        let mut src = String::new();
        for (depth, condition) in conditions.iter().enumerate() {
            src.push_str(&format!("#if {}\nlevel{depth}\n", condition_text(*condition)));
        }
        for _ in &conditions {
            src.push_str("#endif\n");
        }
        src.push_str("tail");

        let mut expected: Vec<String> = conditions.iter()
                                                  .take_while(|c| holds(**c, &symbols))
                                                  .enumerate()
                                                  .map(|(depth, _)| format!("level{depth}"))
                                                  .collect();
        expected.push("tail".to_string());
        prop_assert_eq!(preprocess(&src, &symbols).unwrap(), expected.join("\n"));
    }

    #[test]
    fn else_inside_dropped_branch_never_emits(outer in arb_condition(),
                                              inner in arb_condition(),
                                              symbols in arb_symbols()) {
        let src = format!("#if {}\n#if {}\ninner\n#else\nother\n#endif\n#endif",
                          condition_text(outer),
                          condition_text(inner));
        let result = preprocess(&src, &symbols).unwrap();
        if holds(outer, &symbols) {
            let expected = if holds(inner, &symbols) { "inner" } else { "other" };
            prop_assert_eq!(result, expected);
        } else {
            prop_assert_eq!(result, "");
        }
    }
}
