use std::{
    fs,
    path::{Path, PathBuf},
};

use sourcejoin::{
    config::Config,
    error::{JoinError, PreprocessError},
    join::{
        merger::{ConcatMerger, SourceMerger},
        pipeline::{join_directory, join_sources, preprocess_file},
        sources::collect_sources,
    },
    preprocessor::{evaluator::Options, symbols::SymbolTable},
    run,
};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths.iter()
         .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
         .collect()
}

/// Records what a merger receives.
#[derive(Default)]
struct Recorder {
    seen: Vec<(PathBuf, String)>,
}

impl SourceMerger for Recorder {
    fn add_source(&mut self, path: &Path, text: &str) {
        self.seen.push((path.to_path_buf(), text.to_string()));
    }

    fn finish(self) -> String {
        self.seen.iter().map(|(_, text)| text.as_str()).collect::<Vec<_>>().join("|")
    }
}

#[test]
fn collects_sources_recursively_in_name_order() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "b.cs", "");
    write(root, "a.cs", "");
    write(root, "sub/c.cs", "");
    write(root, "notes.txt", "");
    write(root, "bin/Debug/gen.cs", "");
    write(root, "obj/gen.cs", "");
    write(root, "sub/bin/kept.cs", "");

    let sources = collect_sources(root, "cs", &["bin", "obj"]).unwrap();
    assert_eq!(relative(root, &sources), ["a.cs", "b.cs", "sub/bin/kept.cs", "sub/c.cs"]);
}

#[test]
fn collects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.cs", "");
    write(root, "b.shader", "");

    let sources = collect_sources(root, "shader", &[] as &[&str]).unwrap();
    assert_eq!(relative(root, &sources), ["b.shader"]);
}

#[test]
fn preprocesses_a_file() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "a.cs", "class A {\r\n#if DEBUG\r\n  int debug;\r\n#endif\r\n}\r\n");

    let symbols = SymbolTable::parse_list("DEBUG");
    assert_eq!(preprocess_file(&path, &symbols, Options::default()).unwrap(),
               "class A {\n  int debug;\n}");
    assert_eq!(preprocess_file(&path, &SymbolTable::new(), Options::default()).unwrap(),
               "class A {\n}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.cs");
    let e = preprocess_file(&path, &SymbolTable::new(), Options::default()).unwrap_err();
    assert!(matches!(e, JoinError::Io { path: p, .. } if p == path));
}

#[test]
fn each_source_starts_from_the_shared_symbols() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let first = write(root, "1.cs", "#define LOCAL\n#undef SHARED\n#if LOCAL\none\n#endif\n#if SHARED\nshared\n#endif");
    let second = write(root, "2.cs", "#if LOCAL\nlocal\n#endif\n#if SHARED\nshared\n#endif");

    let merged = join_sources(&[first, second],
                              &SymbolTable::parse_list("SHARED"),
                              Options::default(),
                              Recorder::default()).unwrap();
    assert_eq!(merged, "one|shared");
}

#[test]
fn merger_sees_sources_in_order_with_paths() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let a = write(root, "a.cs", "A");
    let b = write(root, "b.cs", "B");

    let mut recorder = Recorder::default();
    for path in [&a, &b] {
        let text = preprocess_file(path, &SymbolTable::new(), Options::default()).unwrap();
        recorder.add_source(path, &text);
    }
    assert_eq!(recorder.seen, [(a, "A".to_string()), (b, "B".to_string())]);
}

#[test]
fn first_failing_source_stops_the_join() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.cs", "class A {}");
    let bad = write(root, "b.cs", "class B {}\n#error B is not ready");
    write(root, "c.cs", "class C {}");

    let e = join_directory(&Config::new(root), ConcatMerger::new()).unwrap_err();
    match e {
        JoinError::Preprocess { path, source } => {
            assert_eq!(path, bad);
            assert_eq!(source, PreprocessError::UserError { message: "B is not ready".to_string() });
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn joins_a_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Program.cs", "#if !TRACE\nclass Program {}\n#endif\n");
    write(root, "Model/Item.cs", "#region Item\nclass Item {}\n#endregion\n");
    write(root, "Empty.cs", "#if TRACE\nclass Trace {}\n#endif\n");
    write(root, "obj/Generated.cs", "#error generated code must be skipped");

    let merged = join_directory(&Config::new(root), ConcatMerger::new()).unwrap();
    assert_eq!(merged, "#region Item\nclass Item {}\n#endregion\n\nclass Program {}\n");
}

#[test]
fn strict_option_reaches_every_source() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.cs", "#if DEBUG\nclass A {}\n");

    let mut config = Config::new(root);
    assert!(join_directory(&config, ConcatMerger::new()).is_ok());

    config.options = Options { strict: true };
    let e = join_directory(&config, ConcatMerger::new()).unwrap_err();
    assert!(matches!(e,
                     JoinError::Preprocess { source: PreprocessError::UnterminatedConditional { depth: 1 },
                                             .. }));
}

#[test]
fn run_writes_the_output_file() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("src");
    write(&root, "a.cs", "#if DEBUG\nclass Debug {}\n#else\nclass Release {}\n#endif");

    let mut config = Config::new(&root);
    config.output = Some(dir.path().join("merged.cs"));
    config.symbols = SymbolTable::parse_list("DEBUG");
    run(&config).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("merged.cs")).unwrap(), "class Debug {}\n");
}

#[test]
fn config_rejects_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let e = Config::new(&missing).validate().unwrap_err();
    assert!(matches!(e, JoinError::InputNotFound { path } if path == missing));
}

#[test]
fn config_rejects_file_as_input() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "a.cs", "");
    let e = Config::new(&file).validate().unwrap_err();
    assert!(matches!(e, JoinError::InputNotDirectory { .. }));
}

#[test]
fn config_rejects_wrong_output_extension() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::new(dir.path());

    config.output = Some(PathBuf::from("merged.cs"));
    assert!(config.validate().is_ok());

    config.output = Some(PathBuf::from("merged.blah"));
    let e = config.validate().unwrap_err();
    assert_eq!(e.to_string(), "Expected '.cs' as extension for output file, but was 'blah'.");

    config.output = Some(PathBuf::from("merged"));
    assert!(matches!(config.validate(), Err(JoinError::OutputExtension { found, .. }) if found.is_empty()));
}

#[test]
fn errors_chain_their_source() {
    use std::error::Error;

    let e = JoinError::Preprocess { path:   PathBuf::from("a.cs"),
                                    source: PreprocessError::UserError { message: "nope".to_string() }, };
    assert_eq!(e.to_string(), "a.cs: nope");
    assert_eq!(e.source().unwrap().to_string(), "nope");
}
