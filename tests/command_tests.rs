use pretty_assertions::assert_eq;
use std::path::PathBuf;
use v8_flame::commands::{execute_convert, validate_args, validate_profile_file, ConvertArgs};
use v8_flame::output::read_profile;

const LOG: &str = r#"{
    "code": [
        { "type": "JS", "kind": "Opt", "name": "main /srv/app/main.js:1:1" },
        { "type": "JS", "kind": "Unopt", "name": "render /srv/app/view.js:8:3" },
        { "type": "CODE", "kind": "Builtin", "name": "ArrayMap" },
        { "type": "CPP", "name": "T v8::internal::GC(int)" }
    ],
    "ticks": [
        { "tm": 1, "vm": 0, "s": [1, 0, 0, 0] },
        { "tm": 2, "vm": 0, "s": [2, 0, 1, 0, 0, 0] },
        { "tm": 3, "vm": 1, "s": [3, 0, 0, 0] },
        { "tm": 4, "vm": 0, "s": [1, 0, 0, 0] }
    ]
}"#;

fn setup() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("v8.json");
    std::fs::write(&input, LOG).unwrap();
    (dir, input)
}

#[test]
fn test_convert_end_to_end() {
    let (dir, input) = setup();
    let output = dir.path().join("out/flame.json");
    let folded = dir.path().join("out/stacks.folded");

    let args = ConvertArgs {
        input,
        output_json: output.clone(),
        output_folded: Some(folded.clone()),
        print_summary: true,
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let graph = execute_convert(args).unwrap();

    assert_eq!(graph.num_ticks, 4);
    assert_eq!(
        graph.names,
        vec![
            "main ./main.js:1:1",
            "~render ./view.js:8:3",
            "(builtin) ArrayMap",
            "(C++) v8::internal::GC",
        ]
    );

    let profile = read_profile(&output).unwrap();
    assert_eq!(profile.num_ticks, 4);
    assert_eq!(profile.to_graph().unwrap().levels, graph.levels);

    let folded = std::fs::read_to_string(folded).unwrap();
    assert_eq!(
        folded,
        "main ./main.js:1:1;~render ./view.js:8:3 2\n\
         main ./main.js:1:1;~render ./view.js:8:3;(builtin) ArrayMap 1\n\
         main ./main.js:1:1;(C++) v8::internal::GC 1\n"
    );

    assert!(validate_profile_file(&output).is_ok());
}

#[test]
fn test_convert_keep_paths_and_compact() {
    let (dir, input) = setup();
    let output = dir.path().join("flame.json");

    let args = ConvertArgs {
        input,
        output_json: output.clone(),
        compact: true,
        shorten_paths: false,
        ..Default::default()
    };

    let graph = execute_convert(args).unwrap();

    assert_eq!(graph.names[0], "main /srv/app/main.js:1:1");
    let content = std::fs::read_to_string(output).unwrap();
    assert!(!content.contains('\n'));
}

#[test]
fn test_convert_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let args = ConvertArgs {
        input: dir.path().join("missing.json"),
        output_json: dir.path().join("flame.json"),
        ..Default::default()
    };

    assert!(execute_convert(args).is_err());
}

#[test]
fn test_validate_rejects_corrupt_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flame.json");
    std::fs::write(
        &path,
        r#"{ "version": "1.0.0", "names": ["A"], "levels": [[0, 2, 0], [1, 2, 0]], "numTicks": 2 }"#,
    )
    .unwrap();

    assert!(validate_profile_file(&path).is_err());
}

#[test]
fn test_validate_args_rejects_folded_over_input() {
    let args = ConvertArgs {
        input: PathBuf::from("v8.json"),
        output_folded: Some(PathBuf::from("v8.json")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}
