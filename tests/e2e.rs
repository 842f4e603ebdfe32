//! End-to-end runs through `reactenv::run`.

mod common;

use common::{Fixture, env};
use reactenv::{Config, Error, Level, MemoryReporter, Outcome, run};

#[test]
fn injects_single_variable() {
    let fixture = Fixture::new(&[("a.js", r#"const x = "__reactenv.API_URL";"#)]);
    let mut reporter = MemoryReporter::new();

    let outcome = run(
        &Config::new(fixture.path()),
        &env(&[("API_URL", "https://api.example.com")]),
        &mut reporter,
    )
    .expect("run");

    let Outcome::Injected(summary) = outcome else {
        panic!("expected injection, got {outcome:?}");
    };
    assert_eq!(summary.variables_injected, 1);
    assert_eq!(summary.files_written, 1);
    assert_eq!(
        fixture.read("a.js"),
        r#"const x = "https://api.example.com";"#
    );
    assert!(reporter.contains("✓ API_URL"));
    assert_eq!(
        reporter.at(Level::Success),
        ["Injected 1 variable(s) into 1 file(s)"]
    );
}

#[test]
fn missing_variable_writes_nothing() {
    let fixture = Fixture::new(&[
        ("a.js", "__reactenv.PRESENT"),
        ("b.js", "__reactenv.MISSING_VAR"),
    ]);
    let before = fixture.snapshot();
    let mut reporter = MemoryReporter::new();

    let err = run(
        &Config::new(fixture.path()),
        &env(&[("PRESENT", "here")]),
        &mut reporter,
    )
    .unwrap_err();

    match err {
        Error::MissingVariables(missing) => assert_eq!(missing.names, ["MISSING_VAR"]),
        other => panic!("expected missing variables, got {other:?}"),
    }
    assert_eq!(fixture.snapshot(), before);
    assert!(reporter.contains("✓ PRESENT"));
    assert_eq!(reporter.at(Level::Error), ["  ✗ MISSING_VAR"]);
}

#[test]
fn all_missing_names_reported_at_once() {
    let fixture = Fixture::new(&[
        ("1.js", "__reactenv.C __reactenv.A"),
        ("2.js", "__reactenv.B __reactenv.A"),
    ]);
    let err = run(
        &Config::new(fixture.path()),
        &env(&[]),
        &mut MemoryReporter::new(),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "3 environment variables not set: A, B, C"
    );
}

#[test]
fn no_matching_files_is_nothing_to_do() {
    let fixture = Fixture::new(&[("style.css", "body { color: __reactenv.COLOR }")]);
    let before = fixture.snapshot();
    let mut reporter = MemoryReporter::new();

    let outcome = run(&Config::new(fixture.path()), &env(&[]), &mut reporter).expect("run");

    assert_eq!(outcome, Outcome::NothingToDo);
    assert_eq!(fixture.snapshot(), before);
    assert!(reporter.contains("0 file(s) matched"));
    assert_eq!(reporter.at(Level::Warn).len(), 1);
    assert!(reporter.at(Level::Error).is_empty());
}

#[test]
fn running_twice_is_a_no_op() {
    let fixture = Fixture::new(&[
        ("a.js", "fetch('__reactenv.URL/__reactenv.PATH')"),
        ("b.js", "let k = '__reactenv.KEY'"),
    ]);
    let environment = env(&[("URL", "https://x"), ("PATH", "v1"), ("KEY", "secret")]);
    let config = Config::new(fixture.path());

    let first = run(&config, &environment, &mut MemoryReporter::new()).expect("first");
    assert!(matches!(first, Outcome::Injected(_)));
    let after_first = fixture.snapshot();
    assert_eq!(fixture.read("a.js"), "fetch('https://x/v1')");

    let second = run(&config, &environment, &mut MemoryReporter::new()).expect("second");
    assert_eq!(second, Outcome::NothingToDo);
    assert_eq!(fixture.snapshot(), after_first);
}

#[test]
fn reports_counts_and_per_file_breakdown() {
    let fixture = Fixture::new(&[
        ("a.js", "__reactenv.X __reactenv.X __reactenv.Y"),
        ("b.js", "plain"),
        ("c.js", "__reactenv.X"),
        ("d.css", "__reactenv.Z"),
    ]);
    let mut reporter = MemoryReporter::new();

    run(
        &Config::new(fixture.path()),
        &env(&[("X", "1"), ("Y", "2")]),
        &mut reporter,
    )
    .expect("run");

    let info = reporter.at(Level::Info);
    assert!(info.contains(&"3 file(s) matched `\\.js$`, 2 with placeholders"));
    assert!(info.contains(&"Found 4 occurrence(s) of 2 variable(s)"));
    assert!(info.contains(&"     3  a.js"));
    assert!(info.contains(&"     1  c.js"));
    assert_eq!(
        info.iter().filter(|line| line.contains("✓ X")).count(),
        1
    );
    assert_eq!(fixture.read("d.css"), "__reactenv.Z");
}

#[test]
fn dry_run_validates_without_writing() {
    let fixture = Fixture::new(&[("a.js", "__reactenv.A")]);
    let before = fixture.snapshot();

    let outcome = run(
        &Config::new(fixture.path()).dry_run(true),
        &env(&[("A", "1")]),
        &mut MemoryReporter::new(),
    )
    .expect("run");

    assert_eq!(
        outcome,
        Outcome::DryRun {
            files: 1,
            occurrences: 1,
            variables: 1
        }
    );
    assert_eq!(fixture.snapshot(), before);
}

#[test]
fn dry_run_still_fails_on_missing() {
    let fixture = Fixture::new(&[("a.js", "__reactenv.A")]);
    let err = run(
        &Config::new(fixture.path()).dry_run(true),
        &env(&[]),
        &mut MemoryReporter::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingVariables(_)));
}

#[test]
fn invalid_matcher_fails_before_touching_files() {
    let fixture = Fixture::new(&[("a.js", "__reactenv.A")]);
    let before = fixture.snapshot();

    let err = run(
        &Config::new(fixture.path()).matcher("([a-z"),
        &env(&[("A", "1")]),
        &mut MemoryReporter::new(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::Pattern(_)));
    assert_eq!(fixture.snapshot(), before);
}

#[test]
fn missing_directory_fails() {
    let fixture = Fixture::new(&[]);
    let err = run(
        &Config::new(fixture.file("build")),
        &env(&[]),
        &mut MemoryReporter::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
