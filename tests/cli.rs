//! End-to-end tests driving the compiled `advent` binary.

mod common;

use std::fs;

use common::*;

const TEMPLATE_SET: [&str; 6] = [
    "input.txt",
    "input_sample.txt",
    "solution.rs",
    "solution_bench.rs",
    "solution_refactored.rs",
    "solution_test.rs",
];

#[test]
fn help_exits_zero() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("--generate"));
    assert!(result.stdout.contains("--fetch --data --year 2020 --day 1"));
}

#[test]
fn help_ignores_broken_config() {
    let env = TestEnv::new();
    env.write_config("{");
    let result = env.run(&["-h"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("--generate"));
}

#[test]
fn no_command_exits_one() {
    let env = TestEnv::new();
    let result = env.run(&["--year", "2024"]);

    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("No command specified"));
}

#[test]
fn unknown_flag_exits_one() {
    let env = TestEnv::new();
    let result = env.run(&["--frobnicate"]);
    assert_eq!(result.exit_code, Some(1));
}

#[test]
fn two_commands_exit_one() {
    let env = TestEnv::new();
    let result = env.run(&["--generate", "--clean", "--year", "2099"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(!env.path("src/challenges/2099").exists());
}

#[test]
fn generate_creates_every_day_with_template_set() {
    let env = TestEnv::new();
    let result = env.run(&["--generate", "--year", "2099"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("Templates for year 2099 have been generated successfully."));

    let days = sorted_entries(&env.path("src/challenges/2099"));
    let expected: Vec<String> = (1..=25).map(|d| format!("day{d:02}")).collect();
    assert_eq!(days, expected);

    for day in 1..=25 {
        assert_eq!(sorted_entries(&env.day_dir(2099, day)), TEMPLATE_SET);
    }
}

#[test]
fn generate_twice_is_refused() {
    let env = TestEnv::new();
    assert!(env.run(&["-g", "-y", "2099"]).success);
    fs::write(env.day_dir(2099, 1).join("solution.rs"), "// mine").unwrap();

    let result = env.run(&["-g", "-y", "2099"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("already exists"), "{}", result.stderr);
    assert_eq!(
        fs::read_to_string(env.day_dir(2099, 1).join("solution.rs")).unwrap(),
        "// mine"
    );
}

#[test]
fn generate_rejects_non_numeric_year() {
    let env = TestEnv::new();
    let result = env.run(&["--generate", "--year", "soon"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("valid year"));
}

#[test]
fn run_prints_registered_answer() {
    let env = TestEnv::new();
    env.write(
        "src/challenges/2024/day01/input_sample.txt",
        "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n",
    );

    let result = env.run(&[
        "--run", "--year", "2024", "--day", "1", "--part", "2", "--input", "input_sample.txt",
    ]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("Result for Year 2024, Day 1, Part 2: 31"));

    let refactored = env.run(&[
        "-r", "-y", "2024", "-d", "1", "-p", "1", "-i", "input_sample.txt", "--refactored",
    ]);
    assert!(refactored.stdout.contains("Part 1: 11"), "{}", refactored.combined_output());
}

#[test]
fn run_rejects_bad_part_before_reading_input() {
    let env = TestEnv::new();
    let result = env.run(&["--run", "--year", "2024", "--day", "1", "--part", "3"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("part 1 or 2"));
}

#[test]
fn run_unregistered_day_is_contract_error() {
    let env = TestEnv::new();
    let result = env.run(&["--run", "--year", "2099", "--day", "1", "--part", "1"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(
        result.stderr.contains("Part 1 function is not defined in"),
        "{}",
        result.stderr
    );
}

#[cfg(debug_assertions)]
#[test]
fn panicking_solution_is_reported_as_error() {
    let env = TestEnv::new();
    env.write(
        "src/challenges/2024/day01/input.txt",
        "1   -9223372036854775808\n",
    );

    let result = env.run(&["--run", "--year", "2024", "--day", "1", "--part", "1"]);
    assert_eq!(result.exit_code, Some(1), "{}", result.combined_output());
    assert!(
        result.stderr.contains("Error: solution for part 1 failed: panicked:"),
        "{}",
        result.stderr
    );
}

#[test]
fn run_missing_input_exits_one() {
    let env = TestEnv::new();
    let result = env.run(&["--run", "--year", "2024", "--day", "2", "--part", "1"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("input.txt"));
}

#[cfg(unix)]
#[test]
fn test_and_bench_forward_child_exit_code() {
    let env = TestEnv::new();
    env.write_config(
        r#"{
            "test_runner": { "program": "sh", "args": ["-c", "exit 0", "sh", "{path}"] },
            "bench_runner": { "program": "sh", "args": ["-c", "exit 2", "sh", "{path}"] }
        }"#,
    );

    let test = env.run(&["--test", "--year", "2099", "--day", "4"]);
    assert_eq!(test.exit_code, Some(0), "{}", test.combined_output());

    let bench = env.run(&["--bench", "--year", "2099", "--day", "4"]);
    assert_eq!(bench.exit_code, Some(2), "{}", bench.combined_output());
}

#[cfg(unix)]
#[test]
fn test_runner_receives_day_test_file() {
    let env = TestEnv::new();
    env.write_config(
        r#"{ "test_runner": { "program": "sh", "args": ["-c", "echo \"runner got $1\"", "sh", "{path}"] } }"#,
    );

    let result = env.run(&["-t", "-y", "2099", "-d", "7"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("2099/day07/solution_test.rs"));
}

#[cfg(unix)]
#[test]
fn runner_starts_in_root_given_by_flag() {
    let env = TestEnv::new();
    env.write_config(
        r#"{ "test_runner": { "program": "sh", "args": ["-c", "test -f advent.json && echo \"in $(pwd)\""] } }"#,
    );
    let elsewhere = tempfile::tempdir().unwrap();
    let root = env.root.path().to_string_lossy().into_owned();

    let result = env.run_from(elsewhere.path(), &["--root", &root, "-t", "-y", "2024", "-d", "1"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("in /"), "{}", result.stdout);
}

#[test]
fn missing_runner_exits_one() {
    let env = TestEnv::new();
    env.write_config(r#"{ "test_runner": { "program": "advent-no-such-runner" } }"#);

    let result = env.run(&["--test", "--year", "2099", "--day", "1"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("failed to run advent-no-such-runner"));
}

#[test]
fn test_without_day_prints_example() {
    let env = TestEnv::new();
    let result = env.run(&["--test", "--year", "2099"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stdout.contains("advent --test --year 2020 --day 1"));
}

#[test]
fn clean_day_keeps_siblings() {
    let env = TestEnv::new();
    assert!(env.run(&["-g", "-y", "2099"]).success);

    let result = env.run(&["--clean", "--year", "2099", "--day", "3"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(!env.day_dir(2099, 3).exists());
    assert!(env.day_dir(2099, 2).is_dir());
    assert!(env.day_dir(2099, 4).is_dir());

    let result = env.run(&["--clean", "--year", "2099"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(!env.path("src/challenges/2099").exists());
}

#[test]
fn clean_missing_year_exits_one() {
    let env = TestEnv::new();
    let result = env.run(&["--clean", "--year", "1990"]);
    assert_eq!(result.exit_code, Some(1));
}

#[test]
fn fetch_requires_a_target() {
    let env = TestEnv::new();
    let result = env.run(&["--fetch", "--year", "2024", "--day", "1"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("--data flag or the --question flag"));
}

#[test]
fn fetch_transport_failure_writes_nothing() {
    let env = TestEnv::new();
    env.write_config(r#"{ "base_url": "http://127.0.0.1:9" }"#);

    let result = env.run(&["--fetch", "--data", "--year", "2024", "--day", "1"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(!env.path("src/challenges").exists());
}

#[test]
fn invalid_config_exits_one() {
    let env = TestEnv::new();
    env.write_config("{");
    let result = env.run(&["--generate", "--year", "2099"]);
    assert_eq!(result.exit_code, Some(1));
    assert!(result.stderr.contains("advent.json"));
}
