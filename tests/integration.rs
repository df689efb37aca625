use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn setup_dir(name: &str) -> PathBuf {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    test_dir
}

fn write_file(test_dir: &Path, name: &str, contents: &str) -> String {
    let path = test_dir.join(name);
    fs::write(&path, contents).expect("failed to write file");
    path.to_str()
        .expect("failed to convert path to string")
        .to_string()
}

fn run_bin(args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_olsfit"));

    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute command")
}

fn run_bin_ok(args: &[&str]) -> String {
    let output = run_bin(args);

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );

    stdout_str.trim().to_string()
}

fn run_bin_rmse(args: &[&str]) -> f64 {
    run_bin_ok(args)
        .parse()
        .expect("failed to parse stdout as a number")
}

#[test]
fn exact_fit_workflow() {
    let test_dir = setup_dir("exact_fit_workflow");

    let train = write_file(&test_dir, "train.csv", "size,weight\n1,2\n2,4\n3,6\n");
    let test = write_file(&test_dir, "test.csv", "size,weight\n4,8\n5,10\n");

    let rmse = run_bin_rmse(&[&train, &test]);
    assert!(rmse.abs() < 1e-9, "rmse is {rmse}");

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn noisy_fit_workflow() {
    let test_dir = setup_dir("noisy_fit_workflow");

    let train = write_file(
        &test_dir,
        "train.csv",
        "id,size,weight\na,1,2\nb,2,3\nc,3,5\nd,4,4\n",
    );
    let test = write_file(&test_dir, "test.csv", "id,size,weight\ne,5,6\n");

    // slope 0.8, intercept 1.5, prediction 5.5
    let rmse = run_bin_rmse(&[&train, &test]);
    assert!((rmse - 0.5).abs() < 1e-9, "rmse is {rmse}");

    let report = run_bin_ok(&[&train, &test, "--json"]);
    let report: serde_json::Value =
        serde_json::from_str(&report).expect("failed to parse report");
    assert!((report["slope"].as_f64().unwrap() - 0.8).abs() < 1e-9);
    assert!((report["intercept"].as_f64().unwrap() - 1.5).abs() < 1e-9);
    assert_eq!(report["n_train"], 4);
    assert_eq!(report["n_test"], 1);
    assert!((report["rmse"].as_f64().unwrap() - 0.5).abs() < 1e-9);

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn custom_columns_workflow() {
    let test_dir = setup_dir("custom_columns_workflow");

    let train = write_file(&test_dir, "train.csv", "age;height\n1;3\n2;5\n3;7\n");
    let test = write_file(&test_dir, "test.csv", "age;height\n10;21\n");
    let config = write_file(
        &test_dir,
        "config.toml",
        "[columns]\nx = \"age\"\n\n[input]\ndelimiter = \";\"\n",
    );

    let rmse = run_bin_rmse(&[&train, &test, "--config", &config, "age", "height"]);
    assert!(rmse.abs() < 1e-9, "rmse is {rmse}");

    // without the command line selectors the y column falls back to "weight"
    let output = run_bin(&[&train, &test, "--config", &config]);
    assert!(!output.status.success());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn failing_workflows() {
    let test_dir = setup_dir("failing_workflows");

    let constant = write_file(&test_dir, "constant.csv", "size,weight\n2,1\n2,3\n");
    let test = write_file(&test_dir, "test.csv", "size,weight\n1,1\n");
    let missing = test_dir.join("missing.csv");
    let missing = missing.to_str().expect("failed to convert path to string");

    for args in [
        vec![constant.as_str(), test.as_str()],
        vec![missing, test.as_str()],
        vec![test.as_str(), test.as_str(), "length"],
        vec![test.as_str()],
    ] {
        let output = run_bin(&args);
        assert!(!output.status.success(), "binary succeeded with {args:?}");
        assert!(output.stdout.is_empty(), "binary printed a result with {args:?}");
    }

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn single_error_line_workflow() {
    let test_dir = setup_dir("single_error_line_workflow");

    let constant = write_file(&test_dir, "constant.csv", "size,weight\n0.1,1\n0.1,2\n0.1,3\n");
    let train = write_file(&test_dir, "train.csv", "size,weight\n1,2\n2,4\n3,6\n");
    let test = write_file(&test_dir, "test.csv", "size,weight\n4,8\n");

    let output = run_bin(&[&constant, &test]);
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");
    assert!(!output.status.success());
    assert_eq!(stderr_str.lines().count(), 1, "stderr:\n{stderr_str}");
    assert!(stderr_str.contains("zero variance"), "stderr:\n{stderr_str}");

    let output = run_bin(&[&train, &test]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    fs::remove_dir_all(&test_dir).ok();
}
