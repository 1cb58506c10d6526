use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Fresh working directory with no model and no config file
fn work_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("exoplanet-cli-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn exoplanet_predict<S: AsRef<OsStr>>(dir: &PathBuf, args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exoplanet-predict"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_no_arguments() {
    let dir = work_dir("no-args");
    let output = exoplanet_predict::<&str>(&dir, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        r#"{"error": "No input data provided"}"#
    );
}

#[test]
fn test_no_arguments_with_broken_config() {
    let dir = work_dir("no-args-bad-config");
    std::fs::write(dir.join("exoplanet.toml"), "log_format = \"xml\"\n").unwrap();

    let output = exoplanet_predict::<&str>(&dir, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        r#"{"error": "No input data provided"}"#
    );
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = work_dir("non-utf8");
    let output = exoplanet_predict(&dir, &[OsString::from_vec(vec![b'[', 0xff, b']'])]);
    assert_eq!(output.status.code(), Some(1));
    let error = stdout_json(&output)["error"].as_str().unwrap().to_string();
    assert!(error.contains("UTF-8"));
}

#[test]
fn test_unknown_log_level_still_predicts() {
    let dir = work_dir("bad-log-level");
    std::fs::write(
        dir.join("exoplanet.toml"),
        "log_level = \"chatty\"\n\n[fallback]\nenabled = true\n",
    )
    .unwrap();

    let output = exoplanet_predict(&dir, &["[1, 2, 3, 4]"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown log level \"chatty\""));
    assert_eq!(stdout_json(&output)["predictions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_invalid_json() {
    let dir = work_dir("invalid-json");
    let output = exoplanet_predict(&dir, &["not valid json"]);
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].is_string());
    assert!(json.get("predictions").is_none());
}

#[test]
fn test_non_numeric_input() {
    let dir = work_dir("non-numeric");
    let output = exoplanet_predict(&dir, &[r#"["a", "b"]"#]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_json(&output)["error"].is_string());
}

#[test]
fn test_missing_model() {
    let dir = work_dir("missing-model");
    let output = exoplanet_predict(&dir, &["[1, 2, 3, 4]"]);
    assert_eq!(output.status.code(), Some(1));
    let error = stdout_json(&output)["error"].as_str().unwrap().to_string();
    assert!(error.contains("exoplanet_model.onnx"));
}

#[test]
fn test_fallback_from_config_file() {
    let dir = work_dir("fallback");
    std::fs::write(
        dir.join("exoplanet.toml"),
        "model_path = \"missing.onnx\"\n\n[fallback]\nenabled = true\n",
    )
    .unwrap();

    let output = exoplanet_predict(&dir, &["[[1, 2, 3, 4], [4, 3, 2, 1]]"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    let predictions = json["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 2);
    for p in predictions {
        let confidence = p["confidence"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&confidence));
        assert_eq!(p["isExoplanet"].as_bool().unwrap(), confidence > 0.5);
    }
}

#[test]
fn test_all_zero_light_curve_with_fallback() {
    let dir = work_dir("all-zero");
    std::fs::write(dir.join("exoplanet.toml"), "[fallback]\nenabled = true\n").unwrap();

    let output = exoplanet_predict(&dir, &["[0, 0, 0, 0, 0, 0, 0, 0]"]);
    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["predictions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_ragged_rows_rejected() {
    let dir = work_dir("ragged");
    std::fs::write(dir.join("exoplanet.toml"), "[fallback]\nenabled = true\n").unwrap();

    let output = exoplanet_predict(&dir, &["[[1, 2, 3], [1, 2]]"]);
    assert_eq!(output.status.code(), Some(1));
    let error = stdout_json(&output)["error"].as_str().unwrap().to_string();
    assert!(error.contains("equal length"));
}

#[test]
fn test_malformed_config_file() {
    let dir = work_dir("bad-config");
    std::fs::write(dir.join("exoplanet.toml"), "log_format = \"xml\"\n").unwrap();

    let output = exoplanet_predict(&dir, &["[1, 2, 3]"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_json(&output)["error"].is_string());
}
