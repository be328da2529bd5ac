mod support;

use std::fs;

use tempfile::tempdir;

use support::{closed_port_url, run_burstload, spawn_status_server_or_skip};

fn stdout_of(output: &std::process::Output) -> Result<String, String> {
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn count_for(stdout: &str, label: &str) -> Result<u64, String> {
    let prefix = format!("{} total: \t", label);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .ok_or_else(|| format!("Missing '{}' line in:\n{}", label, stdout))?
        .trim()
        .parse()
        .map_err(|err| format!("Bad count for {}: {}", label, err))
}

#[test]
fn e2e_text_summary_against_ok_server() -> Result<(), String> {
    let Some((url, _server)) = spawn_status_server_or_skip(200)? else {
        return Ok(());
    };

    let output = run_burstload([
        "-u",
        url.as_str(),
        "-r",
        "40",
        "-b",
        "4",
        "-t",
        "500ms",
        "--timeout",
        "1s",
        "--wait-ongoing-requests-after-deadline",
    ])?;
    let stdout = stdout_of(&output)?;

    let labels: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split(" total:").next())
        .collect();
    if labels != ["total", "1xx", "2xx", "3xx", "4xx", "5xx"] {
        return Err(format!("Unexpected summary layout:\n{}", stdout));
    }
    if count_for(&stdout, "2xx")? == 0 {
        return Err(format!("Expected 2xx responses:\n{}", stdout));
    }
    for label in ["total", "1xx", "3xx", "4xx", "5xx"] {
        if count_for(&stdout, label)? != 0 {
            return Err(format!("Expected no {} responses:\n{}", label, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_json_summary_against_closed_port() -> Result<(), String> {
    let url = closed_port_url()?;
    let output = run_burstload([
        "-u",
        url.as_str(),
        "-r",
        "20",
        "-b",
        "2",
        "-t",
        "300ms",
        "--timeout",
        "200ms",
        "--output-format",
        "json",
        "--wait-ongoing-requests-after-deadline",
    ])?;
    let stdout = stdout_of(&output)?;

    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).map_err(|err| format!("bad json: {}", err))?;
    let get = |key: &str| value.get(key).and_then(serde_json::Value::as_u64);
    let attempts = get("attempts").ok_or("Missing attempts")?;
    if attempts == 0 || get("total") != Some(attempts) {
        return Err(format!("Expected every attempt in total: {}", value));
    }
    for label in ["1xx", "2xx", "3xx", "4xx", "5xx", "errors"] {
        if get(label) != Some(0) {
            return Err(format!("Expected {} = 0: {}", label, value));
        }
    }
    Ok(())
}

#[test]
fn e2e_default_grace_against_failing_server() -> Result<(), String> {
    let Some((url, _server)) = spawn_status_server_or_skip(503)? else {
        return Ok(());
    };

    // Default timeout and grace sleep; no wait for in-flight requests.
    let output = run_burstload([
        "-u",
        url.as_str(),
        "-r",
        "40",
        "-b",
        "4",
        "-t",
        "500ms",
        "--output-format",
        "json",
    ])?;
    let stdout = stdout_of(&output)?;

    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).map_err(|err| format!("bad json: {}", err))?;
    let get = |key: &str| value.get(key).and_then(serde_json::Value::as_u64);
    let attempts = get("attempts").ok_or("Missing attempts")?;
    if attempts == 0 || get("5xx") != Some(attempts) {
        return Err(format!("Expected every attempt in 5xx: {}", value));
    }
    if get("unfinished") != Some(0) {
        return Err(format!("Expected nothing unfinished: {}", value));
    }
    for label in ["total", "1xx", "2xx", "3xx", "4xx", "errors"] {
        if get(label) != Some(0) {
            return Err(format!("Expected {} = 0: {}", label, value));
        }
    }
    Ok(())
}

#[test]
fn e2e_config_file_is_applied() -> Result<(), String> {
    let Some((url, _server)) = spawn_status_server_or_skip(404)? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("run.toml");
    let content = format!(
        "url = \"{}\"\nrate = 20\nburst = 2\nduration = \"300ms\"\ntimeout = \"1s\"\nwait_ongoing_requests_after_deadline = true\n",
        url
    );
    fs::write(&config_path, content).map_err(|err| format!("write failed: {}", err))?;

    let output = run_burstload([
        std::ffi::OsStr::new("--config"),
        config_path.as_os_str(),
    ])?;
    let stdout = stdout_of(&output)?;

    if count_for(&stdout, "4xx")? == 0 {
        return Err(format!("Expected 4xx responses:\n{}", stdout));
    }
    if count_for(&stdout, "2xx")? != 0 {
        return Err(format!("Expected no 2xx responses:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_rejects_zero_rate() -> Result<(), String> {
    let output = run_burstload(["--rate", "0"])?;
    if output.status.success() {
        return Err("Expected failure for --rate 0".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_rejects_unsupported_scheme() -> Result<(), String> {
    let output = run_burstload(["-u", "ftp://127.0.0.1/", "-t", "100ms"])?;
    if output.status.success() {
        return Err("Expected failure for ftp:// target".to_owned());
    }
    Ok(())
}
