use std::env;
use std::fs;
use std::path::Path;

// Keys read by `AppConfig::from_env` through `option_env!`.
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "LOGIN_ENDPOINT",
    "UPLOAD_ENDPOINT",
    "STATUS_ENDPOINT",
    "ANALYSIS_PATH",
    "POLL_INTERVAL_MS",
    "FAILED_REDIRECT_DELAY_MS",
    "STATUS_REQUEST_TIMEOUT_MS",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env: ignoring unknown key {}", key);
            continue;
        }

        // Variables already set in the environment win over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
