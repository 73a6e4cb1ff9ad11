use std::env;
use std::fs;
use std::path::Path;

// Variables que config.rs lee con option_env!
const FORWARDED_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "PAGE_SIZE",
    "PAGE_WINDOW_SIZE",
    "NETWORK_TIMEOUT_SECONDS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file found, using compiled-in defaults (see .env.example)");
            return;
        }
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

        if !FORWARDED_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key: {}", key);
            continue;
        }

        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
