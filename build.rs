use std::env;
use std::fs;
use std::path::Path;

// Forwards FOODIE_* keys from an optional .env file to `option_env!` in config.rs.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => return,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !key.starts_with("FOODIE_") {
                println!("cargo:warning=Ignoring unknown key {} in .env", key);
                continue;
            }

            // Values already exported in the shell win over the file
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
