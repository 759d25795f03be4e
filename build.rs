use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";
const PATH_KEYS: [&str; 4] = ["static_dir", "content_dir", "template", "output_dir"];

/// Reject a `default_config.toml` that `Config` could not deserialize.
fn check_schema(table: &toml::Table) -> Result<(), String> {
    match table.get("base_path") {
        Some(toml::Value::String(_)) => {}
        other => return Err(format!("`base_path` must be a string, found {other:?}")),
    }

    let Some(toml::Value::Table(paths)) = table.get("paths") else {
        return Err("missing `[paths]` table".to_string());
    };
    for key in PATH_KEYS {
        match paths.get(key) {
            Some(toml::Value::String(_)) => {}
            other => return Err(format!("`paths.{key}` must be a string, found {other:?}")),
        }
    }
    Ok(())
}

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("cannot read {DEFAULT_CONFIG}: {e}"));
    let table: toml::Table = content
        .parse()
        .unwrap_or_else(|e| panic!("{DEFAULT_CONFIG} is not valid TOML: {e}"));

    if let Err(reason) = check_schema(&table) {
        panic!("{DEFAULT_CONFIG} does not match the config schema: {reason}");
    }
}
