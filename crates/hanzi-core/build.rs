use toml::Value;

fn main() {
    // Validate embedded TOML files at compile time.
    let settings = parse("src/default_settings.toml", include_str!("src/default_settings.toml"));
    require_table(&settings, "src/default_settings.toml", "conversion");
    require_table(&settings, "src/default_settings.toml", "diagnostics");

    let path = "src/pronunciation/default_pronunciation.toml";
    let pronunciation = parse(path, include_str!("src/pronunciation/default_pronunciation.toml"));
    let mappings = require_table(&pronunciation, path, "mappings");
    if mappings.is_empty() {
        panic!("{path}: [mappings] is empty");
    }
    for (key, value) in mappings {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_lowercase()) {
            panic!("{path}: key {key:?} must be lowercase ASCII");
        }
        match value.as_str() {
            Some(s) if !s.is_empty() => {}
            _ => panic!("{path}: value for {key:?} must be a non-empty string"),
        }
    }
}

fn parse(path: &str, content: &str) -> Value {
    content
        .parse::<Value>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn require_table<'a>(root: &'a Value, path: &str, name: &str) -> &'a toml::Table {
    root.get(name)
        .and_then(Value::as_table)
        .unwrap_or_else(|| panic!("{path}: missing [{name}] table"))
}
