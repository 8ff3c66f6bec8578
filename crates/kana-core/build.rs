const EMBEDDED: &[(&str, &str, &str)] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        "notice",
    ),
    (
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
        "mappings",
    ),
];

fn main() {
    // Embedded defaults are parsed with `expect` at runtime, so reject them here.
    for &(path, content, section) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        let value = match toml::from_str::<toml::Table>(content) {
            Ok(v) => v,
            Err(e) => panic!("{path} contains invalid TOML: {e}"),
        };
        if !value.contains_key(section) {
            panic!("{path} is missing the [{section}] table");
        }
    }
}
