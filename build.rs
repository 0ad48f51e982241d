use std::fs;

fn main() {
    // Validate the compiled-in config at build time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    let has_documents = table
        .get("batch")
        .and_then(|batch| batch.get("documents"))
        .and_then(|docs| docs.as_array())
        .is_some_and(|docs| !docs.is_empty());
    if !has_documents {
        panic!("default_config.toml must list at least one document in [batch]");
    }
}
