use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Copy config.toml next to the binary so Config::load finds it first
    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .unwrap()
        .join("config.toml");

    fs::copy(config_path, dest_path).unwrap();
}
