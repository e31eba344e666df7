use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_dir = PathBuf::from(&crate_dir).join("include");

    std::fs::create_dir_all(&output_dir).unwrap();

    // A header that fails to generate must not block building the library
    match cbindgen::generate(&crate_dir) {
        Ok(bindings) => {
            bindings.write_to_file(output_dir.join("slang.h"));
        }
        Err(err) => {
            println!("cargo:warning=failed to generate slang.h: {err}");
        }
    }

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/api.rs");
    println!("cargo:rerun-if-changed=src/memory.rs");
    println!("cargo:rerun-if-changed=../slang-abi/src/layout.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
