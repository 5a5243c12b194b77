use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

// Puts memory.x where the cortex-m-rt linker script can find it
fn main() {
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());

    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();

    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");
}
