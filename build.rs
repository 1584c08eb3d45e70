//! Build script for Better Health
//!
//! With the `ui` feature, rebuilds when the UI output changes and warns when
//! `ui/dist` has not been built yet.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if std::env::var_os("CARGO_FEATURE_UI").is_some() {
        println!("cargo:rerun-if-changed=ui/dist/");
        println!("cargo:rerun-if-changed=ui/src/");
        println!("cargo:rerun-if-changed=ui/index.html");
        check_ui_dist();
    }
}

fn check_ui_dist() {
    let index = std::path::Path::new("ui/dist/index.html");
    if !index.exists() {
        println!("cargo:warning=Better Health UI: ui/dist/index.html not found.");
        println!("cargo:warning=Build the UI first:  cd ui && trunk build --release");
        println!("cargo:warning=Until then the server answers UI paths with a 404 hint.");
    }
}
