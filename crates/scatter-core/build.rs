// File: crates/scatter-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for the PNG renderer.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
