use chrono::Datelike;

fn main() {
    // Stamp the copyright year in the footer with the year the site was built
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    println!("cargo:rerun-if-changed=build.rs");
}
