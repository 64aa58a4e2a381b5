fn main() {
    // Stamp the build so the footer can show when the site was published
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The contact relay endpoint can be swapped per deployment
    println!("cargo:rerun-if-env-changed=CONTACT_RELAY_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
