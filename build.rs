fn main() {
    println!("cargo:rerun-if-changed=sdkconfig.defaults");

    // Host builds (lib + tests) carry no ESP-IDF toolchain; only the
    // firmware binary needs the sysenv passthrough.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
