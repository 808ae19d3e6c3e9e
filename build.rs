use std::env;

/// Build-time blink parameters: (environment variable, default value)
const PARAMS: [(&str, &str); 2] = [
    ("BLINK_INTERVAL_MS", "1000"),
    ("BLINK_SPINS_PER_US", "6"),
];

fn main() {
    // Read blink timing from environment variables (optional). The pin is
    // not configurable.
    // parameters::blink parses these at compile time and falls back to the
    // defaults on malformed input.
    for (name, default) in PARAMS {
        if let Ok(value) = env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
            println!("cargo:warning=Using {} from environment: {}", name, value);
        } else {
            println!("cargo:rustc-env={}={}", name, default);
        }
    }

    // Make layout.ld visible to the linker for the aarch64 firmware image
    if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
        println!("cargo:rustc-link-search={}", dir);
    }

    // Rerun if environment variables change
    for (name, _) in PARAMS {
        println!("cargo:rerun-if-env-changed={}", name);
    }
    println!("cargo:rerun-if-changed=layout.ld");
}
