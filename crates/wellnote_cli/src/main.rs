//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wellnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // mobile/FFI runtime setup.
    println!("wellnote_core ping={}", wellnote_core::ping());
    println!("wellnote_core version={}", wellnote_core::core_version());
    println!(
        "wellnote_core fallback_prompts={}",
        wellnote_core::fallback_prompts().len()
    );
}
