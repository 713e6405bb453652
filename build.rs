fn main() {
    // Keep `check-cfg` happy even when we skip `tauri_build::build()` (core-only builds).
    println!("cargo:rustc-check-cfg=cfg(desktop)");
    println!("cargo:rustc-check-cfg=cfg(mobile)");

    // `tauri_build` is only a build-dependency when the `app` feature is on, so the
    // core reducer and its tests never touch the Tauri build helpers.
    #[cfg(feature = "app")]
    tauri_build::build()
}
