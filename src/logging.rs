pub const LOG_ENV_VAR: &str = "TASKLIST_LOG";

/// Picks the log spec: `TASKLIST_LOG`, then `RUST_LOG`, then the build default.
/// Blank values count as unset.
pub fn log_spec(app_var: Option<String>, rust_log: Option<String>, debug_build: bool) -> String {
    let default_spec = if debug_build {
        "warn,task_list_app_lib=debug"
    } else {
        "warn,task_list_app_lib=info"
    };
    app_var
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| default_spec.to_string())
}

#[cfg(all(feature = "app", not(test)))]
pub fn init_logging() -> Result<(), flexi_logger::FlexiLoggerError> {
    use flexi_logger::{detailed_format, Logger, WriteMode};

    let spec = log_spec(
        std::env::var(LOG_ENV_VAR).ok(),
        std::env::var("RUST_LOG").ok(),
        cfg!(debug_assertions),
    );

    // Task state is memory-only; logs stay on stderr instead of the app data dir.
    Logger::try_with_str(&spec)?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .format_for_stderr(detailed_format)
        .start()?;

    install_panic_hook();

    log::info!("logger initialized spec={spec}");
    Ok(())
}

/// Renders a panic payload. `panic!` produces either `&str` or `String`.
#[cfg(any(feature = "app", test))]
fn panic_payload_text(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(|s| s.as_str()))
        .unwrap_or("<non-string panic payload>")
}

#[cfg(any(feature = "app", test))]
fn panic_record(payload: &(dyn std::any::Any + Send), location: Option<String>) -> String {
    let location = location.unwrap_or_else(|| "<unknown>".to_string());
    format!("panic: payload={} location={location}", panic_payload_text(payload))
}

// Stderr is the only sink, so the record is logged before the default hook prints
// its own message to the same stream.
#[cfg(all(feature = "app", not(test)))]
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info: &std::panic::PanicHookInfo<'_>| {
        let record = panic_record(info.payload(), info.location().map(|loc| loc.to_string()));
        let backtrace = std::backtrace::Backtrace::force_capture();

        log::error!("{record}\nbacktrace:\n{backtrace}");
        default_hook(info);
    }));
}
