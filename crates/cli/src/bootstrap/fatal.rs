use std::backtrace::Backtrace;
use tracing::error;

/// Any panic, in any task, ends the process.
///
/// The runtime would otherwise catch a panicking task and keep serving with
/// one responder missing. The device is expected to be restarted by its
/// supervisor or by a power cycle.
pub fn install_fatal_handler() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::force_capture();
        error!("Global exception handler: {}\n{}", info, backtrace);
        std::process::exit(1);
    }));
}
