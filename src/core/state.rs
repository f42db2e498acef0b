//! Process state.

/// Exit status used when the run is interrupted.
pub const INTERRUPT_EXIT_CODE: i32 = 0;

/// Setup the global Ctrl+C handler. Call once at program start
///
/// Generation is a single short pass with nothing to unwind, so an interrupt
/// ends the process right away with a clean status instead of a trace.
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        crate::debug!("generate"; "interrupted");
        std::process::exit(INTERRUPT_EXIT_CODE);
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_exit_code() {
        assert_eq!(INTERRUPT_EXIT_CODE, 0);
    }

    #[test]
    fn test_setup_shutdown_handler() {
        // Only one handler may be installed per process
        assert!(setup_shutdown_handler().is_ok());
        assert!(setup_shutdown_handler().is_err());
    }
}
