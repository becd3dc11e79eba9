use std::sync::atomic::{AtomicBool, Ordering};

static SIGINT: AtomicBool = AtomicBool::new(false);

pub fn received_ctrl_c() -> bool {
    SIGINT.load(Ordering::SeqCst)
}

/// Installs a Ctrl-C handler that only raises a flag; long running loops poll
/// [`received_ctrl_c`] and stop at the next convenient point.
pub fn initialize() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SIGINT.store(true, Ordering::SeqCst);
    })?;
    Ok(())
}
