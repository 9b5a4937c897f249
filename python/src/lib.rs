//! deviceapps-python
//!
//! Python bindings for deviceapps-core (PyO3).

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

mod ffi;

/// Python module entry point
#[pymodule]
fn pb(m: &Bound<'_, PyModule>) -> PyResult<()> {
    init_logging();
    ffi::register(m)?;
    Ok(())
}

/// stderr subscriber filtered by `RUST_LOG` (default `warn`).
/// A host that already installed a global subscriber keeps it.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
