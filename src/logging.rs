//! Console Logging
//!
//! Routes `tracing` events to the browser console.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

use crate::config::ClientConfig;

/// Install the global subscriber; call once before mounting
pub fn init(config: &ClientConfig) {
    let level = config.tracing_level().unwrap_or(Level::INFO);
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .set_report_logs_in_timings(false)
            .build(),
    );

    if config.tracing_level().is_none() {
        tracing::warn!(log_level = %config.log_level, "unknown log level, using info");
    }
}
