/*!
Profiling and logging integration for eframe-entrypoints.

This module exposes a consistent API regardless of whether the profiling
feature is compiled in. There are two implementations:

- real: compiled only when `feature = "profiling"` is set. When the
  `ENABLE_PROFILING` environment variable is present at startup, a
  tracing-chrome layer records every span into a `trace-*.json` file, viewable
  in Perfetto or `chrome://tracing`.
- stub: compiled in all other configurations. Logging only.

Top-level API (always available):
- `setup_logging_and_profiling() -> ProfilingGuard`
*/

/// Default filter used when `RUST_LOG` is unset
fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,eframe::native=warn,egui::context=warn,wgpu_core=warn,wgpu_hal=warn,naga=warn"
    } else {
        "info,eframe=warn,wgpu_core=warn,wgpu_hal=warn"
    }
}

fn ensure_rust_log() {
    if std::env::var("RUST_LOG").is_err() {
        // Safety: single-threaded at startup
        unsafe {
            std::env::set_var("RUST_LOG", default_log_filter());
        }
    }
}

#[cfg(feature = "profiling")]
mod inner {
    use crate::cli::get_env;
    use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    /// Keeps the trace file open; dropping it flushes the recorded spans.
    #[must_use = "dropping the guard stops profiling"]
    pub struct ProfilingGuard {
        _flush: Option<FlushGuard>,
    }

    /// Initialize logging and, if `ENABLE_PROFILING` is set, the chrome trace layer.
    pub fn setup_logging_and_profiling() -> ProfilingGuard {
        super::ensure_rust_log();

        let fmt_layer = fmt::layer().with_filter(EnvFilter::from_default_env());

        let (chrome_layer, flush) = if get_env::<String>("ENABLE_PROFILING").is_some() {
            let (layer, guard) = ChromeLayerBuilder::new().include_args(true).build();
            (Some(layer), Some(guard))
        } else {
            (None, None)
        };

        let registry = tracing_subscriber::registry()
            .with(chrome_layer)
            .with(fmt_layer);
        if registry.try_init().is_err() {
            tracing::warn!("A global tracing subscriber was already installed");
        }

        if flush.is_some() {
            tracing::info!("✓ Profiling session started (chrome layer enabled)");
        } else {
            tracing::info!("Tracing initialized; set ENABLE_PROFILING to record a trace");
        }

        ProfilingGuard { _flush: flush }
    }
}

#[cfg(not(feature = "profiling"))]
mod inner {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    /// Nothing to flush in this build.
    pub struct ProfilingGuard;

    /// Initialize logging with sensible defaults; profiling is a no-op here.
    pub fn setup_logging_and_profiling() -> ProfilingGuard {
        super::ensure_rust_log();

        let fmt_layer = fmt::layer().with_filter(EnvFilter::from_default_env());
        if tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .is_err()
        {
            tracing::warn!("A global tracing subscriber was already installed");
        }

        tracing::info!("Logging initialized (profiling disabled in this build)");
        ProfilingGuard
    }
}

// Re-export a stable API surface regardless of which `inner` module was compiled.
pub use inner::{ProfilingGuard, setup_logging_and_profiling};
