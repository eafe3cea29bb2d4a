//! Cross-platform entry points system for egui/eframe applications
//!
//! This crate provides reusable entry points for native (desktop) and Android platforms,
//! along with utilities for CLI parsing, logging/profiling setup, and metadata display.
//!
//! # Usage
//!
//! In your application's `lib.rs`, use the `eframe_app!` macro to define all entry points:
//!
//! ```ignore
//! eframe_entrypoints::eframe_app!(
//!     "My App Name",
//!     |cc| Box::new(MyApp::new(cc))
//! );
//! ```
//!
//! This generates:
//! - Android: `android_main` entry point
//! - Native: `run_native()` function to call from `main.rs`

pub mod cli;
pub mod profiling;

// Re-export commonly used types
pub use cli::parse_args;

mod metadata;
pub use metadata::{log_version_info, short_version_info};

/// Unified macro to define all platform entry points for an eframe application.
///
/// # Arguments
///
/// * `$app_name` - A string literal with the application name (used for window title, logging, etc.)
/// * `$app_creator` - A closure that takes `&eframe::CreationContext` and returns `Box<dyn eframe::App>`
///
/// The calling crate must depend on `tokio` (native) and `winit` (Android).
///
/// For **Android** targets, generates:
/// ```ignore
/// #[no_mangle]
/// pub fn android_main(app: winit::platform::android::activity::AndroidApp) { ... }
/// ```
///
/// For **native** targets, generates:
/// ```ignore
/// pub fn run_native() { ... }  // Call this from main.rs
/// ```
#[macro_export]
macro_rules! eframe_app {
    ($app_name:expr, $app_creator:expr) => {
        // ==========================================
        // Android entry point
        // ==========================================
        #[cfg(target_os = "android")]
        #[unsafe(no_mangle)] // SAFETY: there is no other global function of this name
        pub fn android_main(app: ::winit::platform::android::activity::AndroidApp) {
            $crate::android_main_impl($app_name, app, $app_creator);
        }

        // ==========================================
        // Native entry point (called from main.rs)
        // ==========================================
        /// Run the application on native (desktop) platforms.
        #[cfg(not(target_os = "android"))]
        pub fn run_native() {
            let rt = match ::tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("Failed to create Tokio runtime: {e}");
                    return;
                }
            };

            rt.block_on(async {
                $crate::native_main_impl($app_name, $app_creator).await;
            });
        }
    };
}

/// Internal implementation for Android entry point.
/// Use the `eframe_app!` macro instead of calling this directly.
#[cfg(target_os = "android")]
#[doc(hidden)]
pub fn android_main_impl(
    app_name: &str,
    app: winit::platform::android::activity::AndroidApp,
    app_creator: impl FnOnce(&eframe::CreationContext<'_>) -> Box<dyn eframe::App> + Send + 'static,
) {
    use winit::platform::android::EventLoopBuilderExtAndroid;

    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );
    log::info!("Starting {} on Android", app_name);

    unsafe {
        // Safe: single-threaded at startup
        std::env::set_var("RUST_BACKTRACE", "full");
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to create Tokio runtime: {e}");
            return;
        }
    };

    let app_name_owned = app_name.to_string();
    rt.block_on(async {
        log_version_info(&app_name_owned);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_title(&app_name_owned),
            event_loop_builder: Some(Box::new(move |builder| {
                builder.with_android_app(app);
            })),
            ..Default::default()
        };

        if let Err(e) = eframe::run_native(
            &app_name_owned,
            native_options,
            Box::new(move |cc| Ok(app_creator(cc))),
        ) {
            log::error!("eframe exited with an error: {e}");
        }
    });
}

/// Internal implementation for native (desktop) entry point.
/// Use the `eframe_app!` macro instead of calling this directly.
#[cfg(not(target_os = "android"))]
#[doc(hidden)]
pub async fn native_main_impl(
    app_name: &str,
    app_creator: impl FnOnce(&eframe::CreationContext<'_>) -> Box<dyn eframe::App>,
) {
    // Must run before any logging so the fmt and chrome layers share one subscriber.
    // The guard flushes the trace file (if any) when the window closes.
    let _profiling = crate::profiling::setup_logging_and_profiling();

    log_version_info(app_name);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_title(app_name),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        app_name,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc))),
    ) {
        tracing::error!("eframe exited with an error: {e}");
    }
}
