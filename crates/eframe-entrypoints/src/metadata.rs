//! Build metadata captured by shadow-rs at compile time

use shadow_rs::shadow;

shadow!(build);

/// `<app> <version> (<branch>@<commit>)`, with `+dirty` for uncommitted changes
pub fn short_version_info(app_name: &str) -> String {
    let dirty = if build::GIT_CLEAN { "" } else { "+dirty" };
    format!(
        "{app_name} {} ({}@{}{dirty})",
        build::PKG_VERSION,
        build::BRANCH,
        build::SHORT_COMMIT,
    )
}

fn startup_lines(app_name: &str) -> [String; 2] {
    [
        short_version_info(app_name),
        format!(
            "Built {} with the {} toolchain",
            build::BUILD_TIME_2822,
            build::BUILD_RUST_CHANNEL
        ),
    ]
}

/// Log the version and build date at startup.
///
/// Android logs through `log` (picked up by android_logger), everything else
/// through the tracing subscriber.
pub fn log_version_info(app_name: &str) {
    for line in startup_lines(app_name) {
        #[cfg(target_os = "android")]
        log::info!("{line}");
        #[cfg(not(target_os = "android"))]
        tracing::info!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_version_info_names_app_and_version() {
        let info = short_version_info("Async Views");
        assert!(info.starts_with("Async Views "));
        assert!(info.contains(build::PKG_VERSION));
        assert!(info.contains(build::SHORT_COMMIT));
    }

    #[test]
    fn test_startup_lines() {
        let lines = startup_lines("demo");
        assert_eq!(lines[0], short_version_info("demo"));
        assert!(lines[1].contains(build::BUILD_RUST_CHANNEL));
    }
}
