use {
    log::warn,
    std::{path::Path, process::Command},
};

/// Runs clang-format in place over a generated file. The emitters produce
/// compilable code either way, so an unavailable or failing formatter only
/// warrants a warning.
pub fn clang_format(path: &Path) {
    let formatter = if cfg!(windows) {
        "clang-format.bat"
    } else {
        "clang-format"
    };
    match Command::new(formatter)
        .args(["-i", "-style=chromium"])
        .arg(path)
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => warn!("{} exited with {} for {}", formatter, status, path.display()),
        Err(e) => warn!(
            "could not run {} on {}: {}",
            formatter,
            path.display(),
            e
        ),
    }
}
