//! Platform-specific shortcut labels

/// Submit shortcut display
/// Ctrl+S works on all platforms (terminals do not forward Cmd)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
#[cfg(target_os = "macos")]
pub const QUIT_SHORTCUT: &str = "⌃C";

#[cfg(not(target_os = "macos"))]
pub const QUIT_SHORTCUT: &str = "Ctrl+C";
