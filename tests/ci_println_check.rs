//! CI validation tests for println! usage
//!
//! Console output from the TUI or the sync layer corrupts the alternate
//! screen; those modules must go through the `log` facade.

use std::fs;
use std::path::Path;

fn offending_lines(content: &str, needle: &str) -> Vec<usize> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(needle) && !line.trim_start().starts_with("//"))
        .map(|(n, _)| n + 1)
        .collect()
}

fn check_files(files: &[&str]) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    for file_path in files {
        let path = root.join(file_path);
        assert!(path.exists(), "{} is missing", file_path);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Failed to read {}", file_path));

        // eprintln! contains println!, so one scan covers both
        let lines = offending_lines(&content, "println!");
        if !lines.is_empty() {
            panic!(
                "Found println!/eprintln! statements in {}: lines {:?}\n\
                 Use log::info!/log::warn! or a notification instead.",
                file_path, lines
            );
        }
    }
}

#[test]
fn test_no_println_in_tui_components() {
    check_files(&[
        "src/cli/tui/event_loop.rs",
        "src/cli/tui/app.rs",
        "src/cli/tui/ui.rs",
        "src/cli/tui/mod.rs",
    ]);
}

#[test]
fn test_no_println_in_sync_and_transport() {
    check_files(&[
        "src/sync/controller.rs",
        "src/sync/state.rs",
        "src/sync/notifications.rs",
        "src/remote/api.rs",
        "src/remote/push.rs",
    ]);
}
