use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

#[cfg(target_os = "macos")]
fn launcher(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn launcher(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

/// Opens `path` in an image viewer and waits for the launcher to exit.
///
/// `program` replaces the platform launcher when set. Showing the page is
/// best effort: a viewer that cannot start or exits with an error is logged
/// and reported as `false`, never as a failed run.
pub fn present(path: &Path, program: Option<&Path>) -> bool {
    let mut command = match program {
        Some(program) => {
            let mut command = Command::new(program);
            command.arg(path);
            command
        }
        None => launcher(path),
    };
    debug!(?command, "launching image viewer");
    match command.status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!(path = %path.display(), %status, "image viewer exited with an error");
            false
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not launch image viewer");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_viewer_is_not_fatal() {
        let shown = present(
            Path::new("updated_comic.png"),
            Some(Path::new("/nonexistent/letterer-viewer")),
        );
        assert!(!shown);
    }
}
