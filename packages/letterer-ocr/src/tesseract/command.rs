use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

use crate::engine::{OcrError, PageSegMode};

fn spawn(binary: &Path, command: &mut Command) -> Result<Output, OcrError> {
    command.output().map_err(|e| match e.kind() {
        ErrorKind::NotFound => OcrError::Unavailable(format!(
            "{} not found; is tesseract installed?",
            binary.display()
        )),
        _ => OcrError::Io(e),
    })
}

fn stdout_or_error(output: Output) -> Result<String, OcrError> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OcrError::EngineError(format!(
            "tesseract exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs `tesseract <image> stdout -l <lang> --psm <mode>` and returns stdout.
pub fn recognize_file(
    binary: &Path,
    image: &Path,
    lang: &str,
    mode: PageSegMode,
) -> Result<String, OcrError> {
    let mut command = Command::new(binary);
    command
        .arg(image)
        .arg("stdout")
        .arg("-l")
        .arg(lang)
        .arg("--psm")
        .arg(mode.as_arg().to_string());
    let output = spawn(binary, &mut command)?;
    stdout_or_error(output)
}

/// Returns the first line of `tesseract --version`.
pub fn version(binary: &Path) -> Result<String, OcrError> {
    let mut command = Command::new(binary);
    command.arg("--version");
    let output = spawn(binary, &mut command)?;
    // Older releases print the banner on stderr.
    let banner = if output.stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        stdout_or_error(output)?
    };
    Ok(banner.lines().next().unwrap_or_default().trim().to_string())
}
