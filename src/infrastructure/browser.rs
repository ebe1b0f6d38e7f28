// SPDX-License-Identifier: MPL-2.0
//! Opens URLs with the platform's default handler.

use crate::error::{Error, Result};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// Schemes the hero links are allowed to hand to the system opener.
const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

/// Returns the opener program and its leading arguments for this platform.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    }
}

/// Checks that `url` uses one of the allowed schemes.
pub fn validate_url(url: &str) -> Result<()> {
    if ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "refusing to open unsupported link: {url}"
        )))
    }
}

/// Launches the default browser or mail client for `url` without waiting
/// for it to exit.
pub fn open_url(url: &str) -> Result<()> {
    validate_url(url)?;

    let (program, args) = opener();
    let mut command = Command::new(program);
    command.args(args).arg(url);
    spawn_detached(command)?;

    tracing::info!(%url, "opened external link");
    Ok(())
}

/// Spawns `command` with null stdio and waits on it from a background
/// thread so the exited child is reaped.
///
/// The returned handle resolves to the exit status once the child exits.
fn spawn_detached(mut command: Command) -> Result<thread::JoinHandle<Option<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let reaper = thread::Builder::new()
        .name("link-opener-reaper".into())
        .spawn(move || match child.wait() {
            Ok(status) => {
                if !status.success() {
                    tracing::debug!(%status, "link opener exited with failure");
                }
                Some(status)
            }
            Err(err) => {
                tracing::warn!("failed to wait for link opener: {err}");
                None
            }
        })?;
    Ok(reaper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_and_mail_links_are_allowed() {
        assert!(validate_url("https://github.com/Codewarloc").is_ok());
        assert!(validate_url("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn other_schemes_are_refused() {
        assert!(validate_url("file:///etc/passwd").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn refused_links_are_invalid_input() {
        match validate_url("ftp://example.com") {
            Err(Error::InvalidInput(message)) => assert!(message.contains("ftp://example.com")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn spawned_opener_is_reaped() {
        let reaper = spawn_detached(Command::new("true")).expect("spawn true");
        let status = reaper.join().expect("reaper thread panicked");
        assert!(status.is_some_and(|status| status.success()));
    }

    #[test]
    fn missing_opener_is_an_io_error() {
        let err = spawn_detached(Command::new("iced-folio-no-such-opener"))
            .expect_err("program does not exist");
        assert!(matches!(err, Error::Io(_)));
    }
}
