//! Non-blocking clipboard writes with an observable outcome.

use std::sync::mpsc::Sender;

use tracing::{debug, warn};

use crate::types::SwatchIndex;

/// Clipboard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    WriteError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "clipboard not available"),
            Self::WriteError(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Result of one copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub index: SwatchIndex,
    pub text: String,
    pub result: Result<(), ClipboardError>,
}

/// Handle a clipboard backend completes once the write settles.
///
/// Dropping it without calling [`CopyReporter::finish`] reports nothing.
#[derive(Debug)]
pub struct CopyReporter {
    index: SwatchIndex,
    text: String,
    sender: Sender<CopyOutcome>,
}

impl CopyReporter {
    pub(crate) fn new(index: SwatchIndex, text: String, sender: Sender<CopyOutcome>) -> Self {
        Self {
            index,
            text,
            sender,
        }
    }

    pub fn finish(self, result: Result<(), ClipboardError>) {
        match &result {
            Ok(()) => debug!(index = self.index, text = %self.text, "copied swatch color"),
            Err(err) => warn!(index = self.index, text = %self.text, %err, "copy failed"),
        }
        // The controller may already be gone; nobody is left to tell.
        let _ = self.sender.send(CopyOutcome {
            index: self.index,
            text: self.text,
            result,
        });
    }
}

/// Asynchronous "write text to the system clipboard" capability.
pub trait Clipboard {
    /// Starts the write and returns immediately. The outcome goes to `reporter`.
    fn write_text(&mut self, text: String, reporter: CopyReporter);
}

#[cfg(not(target_arch = "wasm32"))]
pub use system::SystemClipboard;

#[cfg(not(target_arch = "wasm32"))]
mod system {
    use std::env;
    use std::io::Write;
    use std::path::Path;
    use std::process::{Command, Stdio};
    use std::thread;

    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use tracing::info;

    use super::{Clipboard, ClipboardError, CopyReporter};

    /// External clipboard mechanisms, with OSC 52 as the terminal fallback.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ClipboardBackend {
        MacOS,
        Windows,
        Wayland,
        X11,
        Osc52,
    }

    /// Clipboard that writes from a worker thread so the UI never waits.
    #[derive(Debug, Clone)]
    pub struct SystemClipboard {
        backend: ClipboardBackend,
    }

    impl SystemClipboard {
        pub fn detect() -> Self {
            let backend = detect_backend();
            info!(backend = ?backend, "clipboard backend detected");
            Self { backend }
        }
    }

    impl Clipboard for SystemClipboard {
        fn write_text(&mut self, text: String, reporter: CopyReporter) {
            let backend = self.backend;
            thread::spawn(move || reporter.finish(write_with(backend, &text)));
        }
    }

    fn write_with(backend: ClipboardBackend, content: &str) -> Result<(), ClipboardError> {
        match backend {
            ClipboardBackend::MacOS => run_command_with_input("pbcopy", &[], content),
            ClipboardBackend::Windows => run_command_with_input("clip", &[], content),
            ClipboardBackend::Wayland => run_command_with_input("wl-copy", &[], content),
            ClipboardBackend::X11 => {
                if run_command_with_input("xclip", &["-selection", "clipboard"], content).is_ok() {
                    Ok(())
                } else {
                    run_command_with_input("xsel", &["--clipboard", "--input"], content)
                }
            }
            ClipboardBackend::Osc52 => write_osc52(&mut std::io::stdout().lock(), content),
        }
    }

    pub(super) fn osc52_sequence(content: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(content.as_bytes()))
    }

    fn write_osc52(writer: &mut impl Write, content: &str) -> Result<(), ClipboardError> {
        writer
            .write_all(osc52_sequence(content).as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|err| ClipboardError::WriteError(err.to_string()))
    }

    fn detect_backend() -> ClipboardBackend {
        if cfg!(target_os = "macos") && command_exists("pbcopy") {
            return ClipboardBackend::MacOS;
        }
        if cfg!(target_os = "windows") && command_exists("clip") {
            return ClipboardBackend::Windows;
        }
        if env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy") {
            return ClipboardBackend::Wayland;
        }
        if env::var_os("DISPLAY").is_some() && (command_exists("xclip") || command_exists("xsel")) {
            return ClipboardBackend::X11;
        }
        ClipboardBackend::Osc52
    }

    fn command_exists(command: &str) -> bool {
        if command.contains(std::path::MAIN_SEPARATOR) {
            return Path::new(command).is_file();
        }

        let Some(path_var) = env::var_os("PATH") else {
            return false;
        };

        env::split_paths(&path_var).any(|dir| {
            dir.join(command).is_file()
                || (cfg!(target_os = "windows") && dir.join(format!("{command}.exe")).is_file())
        })
    }

    fn run_command_with_input(cmd: &str, args: &[&str], content: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(cmd)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| ClipboardError::WriteError(err.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(content.as_bytes())
                .map_err(|err| ClipboardError::WriteError(err.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|err| ClipboardError::WriteError(err.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::WriteError(format!(
                "clipboard command failed: {cmd}"
            )))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn osc52_wraps_base64_payload() {
            assert_eq!(osc52_sequence("#abcdef"), "\x1b]52;c;I2FiY2RlZg==\x07");
        }

        #[test]
        fn osc52_writes_whole_sequence() {
            let mut out = Vec::new();
            write_osc52(&mut out, "hi").unwrap();
            assert_eq!(out, format!("\x1b]52;c;{}\x07", STANDARD.encode("hi")).into_bytes());
        }

        #[test]
        fn missing_command_is_a_write_error() {
            let err = run_command_with_input("swatchr-no-such-clipboard-tool", &[], "x").unwrap_err();
            assert!(matches!(err, ClipboardError::WriteError(_)));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reporter_delivers_outcome() {
        let (tx, rx) = mpsc::channel();
        let reporter = CopyReporter::new(2, "#010203".to_string(), tx);
        reporter.finish(Err(ClipboardError::NotAvailable));

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.index, 2);
        assert_eq!(outcome.text, "#010203");
        assert_eq!(outcome.result, Err(ClipboardError::NotAvailable));
    }

    #[test]
    fn reporter_survives_a_closed_channel() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        CopyReporter::new(0, "#000000".to_string(), tx).finish(Ok(()));
    }

    #[test]
    fn errors_display_their_cause() {
        assert_eq!(
            ClipboardError::WriteError("denied".into()).to_string(),
            "clipboard write failed: denied"
        );
    }
}
