//! Clipboard access through the platform clipboard commands.

use std::io::Write;
use std::process::{Command, Stdio};

/// Candidate commands, tried in order.
fn candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", vec![])]
    } else if cfg!(target_os = "windows") {
        vec![("clip", vec![])]
    } else {
        vec![
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
        ]
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let Ok(mut child) = child else {
        return false;
    };

    if let Some(mut stdin) = child.stdin.take()
        && stdin.write_all(text.as_bytes()).is_err()
    {
        let _ = child.kill();
        return false;
    }

    matches!(child.wait(), Ok(s) if s.success())
}

/// Copy `text` to the clipboard. Returns the tool that accepted it, or
/// `None` when no clipboard command is available.
pub fn copy_to_clipboard(text: &str) -> Option<&'static str> {
    candidates()
        .into_iter()
        .find(|(program, args)| pipe_to(program, args, text))
        .map(|(program, _)| program)
}
