//! Verdict type and the rule that folds a validator run into one.

/// Verdict from one external validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub valid: bool,
    /// Diagnostic text collected from the run. Always a single entry: the
    /// process standard output, which may be empty.
    pub messages: Vec<String>,
}

impl Outcome {
    /// Diagnostics as one string, entries separated by ", ".
    pub fn joined(&self) -> String {
        self.messages.join(", ")
    }
}

/// Fold a validator run into a verdict.
///
/// A run counts as valid only when the process started, exited successfully,
/// and stayed silent on both streams. Anything written to stdout or stderr, a
/// non-zero exit, or a failure to start the process at all makes the document
/// invalid. Diagnostics carry stdout only; stderr influences the verdict but
/// never surfaces. jing writes its findings to stdout and is silent on
/// conforming documents, so the silence rule holds for it in practice.
pub fn classify(spawned: bool, exited_ok: bool, stdout: &str, stderr: &str) -> Outcome {
    Outcome {
        valid: spawned && exited_ok && stdout.is_empty() && stderr.is_empty(),
        messages: vec![stdout.to_string()],
    }
}
