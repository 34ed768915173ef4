// Blocking wrapper around the external xcursorgen compiler

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Result of one compiler invocation. A spawn failure is an `Err` at the call
/// site; anything after a successful spawn lands here, so the caller can log
/// one uniform per-cursor message instead of unwinding.
#[derive(Debug)]
pub struct CompileOutcome {
    /// Exit code, `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured stderr, for diagnostics only.
    pub stderr: String,
}

impl CompileOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// One-line diagnostic for log output.
    pub fn describe(&self) -> String {
        let status = match self.exit_code {
            Some(code) => format!("exit code {code}"),
            None => "killed by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{status}: {stderr}")
        }
    }
}

/// Run `{compiler} {in_file} {out_file}` and block until it exits. Waits
/// indefinitely; no timeout, no retry.
pub fn compile(compiler: &Path, in_file: &Path, out_file: &Path) -> Result<CompileOutcome> {
    let output = Command::new(compiler)
        .arg(in_file)
        .arg(out_file)
        .output()
        .with_context(|| format!("failed to run {}", compiler.display()))?;

    Ok(CompileOutcome {
        exit_code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exit_is_success() {
        let outcome = compile(Path::new("true"), Path::new("a.in"), Path::new("a")).unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.exit_code, Some(0));
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        let outcome = compile(Path::new("false"), Path::new("a.in"), Path::new("a")).unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, Some(1));
        assert_eq!(outcome.describe(), "exit code 1");
    }

    #[test]
    fn test_missing_compiler_is_err() {
        let result = compile(
            Path::new("png2xtheme-no-such-compiler"),
            Path::new("a.in"),
            Path::new("a"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_includes_stderr() {
        let outcome = CompileOutcome {
            exit_code: Some(1),
            stderr: "cannot open image\n".to_string(),
        };
        assert_eq!(outcome.describe(), "exit code 1: cannot open image");
    }
}
