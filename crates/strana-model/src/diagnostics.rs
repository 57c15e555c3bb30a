#![deny(unsafe_code)]

use std::fmt;

/// Diagnostic counts returned by the engine's apply step.
///
/// The apply response is the sole success signal for a transaction: any
/// fatal or error count means the engine applied nothing, while warnings
/// accompany a commit that did go through.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommitDiagnostics {
    pub fatal: u32,
    pub errors: u32,
    pub warnings: u32,
    pub infos: u32,
    /// Engine-side log reference, when one was produced.
    pub import_log: Option<String>,
}

impl CommitDiagnostics {
    /// Zero-diagnostics result for a no-op commit.
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn is_rejected(&self) -> bool {
        self.fatal > 0 || self.errors > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings > 0
    }
}

impl fmt::Display for CommitDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fatal, {} errors, {} warnings, {} infos",
            self.fatal, self.errors, self.warnings, self.infos
        )?;
        if let Some(log) = &self.import_log {
            write!(f, " (log: {log})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_or_error_counts_reject() {
        let fatal = CommitDiagnostics {
            fatal: 1,
            ..CommitDiagnostics::clean()
        };
        let errors = CommitDiagnostics {
            errors: 2,
            ..CommitDiagnostics::clean()
        };
        assert!(fatal.is_rejected());
        assert!(errors.is_rejected());
    }

    #[test]
    fn warnings_do_not_reject() {
        let diag = CommitDiagnostics {
            warnings: 2,
            ..CommitDiagnostics::clean()
        };
        assert!(!diag.is_rejected());
        assert!(diag.has_warnings());
    }
}
