use crate::{
    core::{DropReason, Suggestion},
    operator::DuplicateReport,
};

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Slots,
    Detect(DetectSummary),
    Import(ImportSummary),
    Export(ExportSummary),
    Duplicate(DuplicateSummary),
    Script(ScriptSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub struct DetectSummary {
    pub model_path: String,
    pub suggestion: Suggestion,
    /// Mapped slots after the suggestion, including earlier values.
    pub mapped_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct ImportSummary {
    pub model_path: String,
    /// `None` when the snippet could not be parsed.
    pub outcome: Option<crate::core::ImportSummary>,
    pub is_apply: bool,
}

impl ImportSummary {
    pub fn dropped(&self) -> &[(String, DropReason)] {
        match &self.outcome {
            Some(outcome) => &outcome.dropped,
            None => &[],
        }
    }
}

#[derive(Debug)]
pub struct ExportSummary {
    pub json: String,
}

/// Outcome for one model document.
#[derive(Debug)]
pub struct ModelResult {
    pub model_path: String,
    pub result: Result<DuplicateReport, String>,
}

#[derive(Debug)]
pub struct DuplicateSummary {
    pub models: Vec<ModelResult>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct ScriptSummary {
    pub script: String,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, error_count: usize) -> Self {
        Self {
            summary,
            error_count,
            exit_on_errors: true,
        }
    }
}
