use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

/// Result of looking for model documents.
pub struct DiscoverResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Find model documents under `root`.
///
/// Patterns are matched against paths relative to `root`. Directories named
/// `.git` are not descended into.
pub fn discover_models(
    root: &Path,
    includes: &[String],
    ignores: &[String],
    verbose: bool,
) -> DiscoverResult {
    let include_patterns = compile_patterns(includes, verbose);
    let ignore_patterns = compile_patterns(ignores, verbose);
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let matches = |patterns: &[Pattern]| {
            patterns
                .iter()
                .any(|p| p.matches_path_with(relative, options))
        };
        if matches(&include_patterns) && !matches(&ignore_patterns) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    DiscoverResult {
        files,
        skipped_count,
    }
}

fn compile_patterns(patterns: &[String], verbose: bool) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid glob pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect()
}
