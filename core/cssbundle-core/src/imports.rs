//! `@import` directive scanning and resolution

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{BundleError, Result};
use crate::paths::{absolutize, normalize};

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@import\s+['"](.+?)['"]\s*;?"#).expect("valid regex"));

/// One `@import` found in the entry stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDirective {
    /// Path exactly as written between the quotes.
    pub target: String,
    /// `target` joined onto the entry's directory and normalized.
    pub resolved: PathBuf,
}

/// Extract import targets from stylesheet text in order of appearance.
///
/// Only directives literally present in `text` are returned. Lines such as
/// `@import url(x.css);` or unquoted targets do not match and are skipped.
pub fn scan_imports(text: &str) -> Vec<&str> {
    IMPORT_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Read `entry` and resolve every directive against its directory.
pub fn resolve_imports(entry: &Path) -> Result<Vec<ImportDirective>> {
    let entry = absolutize(entry).map_err(|source| BundleError::Read {
        path: entry.to_path_buf(),
        source,
    })?;
    let text = fs::read_to_string(&entry).map_err(|source| BundleError::Read {
        path: entry.clone(),
        source,
    })?;
    let base = entry.parent().unwrap_or(Path::new("/"));

    let directives: Vec<ImportDirective> = scan_imports(&text)
        .into_iter()
        .map(|target| {
            let resolved = normalize(&base.join(target));
            tracing::debug!(import = target, resolved = %resolved.display(), "import directive");
            ImportDirective {
                target: target.to_string(),
                resolved,
            }
        })
        .collect();

    tracing::debug!(
        entry = %entry.display(),
        count = directives.len(),
        "scanned entry stylesheet"
    );
    Ok(directives)
}

/// Absolute paths of every directive in `entry`, in order, duplicates kept.
pub fn parse_imports(entry: &Path) -> Result<Vec<PathBuf>> {
    Ok(resolve_imports(entry)?
        .into_iter()
        .map(|d| d.resolved)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_both_quote_styles_in_order() {
        let css = "@import \"a.css\";\n@import 'b.css';\n";
        assert_eq!(scan_imports(css), vec!["a.css", "b.css"]);
    }

    #[test]
    fn semicolon_is_optional() {
        assert_eq!(scan_imports("@import 'a.css'\n@import \"b.css\""), vec!["a.css", "b.css"]);
    }

    #[test]
    fn several_directives_on_one_line() {
        let css = "@import \"a.css\"; @import 'b.css';";
        assert_eq!(scan_imports(css), vec!["a.css", "b.css"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let css = "@import 'a.css';\n@import 'a.css';\n";
        assert_eq!(scan_imports(css), vec!["a.css", "a.css"]);
    }

    #[test]
    fn malformed_directives_are_skipped() {
        let css = concat!(
            "@import url(skip.css);\n",
            "@import skip.css;\n",
            "@import'tight.css';\n",
            "@import \"\";\n",
            "@import \"kept.css\";\n",
        );
        assert_eq!(scan_imports(css), vec!["kept.css"]);
    }

    #[test]
    fn ignores_everything_but_directives() {
        let css = "/* header */\n:root { --x: 1; }\nbody { margin: 0 }\n";
        assert!(scan_imports(css).is_empty());
    }
}
