//! Section collection, rendering and the atomic artifact write

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tempfile::{Builder, NamedTempFile};

use crate::error::{BundleError, Result};
use crate::imports::parse_imports;
use crate::layout::DEFAULT_PACKAGE_NAME;
use crate::paths::{absolutize, relative_label};

const BANNER_RULE: &str = "============================================";

/// One included stylesheet, labelled relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub path: PathBuf,
    pub content: String,
}

/// First two lines of the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub package_name: String,
    pub built_on: NaiveDate,
    /// Entry document path as shown after `Source:`.
    pub source: String,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildResult {
    pub output: PathBuf,
    pub built_on: NaiveDate,
    /// Section labels in artifact order.
    pub labels: Vec<String>,
    pub sections: usize,
    pub bytes: usize,
}

impl BuildResult {
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Concatenates the imports of one entry stylesheet into one artifact.
#[derive(Debug, Clone)]
pub struct Bundler {
    entry: PathBuf,
    source_root: PathBuf,
    output: PathBuf,
    package_name: String,
    entry_label: Option<String>,
    built_on: Option<NaiveDate>,
}

impl Bundler {
    pub fn new(
        entry: impl Into<PathBuf>,
        source_root: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            entry: entry.into(),
            source_root: source_root.into(),
            output: output.into(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            entry_label: None,
            built_on: None,
        }
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Override the `Source:` line; defaults to the entry relative to the source root.
    pub fn entry_label(mut self, label: impl Into<String>) -> Self {
        self.entry_label = Some(label.into());
        self
    }

    /// Pin the header date instead of using today's UTC date.
    pub fn built_on(mut self, date: NaiveDate) -> Self {
        self.built_on = Some(date);
        self
    }

    /// Resolve the imports and read every included file, in directive order.
    ///
    /// Fails with [`BundleError::NoImports`] before reading anything when the
    /// entry has no directives, and with [`BundleError::Read`] on the first
    /// unreadable include.
    pub fn collect_sections(&self) -> Result<Vec<Section>> {
        let imports = parse_imports(&self.entry)?;
        if imports.is_empty() {
            return Err(BundleError::NoImports {
                entry: self.entry.clone(),
            });
        }

        let root = read_path(&self.source_root)?;
        imports
            .into_iter()
            .map(|path| {
                let content = fs::read_to_string(&path).map_err(|source| BundleError::Read {
                    path: path.clone(),
                    source,
                })?;
                let label = relative_label(&path, &root);
                tracing::debug!(%label, bytes = content.len(), "read section");
                Ok(Section {
                    label,
                    path,
                    content,
                })
            })
            .collect()
    }

    /// Run the whole pipeline and write the artifact.
    ///
    /// Nothing touches the output path until every include has been read.
    pub fn build(&self) -> Result<BuildResult> {
        let sections = self.collect_sections()?;
        let header = Header {
            package_name: self.package_name.clone(),
            built_on: self.built_on.unwrap_or_else(|| Utc::now().date_naive()),
            source: self.source_label()?,
        };
        let rendered = render(&header, &sections);

        let output = absolutize(&self.output).map_err(|source| BundleError::Write {
            path: self.output.clone(),
            source,
        })?;
        write_atomic(&output, &rendered)?;

        tracing::info!(
            output = %output.display(),
            sections = sections.len(),
            bytes = rendered.len(),
            "wrote bundle"
        );

        Ok(BuildResult {
            output,
            built_on: header.built_on,
            sections: sections.len(),
            labels: sections.into_iter().map(|s| s.label).collect(),
            bytes: rendered.len(),
        })
    }

    fn source_label(&self) -> Result<String> {
        match &self.entry_label {
            Some(label) => Ok(label.clone()),
            None => Ok(relative_label(
                &read_path(&self.entry)?,
                &read_path(&self.source_root)?,
            )),
        }
    }
}

fn read_path(path: &Path) -> Result<PathBuf> {
    absolutize(path).map_err(|source| BundleError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Bundle `entry`'s imports into `output`, labelling sections against `source_root`.
pub fn build(entry: &Path, source_root: &Path, output: &Path) -> Result<BuildResult> {
    Bundler::new(entry, source_root, output).build()
}

/// Render the artifact text: header, then one banner plus content per section.
pub fn render(header: &Header, sections: &[Section]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/* {} — Built {} */",
        header.package_name,
        header.built_on.format("%Y-%m-%d")
    );
    let _ = writeln!(out, "/* Source: {} */", header.source);
    out.push('\n');

    for section in sections {
        let _ = writeln!(out, "/* {BANNER_RULE}");
        let _ = writeln!(out, "   {}", section.label);
        let _ = writeln!(out, "   {BANNER_RULE} */");
        out.push_str(section.content.trim_end());
        out.push_str("\n\n");
    }

    out
}

/// Replace `path` with `contents` via a sibling temp file and a rename.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: io::Error| BundleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = new_temp_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // An existing artifact keeps its mode; a fresh one gets 0666 minus the umask.
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn new_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
