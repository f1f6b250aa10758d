//! Fixed project layout the CLI builds without arguments

use std::path::{Path, PathBuf};

use crate::bundle::Bundler;
use crate::paths::{normalize, relative_label};

/// Package name written into the artifact header.
pub const DEFAULT_PACKAGE_NAME: &str = "@cloudiverse/design-system";

/// Locations of the stylesheet package under a project root.
///
/// ```text
/// <root>/packages/css/src/index.css   entry
/// <root>/packages/css/src/            source root (section labels)
/// <root>/packages/css/dist/style.css  artifact
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    pub root: PathBuf,
    pub package_dir: PathBuf,
    pub source_root: PathBuf,
    pub entry: PathBuf,
    pub output: PathBuf,
    pub package_name: String,
}

impl BundleLayout {
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let package_dir = root.join("packages").join("css");
        let source_root = package_dir.join("src");
        Self {
            entry: source_root.join("index.css"),
            output: package_dir.join("dist").join("style.css"),
            source_root,
            package_dir,
            root,
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
        }
    }

    /// Entry path relative to the project root, as printed in the header.
    pub fn entry_label(&self) -> String {
        relative_label(&normalize(&self.entry), &normalize(&self.root))
    }

    /// Artifact path relative to the package directory, as printed in the summary.
    pub fn output_label(&self) -> String {
        relative_label(&normalize(&self.output), &normalize(&self.package_dir))
    }

    pub fn bundler(&self) -> Bundler {
        Bundler::new(&self.entry, &self.source_root, &self.output)
            .package_name(&self.package_name)
            .entry_label(self.entry_label())
    }
}
