//! cssbundle-core: build-time stylesheet concatenation
//!
//! Reads one entry stylesheet, collects its top-level `@import "…";`
//! directives and concatenates the referenced files into a single artifact,
//! each preceded by a banner naming the file relative to the source root.
//!
//! Imports are followed one level deep only. Included files are copied
//! verbatim apart from trailing whitespace, and the artifact is written in a
//! single atomic replace once every input has been read.
//!
//! ```rust,no_run
//! use cssbundle_core::layout::BundleLayout;
//!
//! let layout = BundleLayout::for_root(".");
//! let result = layout.bundler().build()?;
//! println!("{} modules, {} bytes", result.sections, result.bytes);
//! # Ok::<(), cssbundle_core::BundleError>(())
//! ```

pub mod bundle;
pub mod error;
pub mod imports;
pub mod layout;
pub mod output;
pub mod paths;

pub use bundle::{build, render, BuildResult, Bundler, Header, Section};
pub use error::{BundleError, Result};
pub use imports::{parse_imports, resolve_imports, scan_imports, ImportDirective};
pub use layout::BundleLayout;
