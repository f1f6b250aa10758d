//! Lexical path helpers used for import resolution and section labels

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root is dropped; leading `..` on a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Anchor a path at the current directory when relative, then normalize it.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&env::current_dir()?.join(path)))
    }
}

/// Express `path` relative to `base`, joined with forward slashes.
///
/// Both arguments are expected to be normalized. Paths outside `base` climb
/// with `..` segments; `path == base` yields an empty label.
pub fn relative_label(path: &Path, base: &Path) -> String {
    let target: Vec<Component> = path.components().collect();
    let anchor: Vec<Component> = base.components().collect();
    let shared = target
        .iter()
        .zip(&anchor)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = (shared..anchor.len()).map(|_| "..".to_string()).collect();
    parts.extend(
        target[shared..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().replace('\\', "/")),
    );
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_dots() {
        assert_eq!(
            normalize(Path::new("/a/b/./c/../d.css")),
            PathBuf::from("/a/b/d.css")
        );
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("../x/./y")), PathBuf::from("../x/y"));
        assert_eq!(normalize(Path::new("./packages/css")), PathBuf::from("packages/css"));
    }

    #[test]
    fn absolutize_anchors_relative_paths() {
        let abs = absolutize(Path::new("some/./file.css")).expect("cwd");
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/file.css"));
    }

    #[test]
    fn label_inside_root_uses_forward_slashes() {
        let label = relative_label(
            Path::new("/proj/src/tokens/colors.css"),
            Path::new("/proj/src"),
        );
        assert_eq!(label, "tokens/colors.css");
    }

    #[test]
    fn label_outside_root_climbs() {
        let label = relative_label(Path::new("/proj/vendor/reset.css"), Path::new("/proj/src"));
        assert_eq!(label, "../vendor/reset.css");
    }

    #[test]
    fn label_of_root_itself_is_empty() {
        assert_eq!(relative_label(Path::new("/proj"), Path::new("/proj")), "");
    }
}
