//! Image path classification and local candidate generation

use std::path::{Component, Path, PathBuf};

/// Where an image reference points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    /// HTTP(S) URL with spaces already percent-encoded
    Remote(String),
    /// Filesystem path, not yet expanded
    Local(String),
}

/// Classify a raw reference after stripping quotes and whitespace
pub fn classify(raw: &str) -> ImageLocation {
    let cleaned = strip_wrapping(raw);

    if starts_with_ignore_case(cleaned, "file://") {
        return ImageLocation::Local(file_url_to_path(cleaned));
    }
    if starts_with_ignore_case(cleaned, "http://") || starts_with_ignore_case(cleaned, "https://") {
        return ImageLocation::Remote(cleaned.replace(' ', "%20"));
    }
    ImageLocation::Local(cleaned.to_string())
}

fn strip_wrapping(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// `file:///srv/a.png` becomes `/srv/a.png`; `file://C:/a.png` becomes `C:/a.png`
fn file_url_to_path(value: &str) -> String {
    let rest = &value["file://".len()..];
    let trimmed = rest.trim_start_matches('/');
    if has_drive_prefix(trimmed) {
        return trimmed.to_string();
    }

    url::Url::parse(&value.replace(' ', "%20"))
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| rest.to_string())
}

fn has_drive_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Expand a leading `~` and `$VAR` / `${VAR}` tokens
///
/// Unknown variables are left untouched.
pub fn expand_path(value: &str) -> String {
    let with_home = match value.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            match dirs::home_dir() {
                Some(home) => format!("{}{}", home.display(), rest),
                None => value.to_string(),
            }
        }
        _ => value.to_string(),
    };
    expand_env_vars(&with_home)
}

fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, token_len) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        match (!name.is_empty()).then(|| std::env::var(name).ok()).flatten() {
            Some(expanded) => out.push_str(&expanded),
            None => out.push_str(&rest[pos..pos + 1 + token_len]),
        }
        rest = &after[token_len..];
    }

    out.push_str(rest);
    out
}

/// Lexically normalize a path: drop `.` and resolve `..` where possible
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Candidate filesystem paths for a local reference, in lookup order
///
/// 1. the expanded, normalized path
/// 2. the same path under `base_dir` when relative
/// 3. both again with backslashes swapped for slashes
pub fn local_candidates(raw: &str, base_dir: &Path) -> Vec<PathBuf> {
    let normalized = normalize_path(Path::new(&expand_path(raw)));
    let mut candidates = Vec::with_capacity(4);

    push_with_base(&mut candidates, normalized.clone(), base_dir);

    let swapped = normalized.to_string_lossy().replace('\\', "/");
    if swapped != normalized.to_string_lossy() {
        push_with_base(&mut candidates, normalize_path(Path::new(&swapped)), base_dir);
    }

    candidates
}

fn push_with_base(candidates: &mut Vec<PathBuf>, path: PathBuf, base_dir: &Path) {
    let joined = (!path.is_absolute()).then(|| normalize_path(&base_dir.join(&path)));
    for candidate in std::iter::once(path).chain(joined) {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_strips_quotes_and_whitespace() {
        assert_eq!(
            classify("  \"images/tea 1.jpg\" "),
            ImageLocation::Local("images/tea 1.jpg".into())
        );
        assert_eq!(classify("'a.png'"), ImageLocation::Local("a.png".into()));
    }

    #[test]
    fn test_classify_remote_encodes_spaces() {
        assert_eq!(
            classify("HTTPS://cdn.example.com/tea leaves.jpg"),
            ImageLocation::Remote("HTTPS://cdn.example.com/tea%20leaves.jpg".into())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_file_url() {
        assert_eq!(
            classify("file:///srv/images/coffee%201.jpg"),
            ImageLocation::Local("/srv/images/coffee 1.jpg".into())
        );
        assert_eq!(
            classify("file://C:/images/coffee.jpg"),
            ImageLocation::Local("C:/images/coffee.jpg".into())
        );
    }

    #[test]
    fn test_expand_env_vars() {
        std::env::set_var("CATALOG_TEST_IMG_DIR", "/data/img");
        assert_eq!(expand_path("$CATALOG_TEST_IMG_DIR/a.jpg"), "/data/img/a.jpg");
        assert_eq!(expand_path("${CATALOG_TEST_IMG_DIR}/a.jpg"), "/data/img/a.jpg");
        assert_eq!(
            expand_path("$CATALOG_TEST_UNSET_VAR/a.jpg"),
            "$CATALOG_TEST_UNSET_VAR/a.jpg"
        );
        assert_eq!(expand_path("price$"), "price$");
        assert_eq!(expand_path("${unterminated"), "${unterminated");
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/a.jpg"), format!("{}/a.jpg", home.display()));
        }
        assert_eq!(expand_path("~user/a.jpg"), "~user/a.jpg");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("./a/./b/../c.jpg")), PathBuf::from("a/c.jpg"));
        assert_eq!(normalize_path(Path::new("../a.jpg")), PathBuf::from("../a.jpg"));
        assert_eq!(normalize_path(Path::new("/../a.jpg")), PathBuf::from("/a.jpg"));
    }

    #[cfg(unix)]
    #[test]
    fn test_local_candidates_order() {
        let base = Path::new("/srv/catalog");

        assert_eq!(
            local_candidates("images/a.jpg", base),
            vec![
                PathBuf::from("images/a.jpg"),
                PathBuf::from("/srv/catalog/images/a.jpg"),
            ]
        );

        assert_eq!(
            local_candidates("/abs/a.jpg", base),
            vec![PathBuf::from("/abs/a.jpg")]
        );

        assert_eq!(
            local_candidates("images\\a.jpg", base),
            vec![
                PathBuf::from("images\\a.jpg"),
                PathBuf::from("/srv/catalog/images\\a.jpg"),
                PathBuf::from("images/a.jpg"),
                PathBuf::from("/srv/catalog/images/a.jpg"),
            ]
        );
    }
}
