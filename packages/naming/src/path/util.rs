use std::path::{Path, PathBuf};

/// Convert Windows-style separators to POSIX separators.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn is_windows_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Whether `path` is absolute, in either POSIX or Windows drive form.
pub fn is_rooted(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\') || is_windows_absolute(path)
}

/// Lexically normalize a path: POSIX separators, no `.` segments, `..`
/// collapsed against the preceding segment.
pub fn clean_path(path: &str) -> String {
    let normalized = normalize_separators(path);

    let windows = is_windows_absolute(&normalized);
    let unix = normalized.starts_with('/');

    let (drive_prefix, path_part) = if windows {
        normalized.split_at(2)
    } else {
        ("", normalized.as_str())
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in path_part.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            segments.pop();
        } else {
            segments.push(segment);
        }
    }

    let joined = segments.join("/");

    if windows {
        format!("{}/{}", drive_prefix, joined)
    } else if unix {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Resolve `path` to an absolute, cleaned path. Relative paths are taken
/// against the current working directory.
pub fn resolve(path: &str) -> String {
    if is_rooted(path) {
        return clean_path(path);
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    let cwd = normalize_separators(cwd.to_string_lossy().as_ref());
    if path.is_empty() {
        clean_path(&cwd)
    } else {
        clean_path(&format!("{}/{}", cwd, path))
    }
}

/// Directory part of a path. `/a/b.js` gives `/a`, `/a.js` gives `/`.
pub fn dirname(path: &str) -> String {
    let cleaned = clean_path(path);
    match cleaned.rsplit_once('/') {
        Some(("", _)) => "/".to_string(),
        Some((dir, _)) if dir.ends_with(':') => format!("{}/", dir),
        Some((dir, _)) => dir.to_string(),
        None => ".".to_string(),
    }
}

/// Relative path from `from` to `to`, both resolved first. The result uses
/// POSIX separators and is empty when both name the same location.
///
/// `None` when no relative path exists (e.g. different Windows drives).
pub fn relative(from: &str, to: &str) -> Option<String> {
    let from = resolve(from);
    let to = resolve(to);
    if from == to {
        return Some(String::new());
    }
    pathdiff::diff_paths(Path::new(&to), Path::new(&from))
        .map(|p| normalize_separators(p.to_string_lossy().as_ref()))
}

/// Whether a relative path climbs out of its base.
pub fn is_upward(relative: &str) -> bool {
    relative.starts_with("..")
}
