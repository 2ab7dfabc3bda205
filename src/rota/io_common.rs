use std::path::{Path, PathBuf};

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Resolves a path from a configuration file against the directory of that file.
/// Absolute paths are kept as they are.
pub fn resolve_path(root: &Path, file_path: &str) -> String {
    let p: PathBuf = root.join(file_path);
    p.as_path().display().to_string()
}

/// One entry per line. Blank lines are kept: normalization happens later.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(simplify_file_name("/tmp/dir/team.csv"), "team.csv");
        assert_eq!(simplify_file_name("team.txt"), "team.txt");
    }

    #[test]
    fn paths_relative_to_config() {
        assert_eq!(resolve_path(Path::new("conf"), "team.txt"), "conf/team.txt");
        assert_eq!(resolve_path(Path::new(""), "team.txt"), "team.txt");
        assert_eq!(resolve_path(Path::new("conf"), "/abs/team.txt"), "/abs/team.txt");
    }

    #[test]
    fn lines() {
        assert_eq!(split_lines("a\r\n\nb"), vec!["a", "", "b"]);
    }
}
