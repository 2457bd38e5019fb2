//! Assembly source dependency scanner
//!
//! Finds `.import <mode> "file"` directives in an assembly source file and
//! follows them transitively, producing the dependency list for a
//! make-style rule line. Missing files contribute no dependencies; the
//! build tool consuming the rule reports those on its own.
//!
// Copyright (c) 2025 Tommy Olsen
// Licensed under the MIT License.

use log::warn;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// One directive per line: any prefix, the `.import` keyword, a
/// lowercase-alphanumeric mode token, then the quoted path.
const IMPORT_PATTERN: &str = r#".*\.import [a-z0-9]+ "(.*?)""#;

pub struct DependencyScanner {
    pattern: Regex,
    exclude: Vec<String>,
}

impl DependencyScanner {
    /// Scanner that skips any dependency whose path is in `exclude`
    pub fn new(exclude: Vec<String>) -> Self {
        Self {
            pattern: Regex::new(IMPORT_PATTERN).expect("Invalid import pattern"),
            exclude,
        }
    }

    /// Collect the transitive dependencies of `path`, depth-first.
    ///
    /// Parents appear before their children, children in source-line
    /// order, and a path imported from several places appears once per
    /// import edge. A missing or unreadable file yields no dependencies.
    pub fn scan(&self, path: &str) -> Vec<String> {
        let mut stack = Vec::new();
        self.scan_file(path, &mut stack)
    }

    /// Recursive worker. `stack` holds the resolved paths currently being
    /// scanned, so a cyclic import is recorded but not followed.
    fn scan_file(&self, path: &str, stack: &mut Vec<PathBuf>) -> Vec<String> {
        if !Path::new(path).is_file() {
            return Vec::new();
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path, e);
                return Vec::new();
            }
        };

        stack.push(resolve(path));

        let mut deps = Vec::new();
        for line in text.lines() {
            let captures = match self.pattern.captures(line) {
                Some(captures) => captures,
                None => continue,
            };

            // The match runs from the start of the line, so a leading
            // comment marker anywhere before the closing quote disqualifies
            // the directive. Substring check only, same as the original.
            let matched = captures.get(0).map(|m| m.as_str()).unwrap_or("");
            if matched.contains("//") {
                continue;
            }

            let dep = captures[1].to_string();
            if self.exclude.contains(&dep) {
                continue;
            }

            deps.push(dep.clone());

            if stack.contains(&resolve(&dep)) {
                warn!("Cyclic import of {} from {}", dep, path);
                continue;
            }
            deps.extend(self.scan_file(&dep, stack));
        }

        stack.pop();
        deps
    }
}

/// Build the dependency-rule line for `root`: the root with its extension
/// replaced by `prg`, a colon, then the space-separated dependency list.
pub fn rule_line(root: &str, deps: &[String]) -> String {
    let target = Path::new(root).with_extension("prg");
    format!("{}: {}", target.display(), deps.join(" "))
}

fn resolve(path: &str) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Unique scratch directory in the system temp folder
    fn temp_dir(name: &str) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("D2EFBuildTools.{}.{}", name, timestamp));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn import_line(path: &Path) -> String {
        format!(".import zp \"{}\"\n", path.display())
    }

    fn path_str(path: &Path) -> String {
        path.display().to_string()
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let scanner = DependencyScanner::new(Vec::new());
        assert!(scanner.scan("/nonexistent/root.s").is_empty());
    }

    #[test]
    fn test_single_import() {
        let dir = temp_dir("single");
        let b = dir.join("b.s");
        fs::write(&b, "").unwrap();
        let a = dir.join("a.s");
        fs::write(&a, import_line(&b)).unwrap();

        let scanner = DependencyScanner::new(Vec::new());
        assert_eq!(scanner.scan(&path_str(&a)), vec![path_str(&b)]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_commented_import_is_skipped() {
        let dir = temp_dir("comment");
        let b = dir.join("b.s");
        fs::write(&b, "").unwrap();
        let c = dir.join("c.s");
        fs::write(&c, "").unwrap();
        let a = dir.join("a.s");
        let content = format!("{}// {}", import_line(&b), import_line(&c));
        fs::write(&a, content).unwrap();

        let scanner = DependencyScanner::new(Vec::new());
        assert_eq!(scanner.scan(&path_str(&a)), vec![path_str(&b)]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_import_still_listed() {
        let dir = temp_dir("missingdep");
        let ghost = dir.join("ghost.s");
        let a = dir.join("a.s");
        fs::write(&a, import_line(&ghost)).unwrap();

        // The dependency is listed even though the file does not exist;
        // it just contributes no further dependencies of its own.
        let scanner = DependencyScanner::new(Vec::new());
        assert_eq!(scanner.scan(&path_str(&a)), vec![path_str(&ghost)]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_preorder_traversal() {
        let dir = temp_dir("preorder");
        let c = dir.join("c.s");
        fs::write(&c, "").unwrap();
        let e = dir.join("e.s");
        fs::write(&e, "").unwrap();
        let b = dir.join("b.s");
        fs::write(&b, import_line(&c)).unwrap();
        let a = dir.join("a.s");
        let content = format!("{}{}", import_line(&b), import_line(&e));
        fs::write(&a, content).unwrap();

        // Parent before children, siblings in source-line order
        let scanner = DependencyScanner::new(Vec::new());
        assert_eq!(
            scanner.scan(&path_str(&a)),
            vec![path_str(&b), path_str(&c), path_str(&e)]
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_shared_dependency_listed_per_edge() {
        let dir = temp_dir("diamond");
        let d = dir.join("d.s");
        fs::write(&d, "").unwrap();
        let b = dir.join("b.s");
        fs::write(&b, import_line(&d)).unwrap();
        let c = dir.join("c.s");
        fs::write(&c, import_line(&d)).unwrap();
        let a = dir.join("a.s");
        let content = format!("{}{}", import_line(&b), import_line(&c));
        fs::write(&a, content).unwrap();

        let scanner = DependencyScanner::new(Vec::new());
        assert_eq!(
            scanner.scan(&path_str(&a)),
            vec![path_str(&b), path_str(&d), path_str(&c), path_str(&d)]
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_excluded_path_not_listed_or_followed() {
        let dir = temp_dir("exclude");
        let d = dir.join("d.s");
        fs::write(&d, "").unwrap();
        let b = dir.join("b.s");
        fs::write(&b, import_line(&d)).unwrap();
        let a = dir.join("a.s");
        fs::write(&a, import_line(&b)).unwrap();

        // Excluding b also hides d, which is only reachable through b
        let scanner = DependencyScanner::new(vec![path_str(&b)]);
        assert!(scanner.scan(&path_str(&a)).is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_cyclic_imports_terminate() {
        let dir = temp_dir("cycle");
        let a = dir.join("a.s");
        let b = dir.join("b.s");
        fs::write(&a, import_line(&b)).unwrap();
        fs::write(&b, import_line(&a)).unwrap();

        // The back edge is recorded but not followed
        let scanner = DependencyScanner::new(Vec::new());
        assert_eq!(
            scanner.scan(&path_str(&a)),
            vec![path_str(&b), path_str(&a)]
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_non_directive_lines_ignored() {
        let dir = temp_dir("noise");
        let b = dir.join("b.s");
        fs::write(&b, "").unwrap();
        let a = dir.join("a.s");
        let content = format!(
            "; comment\nlda #$00\n{}sta $d020\n.importantlabel:\n",
            import_line(&b)
        );
        fs::write(&a, content).unwrap();

        let scanner = DependencyScanner::new(Vec::new());
        assert_eq!(scanner.scan(&path_str(&a)), vec![path_str(&b)]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rule_line_formatting() {
        let deps = vec!["b.s".to_string(), "c.s".to_string()];
        assert_eq!(rule_line("a.s", &deps), "a.prg: b.s c.s");
    }

    #[test]
    fn test_rule_line_empty_deps() {
        assert_eq!(rule_line("a.s", &[]), "a.prg: ");
    }
}
