// SPDX-License-Identifier: MPL-2.0
//! Content globs: which project files the CSS build step scans for classes.
//!
//! Supported syntax: `*` (within one segment), `**` (any number of segments),
//! `?` (one character) and `{a,b}` alternation, which may nest.

use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directories never descended into while scanning.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

#[derive(Debug, Clone)]
pub struct ContentPattern {
    source: String,
    regex: Regex,
}

impl ContentPattern {
    pub fn new(glob: &str) -> Result<Self> {
        let regex = Regex::new(&glob_to_regex(glob)?)?;
        Ok(Self {
            source: glob.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        self.regex.is_match(&normalize(path))
    }
}

/// Ordered set of content patterns.
#[derive(Debug, Clone, Default)]
pub struct ContentMatcher {
    patterns: Vec<ContentPattern>,
}

impl ContentMatcher {
    pub fn new<I, S>(globs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = globs
            .into_iter()
            .map(|glob| ContentPattern::new(glob.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// `path` is relative to the project root.
    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        self.patterns.iter().any(|p| p.is_match(path))
    }

    /// Returns the first pattern matching `path`, in declaration order.
    #[must_use]
    pub fn first_match(&self, path: &Path) -> Option<&ContentPattern> {
        self.patterns.iter().find(|p| p.is_match(path))
    }

    /// Walks `root` and returns the matching files, relative to `root`, sorted.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir()
                    && SKIPPED_DIRS
                        .iter()
                        .any(|skip| entry.file_name() == *skip))
        });

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            if self.is_match(relative) {
                files.push(relative.to_path_buf());
            }
        }

        files.sort();
        tracing::debug!(root = %root.display(), count = files.len(), "scanned content files");
        Ok(files)
    }
}

/// Joins the normal components of `path` with `/`, dropping `.` segments.
fn normalize(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn glob_to_regex(glob: &str) -> Result<String> {
    let trimmed = glob.trim();
    let body = trimmed.strip_prefix("./").unwrap_or(trimmed);
    if body.is_empty() {
        return Err(Error::Style(format!("empty content glob '{}'", glob)));
    }

    let chars: Vec<char> = body.chars().collect();
    let mut out = String::from("^");
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    out.push_str("(?:[^/]+/)*");
                    i += 3;
                } else {
                    out.push_str(".*");
                    i += 2;
                }
                continue;
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '{' => {
                depth += 1;
                out.push_str("(?:");
            }
            '}' if depth > 0 => {
                depth -= 1;
                out.push(')');
            }
            ',' if depth > 0 => out.push('|'),
            c => out.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    if depth != 0 {
        return Err(Error::Style(format!("unbalanced braces in content glob '{}'", glob)));
    }

    out.push('$');
    Ok(out)
}
