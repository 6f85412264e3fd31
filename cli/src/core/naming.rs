//! # qwikgen Name Normalization
//!
//! File: cli/src/core/naming.rs
//!
//! ## Overview
//!
//! Turns the names users type ("My Component", "(admin)/profile",
//! "product/[id].tsx") into the strings the rest of qwikgen works with:
//!
//! - `normalize`: a lower-case, hyphenated, shell-safe path used both as the
//!   generator argument and as a route path under `src/pages`.
//! - `pascal_case`: the component identifier substituted for `[name]` in
//!   component templates.
//! - `validate_name`: the input checks shared by prompts and positional
//!   arguments.
//!
//! ## Route Groups
//!
//! Qwik City uses parenthesized directories such as `(admin)` to group routes
//! without affecting the URL. Parentheses start a subshell in POSIX shells, so
//! every group segment is wrapped in double quotes:
//!
//! ```text
//! (admin)/profile  ->  "(admin)"/profile
//! pnpm run qwik new /"(admin)"/profile
//! ```
//!
use crate::core::error::{ArtifactKind, QwikgenError};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Substrings stripped from every normalized name, in this order.
pub const KNOWN_EXTENSIONS: [&str; 7] = [".mdx", ".md", ".tsx", ".ts", ".js", ".jsx", "index"];

// `(admin)`, `(auth)`, ... letters only.
static GROUP_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([a-zA-Z]+\)").expect("route group pattern is valid"));

static HYPHEN_LOWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z])").expect("hyphen pattern is valid"));

// ASCII word characters only, leading or after a hyphen.
static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^[0-9A-Za-z_]|-[0-9A-Za-z_])").expect("word start pattern is valid")
});

/// Normalizes a raw route or component name.
///
/// Steps, in order:
/// 1. trim, lower-case, spaces become hyphens;
/// 2. every occurrence of each `KNOWN_EXTENSIONS` entry is removed, wherever
///    it appears in the string;
/// 3. every distinct `(group)` found in the trimmed input is wrapped in double
///    quotes at its first occurrence.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut normalized = trimmed.to_lowercase().replace(' ', "-");

    for extension in KNOWN_EXTENSIONS {
        normalized = normalized.replace(extension, "");
    }

    let mut seen: Vec<&str> = Vec::new();
    for group in GROUP_SEGMENT.find_iter(trimmed).map(|m| m.as_str()) {
        if seen.contains(&group) {
            continue;
        }
        seen.push(group);

        let lowered = group.to_lowercase();
        normalized = normalized.replacen(&lowered, &format!("\"{}\"", lowered), 1);
    }

    normalized
}

/// Derives the PascalCase identifier used for `[name]` in component templates.
///
/// `my-component` becomes `MyComponent`. The second pass also capitalizes the
/// leading character and anything after a hyphen the first pass left behind
/// (digits, underscores), so `2d-chart` becomes `2dChart` and `my--box`
/// becomes `MyBox`.
pub fn pascal_case(name: &str) -> String {
    let lowered = name.to_lowercase();
    let camel = HYPHEN_LOWER.replace_all(&lowered, |caps: &Captures| caps[1].to_uppercase());
    WORD_START
        .replace_all(&camel, |caps: &Captures| caps[0].replace('-', "").to_uppercase())
        .into_owned()
}

/// Checks a raw name before any normalization happens.
///
/// Names that are empty after trimming are rejected for both kinds; component
/// names must also be a single path segment.
pub fn validate_name(kind: ArtifactKind, raw: &str) -> Result<(), QwikgenError> {
    if raw.trim().is_empty() {
        return Err(QwikgenError::EmptyInput { kind });
    }
    if kind == ArtifactKind::Component && raw.contains('/') {
        return Err(QwikgenError::InvalidCharacter {
            kind,
            character: '/',
        });
    }
    Ok(())
}
