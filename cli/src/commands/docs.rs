//! # qwikgen Docs Command
//!
//! File: cli/src/commands/docs.rs
//!
//! ## Overview
//!
//! Prints the Qwik documentation URL for a symbol, e.g. the text under the
//! cursor in an editor:
//!
//! ```bash
//! qwikgen docs 'useSignal(0);'   # https://qwik.dev/docs/components/state/#usesignal
//! qwikgen docs component$        # https://qwik.dev/docs/components/overview/#component
//! qwikgen docs                   # https://qwik.dev/docs/
//! ```
//!
//! Unknown symbols, and anything longer than a single word, fall back to the
//! documentation root.
//!
use crate::core::error::Result;
use clap::Parser;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub const DOCS_ROOT: &str = "https://qwik.dev/docs/";

static DOCS_PAGES: [(&str, &str); 3] = [
    ("component", "https://qwik.dev/docs/components/overview/#component"),
    ("useSignal", "https://qwik.dev/docs/components/state/#usesignal"),
    ("useStylesScoped", "https://qwik.dev/docs/components/styles/#scoped-css"),
];

static CALL_ARGUMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("call arguments pattern is valid"));

/// # Docs Arguments (`DocsArgs`)
#[derive(Parser, Debug)]
pub struct DocsArgs {
    /// Symbol or selected text to look up.
    symbol: Option<String>,
}

pub async fn handle_docs(args: DocsArgs) -> Result<()> {
    let symbol = args.symbol.as_deref().and_then(clean_symbol);
    debug!("Docs lookup for {:?}", symbol);
    println!("{}", docs_url(symbol.as_deref()));
    Ok(())
}

/// Reduces selected text to a bare symbol: `useSignal(0);` becomes `useSignal`.
///
/// Returns `None` for text with more than one space-separated word. The first
/// `$`, every parenthesized group and the first `;` are removed.
pub fn clean_symbol(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.split(' ').count() > 1 {
        return None;
    }
    let without_dollar = trimmed.replacen('$', "", 1);
    let without_args = CALL_ARGUMENTS.replace_all(&without_dollar, "");
    Some(without_args.replacen(';', "", 1))
}

/// Documentation page for `symbol`, or the documentation root.
pub fn docs_url(symbol: Option<&str>) -> &'static str {
    symbol
        .filter(|s| !s.is_empty())
        .and_then(|s| DOCS_PAGES.iter().find(|(name, _)| *name == s))
        .map_or(DOCS_ROOT, |&(_, url)| url)
}
