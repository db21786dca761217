use crate::classify::{line_break_len, whitespace_run_len};
use crate::engines;
use crate::error::FixError;
use crate::options::{EngineKind, Options};
use crate::rules::Rule;
use memchr::memchr;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixLogEntry {
    /// Byte offset of the `]` that received a comma, in the text the rule ran on.
    pub position: usize,
    pub rule: Rule,
    pub message: &'static str,
    pub context: String,
}

pub(crate) struct Logger {
    enable: bool,
    window: usize,
    insertions: usize,
    entries: Vec<FixLogEntry>,
}

impl Logger {
    pub(crate) fn new(opts: &Options) -> Self {
        Self {
            enable: opts.logging,
            window: opts.log_context_window,
            insertions: 0,
            entries: Vec::new(),
        }
    }

    /// Record one inserted comma after the `]` at `position` of `text`.
    #[inline]
    pub(crate) fn insertion(&mut self, rule: Rule, text: &str, position: usize) {
        self.insertions += 1;
        if self.enable {
            self.entries.push(FixLogEntry {
                position,
                rule,
                message: rule.log_message(),
                context: build_context(text, position, self.window),
            });
        }
    }

    pub(crate) fn insertions(&self) -> usize {
        self.insertions
    }

    pub(crate) fn into_entries(self) -> Vec<FixLogEntry> {
        self.entries
    }
}

/// Up to `window` characters on each side of byte offset `pos`.
#[inline]
fn build_context(text: &str, pos: usize, window: usize) -> String {
    let pos = pos.min(text.len());
    let before: Vec<char> = text[..pos].chars().rev().take(window).collect();
    let mut s: String = before.into_iter().rev().collect();
    s.extend(text[pos..].chars().take(window));
    s
}

pub(crate) fn fix_with_logger(
    input: &str,
    opts: &Options,
    logger: &mut Logger,
) -> Result<String, FixError> {
    match opts.engine {
        EngineKind::Scanner => Ok(scan_rules(input, opts, logger)),
        EngineKind::Regex => engines::pattern::fix_impl(input, opts, logger),
    }
}

pub(crate) fn fix_to_string(input: &str, opts: &Options) -> Result<String, FixError> {
    let mut logger = Logger::new(opts);
    fix_with_logger(input, opts, &mut logger)
}

pub(crate) fn fix_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<FixLogEntry>), FixError> {
    let mut logger = Logger::new(opts);
    let out = fix_with_logger(input, opts, &mut logger)?;
    Ok((out, logger.into_entries()))
}

fn scan_rules(input: &str, opts: &Options, logger: &mut Logger) -> String {
    let mut text = input.to_string();
    for rule in Rule::ALL {
        if rule.enabled(opts) {
            text = scan_pass(&text, rule, logger);
        }
    }
    text
}

/// One global, left-to-right, non-overlapping pass of `rule` over `input`.
fn scan_pass(input: &str, rule: Rule, logger: &mut Logger) -> String {
    let needle = match rule {
        Rule::ArrayCloseBeforeKey => b']',
        Rule::ObjectArrayCloseBeforeKey => b'}',
    };
    let bytes = input.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0usize;
    let mut from = 0usize;
    while let Some(rel) = memchr(needle, &bytes[from..]) {
        let at = from + rel;
        let hit = match rule {
            Rule::ArrayCloseBeforeKey => match_array_close(input, at),
            Rule::ObjectArrayCloseBeforeKey => match_object_array_close(input, at),
        };
        match hit {
            Some((close, end)) => {
                let o = out.get_or_insert_with(|| String::with_capacity(input.len() + 16));
                o.push_str(&input[copied..=close]);
                o.push(',');
                logger.insertion(rule, input, close);
                copied = close + 1;
                from = end;
            }
            None => from = at + 1,
        }
    }
    match out {
        Some(mut o) => {
            o.push_str(&input[copied..]);
            o
        }
        None => input.to_string(),
    }
}

// Matchers return (offset of the `]` that takes the comma, end of the match).

fn match_array_close(s: &str, at: usize) -> Option<(usize, usize)> {
    let quote = after_newline_and_run(s, at)?;
    (s.as_bytes().get(quote) == Some(&b'"')).then_some((at, quote + 1))
}

fn match_object_array_close(s: &str, at: usize) -> Option<(usize, usize)> {
    let close = after_newline_and_run(s, at)?;
    if s.as_bytes().get(close) != Some(&b']') {
        return None;
    }
    let quote = after_newline_and_run(s, close)?;
    (s.as_bytes().get(quote) == Some(&b'"')).then_some((close, quote + 1))
}

/// For the ASCII token at `at`: require `\n` or `\r\n` right after it, skip the
/// following whitespace run and return the offset of the first byte past the run.
#[inline]
fn after_newline_and_run(s: &str, at: usize) -> Option<usize> {
    let start = at + 1 + line_break_len(&s.as_bytes()[at + 1..])?;
    Some(start + whitespace_run_len(&s[start..]))
}
