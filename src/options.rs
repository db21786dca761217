/// Which implementation applies the substitution rules.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// Byte scanner driven by memchr over closing brackets/braces.
    #[default]
    Scanner,
    /// The two rules as literal regular expressions. Slower; kept as the reference.
    Regex,
}

impl EngineKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "scan" | "scanner" => Some(EngineKind::Scanner),
            "regex" => Some(EngineKind::Regex),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Insert a comma after `]` when the next line starts a quoted key.
    pub array_close_before_key: bool,
    /// Insert a comma after `}` `]` when the next line starts a quoted key.
    /// Runs after `array_close_before_key` and sees its output.
    pub object_array_close_before_key: bool,
    /// Engine used by `fix_to_string` and friends.
    pub engine: EngineKind,
    /// Enable repair logging. Use `fix_to_string_with_log` to retrieve logs.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many characters are captured on both sides of the position.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            array_close_before_key: true,
            object_array_close_before_key: true,
            engine: EngineKind::Scanner,
            logging: false,
            log_context_window: 10,
        }
    }
}
