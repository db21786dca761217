use std::fmt;

/// The two substitutions, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rule {
    /// `]` newline W `"` becomes `],` newline W `"`.
    #[cfg_attr(feature = "serde", serde(rename = "array-close"))]
    ArrayCloseBeforeKey,
    /// `}` newline W1 `]` newline W2 `"` becomes `}` newline W1 `],` newline W2 `"`.
    #[cfg_attr(feature = "serde", serde(rename = "object-array-close"))]
    ObjectArrayCloseBeforeKey,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::ArrayCloseBeforeKey, Rule::ObjectArrayCloseBeforeKey];

    pub fn name(self) -> &'static str {
        match self {
            Rule::ArrayCloseBeforeKey => "array-close",
            Rule::ObjectArrayCloseBeforeKey => "object-array-close",
        }
    }

    pub(crate) fn log_message(self) -> &'static str {
        match self {
            Rule::ArrayCloseBeforeKey => "inserted comma after array close",
            Rule::ObjectArrayCloseBeforeKey => "inserted comma after object-array close",
        }
    }

    pub(crate) fn enabled(self, opts: &crate::Options) -> bool {
        match self {
            Rule::ArrayCloseBeforeKey => opts.array_close_before_key,
            Rule::ObjectArrayCloseBeforeKey => opts.object_array_close_before_key,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
