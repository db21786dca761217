use crate::error::FixError;
use crate::options::Options;
use crate::repair::Logger;
use crate::rules::Rule;
use regex::{Captures, Regex};

// The rules as written for the original data file, with the line terminator captured
// so `\r\n` survives. The run class matches `classify::is_run_whitespace`.
const ARRAY_CLOSE: &str = r#"\](\r?\n)([\s\x1C-\x1F]*)""#;
const OBJECT_ARRAY_CLOSE: &str = r#"\}(\r?\n)([\s\x1C-\x1F]*)\](\r?\n)([\s\x1C-\x1F]*)""#;

pub(crate) struct RulePatterns {
    array_close: Regex,
    object_array_close: Regex,
}

impl RulePatterns {
    pub(crate) fn new() -> Result<Self, FixError> {
        Ok(Self {
            array_close: Regex::new(ARRAY_CLOSE)?,
            object_array_close: Regex::new(OBJECT_ARRAY_CLOSE)?,
        })
    }

    fn get(&self, rule: Rule) -> &Regex {
        match rule {
            Rule::ArrayCloseBeforeKey => &self.array_close,
            Rule::ObjectArrayCloseBeforeKey => &self.object_array_close,
        }
    }
}

pub(crate) fn fix_impl(
    input: &str,
    opts: &Options,
    logger: &mut Logger,
) -> Result<String, FixError> {
    let patterns = RulePatterns::new()?;
    let mut text = input.to_string();
    for rule in Rule::ALL {
        if rule.enabled(opts) {
            text = apply(&patterns, &text, rule, logger);
        }
    }
    Ok(text)
}

fn apply(patterns: &RulePatterns, input: &str, rule: Rule, logger: &mut Logger) -> String {
    patterns
        .get(rule)
        .replace_all(input, |caps: &Captures| match rule {
            Rule::ArrayCloseBeforeKey => {
                let close = caps.get(0).map_or(0, |m| m.start());
                logger.insertion(rule, input, close);
                format!("],{}{}\"", &caps[1], &caps[2])
            }
            Rule::ObjectArrayCloseBeforeKey => {
                let close = caps.get(2).map_or(0, |m| m.end());
                logger.insertion(rule, input, close);
                format!("}}{}{}],{}{}\"", &caps[1], &caps[2], &caps[3], &caps[4])
            }
        })
        .into_owned()
}
