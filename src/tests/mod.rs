use super::*;

// Shared test helpers
fn both_engines() -> [Options; 2] {
    [
        Options {
            engine: EngineKind::Scanner,
            ..Default::default()
        },
        Options {
            engine: EngineKind::Regex,
            ..Default::default()
        },
    ]
}

fn fix(s: &str) -> String {
    fix_to_string(s, &Options::default()).unwrap()
}
