use crate::file::{DEFAULT_DOCUMENT_PATH, fix_document, write_document};
use crate::{EngineKind, FixError, FixLogEntry, Options};
use std::env;
use std::io::{self, Write};

/// Printed once on stdout after the document has been written.
pub const FIXED_MESSAGE: &str = "Fixed JSON formatting";

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: file to fix in place (default {default}).\n\
         \n\
         Options:\n\
           -o, --output FILE           Write the fixed text to FILE instead of INPUT\n\
               --stdout                Print the fixed text to stdout, write nothing\n\
               --engine scan|regex     Repair engine (default scan)\n\
               --no-array-rule         Disable the ]-newline-key rule\n\
               --no-object-array-rule  Disable the }}-newline-]-newline-key rule\n\
               --log                   Print the repair log to stderr\n\
               --log-json              Print the repair log to stderr as JSON\n\
               --log-context CHARS     Context window for log entries (default 10)\n\
               --validate              Fail unless the result parses as JSON\n\
           -h, --help                  Show this help\n",
        prog = program,
        default = DEFAULT_DOCUMENT_PATH,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Off,
    Text,
    Json,
}

#[derive(Debug)]
struct CliMode {
    input: String,
    output: Option<String>,
    to_stdout: bool,
    log: LogFormat,
    validate: bool,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<(Options, CliMode), FixError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut opts = Options::default();
    let mut mode = CliMode {
        input: DEFAULT_DOCUMENT_PATH.to_string(),
        output: None,
        to_stdout: false,
        log: LogFormat::Off,
        validate: false,
        help: false,
    };
    let mut input_seen = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                mode.help = true;
            }
            "-o" | "--output" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| FixError::Usage("Missing FILE for --output".into()))?;
                mode.output = Some(path.clone());
            }
            "--stdout" => {
                mode.to_stdout = true;
            }
            "--engine" => {
                i += 1;
                let name = args
                    .get(i)
                    .ok_or_else(|| FixError::Usage("Missing NAME for --engine".into()))?;
                opts.engine = EngineKind::from_name(name)
                    .ok_or_else(|| FixError::Usage(format!("Unknown engine: {}", name)))?;
            }
            "--no-array-rule" => {
                opts.array_close_before_key = false;
            }
            "--no-object-array-rule" => {
                opts.object_array_close_before_key = false;
            }
            "--log" => {
                mode.log = LogFormat::Text;
            }
            "--log-json" => {
                mode.log = LogFormat::Json;
            }
            "--log-context" => {
                i += 1;
                let n = args
                    .get(i)
                    .ok_or_else(|| FixError::Usage("Missing CHARS for --log-context".into()))?;
                opts.log_context_window = n
                    .parse()
                    .map_err(|_| FixError::Usage(format!("Invalid --log-context: {}", n)))?;
            }
            "--validate" => {
                mode.validate = true;
            }
            s if s.starts_with('-') => {
                return Err(FixError::Usage(format!("Unknown option: {}", s)));
            }
            path => {
                if input_seen {
                    return Err(FixError::Usage(format!(
                        "Only one INPUT is accepted, got extra: {}",
                        path
                    )));
                }
                mode.input = path.to_string();
                input_seen = true;
            }
        }
        i += 1;
    }

    if mode.to_stdout && mode.output.is_some() {
        return Err(FixError::Usage("--stdout and --output cannot be combined".into()));
    }
    opts.logging = mode.log != LogFormat::Off;

    Ok((opts, mode))
}

fn print_log(entries: &[FixLogEntry], format: LogFormat) -> Result<(), FixError> {
    let mut err = io::stderr().lock();
    match format {
        LogFormat::Off => {}
        LogFormat::Text => {
            for entry in entries {
                writeln!(
                    err,
                    "{} at {}: {} {:?}",
                    entry.rule, entry.position, entry.message, entry.context
                )
                .map_err(|e| FixError::write("<stderr>", e))?;
            }
        }
        LogFormat::Json => {
            #[cfg(feature = "serde")]
            {
                let s = serde_json::to_string(entries).map_err(FixError::from_serde)?;
                writeln!(err, "{}", s).map_err(|e| FixError::write("<stderr>", e))?;
            }
            #[cfg(not(feature = "serde"))]
            {
                let _ = entries;
                return Err(FixError::Usage("--log-json requires the serde feature".into()));
            }
        }
    }
    Ok(())
}

fn validate(text: &str) -> Result<(), FixError> {
    #[cfg(feature = "serde")]
    {
        serde_json::from_str::<serde_json::Value>(text).map_err(FixError::from_serde)?;
        Ok(())
    }
    #[cfg(not(feature = "serde"))]
    {
        let _ = text;
        Err(FixError::Usage("--validate requires the serde feature".into()))
    }
}

pub fn run() -> Result<(), FixError> {
    let program = env::args().next().unwrap_or_else(|| "commafix".to_string());
    let (opts, mode) = parse_args(env::args().skip(1))?;
    if mode.help {
        print_help(&program);
        return Ok(());
    }

    let (text, fix) = fix_document(&mode.input, &opts)?;
    print_log(&fix.log, mode.log)?;
    if mode.validate {
        validate(&text)?;
    }

    let mut out = io::stdout().lock();
    if mode.to_stdout {
        out.write_all(text.as_bytes()).map_err(|e| FixError::write("<stdout>", e))?;
        return Ok(());
    }

    let target = mode.output.as_deref().unwrap_or(&mode.input);
    write_document(target, &text)?;
    writeln!(out, "{}", FIXED_MESSAGE).map_err(|e| FixError::write("<stdout>", e))?;
    Ok(())
}
