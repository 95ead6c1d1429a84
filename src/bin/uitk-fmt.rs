//! Command-line interface for uitk-fmt
//! Formats UI Toolkit markup (.uxml) and style sheets (.uss) from files or stdin.
//!
//! Usage:
//!   uitk-fmt `<paths>`...                      - Print the formatted files to stdout
//!   uitk-fmt `<paths>`... --write              - Rewrite files in place
//!   uitk-fmt `<paths>`... --check              - List files that would change, exit 1 if any
//!   uitk-fmt --dialect style < theme.uss     - Format stdin
//!   uitk-fmt `<path>` --range 120:480          - Format only a byte range
//!   uitk-fmt `<path>` --emit tokens            - Dump the token stream as JSON

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use std::io::{IsTerminal, Read};
use std::ops::Range;
use std::path::PathBuf;
use std::process::ExitCode;
use uitk_fmt::config::{FmtConfig, Loader};
use uitk_fmt::emit::normalize_source;
use uitk_fmt::{edits, markup, style, Dialect, FormattingOptions};

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::from(2)
        }
    }
}

fn cli() -> Command {
    Command::new("uitk-fmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format UI Toolkit markup (.uxml) and style sheets (.uss)")
        .arg(
            Arg::new("paths")
                .help("Files to format (reads stdin when omitted)")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .short('d')
                .help("Dialect to format as: auto (from file extension), markup or style")
                .default_value("auto"),
        )
        .arg(
            Arg::new("indent-size")
                .long("indent-size")
                .help("Spaces per indent level")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("tabs")
                .long("tabs")
                .help("Indent with tabs instead of spaces")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over defaults and uitk-fmt.toml")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("range")
                .long("range")
                .help("Only format the byte range START:END"),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .help("Rewrite files in place")
                .action(ArgAction::SetTrue)
                .conflicts_with("check"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("List files that are not formatted and exit with status 1")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .help("What to print")
                .value_parser(["formatted", "tokens"])
                .default_value("formatted"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// How one input should be handled, shared by files and stdin.
struct Job<'a> {
    options: FormattingOptions,
    range: Option<Range<usize>>,
    emit_tokens: bool,
    matches: &'a ArgMatches,
}

fn run(matches: &ArgMatches) -> Result<ExitCode, String> {
    let config = load_config(matches)?;
    let requested = match matches.get_one::<String>("dialect").map(String::as_str) {
        None | Some("auto") => None,
        Some(name) => Some(name.parse::<Dialect>().map_err(|e| e.to_string())?),
    };
    let range = matches
        .get_one::<String>("range")
        .map(String::as_str)
        .map(parse_range)
        .transpose()?;

    let job = Job {
        options: config.formatting,
        range,
        emit_tokens: matches.get_one::<String>("emit").map(String::as_str) == Some("tokens"),
        matches,
    };

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if paths.is_empty() {
        return run_stdin(&job, requested);
    }
    Ok(run_files(&job, &config, requested, &paths))
}

fn load_config(matches: &ArgMatches) -> Result<FmtConfig, String> {
    let invalid = |e: ConfigError| format!("invalid configuration: {}", e);

    let mut loader = Loader::new().project(".");
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.file(path);
    }
    if matches.get_flag("tabs") {
        loader = loader.tabs().map_err(invalid)?;
    }
    if let Some(size) = matches.get_one::<usize>("indent-size") {
        loader = loader.indent_size(*size).map_err(invalid)?;
    }
    loader.load().map_err(invalid)
}

fn parse_range(value: &str) -> Result<Range<usize>, String> {
    let invalid = || format!("invalid range `{}` (expected START:END)", value);
    let (start, end) = value.split_once(':').ok_or_else(invalid)?;
    let start = start.trim().parse::<usize>().map_err(|_| invalid())?;
    let end = end.trim().parse::<usize>().map_err(|_| invalid())?;
    if end < start {
        return Err(invalid());
    }
    Ok(start..end)
}

fn run_stdin(job: &Job, dialect: Option<Dialect>) -> Result<ExitCode, String> {
    let dialect = dialect.ok_or("reading stdin requires --dialect markup|style")?;
    if job.matches.get_flag("write") {
        return Err("--write needs file paths".to_string());
    }

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| format!("reading stdin: {}", e))?;

    if job.emit_tokens {
        println!("{}", token_json(dialect, &source)?);
        return Ok(ExitCode::SUCCESS);
    }

    let formatted = render(job, dialect, &source);
    if job.matches.get_flag("check") {
        return Ok(if formatted == source {
            ExitCode::SUCCESS
        } else {
            println!("<stdin>");
            ExitCode::from(1)
        });
    }
    print!("{}", formatted);
    Ok(ExitCode::SUCCESS)
}

fn run_files(
    job: &Job,
    config: &FmtConfig,
    requested: Option<Dialect>,
    paths: &[PathBuf],
) -> ExitCode {
    let check = job.matches.get_flag("check");
    let write = job.matches.get_flag("write");
    let mut failed = false;

    for path in paths {
        let Some(dialect) = requested.or_else(|| config.dialect_for(path)) else {
            eprintln!("Skipping {}: unknown file type", path.display());
            failed = true;
            continue;
        };

        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                failed = true;
                continue;
            }
        };

        if job.emit_tokens {
            match token_json(dialect, &source) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error tokenizing {}: {}", path.display(), e);
                    failed = true;
                }
            }
            continue;
        }

        let formatted = render(job, dialect, &source);
        let changed = formatted != source;
        tracing::debug!(path = %path.display(), %dialect, changed, "formatted");

        if check {
            if changed {
                println!("{}", path.display());
                failed = true;
            }
        } else if write {
            if changed {
                if let Err(e) = std::fs::write(path, &formatted) {
                    eprintln!("Error writing {}: {}", path.display(), e);
                    failed = true;
                }
            }
        } else {
            print!("{}", formatted);
        }
    }

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn render(job: &Job, dialect: Dialect, source: &str) -> String {
    match &job.range {
        Some(range) => {
            let spans = edits::format_range(dialect, source, range.clone(), &job.options);
            edits::apply_edits(source, &spans)
        }
        None => dialect.format(source, &job.options),
    }
}

fn token_json(dialect: Dialect, source: &str) -> Result<String, String> {
    let normalized = normalize_source(source);
    let json = match dialect {
        Dialect::Markup => markup::tokenize(&normalized)
            .map_err(|e| e.to_string())
            .map(|tokens| serde_json::to_string_pretty(&tokens)),
        Dialect::Style => style::tokenize(&normalized)
            .map_err(|e| e.to_string())
            .map(|tokens| serde_json::to_string_pretty(&tokens)),
    }?;
    json.map_err(|e| e.to_string())
}
