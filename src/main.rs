//! GSX CLI
//!
//! Usage:
//!   gsx [OPTIONS] [FILES]...
//!
//! Options:
//!   -e, --emit <DIALECT>   Output syntax for translations: go (default) or jinja
//!   -r, --render <NAME>    Render a definition instead of printing translations
//!   -d, --data <FILE>      Data for --render (TOML format)
//!   -n, --name <NAME>      Definition name for input read from stdin
//!       --deny-warnings    Exit with an error when any warning is reported
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use gsx::{
    parse_into, translate_with_config, DefinitionSet, Dialect, GsxError, LintWarning,
    TranslateConfig,
};

#[derive(Parser)]
#[command(name = "gsx")]
#[command(about = "Translate component tags into template definitions")]
struct Cli {
    /// Input files, each registered as a definition named after its file stem
    /// (reads from stdin if none are given)
    files: Vec<PathBuf>,

    /// Output syntax for translations
    #[arg(short, long, value_enum, default_value_t = Emit::Go)]
    emit: Emit,

    /// Render this definition after registering all inputs
    #[arg(short, long)]
    render: Option<String>,

    /// Data for --render (TOML format)
    #[arg(short, long, requires = "render")]
    data: Option<PathBuf>,

    /// Definition name for input read from stdin
    #[arg(short, long, default_value = "Main")]
    name: String,

    /// Exit with an error when any warning is reported
    #[arg(long)]
    deny_warnings: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Emit {
    Go,
    Jinja,
}

impl From<Emit> for Dialect {
    fn from(emit: Emit) -> Self {
        match emit {
            Emit::Go => Dialect::Go,
            Emit::Jinja => Dialect::Jinja,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("error reading file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("error reading from stdin: {0}")]
    Stdin(io::Error),

    #[error("error parsing data file '{}': {source}", path.display())]
    Data {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Gsx(#[from] GsxError),

    #[error("{0} warning(s) reported with --deny-warnings")]
    DeniedWarnings(usize),
}

/// One input document
struct Input {
    name: String,
    filename: String,
    source: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let inputs = read_inputs(cli)?;

    let warning_count = match &cli.render {
        Some(target) => render(cli, &inputs, target)?,
        None => emit(cli, &inputs),
    };

    if cli.deny_warnings && warning_count > 0 {
        return Err(CliError::DeniedWarnings(warning_count));
    }
    Ok(())
}

/// Print the translation of every input, returning the number of warnings
fn emit(cli: &Cli, inputs: &[Input]) -> usize {
    let config = TranslateConfig::new().with_dialect(cli.emit.into());
    let mut count = 0;
    for input in inputs {
        let translation = translate_with_config(&input.name, &input.source, &config);
        report_warnings(input, &translation.warnings);
        count += translation.warnings.len();
        println!("{}", translation.output);
    }
    count
}

/// Register every input and render `target`, returning the number of warnings
fn render(cli: &Cli, inputs: &[Input], target: &str) -> Result<usize, CliError> {
    let data = match &cli.data {
        Some(path) => load_data(path)?,
        None => toml::Table::new(),
    };

    let mut definitions = DefinitionSet::new();
    let mut count = 0;
    for input in inputs {
        match parse_into(&input.name, &input.source, &mut definitions) {
            Ok(warnings) => {
                report_warnings(input, &warnings);
                count += warnings.len();
            }
            Err(e) => {
                report_warnings(input, e.warnings());
                return Err(e.into());
            }
        }
    }

    let output = definitions.execute(target, &data)?;
    print!("{}", output);
    Ok(count)
}

fn report_warnings(input: &Input, warnings: &[LintWarning]) {
    for warning in warnings {
        eprint!("{}", warning.format(&input.source, &input.filename));
    }
}

fn read_inputs(cli: &Cli) -> Result<Vec<Input>, CliError> {
    if cli.files.is_empty() {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(CliError::Stdin)?;
        return Ok(vec![Input {
            name: cli.name.clone(),
            filename: "<stdin>".to_string(),
            source,
        }]);
    }

    cli.files
        .iter()
        .map(|path| {
            let source = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            Ok(Input {
                name: definition_name(path),
                filename: path.display().to_string(),
                source,
            })
        })
        .collect()
}

fn load_data(path: &Path) -> Result<toml::Table, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::Data {
        path: path.to_path_buf(),
        source,
    })
}

/// Definition name for a file: its stem, e.g. `components/Card.gsx` -> `Card`
fn definition_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
