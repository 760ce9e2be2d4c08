use std::fs;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fixwire_core::{
    ByteOrder, CodecBuilder, CodecError, InspectionReport, WireType, WireValue, encode_values,
    inspect, to_hex,
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fixwire", version)]
#[command(
    about = "Encode and inspect fixed-width binary values (MCU-style byte streams).",
    after_help = "Examples:\n  fixwire encode --order be i32=-1 f32=1.5\n  fixwire decode --order le --types u16,i32 dump.bin\n  fixwire decode --types u32 --hex 'ff ff ff ff' --json pretty"
)]
struct Cli {
    /// Log codec activity to stderr (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Byte order (be, le, ABCD, DCBA, ...)
    #[arg(long, global = true, default_value = "be")]
    order: ByteOrder,

    /// Register the one-byte boolean converter
    #[arg(long = "bool", global = true)]
    bool_support: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode TYPE=VALUE pairs back to back.
    Encode {
        /// Values to encode, e.g. `u16=0x1234` or `f64=-2.25`
        #[arg(required = true, value_parser = parse_assignment)]
        values: Vec<(WireType, WireValue)>,

        /// Write raw bytes to this file instead of printing hex
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode wire types from a byte dump and print a JSON report.
    Decode {
        /// Raw byte dump
        #[arg(required_unless_present = "hex", conflicts_with = "hex")]
        input: Option<PathBuf>,

        /// Bytes given inline as hex, e.g. 'ff ff 3f c0'
        #[arg(long)]
        hex: Option<String>,

        /// Comma-separated wire types, e.g. `u8,i16,f32`
        #[arg(short, long, value_delimiter = ',', required = true)]
        types: Vec<WireType>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report layout
        #[arg(long, value_enum, default_value_t = JsonStyle::Compact)]
        json: JsonStyle,

        /// Exit with status 2 when decoding stopped early
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum JsonStyle {
    Compact,
    Pretty,
}

/// What the user sees on failure: an `error:` line and maybe a `hint:`.
#[derive(Debug, Error)]
#[error("{message}")]
struct Failure {
    message: String,
    hint: Option<&'static str>,
}

impl Failure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::new(format!("{err:#}"))
    }
}

impl From<CodecError> for Failure {
    fn from(err: CodecError) -> Self {
        let failure = Self::new(err.to_string());
        match &err {
            CodecError::UnsupportedType {
                wire_type: WireType::Bool,
            } => failure.hint("pass --bool to enable the boolean converter"),
            CodecError::TypeMismatch { .. } | CodecError::OutOfRange { .. } => {
                failure.hint("the value must fit the wire type it is paired with")
            }
            _ => failure,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("error: {failure}");
            if let Some(hint) = failure.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Failure> {
    match cli.command {
        Command::Encode { values, output } => {
            let bytes = encode_values(cli.order, &values, cli.bool_support)?;
            debug!(bytes = bytes.len(), "encoded values");
            match output {
                Some(path) => fs::write(&path, &bytes)
                    .with_context(|| format!("cannot write {}", path.display()))?,
                None => println!("{}", to_hex(&bytes)),
            }
            Ok(())
        }
        Command::Decode {
            input,
            hex,
            types,
            output,
            json,
            strict,
        } => {
            let report = match (input, hex) {
                (_, Some(hex)) => {
                    let bytes = parse_hex(&hex)?;
                    decode(cli.order, cli.bool_support, bytes.as_slice(), &types)
                }
                (Some(path), None) => {
                    decode(cli.order, cli.bool_support, open_dump(&path)?, &types)
                }
                (None, None) => {
                    return Err(Failure::new("nothing to decode").hint("pass a dump file or --hex"));
                }
            };
            emit(&report, json, output.as_deref())?;

            if strict {
                if let Some(failure) = &report.failure {
                    return Err(Failure::new(format!(
                        "decoding stopped at offset {}: {}",
                        failure.offset, failure.message
                    ))
                    .hint("check the byte order and the type list"));
                }
            }
            Ok(())
        }
    }
}

fn decode(
    order: ByteOrder,
    bool_support: bool,
    source: impl Read,
    types: &[WireType],
) -> InspectionReport {
    let mut builder = CodecBuilder::new(order).input(source);
    if bool_support {
        builder = builder.with_bool_support();
    }
    inspect(&mut builder.build(), types)
}

fn open_dump(path: &Path) -> Result<BufReader<fs::File>, Failure> {
    match fs::File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(Failure::new(format!("no such dump: {}", path.display()))
                .hint("pass a raw byte file or give the bytes with --hex"))
        }
        Err(err) => Err(Failure::new(format!("cannot open {}: {err}", path.display()))),
    }
}

fn emit(report: &InspectionReport, style: JsonStyle, output: Option<&Path>) -> Result<(), Failure> {
    let text = match style {
        JsonStyle::Compact => serde_json::to_string(report),
        JsonStyle::Pretty => serde_json::to_string_pretty(report),
    }
    .context("cannot serialize report")?;

    match output {
        Some(path) => fs::write(path, text + "\n")
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

/// Parse `TYPE=VALUE`, reading VALUE the way the type expects it.
fn parse_assignment(arg: &str) -> Result<(WireType, WireValue), String> {
    let (name, raw) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TYPE=VALUE, got '{arg}'"))?;
    let wire_type: WireType = name.parse().map_err(|err| format!("{err}"))?;
    let raw = raw.trim();
    let value = match wire_type {
        WireType::Bool => raw.parse::<bool>().ok().map(WireValue::Bool),
        WireType::Float32 => raw.parse::<f32>().ok().map(WireValue::F32),
        WireType::Float64 => raw.parse::<f64>().ok().map(WireValue::F64),
        _ => parse_integer(raw),
    };
    value
        .map(|value| (wire_type, value))
        .ok_or_else(|| format!("cannot read '{raw}' as {}", wire_type.description()))
}

/// Decimal or `0x` hex, with an optional leading minus.
fn parse_integer(raw: &str) -> Option<WireValue> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u64>().ok()?,
    };
    if negative {
        i64::try_from(-(magnitude as i128)).ok().map(WireValue::I64)
    } else {
        Some(WireValue::U64(magnitude))
    }
}

/// Two hex digits per byte; whitespace, `:` and `,` are ignored.
fn parse_hex(text: &str) -> Result<Vec<u8>, Failure> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':' && *b != b',')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(Failure::new(format!("odd number of hex digits in '{text}'"))
            .hint("write two digits per byte, e.g. '0a ff'"));
    }
    digits
        .chunks(2)
        .map(|pair| Some(nibble(pair[0])? << 4 | nibble(pair[1])?))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| Failure::new(format!("invalid hex in '{text}'")).hint("use digits 0-9 and a-f"))
}

fn nibble(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}
