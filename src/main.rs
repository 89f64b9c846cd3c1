//! uemu - Unsigned Integer Emulation
//!
//! CLI entry point for inspecting how unsigned values travel in signed carriers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::cmp::Ordering;
use std::io::{self, Write};
use std::path::PathBuf;
use uemu::dump::{self, Dumper};
use uemu::{
    bitwise_not_i64, compare_u32, compare_u64, double_to_u32, parse_as, parse_double, parse_i64,
    u32_to_double, widen_u32, BoolStyle, OutputFormat, ParseConfig, Target, UemuConfig, Value,
};

#[derive(Parser)]
#[command(name = "uemu")]
#[command(version)]
#[command(about = "Unsigned integer semantics over signed carrier words", long_about = None)]
struct Cli {
    /// Config file (default: uemu.toml searched upward from the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Commands sorted alphabetically for easier navigation
    /// Compare two unsigned values
    Cmp {
        /// Operand width
        #[arg(value_enum)]
        width: Width,

        /// Left operand (unsigned decimal)
        a: String,

        /// Right operand (unsigned decimal)
        b: String,
    },

    /// Convert a double to the 32-bit carrier of its unsigned value
    FromDouble {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// One's complement of a signed 64-bit value
    Not {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Parse text for a target type and print the result
    Parse {
        /// i32, u32, i64, u64, bool, double or char
        #[arg(value_parser = parse_target)]
        target: Target,

        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Convert an unsigned 32-bit value to a double
    ToDouble {
        /// Unsigned decimal
        value: String,
    },

    /// Zero-extend an unsigned 32-bit value to 64 bits
    Widen {
        /// Unsigned decimal
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Width {
    U32,
    U64,
}

fn parse_target(name: &str) -> std::result::Result<Target, String> {
    Target::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Target::ALL.iter().map(|t| t.name()).collect();
        format!("unknown target '{}' (expected one of: {})", name, names.join(", "))
    })
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

/// Where command results go.
struct Output {
    format: OutputFormat,
    style: BoolStyle,
}

impl Output {
    fn emit(&self, text: &str, data: serde_json::Value) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", text)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&data)?)?,
        }
        Ok(())
    }

    fn emit_value(&self, value: &Value, data: serde_json::Value) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let mut dumper = Dumper::with_style(io::stdout().lock(), self.style);
                dumper.value(value)?;
                dumper.flush()?;
                Ok(())
            }
            OutputFormat::Json => self.emit("", data),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => UemuConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => UemuConfig::load_from_cwd().context("Failed to load uemu.toml")?,
    };
    let output = Output {
        format: cli.format.unwrap_or(config.output.format),
        style: config.output.bool_style,
    };

    match cli.command {
        Commands::Cmp { width, a, b } => cmd_cmp(&output, &config.parse, width, &a, &b),
        Commands::FromDouble { value } => cmd_from_double(&output, &value),
        Commands::Not { value } => cmd_not(&output, &value),
        Commands::Parse { target, text } => cmd_parse(&output, &config.parse, target, &text),
        Commands::ToDouble { value } => cmd_to_double(&output, &config.parse, &value),
        Commands::Widen { value } => cmd_widen(&output, &config.parse, &value),
    }
}

fn parse_u32_arg(config: &ParseConfig, text: &str) -> Result<i32> {
    parse_as(Target::U32, text, config)?
        .as_u32_carrier()
        .context("u32 dispatch returned another type")
}

fn parse_u64_arg(config: &ParseConfig, text: &str) -> Result<i64> {
    parse_as(Target::U64, text, config)?
        .as_u64_carrier()
        .context("u64 dispatch returned another type")
}

fn ordering_name(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

fn cmd_cmp(output: &Output, config: &ParseConfig, width: Width, a: &str, b: &str) -> Result<()> {
    let (ord, bits_a, bits_b) = match width {
        Width::U32 => {
            let x = parse_u32_arg(config, a).context("Invalid left operand")?;
            let y = parse_u32_arg(config, b).context("Invalid right operand")?;
            (compare_u32(x, y), i64::from(x), i64::from(y))
        }
        Width::U64 => {
            let x = parse_u64_arg(config, a).context("Invalid left operand")?;
            let y = parse_u64_arg(config, b).context("Invalid right operand")?;
            (compare_u64(x, y), x, y)
        }
    };

    let name = ordering_name(ord);
    let code = ord as i32;
    output.emit(
        name,
        json!({ "ordering": name, "code": code, "a_bits": bits_a, "b_bits": bits_b }),
    )
}

fn cmd_from_double(output: &Output, text: &str) -> Result<()> {
    let d = parse_double(text).context("Invalid double")?;
    let bits = double_to_u32(d)?;
    output.emit(
        &format!("{} (bits {})", dump::format_uint(bits), dump::format_int(bits)),
        json!({ "unsigned": widen_u32(bits), "bits": bits }),
    )
}

fn cmd_not(output: &Output, text: &str) -> Result<()> {
    let v = parse_i64(text).context("Invalid i64")?;
    let r = bitwise_not_i64(v);
    output.emit(&dump::format_long(r), json!({ "input": v, "result": r }))
}

fn cmd_parse(output: &Output, config: &ParseConfig, target: Target, text: &str) -> Result<()> {
    let value =
        parse_as(target, text, config).with_context(|| format!("Failed to parse as {}", target))?;
    let data = json!({
        "target": target,
        "text": text,
        "value": dump::format_value(&value, output.style),
        "bits": value.carrier_bits(),
        "unsigned": value.unsigned_magnitude(),
    });
    output.emit_value(&value, data)
}

fn cmd_to_double(output: &Output, config: &ParseConfig, text: &str) -> Result<()> {
    let bits = parse_u32_arg(config, text)?;
    let d = u32_to_double(bits);
    output.emit(&dump::format_double(d), json!({ "bits": bits, "double": d }))
}

fn cmd_widen(output: &Output, config: &ParseConfig, text: &str) -> Result<()> {
    let bits = parse_u32_arg(config, text)?;
    let wide = widen_u32(bits);
    output.emit(&dump::format_long(wide), json!({ "bits": bits, "widened": wide }))
}
