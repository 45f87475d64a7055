//! phat CLI
//!
//! Build, parse, encode and decode HTML attribute strings from the terminal.
//!
//! Values given as JSON are read as JSON when they parse, and as plain
//! strings otherwise, so `phat attrs disabled` and `phat attrs '{"id":"x"}'`
//! both work.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use phat_common::warning::set_warnings_enabled;
use phat_html::delimiter::delimiter_entries;
use phat_html::{AttrValue, Delimiter, DelimiterRegistration, Echo, Markup, NamePolicy};
use strum::IntoEnumIterator;

/// phat: HTML attribute string utilities
#[derive(Parser, Debug)]
#[command(name = "phat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Serialize a map of attributes
    phat attrs '{"id":"main","class":["a","b"],"hidden":true}'

    # Parse the attributes of a tag
    phat parse '<a href="x" target="_blank">'

    # Parse and decode every value
    phat parse --decode "class='a b' data-n='5'"

    # Treat data-tags as comma-separated
    phat --delimiter data-tags=csv encode '["x","y"]' --name data-tags
"#)]
struct Cli {
    /// Register a delimiter for an attribute (NAME=space|comma), repeatable
    #[arg(long = "delimiter", value_name = "NAME=DELIM", global = true)]
    delimiters: Vec<DelimiterRegistration>,

    /// Require attribute names to start with a letter or underscore
    #[arg(long, global = true)]
    strict: bool,

    /// Do not print warnings about repaired or dropped input
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serialize attributes given as JSON (map, list or string)
    Attrs {
        /// Attribute set, or a single attribute name; `-` reads stdin
        input: String,
        /// Value for a single attribute name (JSON or text)
        value: Option<String>,
    },
    /// Parse an attribute string (or a tag) and print it as JSON
    Parse {
        /// Attribute string; `-` reads stdin
        input: String,
        /// Decode every value using its attribute name
        #[arg(long)]
        decode: bool,
    },
    /// Encode a JSON value for use inside an attribute
    Encode {
        /// Value (JSON or text); `-` reads stdin
        value: String,
        /// Attribute name, for delimiter lookup
        #[arg(long)]
        name: Option<String>,
    },
    /// Decode raw attribute text and print it as JSON
    Decode {
        /// Raw attribute text; `-` reads stdin
        raw: String,
        /// Attribute name, for delimiter lookup
        #[arg(long)]
        name: Option<String>,
    },
    /// Sanitize a tag name, or read the name of a tag
    TagName {
        /// Tag or name; `-` reads stdin
        input: String,
    },
    /// Sanitize an attribute name
    AttrName {
        /// Name; `-` reads stdin
        input: String,
    },
    /// List attribute names with a registered delimiter
    Delimiters,
}

/// Read `-` from stdin, anything else as given.
fn read_arg(arg: &str) -> Result<String> {
    read_arg_from(arg, io::stdin())
}

fn read_arg_from(arg: &str, mut input: impl Read) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_owned());
    }
    let mut buf = String::new();
    let _ = input
        .read_to_string(&mut buf)
        .context("failed to read standard input")?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_owned())
}

/// JSON if it parses, plain text otherwise.
fn value_arg(arg: &str) -> Result<AttrValue> {
    let text = read_arg(arg)?;
    Ok(serde_json::from_str::<serde_json::Value>(&text)
        .map_or_else(|_| AttrValue::from(text.as_str()), AttrValue::from))
}

fn run(cli: Cli) -> Result<()> {
    set_warnings_enabled(!cli.quiet);
    for registration in &cli.delimiters {
        registration.register();
    }

    let policy = if cli.strict {
        NamePolicy::RequireLetterStart
    } else {
        NamePolicy::Lenient
    };
    let markup = Markup::new().with_name_policy(policy);
    let mut echo = Echo::stdout(markup);

    match cli.command {
        Command::Attrs { input, value } => {
            let name = value_arg(&input)?;
            let value = match value {
                Some(value) => value_arg(&value)?,
                None => AttrValue::String(String::new()),
            };
            echo.attrs(&name, &value)?;
        }
        Command::Parse { input, decode } => {
            let raw = read_arg(&input)?;
            if decode {
                let decoded: AttrValue = markup
                    .parse_attrs(&raw)
                    .iter()
                    .map(|(name, value)| {
                        (name.clone(), markup.decode(value, Some(name.as_str())))
                    })
                    .collect();
                println!("{}", decoded.to_json());
                return Ok(());
            }
            echo.parse_attrs(&raw)?;
        }
        Command::Encode { value, name } => {
            echo.encode(&value_arg(&value)?, name.as_deref())?;
        }
        Command::Decode { raw, name } => {
            echo.decode(&read_arg(&raw)?, name.as_deref())?;
        }
        Command::TagName { input } => echo.tag_name(&read_arg(&input)?)?,
        Command::AttrName { input } => echo.attr_name(&read_arg(&input)?)?,
        Command::Delimiters => {
            let entries = delimiter_entries();
            for delimiter in Delimiter::iter() {
                let names: Vec<&str> = entries
                    .iter()
                    .filter(|(_, d)| *d == delimiter)
                    .map(|(name, _)| name.as_str())
                    .collect();
                println!("{}: {}", delimiter.bold(), names.join(" "));
            }
            return Ok(());
        }
    }
    echo.newline()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
