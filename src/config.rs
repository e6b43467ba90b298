use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::ByteOrder;
use crate::data::writer::OutputStyle;

/// Keep only the ship records of a type-id dump.
///
/// With no arguments, reads `./ids.json` and writes `./ships.json`.
#[derive(Debug, Clone, Parser)]
#[command(name = "ship-filter", version, about)]
pub struct Config {
    /// UTF-16 JSON object of type records keyed by type id
    #[arg(long, short, value_name = "PATH", default_value = "ids.json")]
    pub input: PathBuf,

    /// Destination for the filtered records (overwritten)
    #[arg(long, short, value_name = "PATH", default_value = "ships.json")]
    pub output: PathBuf,

    /// Byte order of the input
    #[arg(long, value_enum, default_value_t = ByteOrder::Auto)]
    pub byte_order: ByteOrder,

    /// Indent the output instead of writing a single line
    #[arg(long)]
    pub pretty: bool,
}

impl Config {
    pub fn output_style(&self) -> OutputStyle {
        if self.pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Compact
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("ids.json"),
            output: PathBuf::from("ships.json"),
            byte_order: ByteOrder::Auto,
            pretty: false,
        }
    }
}
