use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crc16::{compute, compute_file, generate_table, CrcTable, Error, Options};

const CHECK_INPUT: &str = "123456789";
const DEMO_FILE: &str = "test_file.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generator polynomial (hex with 0x prefix, or decimal)
    #[arg(long, env = "CRC16_POLYNOMIAL", default_value = "0x1021", value_parser = parse_u16)]
    polynomial: u16,

    /// Initial register value
    #[arg(long, env = "CRC16_INITIAL", default_value = "0xFFFF", value_parser = parse_u16)]
    initial: u16,

    /// Complement the final checksum
    #[arg(long, env = "CRC16_INVERT")]
    invert: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the lookup table
    Table,
    /// Checksum the "123456789" test vector
    Check,
    /// Checksum a file
    File {
        path: PathBuf,
    },
    /// Checksum a string argument
    Text {
        text: String,
    },
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid 16-bit value '{}': {}", s, e))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args = Args::parse();

    let table = generate_table(args.polynomial);
    let options = Options {
        initial: args.initial,
        invert: args.invert,
    };
    info!(
        "Polynomial 0x{:04X}, initial 0x{:04X}, invert {}",
        args.polynomial, options.initial, options.invert
    );

    match args.command {
        Some(Commands::Table) => print_table(&table),
        Some(Commands::Check) => print_check(&table, options),
        Some(Commands::Text { text }) => {
            println!("CRC-16 for '{}': {:04X}", text, compute(text.as_bytes(), &table, options));
        }
        Some(Commands::File { path }) => {
            if let Err(e) = print_file(&path, &table, options) {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        None => {
            print_table(&table);
            print_check(&table, options);
            match print_file(Path::new(DEMO_FILE), &table, options) {
                Ok(()) => {}
                Err(e @ Error::NotFound { .. }) => error!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn print_table(table: &CrcTable) {
    for (i, value) in table.iter().enumerate() {
        println!("Byte {:02X}: CRC = {:04X}", i, value);
    }
}

fn print_check(table: &CrcTable, options: Options) {
    let crc = compute(CHECK_INPUT.as_bytes(), table, options);
    println!("CRC-16 for '{}': {:04X}", CHECK_INPUT, crc);
}

fn print_file(path: &Path, table: &CrcTable, options: Options) -> Result<(), Error> {
    let crc = compute_file(path, table, options)?;
    println!("CRC-16 for file '{}': {:04X}", path.display(), crc);
    Ok(())
}
