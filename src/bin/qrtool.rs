use clap::{ArgAction, Parser, Subcommand};
use qrgrid::decoder::layout::LayoutMap;
use qrgrid::tools::{AcquireOptions, AcquiredGrid, load_grid, read_grid_file};
use qrgrid::{DecodeOptions, DecodeResult, NumericRemainder, Segment, Version};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR module grid decoder")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample and decode pixel-aligned QR images
    Decode {
        #[arg(required = true)]
        images: Vec<PathBuf>,
        /// Module size in pixels (measured when omitted)
        #[arg(long)]
        module_size: Option<u32>,
        /// Symbol version (measured when omitted)
        #[arg(long)]
        version: Option<u8>,
        /// Single trailing digit policy for numeric segments: legacy or standard
        #[arg(long)]
        numeric_remainder: Option<NumericRemainder>,
        /// Print the module lookup table before decoding
        #[arg(long)]
        table: bool,
    },
    /// Decode a text grid ('#'/'_' per module, one row per line)
    DecodeGrid {
        file: PathBuf,
        #[arg(long)]
        version: u8,
        #[arg(long)]
        numeric_remainder: Option<NumericRemainder>,
    },
    /// Print the module lookup table of a version
    Layout {
        #[arg(long)]
        version: u8,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn decode_options(numeric_remainder: Option<NumericRemainder>) -> DecodeOptions {
    match numeric_remainder {
        Some(policy) => DecodeOptions::with_numeric_remainder(policy),
        None => DecodeOptions::default(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Decode {
            images,
            module_size,
            version,
            numeric_remainder,
            table,
        } => {
            let acquire = AcquireOptions {
                module_size,
                version,
            };
            decode_cmd(&images, &acquire, &decode_options(numeric_remainder), table)
        }
        Command::DecodeGrid {
            file,
            version,
            numeric_remainder,
        } => decode_grid_cmd(&file, version, &decode_options(numeric_remainder)),
        Command::Layout { version } => layout_cmd(version),
    }
}

type Outcome = Result<(AcquiredGrid, DecodeResult), String>;

fn decode_cmd(
    images: &[PathBuf],
    acquire: &AcquireOptions,
    options: &DecodeOptions,
    table: bool,
) -> ExitCode {
    let outcomes: Vec<Outcome> = images
        .par_iter()
        .map(|path| -> Outcome {
            let acquired = load_grid(path, acquire).map_err(|e| e.to_string())?;
            let result = qrgrid::decode_with_options(
                &acquired.grid,
                acquired.version.number(),
                options,
            )
            .map_err(|e| e.to_string())?;
            Ok((acquired, result))
        })
        .collect();

    let mut failed = false;
    for (path, outcome) in images.iter().zip(outcomes) {
        println!("Image: {}", path.display());
        match outcome {
            Ok((acquired, result)) => {
                println!(
                    "Origin: ({}, {})  Module size: {}px  Version: {}",
                    acquired.origin.0, acquired.origin.1, acquired.module_size, acquired.version
                );
                println!("Sampled modules:");
                print!("{}", acquired.grid.to_ascii());
                if table {
                    println!("{}", LayoutMap::for_version(acquired.version).render());
                }
                print_result(&result);
            }
            Err(err) => {
                eprintln!("Failed to decode {}: {}", path.display(), err);
                failed = true;
            }
        }
        println!();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn decode_grid_cmd(file: &Path, version: u8, options: &DecodeOptions) -> ExitCode {
    let grid = match read_grid_file(file) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };
    match qrgrid::decode_with_options(&grid, version, options) {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to decode {}: {}", file.display(), err);
            ExitCode::FAILURE
        }
    }
}

fn layout_cmd(version: u8) -> ExitCode {
    let Some(version) = Version::new(version) else {
        eprintln!("Unknown version {version} (expected 1-40)");
        return ExitCode::FAILURE;
    };
    let layout = LayoutMap::for_version(version);
    println!("{}", layout.render());
    println!(
        "Version {}: {}x{} modules, {} data bits",
        version,
        layout.size(),
        layout.size(),
        layout.data_bits()
    );
    ExitCode::SUCCESS
}

fn print_result(result: &DecodeResult) {
    println!("Format bits A: {}", result.format.bits_a());
    println!("Format bits B: {}", result.format.bits_b());
    println!("ECC level: {}", result.ec_level());
    println!("Mask pattern: {}", result.mask_pattern().id());
    if let Some(info) = &result.version_info {
        println!("Version bits A: {}", info.bits_a());
        println!("Version bits B: {}", info.bits_b());
        if info.encoded_version() == info.encoded_version_b() {
            println!("Encoded version: {}", info.encoded_version());
        } else {
            println!(
                "Encoded version: {} (field B: {})",
                info.encoded_version(),
                info.encoded_version_b()
            );
        }
    }
    for warning in &result.warnings {
        println!("Warning: {warning}");
    }
    println!(
        "Data bits ({} codewords): {}",
        result.data.codewords().len(),
        result.data.to_bit_string()
    );

    for (i, segment) in result.segments.iter().enumerate() {
        match segment {
            Segment::Terminator => println!("Segment {}: Terminator", i + 1),
            Segment::Byte { length, bytes } => println!(
                "Segment {}: {}, length {}: {} [{}]",
                i + 1,
                segment.mode(),
                length,
                segment.text().unwrap_or_default(),
                hex(bytes)
            ),
            Segment::Unsupported { mode, length } => match length {
                Some(len) => println!("Segment {}: {} ({} chars, not decoded)", i + 1, mode, len),
                None => println!("Segment {}: {} (not decoded)", i + 1, mode),
            },
            other => println!(
                "Segment {}: {}, length {}: {}",
                i + 1,
                other.mode(),
                other.length().unwrap_or(0),
                other.text().unwrap_or_default()
            ),
        }
    }
    println!("Stopped: {:?}", result.termination);
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
