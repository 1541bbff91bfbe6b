//! textbits CLI
//!
//! Convert between text and 8-bit binary strings, with auto-detection,
//! file conversion and history export. Runs an interactive menu when
//! invoked without a subcommand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use textbits::{
    convert_file, decode, encode, looks_like_binary, looks_like_binary_with_threshold,
    read_text_file, write_text_file, Decoder, Encoder, History, Mode, TextEncoding,
    DEFAULT_THRESHOLD,
};

#[derive(Parser, Debug)]
#[command(name = "textbits")]
#[command(version)]
#[command(about = "Text/binary string converter with auto-detection and history export")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert text to a binary string
    #[command(name = "encode", alias = "t2b")]
    Encode {
        /// Text to convert (default: stdin)
        text: Option<String>,

        /// Read input from file instead
        #[arg(short = 'i', long, conflicts_with = "text")]
        infile: Option<PathBuf>,

        /// Write output to file (default: stdout)
        #[arg(short = 'o', long)]
        outfile: Option<PathBuf>,

        /// Text encoding (utf-8, ascii, latin-1)
        #[arg(long, default_value = "utf-8")]
        encoding: TextEncoding,

        /// Print the result even when writing to a file
        #[arg(long)]
        print: bool,
    },

    /// Convert a binary string back to text
    #[command(name = "decode", alias = "b2t")]
    Decode {
        /// Binary string to convert (default: stdin)
        binary: Option<String>,

        /// Read input from file instead
        #[arg(short = 'i', long, conflicts_with = "binary")]
        infile: Option<PathBuf>,

        /// Write output to file (default: stdout)
        #[arg(short = 'o', long)]
        outfile: Option<PathBuf>,

        /// Text encoding (utf-8, ascii, latin-1)
        #[arg(long, default_value = "utf-8")]
        encoding: TextEncoding,

        /// Print the result even when writing to a file
        #[arg(long)]
        print: bool,
    },

    /// Detect whether the input is text or binary, then convert
    Auto {
        /// Input to classify and convert (default: stdin)
        input: Option<String>,

        /// Read input from file instead
        #[arg(short = 'i', long, conflicts_with = "input")]
        infile: Option<PathBuf>,

        /// Write output to file (default: stdout)
        #[arg(short = 'o', long)]
        outfile: Option<PathBuf>,

        /// Fraction of non-separator chars that must be binary digits
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Print the result even when writing to a file
        #[arg(long)]
        print: bool,
    },

    /// Convert a file and save the result
    Convert {
        /// Conversion direction: t2b or b2t
        #[arg(short, long)]
        mode: Mode,

        /// Input file path
        #[arg(short = 'i', long)]
        infile: PathBuf,

        /// Output file path
        #[arg(short = 'o', long)]
        outfile: PathBuf,

        /// Text encoding (utf-8, ascii, latin-1)
        #[arg(long, default_value = "utf-8")]
        encoding: TextEncoding,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut history = History::new();

    match cli.command {
        Some(Commands::Encode {
            text,
            infile,
            outfile,
            encoding,
            print,
        }) => {
            let data = resolve_input(text, infile.as_deref())?;
            let out = Encoder::with_encoding(encoding).encode(&data);
            history.add("t2b", &data, &out);
            emit(&out, outfile.as_deref(), print)?;
        }
        Some(Commands::Decode {
            binary,
            infile,
            outfile,
            encoding,
            print,
        }) => {
            let data = resolve_input(binary, infile.as_deref())?;
            let out = Decoder::with_encoding(encoding).decode(&data)?;
            history.add("b2t", &data, &out);
            emit(&out, outfile.as_deref(), print)?;
        }
        Some(Commands::Auto {
            input,
            infile,
            outfile,
            threshold,
            print,
        }) => {
            let data = resolve_input(input, infile.as_deref())?;
            let out = if looks_like_binary_with_threshold(&data, threshold) {
                eprintln!("Detected: Binary → Text");
                decode(&data)?
            } else {
                eprintln!("Detected: Text → Binary");
                encode(&data)
            };
            history.add("auto", &data, &out);
            emit(&out, outfile.as_deref(), print)?;
        }
        Some(Commands::Convert {
            mode,
            infile,
            outfile,
            encoding,
        }) => {
            let (in_len, out_len) =
                convert_file(&infile, &outfile, mode, encoding, &mut history)?;
            eprintln!(
                "Done: {} chars → {} chars. Saved to: {}",
                in_len,
                out_len,
                outfile.display()
            );
        }
        None => interactive_menu(&mut history)?,
    }

    Ok(())
}

/// Take input from the positional argument, a file, or stdin
fn resolve_input(arg: Option<String>, infile: Option<&Path>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if let Some(path) = infile {
        return read_text_file(path);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Write the result to a file and/or stdout
fn emit(out: &str, outfile: Option<&Path>, print: bool) -> Result<()> {
    if let Some(path) = outfile {
        write_text_file(path, out)?;
        eprintln!("Saved to: {}", path.display());
    }
    if print || outfile.is_none() {
        println!("{out}");
    }
    Ok(())
}

// ---------------- Interactive menu ---------------- //

fn interactive_menu(history: &mut History) -> Result<()> {
    println!("=== textbits ===");
    println!("1) Text → Binary");
    println!("2) Binary → Text");
    println!("3) Auto-detect");
    println!("4) Convert a file");
    println!("5) Show recent history");
    println!("6) Export history (JSON/CSV)");
    println!("0) Exit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(choice) = prompt(&mut lines, "\nChoice (0-6): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(text) = prompt(&mut lines, "Text: ")? else {
                    break;
                };
                let out = encode(&text);
                println!("\nBinary:\n{out}");
                history.add("t2b", &text, &out);
            }
            "2" => {
                let Some(binary) =
                    prompt(&mut lines, "Binary (8-bit groups, separators optional): ")?
                else {
                    break;
                };
                match decode(&binary) {
                    Ok(out) => {
                        println!("\nText:\n{out}");
                        history.add("b2t", &binary, &out);
                    }
                    Err(e) => println!("Error: {e}"),
                }
            }
            "3" => {
                let Some(data) = prompt(&mut lines, "Input (text or binary): ")? else {
                    break;
                };
                if looks_like_binary(&data) {
                    match decode(&data) {
                        Ok(out) => {
                            println!("\nDetected: Binary → Text\n{out}");
                            history.add("auto", &data, &out);
                        }
                        Err(e) => println!("Error: {e}"),
                    }
                } else {
                    let out = encode(&data);
                    println!("\nDetected: Text → Binary\n{out}");
                    history.add("auto", &data, &out);
                }
            }
            "4" => {
                let Some(mode_str) = prompt(&mut lines, "Mode (t2b or b2t): ")? else {
                    break;
                };
                let mode: Mode = match mode_str.parse() {
                    Ok(m) => m,
                    Err(e) => {
                        println!("Error: {e}");
                        continue;
                    }
                };
                let Some(infile) = prompt(&mut lines, "Input file path: ")? else {
                    break;
                };
                let Some(outfile) = prompt(&mut lines, "Output file path: ")? else {
                    break;
                };
                let infile = PathBuf::from(infile.trim_matches('"'));
                let outfile = PathBuf::from(outfile.trim_matches('"'));
                match convert_file(&infile, &outfile, mode, TextEncoding::Utf8, history) {
                    Ok((in_len, out_len)) => println!(
                        "Done: {} chars → {} chars. Saved to: {}",
                        in_len,
                        out_len,
                        outfile.display()
                    ),
                    Err(e) => println!("Error: {e:#}"),
                }
            }
            "5" => {
                println!("\n--- Recent history ---");
                for r in history.tail(10) {
                    println!(
                        "[{}] {} | in:{} out:{}",
                        r.timestamp,
                        r.mode.to_uppercase(),
                        r.input_len,
                        r.output_len
                    );
                    println!("  IN : {}", r.input_preview);
                    println!("  OUT: {}", r.output_preview);
                }
                if history.is_empty() {
                    println!("(empty)");
                }
            }
            "6" => {
                let Some(path) = prompt(&mut lines, "File name (.json or .csv): ")? else {
                    break;
                };
                match export_history(history, Path::new(&path)) {
                    Ok(()) => println!("Exported to: {path}"),
                    Err(e) => println!("Error: {e:#}"),
                }
            }
            "0" => {
                println!("Bye!");
                break;
            }
            _ => println!("Invalid option. Try 0-6."),
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; None on end of input
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Export history in the format implied by the path extension
fn export_history(history: &History, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => history.export_json(path),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => history.export_csv(path),
        _ => anyhow::bail!("Export requires a .json or .csv file name"),
    }
}
