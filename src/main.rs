//! # Tiquetera CLI
//!
//! Command-line interface for formatting and printing receipt tickets.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP API with two printers
//! tiquetera serve --printer caja=tcp://192.168.1.50:9100 --printer barra=/dev/usb/lp0
//!
//! # Format a ticket file to raw bytes
//! tiquetera render ticket.json -o ticket.bin
//!
//! # Format and print in one shot
//! tiquetera print ticket.json --printer tcp://192.168.1.50:9100
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `tiquetera=info,tower_http=info`).

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use tiquetera::{
    TiqueteraError, WidthPolicy,
    printer::{PrinterRegistry, PrinterTarget},
    server::{ServerConfig, serve},
    ticket::{Ticket, format_ticket},
    transport,
};

/// Tiquetera - Receipt ticket formatter for 58mm thermal printers
#[derive(Parser, Debug)]
#[command(name = "tiquetera")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP ticket server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8000")]
        listen: String,

        /// Printer as NAME=TARGET (TARGET: tcp://host:port, host:port, or a device path)
        #[arg(long = "printer", value_name = "NAME=TARGET")]
        printers: Vec<String>,

        /// Characters per line when a request does not ask for a width
        #[arg(long, default_value_t = tiquetera::printer::CHARS_PER_LINE_58MM)]
        width: usize,
    },

    /// Format a ticket file and write the raw bytes
    Render {
        /// Ticket JSON file
        ticket: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Characters per line when the ticket does not ask for a width
        #[arg(long, default_value_t = tiquetera::printer::CHARS_PER_LINE_58MM)]
        width: usize,
    },

    /// Format a ticket file and send it to a printer
    Print {
        /// Ticket JSON file
        ticket: PathBuf,

        /// Printer target (tcp://host:port, host:port, or a device path)
        #[arg(long)]
        printer: String,

        /// Characters per line when the ticket does not ask for a width
        #[arg(long, default_value_t = tiquetera::printer::CHARS_PER_LINE_58MM)]
        width: usize,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tiquetera=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_ticket(path: &Path) -> Result<Ticket, TiqueteraError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        TiqueteraError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ticket::from_json(&json)
}

fn run() -> Result<(), TiqueteraError> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Serve {
            listen,
            printers,
            width,
        } => {
            let printers = PrinterRegistry::from_args(&printers)?;
            if printers.is_empty() {
                tracing::warn!("no printers configured; /print will reject every request");
            }
            let config = ServerConfig {
                listen_addr: listen,
                printers,
                width: WidthPolicy::new(width),
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(config))
        }

        Commands::Render {
            ticket,
            output,
            width,
        } => {
            let ticket = load_ticket(&ticket)?;
            let layout = WidthPolicy::new(width).resolve(ticket.printer_width);
            let rendered = format_ticket(&ticket, &layout);
            tracing::info!(
                rows = rendered.report.rows,
                bytes = rendered.bytes.len(),
                dropped_marks = rendered.report.dropped_marks,
                replaced_chars = rendered.report.replaced_chars,
                "ticket rendered"
            );

            match output {
                Some(path) => std::fs::write(&path, &rendered.bytes)?,
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&rendered.bytes)?;
                    stdout.flush()?;
                }
            }
            Ok(())
        }

        Commands::Print {
            ticket,
            printer,
            width,
        } => {
            let target: PrinterTarget = printer.parse()?;
            let ticket = load_ticket(&ticket)?;
            let layout = WidthPolicy::new(width).resolve(ticket.printer_width);
            let rendered = format_ticket(&ticket, &layout);

            tracing::info!(
                target = %target,
                rows = rendered.report.rows,
                bytes = rendered.bytes.len(),
                "printing ticket"
            );
            transport::send(&target, &rendered.bytes)?;
            println!("Printed {} bytes to {}", rendered.bytes.len(), target);
            Ok(())
        }
    }
}
