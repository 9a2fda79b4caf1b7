use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notebook_helpers::{
    DEFAULT_QR_SIZE, ECLevel, EncodeOptions, Encoder, NotebookSink, PngRenderer, QrEncoder,
    create_qrcode_with, radius_sphere,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Notebook helper CLI tools")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sphere radius for a volume
    Radius {
        #[arg(long, allow_hyphen_values = true)]
        volume: f64,
    },
    /// Encode a value and write the PNG image
    Encode {
        #[arg(long)]
        value: String,
        #[arg(long, default_value_t = DEFAULT_QR_SIZE)]
        size: u32,
        #[arg(long, default_value = "L")]
        ec_level: ECLevel,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the module matrix of the encoded value
    Matrix {
        #[arg(long)]
        value: String,
        #[arg(long, default_value = "L")]
        ec_level: ECLevel,
    },
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "notebook_helpers=debug,qrtool=debug"
    } else {
        "notebook_helpers=info,qrtool=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Radius { volume } => radius_cmd(volume),
        Command::Encode {
            value,
            size,
            ec_level,
            out,
        } => encode_cmd(&value, size, ec_level, &out),
        Command::Matrix { value, ec_level } => matrix_cmd(&value, ec_level),
    }
}

fn radius_cmd(volume: f64) -> Result<()> {
    println!("{}", radius_sphere(volume));
    Ok(())
}

fn encoder_for(ec_level: ECLevel) -> Encoder {
    Encoder::new(EncodeOptions::default().with_ec_level(ec_level))
}

fn encode_cmd(value: &str, size: u32, ec_level: ECLevel, out: &Path) -> Result<()> {
    let image = create_qrcode_with(
        &encoder_for(ec_level),
        &PngRenderer::default(),
        &NotebookSink,
        value,
        size,
    )
    .context("Failed to create QR code")?;

    std::fs::write(out, &image.value)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    info!(
        path = %out.display(),
        width = image.width,
        height = image.height,
        bytes = image.len(),
        "wrote {} image",
        image.format
    );
    Ok(())
}

fn matrix_cmd(value: &str, ec_level: ECLevel) -> Result<()> {
    let qr = encoder_for(ec_level)
        .encode(value.as_bytes())
        .context("Failed to encode value")?;
    println!(
        "version={} error_correction={:?} mask={:?} size={}",
        qr.version,
        qr.error_correction,
        qr.mask_pattern,
        qr.size()
    );
    print!("{}", qr.modules.to_text('█', ' '));
    Ok(())
}
