#![forbid(unsafe_code)]

mod pak;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "duopak", version, about = "Bundles an image and a 3D model into one .pak artifact")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive wizard for packing a bundle (terminal).
    Ui,

    /// Pack an image file and a model file into a bundle.
    Pack {
        /// Image file (copied as opaque bytes; not validated).
        #[arg(long)]
        image: PathBuf,
        /// 3D-model file (copied as opaque bytes; not validated).
        #[arg(long)]
        model: PathBuf,
        /// Output bundle file.
        #[arg(long)]
        output: PathBuf,
    },

    /// Split a bundle back into its two original files.
    Unpack {
        #[arg(long)]
        pak: PathBuf,
        /// Output directory (created if missing).
        #[arg(long)]
        output: PathBuf,
    },

    /// Print the recorded names and payload sizes of a bundle.
    Info {
        #[arg(long)]
        pak: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let res = match cli.cmd {
        Command::Ui => ui::run(),
        Command::Pack { image, model, output } => pak::pack(&image, &model, &output),
        Command::Unpack { pak, output } => pak::unpack(&pak, &output),
        Command::Info { pak } => pak::info(&pak),
    };

    if let Err(e) = res {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
