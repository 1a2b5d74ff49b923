use std::path::PathBuf;

use anyhow::Context;
use bytehuff::{compress_file, decompress_file, Config};
use clap::{Parser, Subcommand};

/// Huffman-compress and decompress files.
#[derive(Parser, Debug)]
#[command(author, version, about = "Byte-oriented Huffman file compressor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Do not report elapsed time.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress FILE into <DIR>/<name>_compressed.bin
    Compress {
        file: PathBuf,
        #[arg(short, long, default_value = "./Compressed")]
        output_dir: PathBuf,
    },
    /// Decompress a <name>_compressed.bin FILE into <DIR>/<name>_decompressed<EXT>
    Decompress {
        file: PathBuf,
        #[arg(short, long, default_value = "./Decompressed")]
        output_dir: PathBuf,
        #[arg(short, long, default_value = ".txt")]
        extension: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Compress { file, output_dir } => {
            let config = Config::new().with_report_time(!cli.quiet);
            let output = compress_file(&file, &output_dir, &config)
                .with_context(|| format!("compressing {}", file.display()))?;
            println!("{}", output.display());
        }
        Command::Decompress {
            file,
            output_dir,
            extension,
        } => {
            let config = Config::new()
                .with_extension(extension)
                .with_report_time(!cli.quiet);
            let output = decompress_file(&file, &output_dir, &config)
                .with_context(|| format!("decompressing {}", file.display()))?;
            println!("{}", output.display());
        }
    }

    Ok(())
}
