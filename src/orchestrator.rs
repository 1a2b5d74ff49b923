//! File-level compression: naming, directories, read and write.
//!
//! `notes.txt` compresses to `<dir>/notes_compressed.bin`, which decompresses
//! to `<dir>/notes_decompressed<extension>`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::config::Config;
use crate::error::{HuffmanError, Result};
use crate::huffman_codec::{decompress, HuffmanCodec};

const COMPRESSED_SUFFIX: &str = "_compressed";
const DECOMPRESSED_SUFFIX: &str = "_decompressed";

/// Output path for compressing `input` into `output_dir`.
pub fn compressed_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = file_stem(input)?;
    Ok(output_dir.join(format!("{stem}{COMPRESSED_SUFFIX}.bin")))
}

/// Output path for decompressing `input` into `output_dir`.
///
/// The stem of `input` must end with `_compressed`.
pub fn decompressed_path(input: &Path, output_dir: &Path, extension: &str) -> Result<PathBuf> {
    let name = base_name(input)?;
    Ok(output_dir.join(format!("{name}{DECOMPRESSED_SUFFIX}{extension}")))
}

/// Name a compressed file was made from: `x_compressed.bin` -> `x`.
///
/// `_compressed` must end the stem and leave a non-empty name.
fn base_name(input: &Path) -> Result<&str> {
    file_stem(input)?
        .strip_suffix(COMPRESSED_SUFFIX)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| HuffmanError::InvalidFileName(input.to_path_buf()))
}

fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| HuffmanError::InvalidFileName(path.to_path_buf()))
}

/// Compress `input` into `output_dir`, creating the directory if needed.
pub fn compress_file(input: &Path, output_dir: &Path, config: &Config) -> Result<PathBuf> {
    let start = Instant::now();
    let output = compressed_path(input, output_dir)?;

    let data = fs::read(input)?;
    let (encoded, stats) = HuffmanCodec::compress_with_stats(&data)?;
    fs::create_dir_all(output_dir)?;
    fs::write(&output, &encoded)?;

    debug!(
        "{} -> {}: {} bytes -> {} bytes ({:.1}%), header {} bits, payload {} bits, pad {}",
        input.display(),
        output.display(),
        stats.input_bytes,
        stats.output_bytes,
        stats.ratio() * 100.0,
        stats.header_bits,
        stats.payload_bits,
        stats.pad_bits
    );
    if config.report_time {
        info!(
            "{} compressed in {:.3}s",
            file_stem(input)?,
            start.elapsed().as_secs_f64()
        );
    }
    Ok(output)
}

/// Decompress `input` into `output_dir`, creating the directory if needed.
pub fn decompress_file(input: &Path, output_dir: &Path, config: &Config) -> Result<PathBuf> {
    let start = Instant::now();
    let output = decompressed_path(input, output_dir, &config.extension)?;

    let encoded = fs::read(input)?;
    let data = decompress(&encoded)?;
    fs::create_dir_all(output_dir)?;
    fs::write(&output, &data)?;

    debug!(
        "{} -> {}: {} bytes -> {} bytes",
        input.display(),
        output.display(),
        encoded.len(),
        data.len()
    );
    if config.report_time {
        info!(
            "{} decompressed in {:.3}s",
            base_name(input)?,
            start.elapsed().as_secs_f64()
        );
    }
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_naming() {
        let dir = Path::new("out");
        assert_eq!(
            compressed_path(Path::new("files/example1.txt"), dir).unwrap(),
            dir.join("example1_compressed.bin")
        );
        assert_eq!(
            decompressed_path(Path::new("out/example1_compressed.bin"), dir, ".txt").unwrap(),
            dir.join("example1_decompressed.txt")
        );
        assert_eq!(
            decompressed_path(Path::new("a.b_compressed.bin"), dir, ".dat").unwrap(),
            dir.join("a.b_decompressed.dat")
        );
    }

    #[test]
    fn test_bad_names() {
        let dir = Path::new("out");
        assert!(matches!(
            decompressed_path(Path::new("plain.bin"), dir, ".txt"),
            Err(HuffmanError::InvalidFileName(_))
        ));
        assert!(matches!(
            decompressed_path(Path::new("_compressed.bin"), dir, ".txt"),
            Err(HuffmanError::InvalidFileName(_))
        ));
        assert!(compressed_path(Path::new(""), dir).is_err());
        assert!(matches!(
            decompressed_path(Path::new("a_compressed_copy.bin"), dir, ".txt"),
            Err(HuffmanError::InvalidFileName(_))
        ));
    }

    #[test]
    fn test_base_name_matches_compress_side() {
        let input = Path::new("notes.txt");
        let compressed = compressed_path(input, Path::new("out")).unwrap();
        assert_eq!(base_name(&compressed).unwrap(), file_stem(input).unwrap());
        assert_eq!(base_name(Path::new("dir/x_compressed.bin")).unwrap(), "x");
    }
}
