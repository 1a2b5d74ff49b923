use bytehuff::{compress_file, decompress_file, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let workdir = std::env::temp_dir().join("bytehuff-demo");
    std::fs::create_dir_all(&workdir)?;

    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";
    let sample = workdir.join("sample.txt");
    std::fs::write(&sample, sample_text)?;
    println!("Created sample file: {} bytes", sample_text.len());

    let config = Config::default();

    let compressed = compress_file(&sample, &workdir.join("Compressed"), &config)?;
    let compressed_size = std::fs::metadata(&compressed)?.len();
    println!(
        "Compressed to {}: {} bytes ({:.1}% of original)",
        compressed.display(),
        compressed_size,
        compressed_size as f64 / sample_text.len() as f64 * 100.0
    );

    let decompressed = decompress_file(&compressed, &workdir.join("Decompressed"), &config)?;
    let decompressed_text = std::fs::read_to_string(&decompressed)?;

    if sample_text != decompressed_text {
        return Err("Decompression verification failed".into());
    }
    println!("Decompressed to {}: data matches", decompressed.display());

    std::fs::remove_dir_all(&workdir)?;
    Ok(())
}
