//! Basic usage of the text splitting API

use splitkit_api::{split_text, CharClass, Config, ConfigBuilder, Input, TextSplitter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Presets through the convenience function
    println!("=== Method 1: Presets ===");
    let output = split_text("name,age,,city", Config::fields(','))?;

    println!("Found {} fields:", output.pieces.len());
    for (i, piece) in output.pieces.iter().enumerate() {
        println!(
            "  Field {}: {:?} at byte {}",
            i + 1,
            piece.text,
            piece.byte_offset
        );
    }
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: Custom delimited configuration
    println!("=== Method 2: Custom Configuration ===");
    let config = ConfigBuilder::default()
        .class(CharClass::Punctuation)
        .drop_blanks()
        .build()?;
    let splitter = TextSplitter::with_config(config)?;

    let pieces = splitter.split("これは日本語です。句読点、で分けます！");
    println!("Punctuation split gave {} pieces: {:?}\n", pieces.len(), pieces);

    // Method 3: Size-based chunking over any input
    println!("=== Method 3: Chunking ===");
    let splitter = TextSplitter::with_config(Config::builder().every(8).build()?)?;
    let output = splitter.process(Input::from_reader(std::io::Cursor::new(
        "A reader can be split too, eight characters at a time.",
    )))?;

    for piece in &output.pieces {
        println!("  [{:>3}] {}", piece.char_offset, piece.text);
    }

    Ok(())
}
