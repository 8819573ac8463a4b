//! Write demo - encode a payload into a looping QR GIF.
//!
//! Usage:
//!
//! ```sh
//! cargo run --example write_gif -- "some long payload text" out.gif
//! ```

use std::fs;

use flipbook::{Writer, WriterOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let payload = args.next().unwrap_or_else(|| "Hello, World!".to_string());
    let out = args.next().unwrap_or_else(|| "flipbook.gif".to_string());

    let writer = Writer::with_options(WriterOptions {
        split_length: 40,
        ..WriterOptions::default()
    });

    let frames = writer.encode(&payload)?;
    println!(
        "encoded {} frame(s) at QR version {}",
        frames.len(),
        frames.first().map(|f| f.version).unwrap_or(0)
    );

    let gif = writer.to_gif(&frames)?;
    fs::write(&out, &gif)?;
    println!("wrote {} bytes to {out}", gif.len());

    Ok(())
}
