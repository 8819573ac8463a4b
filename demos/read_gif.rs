//! Read demo - reassemble a payload from a QR GIF.
//!
//! Usage:
//!
//! ```sh
//! cargo run --example read_gif -- flipbook.gif
//! ```

use std::fs;

use bytes::Bytes;
use flipbook::{GifSource, Reader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "flipbook.gif".to_string());

    let bytes = Bytes::from(fs::read(&path)?);
    let source = GifSource::from_bytes(bytes)?;
    println!("decomposed {} frame(s) from {path}", source.len());

    let payload = Reader::new(source).read().await?;
    println!("{payload}");

    Ok(())
}
