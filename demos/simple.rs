//! Reconstructing a nested document from flat form pairs.
//!
//! Run with: cargo run --example simple

use formtree::from_pairs;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // The flat sequence a serialized form produces, in document order.
    let pairs = [
        ("id", "/frontend"),
        ("container.docker.image", "nginx:latest"),
        ("ports[0]", "8080"),
        ("ports[1]", "8443"),
        ("env[].key", "PORT"),
        ("env[].key", "HOST"),
    ];

    let doc = from_pairs(pairs)?;
    println!("Document: {}\n", doc);

    // As JSON, via the Serialize impl.
    let json = serde_json::to_string_pretty(&doc)?;
    println!("As JSON:\n{}", json);

    assert_eq!(
        doc.get("ports").and_then(|v| v.as_list()).map(Vec::len),
        Some(2)
    );
    println!("\n✓ Built {} top-level fields", doc.as_record().map_or(0, |r| r.len()));

    Ok(())
}
