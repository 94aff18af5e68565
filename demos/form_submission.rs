//! A form-submission handler doing its own downstream coercion.
//!
//! The deserializer hands back opaque string leaves; parsing numbers and
//! splitting comma-separated fields is the handler's job, shown here.
//!
//! Run with: cargo run --example form_submission

use formtree::{from_pairs, Value};
use std::error::Error;

#[derive(Debug)]
struct AppSettings {
    id: String,
    cpus: f64,
    instances: u32,
    uris: Vec<String>,
}

fn leaf<'a>(doc: &'a Value, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_leaf)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Serialized form output, with empty-valued controls already filtered
    // out by the submission handler.
    let pairs = [
        ("id", "/my-app"),
        ("cpus", "0.5"),
        ("instances", "3"),
        ("uris", "http://a.example,http://b.example"),
        ("container.volumes[0].hostPath", "/var/data"),
    ];

    let doc = from_pairs(pairs)?;

    let settings = AppSettings {
        id: leaf(&doc, "id").unwrap_or_default().to_string(),
        cpus: leaf(&doc, "cpus").and_then(|s| s.parse().ok()).unwrap_or(0.1),
        instances: leaf(&doc, "instances")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1),
        uris: leaf(&doc, "uris")
            .map(|s| s.split(',').map(str::to_string).collect())
            .unwrap_or_default(),
    };

    println!("Coerced settings: {:#?}", settings);

    let volumes = doc
        .get("container")
        .and_then(|c| c.get("volumes"))
        .and_then(Value::as_list);
    println!("Volumes: {:?}", volumes);

    Ok(())
}
