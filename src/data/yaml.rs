//! Rendering of reports as YAML and JSON documents.

use anyhow::{Context, Result};
use serde::Serialize;
use yaml_rust_davvid::yaml::Hash;
use yaml_rust_davvid::{Yaml, YamlEmitter};

/// Renders a value as a YAML document, keeping multi-line strings as blocks.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let value = serde_yaml::to_value(data).context("Failed to convert report to YAML value")?;

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter
        .dump(&to_emitter_value(&value))
        .context("Failed to emit YAML")?;

    output.push('\n');
    Ok(output)
}

/// Renders a value as pretty-printed JSON.
pub fn to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to render JSON")
}

fn to_emitter_value(value: &serde_yaml::Value) -> Yaml {
    match value {
        serde_yaml::Value::Null => Yaml::Null,
        serde_yaml::Value::Bool(b) => Yaml::Boolean(*b),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Yaml::Integer(i),
            None => Yaml::Real(n.to_string()),
        },
        serde_yaml::Value::String(s) => Yaml::String(s.clone()),
        serde_yaml::Value::Sequence(items) => {
            Yaml::Array(items.iter().map(to_emitter_value).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut hash = Hash::new();
            for (k, v) in map {
                hash.insert(to_emitter_value(k), to_emitter_value(v));
            }
            Yaml::Hash(hash)
        }
        serde_yaml::Value::Tagged(tagged) => to_emitter_value(&tagged.value),
    }
}
