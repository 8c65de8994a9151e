//! YAML rendering

use crate::assembler::ManifestSet;
use crate::document::Document;
use crate::error::{Error, Result};

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Render one document as YAML.
pub fn to_yaml(document: &Document) -> Result<String> {
    serde_yaml::to_string(document).map_err(|source| Error::Render {
        kind: document.kind().to_string(),
        name: document.name().to_string(),
        source,
    })
}

/// Render a whole set as one multi-document stream, in emission order.
pub fn to_yaml_stream(set: &ManifestSet) -> Result<String> {
    let mut out = String::new();
    for document in set.iter() {
        out.push_str(DOCUMENT_SEPARATOR);
        out.push_str(&to_yaml(document)?);
    }
    Ok(out)
}
