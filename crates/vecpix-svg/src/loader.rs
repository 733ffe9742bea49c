use std::path::{Path, PathBuf};

use crate::ast::{Document, Node};
use crate::error::LoadError;

/// Placeholder path reported for documents parsed from memory.
const INLINE: &str = "<inline>";

/// Reads and parses the document at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    parse_document(&text, path)
}

/// Parses an SVG document held in memory.
pub fn parse_str(src: &str) -> Result<Document, LoadError> {
    parse_document(src, Path::new(INLINE))
}

fn parse_document(src: &str, path: &Path) -> Result<Document, LoadError> {
    // SVG files regularly carry a DOCTYPE; roxmltree rejects it by default.
    let options =
        roxmltree::ParsingOptions { allow_dtd: true, ..roxmltree::ParsingOptions::default() };
    let xml = roxmltree::Document::parse_with_options(src, options)
        .map_err(|source| LoadError::Xml { path: path.to_path_buf(), source })?;

    let root = xml.root_element();
    let tag = root.tag_name().name();
    if tag != "svg" {
        return Err(LoadError::UnexpectedRoot { path: PathBuf::from(path), tag: tag.to_string() });
    }

    Ok(Document { root: convert_node(root) })
}

fn convert_node(xml: roxmltree::Node<'_, '_>) -> Node {
    let node = xml
        .attributes()
        .fold(Node::new(xml.tag_name().name()), |node, a| node.with_attr(a.name(), a.value()));
    xml.children()
        .filter(|n| n.is_element())
        .map(convert_node)
        .fold(node, Node::with_child)
}
