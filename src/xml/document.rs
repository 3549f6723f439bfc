// document.rs
use roxmltree::{Document, Node};

use super::keys::normalize_key;

/// Finds the first element with the given tag name anywhere in the
/// document, in document order.
pub fn first_element<'a, 'input>(
    doc: &'a Document<'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    doc.descendants().find(|node| node.has_tag_name(name))
}

/// Finds the first direct child element of `parent` with the given tag
/// name. Grandchildren are not considered.
pub fn child_element<'a, 'input>(
    parent: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    parent.children().find(|node| node.has_tag_name(name))
}

/// Collects the child elements of the first element named `name`, paired
/// with their normalized tag names. Returns an empty list when no such
/// element exists. Text and whitespace nodes between children are
/// skipped.
pub fn keyed_children<'a, 'input>(
    doc: &'a Document<'input>,
    name: &str,
) -> Vec<(String, Node<'a, 'input>)> {
    let container = match first_element(doc, name) {
        Some(node) => node,
        None => return Vec::new(),
    };
    container
        .children()
        .filter(|node| node.is_element())
        .map(|node| (normalize_key(node.tag_name().name()), node))
        .collect()
}

/// Returns the trimmed text content of a node, or `None` when there is
/// no node at all. An element that exists but holds no text yields an
/// empty string, not `None`.
pub fn text_or_nil(node: Option<Node<'_, '_>>) -> Option<String> {
    let node = node?;
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Document<'_> {
        Document::parse(xml).expect("test fixture is well-formed")
    }

    #[test]
    fn test_first_element_uses_document_order() {
        let doc = parse("<a><b><price>1</price></b><price>2</price></a>");
        let node = first_element(&doc, "price");
        assert_eq!(text_or_nil(node), Some("1".to_string()));
    }

    #[test]
    fn test_first_element_missing() {
        let doc = parse("<a><b/></a>");
        assert!(first_element(&doc, "price").is_none());
    }

    #[test]
    fn test_child_element_ignores_grandchildren() {
        let doc = parse("<a><b><zpid>1</zpid></b><zpid>2</zpid></a>");
        let root = doc.root_element();
        let node = child_element(root, "zpid");
        assert_eq!(text_or_nil(node), Some("2".to_string()));
    }

    #[test]
    fn test_keyed_children_normalizes_and_skips_whitespace() {
        let doc = parse(
            "<r>\n  <posting>\n    <agentName>Jane</agentName>\n    <MLSID>12</MLSID>\n  </posting>\n</r>",
        );
        let entries = keyed_children(&doc, "posting");
        let keys: Vec<&str> = entries.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["agent_name", "mlsid"]);
    }

    #[test]
    fn test_keyed_children_missing_container() {
        let doc = parse("<r/>");
        assert!(keyed_children(&doc, "posting").is_empty());
    }

    #[test]
    fn test_text_or_nil_trims() {
        let doc = parse("<r><city>  Seattle \n</city></r>");
        let node = first_element(&doc, "city");
        assert_eq!(text_or_nil(node), Some("Seattle".to_string()));
    }

    #[test]
    fn test_text_or_nil_empty_element() {
        let doc = parse("<r><city/></r>");
        let node = first_element(&doc, "city");
        assert_eq!(text_or_nil(node), Some(String::new()));
    }

    #[test]
    fn test_text_or_nil_concatenates_nested_text() {
        let doc = parse("<r><v>1<u>2</u></v></r>");
        let node = first_element(&doc, "v");
        assert_eq!(text_or_nil(node), Some("12".to_string()));
    }

    #[test]
    fn test_text_or_nil_absent_node() {
        assert_eq!(text_or_nil(None), None);
    }
}
