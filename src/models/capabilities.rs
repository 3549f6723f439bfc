use std::collections::HashMap;

use roxmltree::Document;

use crate::xml::{child_element, first_element, text_or_nil};

/// Street address and coordinates of a property.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    pub street: Option<String>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Photo gallery of a property: the reported count and the URLs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Images {
    pub count: Option<String>,
    pub urls: Vec<String>,
}

/// Reads the property id from the first `<zpid>` element.
pub fn extract_zpid(doc: &Document<'_>) -> Option<String> {
    text_or_nil(first_element(doc, "zpid"))
}

/// Reads the `<links>` block into a map keyed by the tag names the API
/// emits. Returns an empty map when the block is missing.
pub fn extract_links(doc: &Document<'_>) -> HashMap<String, String> {
    let mut links = HashMap::new();
    if let Some(container) = first_element(doc, "links") {
        for child in container.children().filter(|node| node.is_element()) {
            links.insert(
                child.tag_name().name().to_string(),
                text_or_nil(Some(child)).unwrap_or_default(),
            );
        }
    }
    links
}

/// Reads the `<address>` block. Returns `None` when the block is
/// missing; fields absent inside a present block are individually
/// `None`.
pub fn extract_address(doc: &Document<'_>) -> Option<Address> {
    let block = first_element(doc, "address")?;
    Some(Address {
        street: text_or_nil(child_element(block, "street")),
        zipcode: text_or_nil(child_element(block, "zipcode")),
        city: text_or_nil(child_element(block, "city")),
        state: text_or_nil(child_element(block, "state")),
        latitude: text_or_nil(child_element(block, "latitude")),
        longitude: text_or_nil(child_element(block, "longitude")),
    })
}

/// Reads the `<images>` block: the `<count>` child and every
/// `<image>/<url>` entry, in document order. The API usually wraps the
/// whole gallery in one `<image>` element holding several `<url>`
/// children; all of them are kept.
pub fn extract_images(doc: &Document<'_>) -> Images {
    let mut images = Images::default();
    if let Some(container) = first_element(doc, "images") {
        images.count = text_or_nil(child_element(container, "count"));
        images.urls = container
            .children()
            .filter(|node| node.has_tag_name("image"))
            .flat_map(|image| image.children().filter(|node| node.has_tag_name("url")))
            .filter_map(|node| text_or_nil(Some(node)))
            .collect();
    }
    images
}
