// updated_property_details.rs
use std::collections::HashMap;

use roxmltree::{Document, Node};

use crate::models::capabilities::{self, Address};
use crate::models::response::{ResponseModel, ResponseStatus};
use crate::xml::{child_element, first_element, keyed_children, text_or_nil};

/// Page view counters reported for a property.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageViews {
    pub current_month: Option<String>,
    pub total: Option<String>,
}

/// Details a posting owner has added or edited on a property page.
///
/// Built from a GetUpdatedPropertyDetails response. Every value is kept
/// as the text the API sent; numeric-looking fields like `price` are not
/// converted. The `posting` and `edited_facts` blocks have no fixed
/// schema, so they land in maps keyed by normalized tag name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdatedPropertyDetails {
    status: ResponseStatus,
    pub zpid: Option<String>,
    pub address: Option<Address>,
    pub links: HashMap<String, String>,
    pub image_count: Option<String>,
    pub images: Vec<String>,
    pub page_views: Option<PageViews>,
    pub price: Option<String>,
    pub neighborhood: Option<String>,
    pub elementary_school: Option<String>,
    pub middle_school: Option<String>,
    pub school_district: Option<String>,
    pub home_description: Option<String>,
    pub posting: HashMap<String, String>,
    pub edited_facts: HashMap<String, String>,
}

impl ResponseModel for UpdatedPropertyDetails {
    fn from_status(status: ResponseStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    fn status(&self) -> &ResponseStatus {
        &self.status
    }

    fn extract_payload(&mut self, doc: &Document<'_>) {
        self.zpid = capabilities::extract_zpid(doc);
        self.address = capabilities::extract_address(doc);
        self.links = capabilities::extract_links(doc);
        let images = capabilities::extract_images(doc);
        self.image_count = images.count;
        self.images = images.urls;
        RawPayload::collect(doc).coerce_into(self);
    }
}

// Model-specific fields are gathered as nodes first, then coerced to
// text in a single pass, so a lookup miss in one field never affects
// the others.
struct RawPayload<'a, 'input> {
    page_views_current_month: Option<Node<'a, 'input>>,
    page_views_total: Option<Node<'a, 'input>>,
    price: Option<Node<'a, 'input>>,
    neighborhood: Option<Node<'a, 'input>>,
    elementary_school: Option<Node<'a, 'input>>,
    middle_school: Option<Node<'a, 'input>>,
    school_district: Option<Node<'a, 'input>>,
    home_description: Option<Node<'a, 'input>>,
    posting: Vec<(String, Node<'a, 'input>)>,
    edited_facts: Vec<(String, Node<'a, 'input>)>,
}

impl<'a, 'input> RawPayload<'a, 'input> {
    fn collect(doc: &'a Document<'input>) -> Self {
        let counters = first_element(doc, "pageViewCount");
        Self {
            page_views_current_month: counters
                .and_then(|node| child_element(node, "currentMonth")),
            page_views_total: counters.and_then(|node| child_element(node, "total")),
            price: first_element(doc, "price"),
            neighborhood: first_element(doc, "neighborhood"),
            elementary_school: first_element(doc, "elementarySchool"),
            middle_school: first_element(doc, "middleSchool"),
            school_district: first_element(doc, "schoolDistrict"),
            home_description: first_element(doc, "homeDescription"),
            posting: keyed_children(doc, "posting"),
            edited_facts: keyed_children(doc, "editedFacts"),
        }
    }

    fn coerce_into(self, model: &mut UpdatedPropertyDetails) {
        model.page_views = Some(PageViews {
            current_month: text_or_nil(self.page_views_current_month),
            total: text_or_nil(self.page_views_total),
        });
        model.price = text_or_nil(self.price);
        model.neighborhood = text_or_nil(self.neighborhood);
        model.elementary_school = text_or_nil(self.elementary_school);
        model.middle_school = text_or_nil(self.middle_school);
        model.school_district = text_or_nil(self.school_district);
        model.home_description = text_or_nil(self.home_description);
        model.posting = coerce_mapping(self.posting);
        model.edited_facts = coerce_mapping(self.edited_facts);
    }
}

fn coerce_mapping(entries: Vec<(String, Node<'_, '_>)>) -> HashMap<String, String> {
    let mut mapping = HashMap::new();
    for (key, node) in entries {
        mapping.insert(key, text_or_nil(Some(node)).unwrap_or_default());
    }
    mapping
}
