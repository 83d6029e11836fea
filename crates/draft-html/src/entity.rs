//! Entity rendering.
//!
//! Links become `<a>` elements around their text, images become `<img>`.
//! Only allow-listed data keys (and `data-*` keys) turn into attributes.

use draft_model::{Entity, EntityKind};

use crate::attributes::{is_data_attribute, value_text};
use crate::tree::{Element, Node};

/// Entity data key → attribute name, for links.
const LINK_ATTRIBUTES: &[(&str, &str)] = &[
    ("url", "href"),
    ("href", "href"),
    ("rel", "rel"),
    ("target", "target"),
    ("title", "title"),
    ("className", "class"),
];

/// Entity data key → attribute name, for images.
const IMAGE_ATTRIBUTES: &[(&str, &str)] = &[
    ("src", "src"),
    ("height", "height"),
    ("width", "width"),
    ("alt", "alt"),
    ("className", "class"),
];

/// Build the element for an entity. Links take ownership of `children`;
/// images leave them untouched. Returns `None` for kinds without an element,
/// in which case the caller renders the children unwrapped.
pub fn build_entity_element(entity: &Entity, children: &mut Vec<Node>) -> Option<Element> {
    let (mut element, allowed) = match &entity.kind {
        EntityKind::Link => {
            let mut a = Element::new("a");
            a.children = std::mem::take(children);
            (a, LINK_ATTRIBUTES)
        }
        EntityKind::Image => (Element::new("img"), IMAGE_ATTRIBUTES),
        EntityKind::Embed | EntityKind::Other(_) => return None,
    };

    for (name, value) in entity_attributes(entity, allowed) {
        element.set_attribute(name, value);
    }
    Some(element)
}

/// Attributes for an entity, in data key order.
fn entity_attributes(entity: &Entity, allowed: &[(&str, &str)]) -> Vec<(String, String)> {
    // `href` wins over `url` when both are set
    let has_href = entity.data.get("href").is_some_and(|v| !v.is_null());

    entity
        .data
        .iter()
        .filter_map(|(key, value)| {
            let text = value_text(value)?;
            if key == "url" && has_href {
                return None;
            }
            if let Some((_, attribute)) = allowed.iter().find(|(k, _)| *k == key.as_str()) {
                Some((attribute.to_string(), text))
            } else if is_data_attribute(key) {
                Some((key.clone(), text))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn render(entity: &Entity) -> Option<String> {
        build_entity_element(entity, &mut vec![Node::text("a")]).map(|el| Node::from(el).to_html())
    }

    #[test]
    fn test_unknown_kind_leaves_children() {
        let mut children = vec![Node::text("a")];
        assert!(build_entity_element(&Entity::new(EntityKind::Embed), &mut children).is_none());
        assert_eq!(children, vec![Node::text("a")]);
    }

    #[test]
    fn test_link_allow_list() {
        let entity = Entity::new(EntityKind::Link)
            .with_data("url", "/")
            .with_data("rel", Value::Null)
            .with_data("title", "hi")
            .with_data("extra", "foo")
            .with_data("data-id", 42);
        assert_eq!(
            render(&entity).unwrap(),
            "<a href=\"/\" title=\"hi\" data-id=\"42\">a</a>"
        );
    }

    #[test]
    fn test_link_with_href() {
        let entity = Entity::new(EntityKind::Link).with_data("href", "/");
        assert_eq!(render(&entity).unwrap(), "<a href=\"/\">a</a>");
    }

    #[test]
    fn test_href_takes_precedence_over_url() {
        let entity = Entity::new(EntityKind::Link)
            .with_data("url", "/from-url")
            .with_data("title", "t")
            .with_data("href", "/from-href");
        assert_eq!(
            render(&entity).unwrap(),
            "<a title=\"t\" href=\"/from-href\">a</a>"
        );
    }

    #[test]
    fn test_null_href_falls_back_to_url() {
        let entity = Entity::new(EntityKind::Link)
            .with_data("url", "/")
            .with_data("href", Value::Null);
        assert_eq!(render(&entity).unwrap(), "<a href=\"/\">a</a>");
    }

    #[test]
    fn test_link_class_name_and_target() {
        let entity = Entity::new(EntityKind::Link)
            .with_data("url", "/")
            .with_data("target", "_blank")
            .with_data("className", "ext");
        assert_eq!(
            render(&entity).unwrap(),
            "<a href=\"/\" target=\"_blank\" class=\"ext\">a</a>"
        );
    }

    #[test]
    fn test_invalid_data_attributes_dropped() {
        let entity = Entity::new(EntityKind::Link)
            .with_data("url", "/")
            .with_data("data-mutability", "mutable")
            .with_data("data-False", "bad")
            .with_data("data-", "no");
        assert_eq!(
            render(&entity).unwrap(),
            "<a href=\"/\" data-mutability=\"mutable\">a</a>"
        );
    }

    #[test]
    fn test_image_ignores_children() {
        let entity = Entity::new(EntityKind::Image)
            .with_data("src", "a.png")
            .with_data("alt", "A")
            .with_data("width", 100)
            .with_data("url", "/ignored");
        assert_eq!(
            render(&entity).unwrap(),
            "<img src=\"a.png\" alt=\"A\" width=\"100\">"
        );
    }

    #[test]
    fn test_embed_and_unknown_produce_nothing() {
        assert!(render(&Entity::new(EntityKind::Embed).with_data("url", "/")).is_none());
        assert!(render(&Entity::new(EntityKind::Other("MENTION".into()))).is_none());
    }
}
