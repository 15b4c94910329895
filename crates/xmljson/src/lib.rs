//! XML text to JSON value conversion.
//!
//! Converts an XML document into a `serde_json::Value` suitable for handing
//! to JSON-based consumers:
//!
//! - an element becomes an object; `<root/>` becomes `{"root": {}}`
//! - attributes become `"@name"` keys
//! - an element holding only text becomes a string
//! - text mixed with attributes or children lands under `"$text"`
//! - repeated sibling elements fold into an array, in document order

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors emitted while converting XML to a JSON value.
#[derive(Debug, Error)]
pub enum XmlToJsonError {
    #[error("XML parse error: {0}")]
    Malformed(String),
    #[error("Document has no root element")]
    NoRoot,
    #[error("Unexpected content after the root element")]
    TrailingContent,
}

/// An element whose closing tag has not been seen yet.
struct OpenElement {
    name: String,
    attributes: Map<String, Value>,
    children: Vec<(String, Value)>,
    text: String,
}

/// Convert an XML document into a JSON value keyed by the root element name.
///
/// # Examples
/// ```
/// let value = xmljson::to_value("<note><to>Tove</to></note>").unwrap();
/// assert_eq!(value, serde_json::json!({"note": {"to": "Tove"}}));
/// ```
pub fn to_value(xml: &str) -> Result<Value, XmlToJsonError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event() {
            Err(e) => return Err(XmlToJsonError::Malformed(e.to_string())),
            Ok(Event::Start(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlToJsonError::TrailingContent);
                }
                stack.push(open_element(&start)?);
            }
            Ok(Event::Empty(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlToJsonError::TrailingContent);
                }
                let element = open_element(&start)?;
                close_element(element, &mut stack, &mut root);
            }
            Ok(Event::End(_)) => match stack.pop() {
                Some(element) => close_element(element, &mut stack, &mut root),
                None => {
                    return Err(XmlToJsonError::Malformed(
                        "closing tag without a matching opening tag".to_string(),
                    ))
                }
            },
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| XmlToJsonError::Malformed(e.to_string()))?;
                match stack.last_mut() {
                    Some(element) => element.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None if root.is_some() => return Err(XmlToJsonError::TrailingContent),
                    None => {
                        return Err(XmlToJsonError::Malformed(
                            "text outside of the root element".to_string(),
                        ))
                    }
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(element) = stack.last_mut() {
                    element.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctypes
            Ok(_) => {}
        }
    }

    if let Some(element) = stack.pop() {
        return Err(XmlToJsonError::Malformed(format!(
            "unclosed element: {}",
            element.name
        )));
    }

    match root {
        Some((name, value)) => {
            let mut document = Map::new();
            document.insert(name, value);
            Ok(Value::Object(document))
        }
        None => Err(XmlToJsonError::NoRoot),
    }
}

fn open_element(start: &BytesStart) -> Result<OpenElement, XmlToJsonError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Map::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlToJsonError::Malformed(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref());
        let value = attr
            .unescape_value()
            .map_err(|e| XmlToJsonError::Malformed(e.to_string()))?;
        attributes.insert(format!("@{key}"), Value::String(value.into_owned()));
    }
    Ok(OpenElement {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

/// Turn a finished element into its JSON value and attach it to its parent,
/// or record it as the root.
fn close_element(
    element: OpenElement,
    stack: &mut Vec<OpenElement>,
    root: &mut Option<(String, Value)>,
) {
    let OpenElement {
        name,
        attributes,
        children,
        text,
    } = element;
    let text = text.trim().to_string();

    let value = if attributes.is_empty() && children.is_empty() {
        if text.is_empty() {
            Value::Object(Map::new())
        } else {
            Value::String(text)
        }
    } else {
        let mut object = attributes;
        for (child_name, child_value) in children {
            insert_child(&mut object, child_name, child_value);
        }
        if !text.is_empty() {
            object.insert("$text".to_string(), Value::String(text));
        }
        Value::Object(object)
    };

    match stack.last_mut() {
        Some(parent) => parent.children.push((name, value)),
        None => *root = Some((name, value)),
    }
}

/// Insert a child value, folding repeated names into an array in document order.
fn insert_child(object: &mut Map<String, Value>, name: String, value: Value) {
    match object.entry(name) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => {
            let existing = slot.get_mut();
            if let Value::Array(items) = existing {
                items.push(value);
            } else {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
}
