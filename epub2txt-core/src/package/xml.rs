//! Element walker over quick-xml events

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Visit every element of an XML document in document order.
///
/// `visit` receives the local names of the element's ancestors (outermost
/// first) and the element itself. The root element's local name must equal
/// `root`. Errors are returned as display strings for the caller to wrap.
pub(crate) fn walk_elements<F>(bytes: &[u8], root: &str, mut visit: F) -> Result<(), String>
where
    F: FnMut(&[String], &BytesStart<'_>) -> Result<(), String>,
{
    let content = std::str::from_utf8(strip_bom(bytes)).map_err(|e| e.to_string())?;

    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut ancestors: Vec<String> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = local_name(&e);
                check_root(&mut seen_root, &ancestors, &name, root)?;
                visit(&ancestors, &e)?;
                ancestors.push(name);
            }
            Ok(Event::Empty(e)) => {
                let name = local_name(&e);
                check_root(&mut seen_root, &ancestors, &name, root)?;
                visit(&ancestors, &e)?;
            }
            Ok(Event::End(_)) => {
                ancestors.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "error at position {}: {}",
                    reader.error_position(),
                    e
                ))
            }
            _ => {}
        }
    }

    if !seen_root {
        return Err(format!("missing <{}> root element", root));
    }

    Ok(())
}

/// Read an attribute by local name, entity-unescaped
pub(crate) fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, String> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Whether `ancestors` is exactly `path`
pub(crate) fn is_under(ancestors: &[String], path: &[&str]) -> bool {
    ancestors.len() == path.len() && ancestors.iter().zip(path).all(|(a, b)| a == b)
}

fn check_root(
    seen_root: &mut bool,
    ancestors: &[String],
    name: &str,
    root: &str,
) -> Result<(), String> {
    if !ancestors.is_empty() {
        return Ok(());
    }
    if *seen_root {
        return Err(format!("unexpected second root element <{}>", name));
    }
    if name != root {
        return Err(format!(
            "expected <{}> root element but found <{}>",
            root, name
        ));
    }
    *seen_root = true;
    Ok(())
}

fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data)
}
