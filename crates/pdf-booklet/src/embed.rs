//! Embedding source pages into the output document
//!
//! Each source page becomes a Form XObject in the output document so it can
//! be drawn at an arbitrary position and scale. The page's resources are
//! imported by following references; a per-run cache keeps shared resources
//! (fonts, images) from being copied more than once.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Maps source object ids to their copies in the output document
pub(crate) type ImportCache = HashMap<ObjectId, ObjectId>;

/// Turn a source page into a Form XObject in the output document.
///
/// The XObject's BBox is the page's MediaBox, so drawing it with a scale
/// and translation reproduces the page content within that box.
pub(crate) fn embed_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut ImportCache,
) -> Result<ObjectId> {
    let page = source.get_dictionary(page_id)?;

    let bbox = page
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .cloned()
        .unwrap_or_else(default_bbox);

    let mut xobject = Dictionary::new();
    xobject.set("Type", Object::Name(b"XObject".to_vec()));
    xobject.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject.set("FormType", Object::Integer(1));
    xobject.set("BBox", Object::Array(bbox));

    if let Ok(resources) = page.get(b"Resources") {
        xobject.set("Resources", import_object(output, source, resources, cache)?);
    }

    let content = page_content(source, page)?;
    Ok(output.add_object(Stream::new(xobject, content)))
}

fn default_bbox() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.1),
    ]
}

/// Collect a page's content stream bytes. A page without Contents is a
/// valid blank page and yields empty bytes.
fn page_content(doc: &Document, page: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };

    let mut data = Vec::new();
    match contents {
        Object::Reference(id) => append_stream(doc, *id, &mut data)?,
        Object::Array(refs) => {
            for obj in refs {
                if let Object::Reference(id) = obj {
                    append_stream(doc, *id, &mut data)?;
                    data.push(b'\n');
                }
            }
        }
        _ => {}
    }
    Ok(data)
}

fn append_stream(doc: &Document, id: ObjectId, out: &mut Vec<u8>) -> Result<()> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        let content = stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone());
        out.extend_from_slice(&content);
    }
    Ok(())
}

/// Deep-copy an object from the source into the output document, following
/// references. Cached ids are reused so shared resources travel once.
pub(crate) fn import_object(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut ImportCache,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&copied_id) = cache.get(id) {
                return Ok(Object::Reference(copied_id));
            }

            let referenced = source.get_object(*id)?;
            let copied = import_object(output, source, referenced, cache)?;
            let copied_id = output.add_object(copied);
            cache.insert(*id, copied_id);

            Ok(Object::Reference(copied_id))
        }
        Object::Dictionary(dict) => {
            let mut copied = Dictionary::new();
            for (key, value) in dict.iter() {
                copied.set(key.clone(), import_object(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(copied))
        }
        Object::Array(arr) => {
            let copied: Result<Vec<_>> = arr
                .iter()
                .map(|item| import_object(output, source, item, cache))
                .collect();
            Ok(Object::Array(copied?))
        }
        Object::Stream(stream) => {
            let mut dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                dict.set(key.clone(), import_object(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(obj.clone()),
    }
}

/// A page's (width, height) in points, from its MediaBox.
///
/// Returns None when the page dictionary is unreadable or the MediaBox is
/// absent, short, or non-numeric; the caller decides which fallback
/// dimensions apply.
pub(crate) fn page_size(doc: &Document, page_id: ObjectId) -> Option<(f32, f32)> {
    let page = doc.get_dictionary(page_id).ok()?;
    let mb = page.get(b"MediaBox").and_then(|obj| obj.as_array()).ok()?;
    if mb.len() < 4 {
        return None;
    }

    let x0 = as_number(&mb[0])?;
    let y0 = as_number(&mb[1])?;
    let x1 = as_number(&mb[2])?;
    let y1 = as_number(&mb[3])?;
    Some(((x1 - x0).abs(), (y1 - y0).abs()))
}

fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
