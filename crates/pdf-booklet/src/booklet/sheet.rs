//! Rendering one output sheet from a page pair

use crate::constants::{GUIDE_LINE_GRAY, GUIDE_LINE_OPACITY, GUIDE_LINE_WIDTH_PT};
use crate::embed::{ImportCache, embed_page, page_size};
use crate::layout::{PagePlacement, SheetGeometry, SlotSide, assign_sides, place_page};
use crate::types::{PagePair, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Render one sheet to the output document and return its page id.
///
/// A sheet always carries a content stream, even when both drawing
/// operations are absent, so no viewer-appeasing placeholder content is
/// needed for blank slots.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_sheet(
    output: &mut Document,
    source: &Document,
    source_page_ids: &[ObjectId],
    sheet_index: usize,
    pair: PagePair,
    geometry: &SheetGeometry,
    guide_gs: Option<ObjectId>,
    parent_pages_id: ObjectId,
    cache: &mut ImportCache,
) -> Result<ObjectId> {
    let (left_index, right_index) = assign_sides(sheet_index, pair);

    let mut placements: Vec<PagePlacement> = Vec::with_capacity(2);
    for (side, index) in [(SlotSide::Left, left_index), (SlotSide::Right, right_index)] {
        // Indices past the source are the blank slot padding an odd count
        if index >= source_page_ids.len() {
            continue;
        }

        // A page whose dimensions cannot be read still gets drawn, at the
        // run's base dimensions
        let (src_width, src_height) = page_size(source, source_page_ids[index])
            .unwrap_or((geometry.base_width(), geometry.height));

        let mut placement = place_page(geometry, side, src_width, src_height);
        placement.source_page = Some(index);
        placements.push(placement);
    }

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(geometry.width),
            Object::Real(geometry.height),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for (slot, placement) in placements.iter().enumerate() {
        let Some(source_index) = placement.source_page else {
            continue;
        };

        let xobject_name = format!("P{}", slot);
        let xobject_id = embed_page(output, source, source_page_ids[source_index], cache)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            placement.scale, placement.scale, placement.rect.x, placement.rect.y, xobject_name
        ));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    if let Some(gs_id) = guide_gs {
        content_ops.push(guide_line_ops(geometry));

        let mut ext_gstates = Dictionary::new();
        ext_gstates.set("GSguide", Object::Reference(gs_id));
        resources.set("ExtGState", Object::Dictionary(ext_gstates));
    }

    // Create content stream
    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Register the graphics state giving guide lines their fill opacity.
/// One instance serves every sheet of a run.
pub(crate) fn register_guide_gstate(output: &mut Document) -> ObjectId {
    let mut gs = Dictionary::new();
    gs.set("Type", Object::Name(b"ExtGState".to_vec()));
    gs.set("ca", Object::Real(GUIDE_LINE_OPACITY));
    output.add_object(gs)
}

/// Fill a thin vertical bar at the sheet's horizontal center, spanning its
/// full height, to mark the cut/fold line.
fn guide_line_ops(geometry: &SheetGeometry) -> String {
    let x = geometry.width / 2.0 - GUIDE_LINE_WIDTH_PT / 2.0;
    format!(
        "q /GSguide gs {} g {} 0 {} {} re f Q\n",
        GUIDE_LINE_GRAY, x, GUIDE_LINE_WIDTH_PT, geometry.height
    )
}
