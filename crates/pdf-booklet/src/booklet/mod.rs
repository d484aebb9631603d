//! PDF booklet conversion - reordering pages for two-up duplex printing
//!
//! The conversion:
//! 1. Pair pages outside-in over the even-padded page count
//! 2. Lay out two source pages per output sheet, alternating left/right
//!    assignment by sheet parity for duplex printing
//! 3. Assemble the output document one sheet at a time

mod io;
mod sheet;

pub use io::{load_pdf, save_pdf};

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::embed::{ImportCache, page_size};
use crate::layout::SheetGeometry;
use crate::options::BookletOptions;
use crate::pairing::compute_pairs;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Convert a document into its booklet layout.
///
/// Produces one landscape output sheet per page pair, in pair order. An
/// empty source yields a valid zero-sheet document.
pub async fn make_booklet(document: &Document, options: &BookletOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || make_booklet_sync(&document, &options)).await?
}

fn make_booklet_sync(source: &Document, options: &BookletOptions) -> Result<Document> {
    let pages = source.get_pages();
    let page_ids: Vec<ObjectId> = pages.values().copied().collect();
    let total_pages = page_ids.len();

    // Sheet geometry is fixed once per run from the source's first page
    let (base_width, base_height) = match page_ids.first() {
        Some(&id) => page_size(source, id).unwrap_or(DEFAULT_PAGE_DIMENSIONS),
        None => DEFAULT_PAGE_DIMENSIONS,
    };
    let geometry = SheetGeometry::for_base_page(base_width, base_height, options.gutter_pt);

    let pairs = compute_pairs(total_pages as i64)?;

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut cache = ImportCache::new();
    let mut page_refs = Vec::new();

    // One shared alpha graphics state serves every sheet's guide line
    let guide_gs = (options.guide_line && !pairs.is_empty())
        .then(|| sheet::register_guide_gstate(&mut output));

    for (sheet_index, &pair) in pairs.iter().enumerate() {
        let page_id = sheet::render_sheet(
            &mut output,
            source,
            &page_ids,
            sheet_index,
            pair,
            &geometry,
            guide_gs,
            pages_tree_id,
            &mut cache,
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}
