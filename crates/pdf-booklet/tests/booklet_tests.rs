use lopdf::{Dictionary, Document, Object, Stream};
use pdf_booklet::*;

fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    // Create pages array
    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    // Create pages dict
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

/// Sheets of the output document in order, as (media_box, xobject_count,
/// content_bytes) triples.
fn inspect_sheets(output: &Document) -> Vec<(Vec<f32>, usize, Vec<u8>)> {
    let mut sheets = Vec::new();
    for (_, page_id) in output.get_pages() {
        let page = output.get_dictionary(page_id).unwrap();

        let media_box: Vec<f32> = page
            .get(b"MediaBox")
            .and_then(|obj| obj.as_array())
            .unwrap()
            .iter()
            .map(|obj| match obj {
                Object::Integer(i) => *i as f32,
                Object::Real(r) => *r,
                _ => panic!("Non-numeric MediaBox entry"),
            })
            .collect();

        let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
        let xobject_count = resources
            .get(b"XObject")
            .and_then(|obj| obj.as_dict())
            .map(|dict| dict.len())
            .unwrap_or(0);

        let content_id = page.get(b"Contents").unwrap().as_reference().unwrap();
        let content = output
            .get_object(content_id)
            .unwrap()
            .as_stream()
            .unwrap()
            .content
            .clone();

        sheets.push((media_box, xobject_count, content));
    }
    sheets
}

#[tokio::test]
async fn test_load_pdf() {
    use tempfile::NamedTempFile;

    let mut doc = create_test_pdf(5);
    let temp = NamedTempFile::new().unwrap();

    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(temp.path(), writer).unwrap();

    let loaded = load_pdf(temp.path()).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 5);
}

#[tokio::test]
async fn test_save_pdf() {
    use tempfile::NamedTempFile;

    let doc = create_test_pdf(2);
    let temp = NamedTempFile::new().unwrap();

    save_pdf(doc, temp.path()).await.unwrap();

    assert!(temp.path().exists());
    let loaded = Document::load(temp.path()).unwrap();
    assert_eq!(loaded.get_pages().len(), 2);
}

#[tokio::test]
async fn test_sheet_count_matches_effective_pages() {
    for num_pages in 0..=7usize {
        let doc = create_test_pdf(num_pages);
        let output = make_booklet(&doc, &BookletOptions::default())
            .await
            .unwrap();

        assert_eq!(
            output.get_pages().len(),
            num_pages.div_ceil(2),
            "Wrong sheet count for {} source pages",
            num_pages
        );
    }
}

#[tokio::test]
async fn test_empty_source_yields_empty_booklet() {
    let doc = create_test_pdf(0);
    let output = make_booklet(&doc, &BookletOptions::default())
        .await
        .unwrap();

    assert_eq!(output.get_pages().len(), 0);
}

#[tokio::test]
async fn test_sheets_are_landscape_double_width() {
    let doc = create_test_pdf(4);
    let output = make_booklet(&doc, &BookletOptions::default())
        .await
        .unwrap();

    for (media_box, _, _) in inspect_sheets(&output) {
        assert_eq!(media_box[0], 0.0);
        assert_eq!(media_box[1], 0.0);
        assert!((media_box[2] - 1224.0).abs() < 0.01); // 2 x 612
        assert!((media_box[3] - 792.0).abs() < 0.01);
    }
}

#[tokio::test]
async fn test_three_page_booklet() {
    // 3 pages -> pairs (0,3), (1,2); index 3 is the padded blank.
    // Sheet 0 (even): blank left, page 0 right -> one drawn page.
    // Sheet 1 (odd): page 1 left, page 2 right -> two drawn pages.
    let doc = create_test_pdf(3);
    let output = make_booklet(&doc, &BookletOptions::default())
        .await
        .unwrap();

    let sheets = inspect_sheets(&output);
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].1, 1);
    assert_eq!(sheets[1].1, 2);
}

#[tokio::test]
async fn test_every_sheet_has_content_stream() {
    // Even a sheet with a blank slot and no guide line keeps its Contents
    let doc = create_test_pdf(1);
    let options = BookletOptions {
        guide_line: false,
        ..Default::default()
    };
    let output = make_booklet(&doc, &options).await.unwrap();

    let sheets = inspect_sheets(&output);
    assert_eq!(sheets.len(), 1);
    // One drawn page (the source page, right slot), no guide ops
    assert_eq!(sheets[0].1, 1);
    assert!(!sheets[0].2.is_empty());
}

#[tokio::test]
async fn test_guide_line_toggle() {
    let doc = create_test_pdf(2);

    let with_guide = make_booklet(&doc, &BookletOptions::default())
        .await
        .unwrap();
    let sheets = inspect_sheets(&with_guide);
    let content = String::from_utf8_lossy(&sheets[0].2).into_owned();
    assert!(content.contains("/GSguide gs"));
    assert!(content.contains("re f"));

    let options = BookletOptions {
        guide_line: false,
        ..Default::default()
    };
    let without_guide = make_booklet(&doc, &options).await.unwrap();
    let sheets = inspect_sheets(&without_guide);
    let content = String::from_utf8_lossy(&sheets[0].2).into_owned();
    assert!(!content.contains("/GSguide gs"));
}

#[tokio::test]
async fn test_pages_drawn_flush_to_outer_edges() {
    // Source pages are 612x792, slot width (1224 - 36) / 2 = 594, so each
    // page scales to 594 wide; the right page starts at 1224 - 594 = 630.
    let doc = create_test_pdf(2);
    let output = make_booklet(&doc, &BookletOptions::default())
        .await
        .unwrap();

    let sheets = inspect_sheets(&output);
    let content = String::from_utf8_lossy(&sheets[0].2).into_owned();

    // Both slots are drawn; the right page starts at x = 630 so its right
    // edge sits against the sheet edge
    assert!(content.contains("/P0 Do"));
    assert!(content.contains("/P1 Do"));
    assert!(content.contains("630"));
}

#[tokio::test]
async fn test_missing_media_box_falls_back_to_base_dimensions() {
    // First page is 612x792, second page carries no MediaBox at all. The
    // second page must be scaled with the run's base dimensions, exactly
    // like its sibling, not with the A4 defaults.
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for has_media_box in [true, false] {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let mut page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]);
        if has_media_box {
            page.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            );
        }
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(2)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let output = make_booklet(&doc, &BookletOptions::default())
        .await
        .unwrap();

    let sheets = inspect_sheets(&output);
    assert_eq!(sheets.len(), 1);
    let content = String::from_utf8_lossy(&sheets[0].2).into_owned();

    // Slot width (1224 - 36) / 2 = 594, base dims 612x792: scale 594/612
    let expected_scale = 594.0 / 612.0;
    let drawn: Vec<Vec<f32>> = content
        .lines()
        .filter(|line| line.contains("Do"))
        .map(|line| {
            line.split_whitespace()
                .filter_map(|token| token.parse().ok())
                .collect()
        })
        .collect();

    assert_eq!(drawn.len(), 2);
    for op in &drawn {
        // Tokens: scale, 0, 0, scale, x, y
        let scale = op[0];
        let y = op[5];
        assert!(
            (scale - expected_scale).abs() < 1e-3,
            "Expected base-dimension scale {}, got {}",
            expected_scale,
            scale
        );
        // Vertically centered for the base aspect ratio
        assert!((y - (792.0 - 792.0 * scale) / 2.0).abs() < 0.01);
    }
}

#[tokio::test]
async fn test_guide_gstate_shared_across_sheets() {
    let doc = create_test_pdf(4);
    let output = make_booklet(&doc, &BookletOptions::default())
        .await
        .unwrap();
    assert_eq!(output.get_pages().len(), 2);

    // Both sheets reference one ExtGState object
    let gstate_count = output
        .objects
        .values()
        .filter(|obj| {
            obj.as_dict()
                .ok()
                .and_then(|dict| dict.get(b"Type").ok())
                .and_then(|t| t.as_name().ok())
                .map(|name| name == b"ExtGState".as_slice())
                .unwrap_or(false)
        })
        .count();
    assert_eq!(gstate_count, 1);

    for (_, _, content) in inspect_sheets(&output) {
        let content = String::from_utf8_lossy(&content).into_owned();
        assert!(content.contains("/GSguide gs"));
    }
}

#[tokio::test]
async fn test_invalid_gutter_rejected() {
    let doc = create_test_pdf(2);
    let options = BookletOptions {
        gutter_pt: -1.0,
        ..Default::default()
    };

    match make_booklet(&doc, &options).await {
        Err(BookletError::Config(_)) => {}
        other => panic!("Expected Config error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_full_workflow() {
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.pdf");
    let output_path = temp_dir.path().join("booklet.pdf");

    let mut doc = create_test_pdf(10);
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(&input_path, writer).unwrap();

    let loaded = load_pdf(&input_path).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 10);

    let booklet = make_booklet(&loaded, &BookletOptions::default())
        .await
        .unwrap();
    save_pdf(booklet, &output_path).await.unwrap();

    assert!(output_path.exists());
    let reloaded = Document::load(&output_path).unwrap();
    assert_eq!(reloaded.get_pages().len(), 5);
}
