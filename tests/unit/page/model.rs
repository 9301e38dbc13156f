use super::*;

const DOC_JSON: &str = r##"
{
  "zoom": 2.0,
  "pages": [
    {
      "width": 10,
      "height": 20,
      "content": {
        "items": [
          { "kind": "fill_rect", "rect": { "x0": 0, "y0": 0, "x1": 5, "y1": 5 }, "color": [255, 0, 0, 255] },
          { "kind": "fill_path", "d": "M0,0 L10,0 L10,10 Z", "color": [0, 0, 255, 128], "fill_rule": "even_odd" },
          { "kind": "stroke_path", "d": "M0,0 L10,10", "color": [0, 0, 0, 255], "width": 0.5 }
        ]
      }
    },
    {
      "width": 4,
      "height": 4,
      "content": { "svg": "<svg xmlns='http://www.w3.org/2000/svg' width='4' height='4'/>" }
    }
  ]
}
"##;

#[test]
fn parses_items_and_svg_pages() {
    let doc = Document::from_reader(DOC_JSON.as_bytes()).unwrap();
    assert_eq!(doc.zoom(), 2.0);
    assert_eq!(doc.pages().len(), 2);

    let p0 = doc.page(0).unwrap();
    assert_eq!((p0.width, p0.height), (10.0, 20.0));
    let PageContent::Items(items) = &p0.content else {
        panic!("expected items");
    };
    assert_eq!(items.len(), 3);
    assert!(matches!(
        &items[1],
        PageItem::FillPath {
            fill_rule: FillRule::EvenOdd,
            ..
        }
    ));
    assert!(matches!(items[0], PageItem::FillRect { rect, .. } if rect.x1 == 5.0));

    assert!(matches!(doc.page(1).unwrap().content, PageContent::Svg(_)));
    assert!(doc.page(2).is_none());
}

#[test]
fn fill_rule_defaults_to_nonzero() {
    let item: PageItem =
        serde_json::from_str(r#"{ "kind": "fill_path", "d": "M0,0", "color": [0,0,0,255] }"#)
            .unwrap();
    assert!(matches!(
        item,
        PageItem::FillPath {
            fill_rule: FillRule::NonZero,
            ..
        }
    ));
}

#[test]
fn zoom_defaults_to_one() {
    let doc = Document::from_reader(r#"{ "pages": [] }"#.as_bytes()).unwrap();
    assert_eq!(doc.zoom(), 1.0);
}

#[test]
fn rejects_bad_zoom_and_geometry() {
    let err = Document::from_reader(r#"{ "zoom": 0, "pages": [] }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("zoom"));

    let doc = Document::new(1.0, vec![Page::with_items(0.0, 5.0, vec![])]);
    let err = doc.validate().unwrap_err();
    assert!(err.to_string().contains("page 0"));

    assert!(Page::with_items(f64::NAN, 1.0, vec![]).validate().is_err());
}

#[test]
fn malformed_json_is_invalid_arguments() {
    let err = Document::from_reader("{".as_bytes()).unwrap_err();
    assert!(matches!(err, RenderError::InvalidArguments(_)));
}

#[test]
fn from_path_reports_missing_file() {
    let err = Document::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn round_trips_through_json() {
    let doc = Document::new(
        1.5,
        vec![Page::with_svg(3.0, 4.0, "<svg/>")],
    );
    let s = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&s).unwrap();
    assert_eq!(back, doc);
    assert_eq!(doc.clone().with_zoom(3.0).zoom(), 3.0);
}
