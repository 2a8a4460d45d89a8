mod common;

use common::temp_file;
use slidecoach::deck::{Deck, DeckError, DeckFileError, GridIcon, SlideId, SlideLayout};

const SAMPLE: &str = r#"
title = "Platform Review"

[[slides]]
id = 1
variant = "COVER"
title = "Platform Review"
subtitle = "Q3"
image_prompt = "A skyline at dawn"

[[slides]]
id = 2
variant = "split-columns"
title = "Before and after"
[slides.columns]
left_title = "Before"
left_points = ["Manual deploys"]
right_title = "After"
right_points = ["Pipelines"]

[[slides]]
id = 3
variant = "table"
title = "Plan"
[slides.table]
headers = ["Phase", "Focus", "Outcome"]
rows = [["One", "Learn", "Context"], ["Two", "Build", "Leverage"]]

[[slides]]
id = 4
variant = "grid"
title = "Pillars"
grid_items = [
  { title = "Speed", desc = "Ship daily", icon = "zap" },
  { title = "Craft", description = "Read widely", icon = "sparkles" },
]

[[slides]]
id = 5
variant = "image_split"
title = "Artifact"
points = ["Shown inline"]
generated_image = "data:image/png;base64,iVBORw0KGgo="

[[slides]]
id = 6
variant = "timeline"
title = "History"
"#;

#[test]
fn test_loads_every_supported_variant() {
    let (_dir, path) = temp_file("review.toml", SAMPLE);
    let deck = Deck::load(&path).unwrap();

    assert_eq!(deck.title(), "Platform Review");
    assert_eq!(deck.len(), 6);

    let tags: Vec<&str> = deck.slides().iter().map(|s| s.layout.tag()).collect();
    assert_eq!(tags, ["COVER", "SPLIT", "TABLE", "GRID", "IMAGE_SPLIT", "timeline"]);

    assert_eq!(deck.slides()[0].image_prompt(), Some("A skyline at dawn"));

    match &deck.slides()[2].layout {
        SlideLayout::Table(table) => {
            assert_eq!(table.table.headers[2], "Outcome");
            assert_eq!(table.table.rows[1][2], "Leverage");
        }
        other => panic!("expected table, got {:?}", other),
    }

    match &deck.slides()[3].layout {
        SlideLayout::Grid(grid) => {
            assert_eq!(grid.items[0].icon, GridIcon::Zap);
            assert_eq!(grid.items[1].description, "Read widely");
            assert_eq!(grid.items[1].icon, GridIcon::Layout);
        }
        other => panic!("expected grid, got {:?}", other),
    }

    let artifact = deck.slides()[4].artifact().expect("authored image");
    assert_eq!(artifact.mime_type(), "image/png");

    assert!(matches!(
        deck.slides()[5].layout,
        SlideLayout::Unsupported { .. }
    ));
}

#[test]
fn test_title_falls_back_to_file_stem() {
    let (_dir, path) = temp_file(
        "offsite.toml",
        "[[slides]]\nid = 1\nvariant = \"closing\"\ntitle = \"Thanks\"\n",
    );
    let deck = Deck::load(&path).unwrap();
    assert_eq!(deck.title(), "offsite");
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Deck::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, DeckFileError::ReadError { .. }));
}

#[test]
fn test_empty_deck_is_rejected() {
    let err = Deck::from_toml_str("title = \"x\"\n", "x").unwrap_err();
    assert!(matches!(err, DeckFileError::Deck(DeckError::Empty)));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let toml = r#"
[[slides]]
id = 2
variant = "cover"
title = "a"

[[slides]]
id = 2
variant = "closing"
title = "b"
"#;
    let err = Deck::from_toml_str(toml, "x").unwrap_err();
    assert!(matches!(
        err,
        DeckFileError::Deck(DeckError::DuplicateId(SlideId(2)))
    ));
}

#[test]
fn test_ids_out_of_deck_order_are_rejected() {
    let toml = r#"
[[slides]]
id = 3
variant = "cover"
title = "a"

[[slides]]
id = 1
variant = "list"
title = "b"
points = ["x"]

[[slides]]
id = 2
variant = "closing"
title = "c"
"#;
    let err = Deck::from_toml_str(toml, "x").unwrap_err();
    assert!(matches!(
        err,
        DeckFileError::Deck(DeckError::OutOfOrder {
            previous: SlideId(3),
            next: SlideId(1)
        })
    ));
}

#[test]
fn test_table_rows_must_have_three_cells() {
    let toml = r#"
[[slides]]
id = 1
variant = "table"
title = "Plan"
[slides.table]
headers = ["a", "b", "c"]
rows = [["only", "two"]]
"#;
    let err = Deck::from_toml_str(toml, "x").unwrap_err();
    assert!(err.to_string().contains("exactly 3 cells"));
}

#[test]
fn test_columns_are_required_for_split() {
    let toml = "[[slides]]\nid = 1\nvariant = \"split\"\ntitle = \"x\"\n";
    let err = Deck::from_toml_str(toml, "x").unwrap_err();
    assert!(matches!(err, DeckFileError::InvalidSlide { id: 1, .. }));
}

#[test]
fn test_bad_data_uri_is_reported() {
    let toml = "[[slides]]\nid = 3\nvariant = \"cover\"\ntitle = \"x\"\ngenerated_image = \"https://example.com/a.png\"\n";
    let err = Deck::from_toml_str(toml, "x").unwrap_err();
    assert!(matches!(err, DeckFileError::InvalidImage { id: 3, .. }));
}
