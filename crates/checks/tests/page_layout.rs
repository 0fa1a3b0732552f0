//! End-to-end assertions against a complete page stylesheet.
//!
//! The page is a grid of header, navigation, main content and footer:
//! - `body` lays the four regions out with named grid areas
//! - `nav > ul` stacks genre buttons in a flex column
//! - `main` wraps movie articles in a flex row and scrolls vertically
//! - `footer > ul` centers its items in a flex row

use checks::{
    AssertionError, CheckError, Checker, ElementBox, GridAreaChecker, Point, Rect, StyleChecker,
    single_sheet,
};
use sheet::{StyleSheet, parse_stylesheet};

const PAGE_CSS: &str = r#"
/* Page grid */
body {
    margin: 0px;
    height: 100vh;
    display: grid;
    grid-template-rows: 96px auto 64px;
    grid-template-columns: 224px auto;
    grid-template-areas:
        "h h"
        "n m"
        "f f";
}

header {
    grid-area: h / h / h / h;
    display: flex;
    justify-content: center;
}

nav {
    grid-area: n / n / n / n;
}

nav>ul {
    display: flex;
    flex-direction: column;
    row-gap: 6px;
}

main {
    grid-area: m / m / m / m;
    overflow-y: auto;
    display: flex;
    flex-wrap: wrap;
}

footer {
    grid-area: f / f / f / f;
}

footer > ul {
    display: flex;
    column-gap: 24px;
    justify-content: center;
}

@media (max-width: 600px) {
    nav { display: none; }
}
"#;

fn page() -> StyleSheet {
    parse_stylesheet(PAGE_CSS).expect("page stylesheet parses")
}

// ============================================================================
// STYLESHEET ASSERTIONS
// ============================================================================

#[test]
fn test_document_has_one_stylesheet() {
    let sheets = [page()];
    assert!(single_sheet(&sheets).is_ok());

    let two = [page(), page()];
    assert_eq!(
        single_sheet(&two).unwrap_err(),
        AssertionError::SheetCountMismatch {
            expected: 1,
            actual: 2
        }
    );
}

#[test]
fn test_page_regions_use_grid_template_areas() -> Result<(), AssertionError> {
    let sheet = page();

    StyleChecker::new("body", &sheet)
        .eq("display", "grid")?
        .compound(
            "grid-template-rows",
            [
                Checker::px(64.0, 128.0),
                Checker::constant("auto"),
                Checker::px(64.0, 128.0),
            ],
        )?
        .compound(
            "grid-template-columns",
            [Checker::px(192.0, 256.0), Checker::constant("auto")],
        )?
        .single(
            "grid-template-areas",
            GridAreaChecker::new(3, 2, [["h", "h"], ["n", "m"], ["f", "f"]]),
        )?;

    StyleChecker::new("header", &sheet).eq("grid-area", "h / h / h / h")?;
    StyleChecker::new("nav", &sheet).eq("grid-area", "n / n / n / n")?;
    StyleChecker::new("main", &sheet)
        .eq("grid-area", "m / m / m / m")?
        .eq("overflow-y", "auto")?;
    StyleChecker::new("footer", &sheet).eq("grid-area", "f / f / f / f")?;
    Ok(())
}

#[test]
fn test_navigation_is_a_flex_column_with_gap() -> Result<(), AssertionError> {
    let sheet = page();
    StyleChecker::new("nav > ul", &sheet)
        .eq("display", "flex")?
        .eq("flex-direction", "column")?
        .compound("row-gap", [Checker::px(4.0, 8.0)])?;
    Ok(())
}

#[test]
fn test_main_wraps_articles() -> Result<(), AssertionError> {
    let sheet = page();
    StyleChecker::new("main", &sheet)
        .eq("display", "flex")?
        .eq("flex-wrap", "wrap")?;
    Ok(())
}

#[test]
fn test_footer_list_is_centered_flex_row() -> Result<(), AssertionError> {
    let sheet = page();
    StyleChecker::new("footer > ul", &sheet)
        .eq("display", "flex")?
        .compound("column-gap", [Checker::px(16.0, 32.0)])?
        .eq("justify-content", "center")?;

    StyleChecker::new("body", &sheet).compound("margin", [Checker::px(0.0, 0.0)])?;
    Ok(())
}

#[test]
fn test_unitless_zero_margin_is_zero_pixels() -> Result<(), AssertionError> {
    let sheet = parse_stylesheet("body { margin: 0; padding: 0 4px; }").unwrap();
    StyleChecker::new("body", &sheet)
        .compound("margin", [Checker::px(0.0, 0.0)])?
        .compound("padding", [Checker::px(0.0, 0.0), Checker::px(4.0, 4.0)])?;
    Ok(())
}

#[test]
fn test_media_rules_do_not_shadow_top_level_rules() {
    let sheet = page();
    let err = StyleChecker::new("nav", &sheet)
        .eq("display", "none")
        .unwrap_err();
    assert!(matches!(err, AssertionError::MissingProperty { .. }));
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_wrong_display_fails_with_mismatch() {
    let sheet = parse_stylesheet("body { display: flex; }").unwrap();
    let err = StyleChecker::new("body", &sheet)
        .eq("display", "grid")
        .unwrap_err();

    let AssertionError::Check {
        selector,
        property,
        actual,
        source,
    } = err
    else {
        panic!("expected a check failure");
    };
    assert_eq!(selector, "body");
    assert_eq!(property, "display");
    assert_eq!(actual, "flex");
    assert_eq!(
        source,
        CheckError::ValueMismatch {
            expected: "grid".into(),
            actual: "flex".into()
        }
    );
}

#[test]
fn test_correct_display_allows_further_chaining() {
    let sheet = parse_stylesheet("body { display: grid; margin: 0px; }").unwrap();
    let checker = StyleChecker::new("body", &sheet);
    let chained = checker.eq("display", "grid").unwrap();
    assert!(std::ptr::eq(chained, &checker));
    assert!(chained.eq("margin", "0px").is_ok());
}

#[test]
fn test_grid_rows_out_of_range() {
    let sheet = parse_stylesheet("body { grid-template-rows: 32px auto 64px; }").unwrap();
    let err = StyleChecker::new("body", &sheet)
        .compound(
            "grid-template-rows",
            [
                Checker::px(64.0, 128.0),
                Checker::constant("auto"),
                Checker::px(64.0, 128.0),
            ],
        )
        .unwrap_err();

    let source = err.check_error().expect("checker failure");
    assert!(matches!(source, CheckError::CompoundToken { index: 0, .. }));
    assert_eq!(
        source.root(),
        &CheckError::ValueOutOfRange {
            value: 32.0,
            min: 64.0,
            max: 128.0
        }
    );
}

#[test]
fn test_unknown_selector() {
    let sheet = page();
    let err = StyleChecker::new("aside", &sheet)
        .eq("display", "block")
        .unwrap_err();
    assert_eq!(
        err,
        AssertionError::NoMatchingRule {
            selector: "aside".into()
        }
    );
}

// ============================================================================
// GEOMETRY
// ============================================================================

#[test]
fn test_heading_is_centered_in_header() {
    let header = ElementBox::new(Rect::new(0.0, 0.0, 1280.0, 96.0)).unwrap();
    let h1 = ElementBox::new(Rect::new(512.4, 26.5, 255.3, 43.0)).unwrap();

    assert!(h1.width() < header.width());
    let distance = h1.center().distance(header.center());
    assert!(distance < 24, "centers are {distance}px apart");
}

#[test]
fn test_offset_heading_is_not_centered() {
    let header = ElementBox::new(Rect::new(0.0, 0.0, 1280.0, 96.0)).unwrap();
    let h1 = ElementBox::new(Rect::new(8.0, 26.5, 255.3, 43.0)).unwrap();
    assert!(!h1.center().near(header.center(), 24));
}

#[test]
fn test_navigation_buttons_are_stacked() {
    let list = ElementBox::new(Rect::new(0.0, 96.0, 224.0, 240.0)).unwrap();
    let buttons: Vec<ElementBox> = (0..5_u32)
        .map(|i| {
            let y = 100.0 + f64::from(i) * 38.0;
            ElementBox::new(Rect::new(16.0, y, 190.0, 32.0)).unwrap()
        })
        .collect();

    for (i, button) in buttons.iter().enumerate() {
        let dx = (button.center_x() - list.center_x()).abs();
        assert!(dx < 12, "button {i} is {dx}px off the list axis");
        if i > 0 {
            assert!(button.center_y() - buttons[i - 1].center_y() > 0);
        }
    }
}

#[test]
fn test_points_compare_by_value() {
    let a = ElementBox::new(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    let b = ElementBox::new(Rect::new(0.4, 0.4, 10.4, 10.4)).unwrap();
    assert_eq!(a.center(), Point::new(5, 5));
    assert_eq!(a.center(), b.center());
}
