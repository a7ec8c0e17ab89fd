//! End-to-end tests walking the whole pipeline: dataset in, SVG out.
//!
//! Run with: cargo test --test visual_tests

use std::f64::consts::TAU;

use sunburst::render::defaults::OUTER_RADIUS;
use sunburst::{
    CategoryNode, ClickTarget, Dataset, MeasureColumn, Properties, SliceId, Sunburst,
    UpdateOptions, Viewport,
};

const EPSILON: f64 = 1e-9;

/// Two top-level branches: a leaf worth half the total, and a branch whose
/// two children split the other half.
fn sample_dataset() -> Dataset {
    Dataset::new(
        CategoryNode::root(vec![
            CategoryNode::leaf("A", 10.0),
            CategoryNode::branch(
                "B",
                vec![
                    CategoryNode::leaf("B1", 5.0),
                    CategoryNode::leaf("B2", 5.0),
                ],
            ),
        ]),
        MeasureColumn::new("Sales"),
    )
}

fn chart_for(dataset: &Dataset) -> Sunburst {
    let mut chart = Sunburst::new();
    chart.update(UpdateOptions {
        dataset: Some(dataset),
        viewport: Viewport::new(500.0, 500.0),
        properties: None,
    });
    chart
}

fn extract_attr(line: &str, attr: &str) -> Option<String> {
    let pattern = format!("{}=\"", attr);
    let start = line.find(&pattern)? + pattern.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

/// The fill attribute of every `<path>` element, in document order.
fn path_fills(svg: &str) -> Vec<Option<String>> {
    svg.lines()
        .filter(|line| line.trim_start().starts_with("<path"))
        .map(|line| extract_attr(line, "fill"))
        .collect()
}

#[test]
fn totals_aggregate_and_angles_split_by_share() {
    let dataset = sample_dataset();
    let chart = chart_for(&dataset);
    let data = chart.data().unwrap();

    assert!((data.total() - 20.0).abs() < EPSILON);

    // Pre-order arena: root, A, B, B1, B2.
    let root = data.get(SliceId::from_index(0));
    let a = data.get(SliceId::from_index(1));
    let b = data.get(SliceId::from_index(2));
    let b1 = data.get(SliceId::from_index(3));

    assert!((root.dx - TAU).abs() < EPSILON);
    // A carries half the grand total, so it covers half the circle.
    assert!((a.dx - TAU / 2.0).abs() < EPSILON);
    // Siblings tile their parent's span without gaps.
    assert!((a.dx + b.dx - TAU).abs() < EPSILON);
    assert!((b.x - a.end_angle()).abs() < EPSILON);
    // The deepest ring's outer edge reaches the drawing radius.
    assert!((b1.outer_radius() - OUTER_RADIUS).abs() < EPSILON);
}

#[test]
fn click_highlights_branch_and_shows_share() {
    let dataset = sample_dataset();
    let mut chart = chart_for(&dataset);

    // B1 sits at arena index 3.
    chart.handle_click(ClickTarget::Slice(SliceId::from_index(3)));

    let center = chart.state().center().unwrap();
    assert_eq!(center.category, "B1");
    assert_eq!(center.percentage, "25.00%");

    let svg = chart.render_svg();
    // B and B1 glow, A and B2 do not.
    assert_eq!(svg.matches("sunburst__slice--selected").count(), 2);
    assert!(svg.contains("sunburst--interactive"));
    assert!(svg.contains(">25.00%</text>"));
    assert!(svg.contains(">B1</text>"));

    // Background click hides the labels but keeps their text around.
    chart.handle_click(ClickTarget::Background);
    let svg = chart.render_svg();
    assert!(!svg.contains("sunburst__slice--selected"));
    assert!(!svg.contains("sunburst__label--visible"));
    assert!(svg.contains(">B1</text>"));
}

#[test]
fn no_rows_is_a_no_op_beyond_clearing() {
    let dataset = sample_dataset();
    let mut chart = chart_for(&dataset);
    assert!(chart.legend_data().is_some());

    let empty = Dataset::new(CategoryNode::root(vec![]), MeasureColumn::new("Sales"));
    chart.update(UpdateOptions {
        dataset: Some(&empty),
        viewport: Viewport::new(10.0, 10.0),
        properties: None,
    });

    assert!(chart.data().is_none());
    assert!(chart.legend_data().is_some());
    assert_eq!(chart.viewport(), Viewport::new(500.0, 500.0));
    assert!(!chart.render_svg().contains("<path"));
}

#[test]
fn negative_and_missing_values_clamp_to_zero() {
    let dataset = Dataset::new(
        CategoryNode::root(vec![
            CategoryNode::leaf("Ok", 10.0),
            CategoryNode::leaf("Broken", -5.0),
            CategoryNode::leaf("Gap", f64::NAN),
        ]),
        MeasureColumn::new("Sales"),
    );
    let chart = chart_for(&dataset);
    let data = chart.data().unwrap();

    assert!((data.total() - 10.0).abs() < EPSILON);
    let ok = data.get(SliceId::from_index(1));
    let broken = data.get(SliceId::from_index(2));
    let gap = data.get(SliceId::from_index(3));
    assert!((ok.dx - TAU).abs() < EPSILON);
    assert_eq!(broken.total, 0.0);
    assert_eq!(broken.dx, 0.0);
    assert_eq!(gap.dx, 0.0);
}

#[test]
fn all_zero_siblings_collapse_onto_parent_start() {
    let dataset = Dataset::new(
        CategoryNode::root(vec![
            CategoryNode::leaf("First", 0.0),
            CategoryNode::leaf("Second", 0.0),
        ]),
        MeasureColumn::new("Sales"),
    );
    let chart = chart_for(&dataset);
    let data = chart.data().unwrap();

    let first = data.get(SliceId::from_index(1));
    let second = data.get(SliceId::from_index(2));
    assert_eq!(first.x, 0.0);
    assert_eq!(first.dx, 0.0);
    assert_eq!(second.x, 0.0);
    assert_eq!(second.dx, 0.0);
}

#[test]
fn branch_color_is_shared_down_the_tree() {
    let dataset = sample_dataset();
    let chart = chart_for(&dataset);
    let fills = path_fills(&chart.render_svg());

    assert_eq!(fills.len(), 5);
    // The synthetic root stays uncolored.
    assert_eq!(fills[0], None);
    assert!(fills[1].is_some());
    // B's children wear B's color, not their own.
    assert_eq!(fills[2], fills[3]);
    assert_eq!(fills[2], fills[4]);
    assert_ne!(fills[1], fills[2]);
}

#[test]
fn explicit_color_wins_and_inherits() {
    let dataset = Dataset::new(
        CategoryNode::root(vec![
            CategoryNode::leaf("A", 10.0),
            CategoryNode::branch(
                "B",
                vec![
                    CategoryNode::leaf("B1", 5.0),
                    CategoryNode::leaf("B2", 5.0),
                ],
            )
            .with_color("#123456"),
        ]),
        MeasureColumn::new("Sales"),
    );
    let chart = chart_for(&dataset);
    let fills = path_fills(&chart.render_svg());

    assert_eq!(fills[2].as_deref(), Some("#123456"));
    assert_eq!(fills[3].as_deref(), Some("#123456"));
    assert_eq!(fills[4].as_deref(), Some("#123456"));
    assert_ne!(fills[1].as_deref(), Some("#123456"));
}

#[test]
fn svg_document_structure_is_stable() {
    let dataset = sample_dataset();
    let chart = chart_for(&dataset);
    let svg = chart.render_svg();

    assert!(svg.starts_with(r#"<svg class="sunburst""#));
    assert!(svg.contains(r#"viewBox="0 0 500 500""#));
    assert!(svg.contains(r#"preserveAspectRatio="xMidYMid meet""#));

    // Slices live inside the centered group, center labels after it.
    let group = svg.find(r#"<g transform="translate(250,250)">"#).unwrap();
    let first_path = svg.find("<path").unwrap();
    let group_end = svg.find("</g>").unwrap();
    let category_label = svg.find("sunburst__category-label").unwrap();
    assert!(group < first_path);
    assert!(first_path < group_end);
    assert!(group_end < category_label);

    // The root slice renders but stays invisible.
    let root_line = svg
        .lines()
        .find(|line| line.trim_start().starts_with("<path"))
        .unwrap();
    assert!(root_line.contains(r#"style="display: none;""#));
}

#[test]
fn data_labels_pair_rails_with_textpaths() {
    let dataset = sample_dataset();
    let properties = Properties::new().with("group.showDataLabels", true);
    let mut chart = Sunburst::new();
    chart.update(UpdateOptions {
        dataset: Some(&dataset),
        viewport: Viewport::new(500.0, 500.0),
        properties: Some(&properties),
    });
    let svg = chart.render_svg();

    // One rail and one riding label per ring slice; the root gets neither.
    assert_eq!(svg.matches("sunburst__slice--hidden").count(), 4);
    assert_eq!(svg.matches("<textPath").count(), 4);
    for index in 1..=4 {
        let id = format!("sliceLabel_{index}");
        assert!(svg.contains(&format!(r#"id="{id}""#)));
        assert!(svg.contains(&format!(r##"xlink:href="#{id}""##)));
    }
    assert!(!svg.contains(r#"id="sliceLabel_0""#));
}

#[test]
fn repeated_updates_render_identically() {
    let dataset = sample_dataset();
    let mut chart = chart_for(&dataset);
    let first = chart.render_svg();

    chart.update(UpdateOptions {
        dataset: Some(&dataset),
        viewport: Viewport::new(500.0, 500.0),
        properties: None,
    });
    let second = chart.render_svg();

    assert_eq!(first, second);
}
