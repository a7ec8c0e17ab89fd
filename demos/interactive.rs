use sunburst::{
    CategoryNode, ClickTarget, Dataset, MeasureColumn, Properties, Settings, Sunburst,
    UpdateOptions, Viewport,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let dataset = Dataset::new(
        CategoryNode::root(vec![
            CategoryNode::branch(
                "Europe",
                vec![
                    CategoryNode::leaf("France", 410.0),
                    CategoryNode::leaf("Germany", 390.0),
                ],
            ),
            CategoryNode::branch(
                "Americas",
                vec![
                    CategoryNode::leaf("Brazil", 270.0),
                    CategoryNode::leaf("Canada", 130.0),
                ],
            ),
        ]),
        MeasureColumn::new("Revenue").with_format("#,0.00"),
    );
    let properties = Properties::new()
        .with("group.showDataLabels", true)
        .with("legend.show", true)
        .with("legend.position", "Bottom");

    let mut chart = Sunburst::new();
    chart.update(UpdateOptions {
        dataset: Some(&dataset),
        viewport: Viewport::new(800.0, 600.0),
        properties: Some(&properties),
    });

    println!("=== Resting ===");
    println!("{}", chart.render_svg());

    // Click the second top-level branch.
    let id = chart.data().unwrap().top_level()[1];
    chart.handle_click(ClickTarget::Slice(id));
    let center = chart.state().center().unwrap();
    eprintln!("selected: {} ({})", center.category, center.percentage);
    println!("=== Selected ===");
    println!("{}", chart.render_svg());

    // Settings changes report what they invalidate.
    let bigger = properties.clone().with("group.fontSize", 22.0);
    let delta = chart.apply_settings(Settings::from_properties(&bigger));
    eprintln!("hub labels need re-measuring: {}", delta.relayouts_labels());
    println!("=== Bigger hub labels ===");
    println!("{}", chart.render_svg());

    chart.handle_click(ClickTarget::Background);
    println!("=== Cleared ===");
    println!("{}", chart.render_svg());
}
