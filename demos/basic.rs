use sunburst::{CategoryNode, Dataset, MeasureColumn, Viewport};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let dataset = Dataset::new(
        CategoryNode::root(vec![
            CategoryNode::branch(
                "Produce",
                vec![
                    CategoryNode::leaf("Fruit", 320.0),
                    CategoryNode::leaf("Vegetables", 180.0),
                ],
            ),
            CategoryNode::leaf("Bakery", 240.0),
            CategoryNode::leaf("Dairy", 160.0),
        ]),
        MeasureColumn::new("Sales").with_format("#,0.00"),
    );

    let svg = sunburst::render(&dataset, Viewport::new(640.0, 480.0));
    println!("{}", svg);
}
