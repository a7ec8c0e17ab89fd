//! Raw input model: the category tree and measure metadata handed over by
//! the host before any layout happens.
//!
//! A [`Dataset`] is only drawable when it has a measure column and the root
//! has at least one child; everything else is treated as "no data" and clears
//! the chart instead of erroring.

/// Opaque, stable identity key for one category member.
///
/// Two nodes with equal keys refer to the same underlying data point across
/// updates; the chart never interprets the key beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(key: impl Into<String>) -> Identity {
        Identity(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// One node of the host's category hierarchy.
///
/// Every field is optional: the synthetic root typically has none of them,
/// and intermediate grouping nodes may lack a measure of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryNode {
    /// Display label. Absent on the synthetic root.
    pub label: Option<String>,
    /// The node's own measure value, before any clamping.
    pub measure: Option<f64>,
    /// Stable identity of this category member.
    pub identity: Option<Identity>,
    /// Explicit per-node color override (any CSS color string).
    pub color: Option<String>,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// A leaf category with a label and its own measure.
    pub fn leaf(label: impl Into<String>, measure: f64) -> CategoryNode {
        CategoryNode {
            label: Some(label.into()),
            measure: Some(measure),
            ..CategoryNode::default()
        }
    }

    /// A labelled grouping node whose value comes entirely from `children`.
    pub fn branch(label: impl Into<String>, children: Vec<CategoryNode>) -> CategoryNode {
        CategoryNode {
            label: Some(label.into()),
            children,
            ..CategoryNode::default()
        }
    }

    /// The unlabelled synthetic root above the top-level categories.
    pub fn root(children: Vec<CategoryNode>) -> CategoryNode {
        CategoryNode {
            children,
            ..CategoryNode::default()
        }
    }

    pub fn with_identity(mut self, key: impl Into<String>) -> CategoryNode {
        self.identity = Some(Identity::new(key));
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> CategoryNode {
        self.color = Some(color.into());
        self
    }

    pub fn with_measure(mut self, measure: f64) -> CategoryNode {
        self.measure = Some(measure);
        self
    }

    pub fn with_children(mut self, children: Vec<CategoryNode>) -> CategoryNode {
        self.children = children;
        self
    }
}

/// Metadata of the measure column backing the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasureColumn {
    /// Column display name; doubles as the legend title fallback.
    pub display_name: String,
    /// Numeric format pattern attached to the column, if any.
    pub format: Option<String>,
}

impl MeasureColumn {
    pub fn new(display_name: impl Into<String>) -> MeasureColumn {
        MeasureColumn {
            display_name: display_name.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> MeasureColumn {
        self.format = Some(format.into());
        self
    }
}

/// Everything the host supplies for one update: the tree plus the measure
/// column describing its values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub root: CategoryNode,
    pub measure: Option<MeasureColumn>,
}

impl Dataset {
    pub fn new(root: CategoryNode, measure: MeasureColumn) -> Dataset {
        Dataset {
            root,
            measure: Some(measure),
        }
    }

    /// Whether this dataset can produce a chart at all: a populated root
    /// and a present measure column.
    pub fn has_data(&self) -> bool {
        self.measure.is_some() && !self.root.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_not_drawable() {
        let ds = Dataset::new(CategoryNode::root(vec![]), MeasureColumn::new("Sales"));
        assert!(!ds.has_data());
    }

    #[test]
    fn missing_measure_column_is_not_drawable() {
        let ds = Dataset {
            root: CategoryNode::root(vec![CategoryNode::leaf("a", 1.0)]),
            measure: None,
        };
        assert!(!ds.has_data());
    }

    #[test]
    fn populated_dataset_is_drawable() {
        let ds = Dataset::new(
            CategoryNode::root(vec![CategoryNode::leaf("a", 1.0)]),
            MeasureColumn::new("Sales"),
        );
        assert!(ds.has_data());
    }
}
