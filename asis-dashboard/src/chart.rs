use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Histogram,
    Pie,
}

/// Chart declaration handed to the renderer together with the table it draws.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Column for the x axis (or pie slice names).
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bins: Option<usize>,
}

impl ChartSpec {
    pub fn line(title: &str, x: &str, y: &str) -> Self {
        Self {
            kind: ChartKind::Line,
            title: title.into(),
            x: x.into(),
            y: Some(y.into()),
            bins: None,
        }
    }

    /// Drawn from a pre-binned table: `x` is the bucket start, `y` the bucket count.
    pub fn histogram(title: &str, x: &str, y: &str, bins: usize) -> Self {
        Self {
            kind: ChartKind::Histogram,
            title: title.into(),
            x: x.into(),
            y: Some(y.into()),
            bins: Some(bins),
        }
    }

    pub fn pie(title: &str, names: &str, values: &str) -> Self {
        Self {
            kind: ChartKind::Pie,
            title: title.into(),
            x: names.into(),
            y: Some(values.into()),
            bins: None,
        }
    }
}
