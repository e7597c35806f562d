use serde::{Deserialize, Serialize};

/// One bar of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint<T> {
    pub site_name: String,
    pub value: T,
}

impl<T> SeriesPoint<T> {
    pub fn new(site_name: impl Into<String>, value: T) -> Self {
        Self {
            site_name: site_name.into(),
            value,
        }
    }
}

/// Everything that changes when the selected site changes.
///
/// Only `summary_text` depends on the selection; both series always cover the
/// whole catalog in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedView {
    pub selected: String,
    pub summary_text: String,
    pub launch_series: Vec<SeriesPoint<u32>>,
    pub success_series: Vec<SeriesPoint<f64>>,
}

impl DerivedView {
    /// "Total Launches by Site" bar chart.
    pub fn launch_figure(&self) -> BarChartFigure {
        BarChartFigure::from_series(
            &self.launch_series,
            "Launches",
            "Total Launches by Site",
            "Number of Launches",
        )
    }

    /// "Success Rate by Site (%)" bar chart.
    pub fn success_figure(&self) -> BarChartFigure {
        BarChartFigure::from_series(
            &self.success_series,
            "Success Rate",
            "Success Rate by Site (%)",
            "Success Rate (%)",
        )
    }
}

/// A single bar trace, shaped the way Plotly consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
}

/// Plotly-compatible figure: `{ data: [...], layout: {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartFigure {
    pub data: Vec<BarTrace>,
    pub layout: ChartLayout,
}

impl BarChartFigure {
    fn from_series<T: Copy + Into<f64>>(
        series: &[SeriesPoint<T>],
        trace_name: &str,
        title: &str,
        y_title: &str,
    ) -> Self {
        let trace = BarTrace {
            x: series.iter().map(|p| p.site_name.clone()).collect(),
            y: series.iter().map(|p| p.value.into()).collect(),
            trace_type: "bar".to_string(),
            name: trace_name.to_string(),
        };
        Self {
            data: vec![trace],
            layout: ChartLayout {
                title: title.to_string(),
                xaxis: AxisLayout {
                    title: "Launch Site".to_string(),
                },
                yaxis: AxisLayout {
                    title: y_title.to_string(),
                },
            },
        }
    }
}

/// Summary text plus both figures, as pushed to the page on selection change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewUpdate {
    pub selected: String,
    pub summary_text: String,
    pub launches_figure: BarChartFigure,
    pub success_rate_figure: BarChartFigure,
}

impl From<&DerivedView> for ViewUpdate {
    fn from(view: &DerivedView) -> Self {
        Self {
            selected: view.selected.clone(),
            summary_text: view.summary_text.clone(),
            launches_figure: view.launch_figure(),
            success_rate_figure: view.success_figure(),
        }
    }
}

/// Route function name constant
pub const GET_VIEW: &str = "get_view";
