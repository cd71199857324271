//! Chart descriptors and canned datasets.
//!
//! Charts are described as plain label/series data plus a configuration of
//! recognized options; the render layer maps a descriptor onto whichever
//! ratatui widget fits its kind. Datasets are canned sample data.

/// Specifying the supported plot kinds.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// Specifying legend placement.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LegendPosition {
    Top,
    Bottom,
    Hidden,
}

/// Specifying tooltip behavior.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TooltipMode {
    Index,
    Nearest,
}

/// Specifying vertical axis scaling.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AxisScaling {
    FromZero,
    Fitted,
}

/// Recognized chart configuration options.
///
#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub responsive: bool,
    pub legend_position: LegendPosition,
    pub tooltip_mode: TooltipMode,
    pub axis_scaling: AxisScaling,
}

/// A named series of values.
///
#[derive(Debug, Clone)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// A complete chart description handed to the render layer.
///
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub series: Vec<Series>,
    pub config: ChartConfig,
}

/// Specifying the vitals chart time periods.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VitalsPeriod {
    Day,
    Week,
    Month,
}

impl VitalsPeriod {
    pub fn title(&self) -> &'static str {
        match self {
            VitalsPeriod::Day => "Day",
            VitalsPeriod::Week => "Week",
            VitalsPeriod::Month => "Month",
        }
    }

    pub fn next(&self) -> VitalsPeriod {
        match self {
            VitalsPeriod::Day => VitalsPeriod::Week,
            VitalsPeriod::Week => VitalsPeriod::Month,
            VitalsPeriod::Month => VitalsPeriod::Day,
        }
    }
}

/// Vitals line chart (heart rate, systolic, diastolic) for a time period.
///
pub fn vitals_chart(period: VitalsPeriod) -> ChartSpec {
    let (labels, heart_rate, systolic, diastolic): (
        Vec<&'static str>,
        Vec<f64>,
        Vec<f64>,
        Vec<f64>,
    ) = match period {
        VitalsPeriod::Day => (
            vec!["6 AM", "9 AM", "12 PM", "3 PM", "6 PM", "9 PM"],
            vec![68.0, 72.0, 75.0, 82.0, 76.0, 70.0],
            vec![125.0, 122.0, 120.0, 128.0, 126.0, 123.0],
            vec![82.0, 80.0, 78.0, 84.0, 83.0, 81.0],
        ),
        VitalsPeriod::Week => (
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            vec![71.0, 73.0, 70.0, 74.0, 75.0, 72.0, 69.0],
            vec![124.0, 125.0, 120.0, 122.0, 126.0, 123.0, 121.0],
            vec![81.0, 82.0, 79.0, 80.0, 83.0, 82.0, 80.0],
        ),
        VitalsPeriod::Month => (
            vec!["Week 1", "Week 2", "Week 3", "Week 4"],
            vec![72.0, 71.0, 73.0, 70.0],
            vec![124.0, 122.0, 125.0, 120.0],
            vec![81.0, 80.0, 82.0, 79.0],
        ),
    };

    ChartSpec {
        kind: ChartKind::Line,
        labels,
        series: vec![
            Series {
                name: "Heart Rate (BPM)",
                values: heart_rate,
            },
            Series {
                name: "Systolic (mmHg)",
                values: systolic,
            },
            Series {
                name: "Diastolic (mmHg)",
                values: diastolic,
            },
        ],
        config: ChartConfig {
            responsive: true,
            legend_position: LegendPosition::Top,
            tooltip_mode: TooltipMode::Index,
            axis_scaling: AxisScaling::Fitted,
        },
    }
}

/// Sleep stage breakdown as percentage of the night.
///
pub fn sleep_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: vec!["Deep", "Light", "REM", "Awake"],
        series: vec![Series {
            name: "Sleep (%)",
            values: vec![25.0, 45.0, 20.0, 10.0],
        }],
        config: ChartConfig {
            responsive: true,
            legend_position: LegendPosition::Bottom,
            tooltip_mode: TooltipMode::Nearest,
            axis_scaling: AxisScaling::FromZero,
        },
    }
}

/// Thirty-day resting heart rate trend.
///
pub fn trends_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        labels: vec!["Mar 1", "Mar 5", "Mar 10", "Mar 15", "Mar 20", "Mar 25", "Mar 30"],
        series: vec![Series {
            name: "Heart Rate (BPM)",
            values: vec![72.0, 73.0, 70.0, 75.0, 72.0, 71.0, 69.0],
        }],
        config: ChartConfig {
            responsive: true,
            legend_position: LegendPosition::Hidden,
            tooltip_mode: TooltipMode::Index,
            axis_scaling: AxisScaling::Fitted,
        },
    }
}

/// Progress toward each active goal, as percentages.
///
pub fn goal_progress_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: vec!["Steps", "Blood Pressure", "Sleep"],
        series: vec![Series {
            name: "Current Progress (%)",
            values: vec![75.0, 40.0, 60.0],
        }],
        config: ChartConfig {
            responsive: true,
            legend_position: LegendPosition::Hidden,
            tooltip_mode: TooltipMode::Nearest,
            axis_scaling: AxisScaling::FromZero,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_series_match_labels(spec: &ChartSpec) {
        for series in &spec.series {
            assert_eq!(series.values.len(), spec.labels.len());
        }
    }

    #[test]
    fn test_vitals_chart_periods() {
        for period in [VitalsPeriod::Day, VitalsPeriod::Week, VitalsPeriod::Month] {
            let spec = vitals_chart(period);
            assert_eq!(spec.kind, ChartKind::Line);
            assert_eq!(spec.series.len(), 3);
            assert_series_match_labels(&spec);
        }
    }

    #[test]
    fn test_vitals_period_cycles() {
        assert_eq!(VitalsPeriod::Day.next(), VitalsPeriod::Week);
        assert_eq!(VitalsPeriod::Week.next(), VitalsPeriod::Month);
        assert_eq!(VitalsPeriod::Month.next(), VitalsPeriod::Day);
    }

    #[test]
    fn test_sleep_chart_sums_to_full_night() {
        let spec = sleep_chart();
        assert_eq!(spec.kind, ChartKind::Doughnut);
        assert_series_match_labels(&spec);
        let total: f64 = spec.series[0].values.iter().sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_trends_chart_shape() {
        let spec = trends_chart();
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.config.legend_position, LegendPosition::Hidden);
        assert_series_match_labels(&spec);
    }

    #[test]
    fn test_goal_progress_chart_percentages() {
        let spec = goal_progress_chart();
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_series_match_labels(&spec);
        for value in &spec.series[0].values {
            assert!((0.0..=100.0).contains(value));
        }
    }
}
