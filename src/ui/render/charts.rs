use super::Frame;
use crate::data::charts::{AxisScaling, ChartSpec, LegendPosition};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, Gauge, GraphType},
};

/// Render a line chart spec as a `ratatui` chart.
///
pub fn line_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec, theme: &Theme, title: &str) {
    let series_colors = [
        theme.chart_primary.to_color(),
        theme.chart_secondary.to_color(),
        theme.chart_tertiary.to_color(),
    ];

    let points: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|series| {
            series
                .values
                .iter()
                .enumerate()
                .map(|(index, value)| (index as f64, *value))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(index, (series, data))| {
            Dataset::default()
                .name(series.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_colors[index % series_colors.len()]))
                .data(data)
        })
        .collect();

    let values = spec.series.iter().flat_map(|series| series.values.iter());
    let max = values.clone().fold(f64::MIN, |a, b| a.max(*b));
    let min = match spec.config.axis_scaling {
        AxisScaling::FromZero => 0.0,
        AxisScaling::Fitted => values.fold(f64::MAX, |a, b| a.min(*b)),
    };

    let x_labels: Vec<Span> = spec
        .labels
        .iter()
        .map(|label| Span::styled(*label, styling::muted_text_style(theme)))
        .collect();
    let y_labels: Vec<Span> = [min, (min + max) / 2.0, max]
        .iter()
        .map(|value| Span::styled(format!("{:.0}", value), styling::muted_text_style(theme)))
        .collect();

    let legend = match spec.config.legend_position {
        LegendPosition::Top => Some(ratatui::widgets::LegendPosition::Top),
        LegendPosition::Bottom => Some(ratatui::widgets::LegendPosition::Bottom),
        LegendPosition::Hidden => None,
    };

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(styling::normal_block_border_style(theme)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (spec.labels.len().max(2) - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(Axis::default().bounds([min, max]).labels(y_labels))
        .legend_position(legend);
    frame.render_widget(widget, area);
}

/// Render a bar chart spec as a `ratatui` bar chart.
///
pub fn bar_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec, theme: &Theme, title: &str) {
    let data: Vec<(&str, u64)> = spec
        .labels
        .iter()
        .zip(spec.series[0].values.iter())
        .map(|(label, value)| (*label, *value as u64))
        .collect();
    let widget = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(styling::normal_block_border_style(theme)),
        )
        .data(&data)
        .bar_width(14)
        .bar_gap(3)
        .bar_style(Style::default().fg(theme.primary.to_color()))
        .value_style(styling::highlight_style(theme))
        .label_style(styling::secondary_text_style(theme));
    frame.render_widget(widget, area);
}

/// Render a doughnut chart spec as a stack of percentage gauges, one per
/// labeled slice.
///
pub fn breakdown(frame: &mut Frame, area: Rect, spec: &ChartSpec, theme: &Theme, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slices = spec.labels.len();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); slices])
        .split(inner);

    let colors = [
        theme.chart_primary.to_color(),
        theme.chart_secondary.to_color(),
        theme.chart_tertiary.to_color(),
        theme.text_muted.to_color(),
    ];
    for (index, (label, value)) in spec
        .labels
        .iter()
        .zip(spec.series[0].values.iter())
        .enumerate()
    {
        if index >= rows.len() {
            break;
        }
        let widget = Gauge::default()
            .gauge_style(Style::default().fg(colors[index % colors.len()]))
            .label(format!("{} {:.0}%", label, value))
            .percent((*value).clamp(0.0, 100.0) as u16);
        frame.render_widget(widget, rows[index]);
    }
}
