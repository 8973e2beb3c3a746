mod chart_config;
mod chart_renderer;
mod chart_widget;
mod observable_series;
mod scale_labels;

pub use chart_config::{ChartConfig, ChartMode, ChartPalette};
pub use chart_renderer::ChartRenderer;
pub use chart_widget::{ChartWidget, SeriesBinding, bind_series};
pub use observable_series::{ObservableSeries, SeriesChange, SubscriptionId};
pub use scale_labels::{SCALE_FRACTIONS, ScaleRow, scale_rows};
