pub mod current_panel;
pub mod dashboard;
pub mod forecast_chart;
pub mod help_bar;
pub mod search_bar;

pub use weather_dispatch::Component;

pub use current_panel::{CurrentPanel, CurrentPanelProps};
pub use dashboard::{
    WeatherDashboard, WeatherDashboardProps, EMPTY_PROMPT, LOADING_TEXT, SPINNERS, TITLE,
};
pub use forecast_chart::{ForecastChart, ForecastChartProps, HUMIDITY_LABEL, TEMPERATURE_LABEL};
pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps, PLACEHOLDER, SUBMIT_LABEL, SUBMIT_LABEL_LOADING};
