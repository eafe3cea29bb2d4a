use async_views_lib::{
    Dimension, InflateConfig, LayoutParams, MAX_VIEWS, ProgressStrings, RowTemplate,
    TemplateError,
};
use clap::Parser;
use eframe_entrypoints::parse_args;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Async Views - inflate thousands of rows off the UI thread and hand them back
pub struct Settings {
    /// Number of rows built per inflate action
    #[clap(short, long, default_value_t = MAX_VIEWS)]
    pub rows: usize,

    /// Relative widths of the colored cells in a row, comma separated
    #[clap(short, long, default_value = "1,1,1")]
    pub template: RowTemplate,

    /// Cell (0-based) that shows the row number
    #[clap(long, default_value = "0")]
    pub label_cell: usize,

    /// Height of a single row in points
    #[clap(long, default_value = "24.0")]
    pub row_height: f32,

    /// Margin around the row container in points
    #[clap(long, default_value = "8.0")]
    pub margin: f32,

    /// Title of the progress dialog
    #[clap(long, default_value = "Please wait")]
    pub dialog_title: String,

    /// Message of the progress dialog
    #[clap(long, default_value = "Inflating views...")]
    pub dialog_message: String,

    /// Start inflating as soon as the window opens
    #[clap(long, default_value = "false")]
    pub inflate_on_start: bool,
}

impl Settings {
    /// Parse from the command line, exiting with a usage message on error
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Inflation parameters derived from these settings
    pub fn inflate_config(&self) -> Result<InflateConfig, TemplateError> {
        Ok(InflateConfig {
            rows: self.rows,
            template: self.template.clone().with_label_cell(self.label_cell)?,
            layout: self.layout(),
        })
    }

    /// Like [`Self::inflate_config`], but a label cell outside the template is
    /// logged and the label goes back to the first cell. The weights are kept.
    pub fn inflate_config_or_fallback(&self) -> InflateConfig {
        self.inflate_config().unwrap_or_else(|e| {
            tracing::error!("Invalid --label-cell ({e}), labeling the first cell instead");
            InflateConfig {
                rows: self.rows,
                // Parsed templates always label cell 0
                template: self.template.clone(),
                layout: self.layout(),
            }
        })
    }

    fn layout(&self) -> LayoutParams {
        LayoutParams {
            width: Dimension::MatchParent,
            height: Dimension::WrapContent,
            margin: self.margin,
        }
    }

    pub fn progress_strings(&self) -> ProgressStrings {
        ProgressStrings {
            title: self.dialog_title.clone(),
            message: self.dialog_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe_entrypoints::cli::parse_args_from;

    #[test]
    fn test_defaults() {
        let settings: Settings = parse_args_from(["async-views"]).unwrap();
        assert_eq!(settings.rows, 10_000);
        assert_eq!(settings.template, RowTemplate::default());
        assert!(!settings.inflate_on_start);

        let config = settings.inflate_config().unwrap();
        assert_eq!(config.rows, 10_000);
        assert_eq!(config.layout.margin, 8.0);
        assert_eq!(settings.progress_strings(), ProgressStrings::default());
    }

    #[test]
    fn test_custom_template() {
        let settings: Settings = parse_args_from([
            "async-views",
            "--template",
            "1,3",
            "--label-cell",
            "1",
            "--rows",
            "50",
        ])
        .unwrap();

        let config = settings.inflate_config().unwrap();
        assert_eq!(config.rows, 50);
        assert_eq!(config.template.cells().len(), 2);
        assert_eq!(config.template.label_cell(), 1);
    }

    #[test]
    fn test_invalid_template_rejected_by_parser() {
        let result: Result<Settings, _> =
            parse_args_from(["async-views", "--template", "1,x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_label_cell_out_of_range() {
        let settings: Settings =
            parse_args_from(["async-views", "--label-cell", "3"]).unwrap();
        assert_eq!(
            settings.inflate_config().unwrap_err(),
            TemplateError::LabelOutOfRange { index: 3, cells: 3 }
        );
    }

    #[test]
    fn test_label_cell_fallback_keeps_template() {
        let settings: Settings = parse_args_from([
            "async-views",
            "--template",
            "2,1,1,4",
            "--label-cell",
            "9",
            "--rows",
            "30",
            "--margin",
            "3",
        ])
        .unwrap();

        let config = settings.inflate_config_or_fallback();
        assert_eq!(config.rows, 30);
        assert_eq!(config.template, "2,1,1,4".parse::<RowTemplate>().unwrap());
        assert_eq!(config.template.label_cell(), 0);
        assert_eq!(config.layout.margin, 3.0);
    }

    #[test]
    fn test_fallback_unused_when_valid() {
        let settings: Settings =
            parse_args_from(["async-views", "--template", "1,1", "--label-cell", "1"]).unwrap();
        assert_eq!(settings.inflate_config_or_fallback().template.label_cell(), 1);
    }
}
