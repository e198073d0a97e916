use crate::application::InputSource;
use crate::application::data::ColorMode;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: InputSource,
    pub delimiter: String,
    pub color: ColorMode,
    pub root_label: String,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input.into(),
            delimiter: cli.delimiter,
            color: cli.color,
            root_label: cli.root_label,
        }
    }
}
