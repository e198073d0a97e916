use clap::ValueEnum;
use derive_more::Display;
use supports_color::Stream;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum ColorMode {
    /// Color when stdout is a terminal that supports it
    #[default]
    #[display("auto")]
    Auto,
    #[display("always")]
    Always,
    #[display("never")]
    Never,
}

impl ColorMode {
    pub fn should_colorize(&self) -> bool {
        match self {
            ColorMode::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
