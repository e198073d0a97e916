use colored::control::set_override;
use pathtree::{InvalidInputError, TreeBuilder};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::{BuildProgress, InputError, RuntimeConfig};
use crate::output::TreePrinter;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let builder =
            TreeBuilder::try_with_delimiter(&app_config.delimiter).context(DelimiterSnafu)?;

        let paths = app_config.input.read_paths().await.context(InputSnafu)?;
        debug!("Loaded {} paths from {}", paths.len(), app_config.input);

        let mut progress = BuildProgress::default();
        let root = builder.build_observed(&paths, &mut progress);
        info!(
            "{} nodes, {} leaves, depth {}",
            progress.completed(),
            progress.leaves(),
            progress.max_depth()
        );

        let colorize = app_config.color.should_colorize();
        debug!("Color mode {} resolved to {}", app_config.color, colorize);
        set_override(colorize);

        let printer = TreePrinter::new(app_config.root_label, colorize);
        print!("{}", printer.render(&root));

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Invalid delimiter"))]
    DelimiterError { source: InvalidInputError },
    #[snafu(display("Could not load the path listing"))]
    InputError { source: InputError },
}
