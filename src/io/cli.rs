//! Command-line interface for composing image files into a collage

use crate::collage::{Canvas, CollageBuilder};
use crate::io::configuration::DEFAULT_OUTPUT;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{FileType, SaveTarget};
use crate::io::progress::ProgressManager;
use crate::spatial::Advance;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collager")]
#[command(
    author,
    version,
    about = "Compose PNG, JPEG and WebP images into a grid collage"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Input images, placed left to right in the order given
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Number of grid columns (defaults to the number of inputs)
    #[arg(short, long)]
    pub columns: Option<u32>,

    /// Number of grid rows (defaults to as many as the inputs need)
    #[arg(short, long)]
    pub rows: Option<u32>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format, png or jpeg (defaults to the output extension)
    #[arg(short, long)]
    pub format: Option<FileType>,

    /// Advance by the shared cell size instead of each image's own size
    #[arg(short, long)]
    pub uniform: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Cursor advance policy selected on the command line
    pub const fn advance(&self) -> Advance {
        if self.uniform {
            Advance::UniformCell
        } else {
            Advance::Natural
        }
    }

    /// Resolve the grid as `(columns, rows)`, filling in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit dimension is zero or the input count
    /// does not fit in a `u32`
    pub fn grid(&self) -> Result<(u32, u32)> {
        let count = u32::try_from(self.inputs.len())
            .map_err(|e| invalid_parameter("inputs", &self.inputs.len(), &e))?;

        let columns = self.columns.unwrap_or(count);
        if columns == 0 {
            return Err(invalid_parameter("columns", &columns, &"must be at least 1"));
        }

        let rows = self.rows.unwrap_or_else(|| count.div_ceil(columns));
        if rows == 0 {
            return Err(invalid_parameter("rows", &rows, &"must be at least 1"));
        }

        Ok((columns, rows))
    }

    /// Destination and encoding for the collage
    ///
    /// # Errors
    ///
    /// Returns an error if no format was given and the output extension is
    /// not a supported type
    pub fn save_target(&self) -> Result<SaveTarget> {
        let file_type = match self.format {
            Some(file_type) => file_type,
            None => FileType::from_extension(&self.output)?,
        };
        Ok(SaveTarget::new(self.output.clone(), file_type))
    }
}

/// Loads the inputs named on the command line and writes the collage
pub struct CollageRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CollageRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Decode every input, compose the collage and save it
    ///
    /// Arguments are validated before any input is read.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, decoding, composition or
    /// saving fails
    pub fn run(&mut self) -> Result<Canvas> {
        let (columns, rows) = self.cli.grid()?;
        let target = self.cli.save_target()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.inputs.len());
        }

        let mut builder = CollageBuilder::new().with_advance(self.cli.advance());
        for input in &self.cli.inputs {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(input);
            }
            builder.add_path(input)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.start_compose(columns, rows);
        }
        let canvas = builder.collage(columns, rows, Some(&target))?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish(&target.name);
        }
        log::info!(
            "wrote {}x{} collage of {} images to '{}'",
            canvas.width(),
            canvas.height(),
            builder.len(),
            target.name.display()
        );

        Ok(canvas)
    }
}
