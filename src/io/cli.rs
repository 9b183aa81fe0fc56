//! Command-line interface for reconstructing (or shredding) image files

use crate::algorithm::engine::{ReconstructionConfig, reconstruct_with};
use crate::color::metric::Metric;
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_STRIP_WIDTH, OUTPUT_EXTENSION, OUTPUT_SUFFIX, SHRED_SUFFIX,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, UnshredError};
use crate::io::image::{load_raster, save_raster};
use crate::io::progress::ProgressManager;
use crate::spatial::segment::strip_count;
use crate::spatial::shred::shred;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "unshred")]
#[command(
    author,
    version,
    about = "Reassemble images cut into shuffled vertical strips"
)]
/// Command-line arguments for the reconstruction tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory of images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Width in pixels of each strip
    #[arg(short, long, default_value_t = DEFAULT_STRIP_WIDTH)]
    pub strip_width: usize,

    /// Pixel metric used to score seams
    #[arg(short, long, value_enum, default_value_t = Metric::LabEuclidean)]
    pub metric: Metric,

    /// Output file (single-file targets only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Shuffle the strips instead of reconstructing them
    #[arg(long)]
    pub shred: bool,

    /// Random seed used by --shred
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Score candidate seams in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration derived from the arguments
    pub const fn reconstruction_config(&self) -> ReconstructionConfig {
        ReconstructionConfig {
            strip_width: self.strip_width,
            metric: self.metric,
            parallel: self.parallel,
        }
    }

    /// Suffix for files written in the selected mode
    pub const fn output_suffix(&self) -> &'static str {
        if self.shred { SHRED_SUFFIX } else { OUTPUT_SUFFIX }
    }
}

/// Orchestrates reconstruction of one or more files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any file fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!(target = %self.cli.target.display(), "nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Files the current arguments would process, in processing order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target does not exist or is not a supported image
    /// - `--output` is combined with a directory target
    /// - The directory cannot be read
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_supported_image(target) {
                return Err(UnshredError::InvalidTarget {
                    path: target.clone(),
                    reason: "not a supported image format",
                });
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(UnshredError::InvalidTarget {
                    path: target.clone(),
                    reason: "--output requires a single file target",
                });
            }

            let read_error = |e| UnshredError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(UnshredError::InvalidTarget {
                path: target.clone(),
                reason: "does not exist",
            })
        }
    }

    /// Where the result for `input_path` is written
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| derived_output_path(input_path, self.cli.output_suffix()))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            warn!(
                input = %input_path.display(),
                output = %output_path.display(),
                "skipping, output exists"
            );
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path(input_path);
        let raster = load_raster(input_path)?;

        let result = if self.cli.shred {
            shred(&raster, self.cli.strip_width, self.cli.seed)?
        } else {
            let rounds = strip_count(raster.width(), self.cli.strip_width).saturating_sub(1);
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, input_path, rounds);
            }

            let config = self.cli.reconstruction_config();
            let mut progress = self.progress_manager.as_mut();
            let reconstruction = reconstruct_with(&raster, &config, |record| {
                if let Some(pm) = progress.as_deref_mut() {
                    pm.update_round(index, record.round);
                }
            })?;
            reconstruction.raster
        };

        save_raster(&result, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "processed file"
        );

        Ok(())
    }
}

/// `<stem><suffix>.png` beside `input_path`
pub fn derived_output_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.{OUTPUT_EXTENSION}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Whether the file extension names a format we read
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Whether the file looks like something this tool wrote
pub fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(SHRED_SUFFIX))
}
