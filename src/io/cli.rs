//! Command-line interface and batch orchestration for texture stitching

use crate::io::configuration::{CTM_SUFFIX, OUTPUT_SUFFIX, PREVIEW_FRAME_DELAY_MS, PREVIEW_SUFFIX};
use crate::io::error::{Result, invalid_input};
use crate::io::image::{export_atlas, load_texture};
use crate::io::interactive;
use crate::io::preview::export_preview;
use crate::io::progress::ProgressManager;
use crate::stitch::Stitcher;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ctmstitch")]
#[command(
    author,
    version,
    about = "Stitch regular and CTM textures into 3x3 block atlases"
)]
/// Command-line arguments for the atlas stitcher
pub struct Cli {
    /// Regular texture PNG or directory to process (interactive prompts when omitted)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// CTM texture with edge and corner variants (single-file mode only)
    #[arg(short, long)]
    pub ctm: Option<PathBuf>,

    /// Directory for stitched output (defaults to the input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Export an animated GIF preview alongside the atlas
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
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
}

/// One stitching job: a regular texture and its optional CTM companion
#[derive(Debug, Clone)]
struct StitchJob {
    regular: PathBuf,
    ctm: Option<PathBuf>,
}

/// Orchestrates batch stitching of PNG files with progress tracking
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

    /// Process textures according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, stitching, or export fails
    pub fn process(&mut self) -> Result<()> {
        let jobs = self.collect_jobs()?;

        if jobs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (index, job) in jobs.iter().enumerate() {
            self.process_job(job, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_jobs(&mut self) -> Result<Vec<StitchJob>> {
        let Some(target) = self.cli.target.clone() else {
            // No target on the command line: fall back to interactive prompts
            let selection = interactive::run_session()?;
            if selection.output_dir.is_some() {
                self.cli.output_dir = selection.output_dir;
            }
            return Ok(vec![StitchJob {
                regular: selection.regular,
                ctm: selection.ctm,
            }]);
        };

        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) != Some("png") {
                return Err(invalid_input(&"target file must be a PNG image"));
            }

            let job = StitchJob {
                ctm: self.cli.ctm.clone(),
                regular: target,
            };

            if self.should_process_file(&job.regular) {
                Ok(vec![job])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            if self.cli.ctm.is_some() {
                return Err(invalid_input(
                    &"--ctm applies to a single file; directories use the _ctm companion convention",
                ));
            }

            let mut files = Vec::new();
            for entry in std::fs::read_dir(&target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::has_stem_suffix(&path, CTM_SUFFIX)
                    && !Self::has_stem_suffix(&path, OUTPUT_SUFFIX)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();

            Ok(files
                .into_iter()
                .map(|regular| {
                    let ctm = Self::find_ctm_companion(&regular);
                    StitchJob { regular, ctm }
                })
                .collect())
        } else {
            Err(invalid_input(&"target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_job(&mut self, job: &StitchJob, index: usize) -> Result<()> {
        let output_path = self.output_path(&job.regular);

        let regular = load_texture(&job.regular)?;
        let ctm = match &job.ctm {
            Some(path) => Some(load_texture(path)?),
            None => None,
        };

        let mut stitcher = Stitcher::new(regular, ctm)?;
        let frame_count = stitcher.frame_count();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, &job.regular, frame_count as usize);
        }

        for frame in 0..frame_count {
            stitcher.stitch_frame(frame)?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_frame(index, frame as usize + 1);
            }
        }

        export_atlas(stitcher.atlas(), &output_path)?;

        if self.cli.preview {
            let preview_path = self.preview_path(&job.regular);
            export_preview(
                stitcher.atlas(),
                stitcher.geometry(),
                &preview_path,
                PREVIEW_FRAME_DELAY_MS,
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn destination_dir(&self, input_path: &Path) -> PathBuf {
        self.cli.output_dir.as_ref().map_or_else(
            || {
                input_path
                    .parent()
                    .map_or_else(PathBuf::new, Path::to_path_buf)
            },
            Clone::clone,
        )
    }

    fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());
        self.destination_dir(input_path).join(output_name)
    }

    fn preview_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let preview_name = format!("{}{PREVIEW_SUFFIX}.gif", stem.to_string_lossy());
        self.destination_dir(input_path).join(preview_name)
    }

    fn has_stem_suffix(path: &Path, suffix: &str) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(suffix))
    }

    fn find_ctm_companion(input_path: &Path) -> Option<PathBuf> {
        let stem = input_path.file_stem()?;
        let companion_name = format!("{}{CTM_SUFFIX}.png", stem.to_string_lossy());

        let candidate = input_path.parent().map_or_else(
            || PathBuf::from(&companion_name),
            |parent| parent.join(&companion_name),
        );

        candidate.is_file().then_some(candidate)
    }
}
