//! Project generator - turns one record into a project skeleton on disk
//!
//! Every project gets the same eight files under `<output_root>/<domain>/`.
//! Contents depend only on the record and one hero-word draw from the
//! generator's random source. Existing directories are reused and every
//! file is overwritten.
//!
//! # Example
//!
//! ```no_run
//! use sitegen::records::Record;
//! use sitegen::scaffold::{Generator, HeroWordPool};
//!
//! let mut generator = Generator::new("build", HeroWordPool::default());
//! let record = Record::from_pairs([("domain", "alpha"), ("title", "Alpha Co")]);
//! let project = generator.generate(&record)?;
//! println!("{} -> {}", project.domain, project.root.display());
//! # Ok::<(), sitegen::error::FatalGenerationError>(())
//! ```

mod hero;
pub mod templates;

pub use hero::{HeroWordPool, DEFAULT_HERO_WORDS};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FatalGenerationError;
use crate::records::Record;

/// Relative paths of every generated file, in write order.
pub const PROJECT_FILES: [&str; 8] = [
    "package.json",
    "vite.config.js",
    "index.html",
    "src/main.jsx",
    "src/components/Heading.jsx",
    "src/components/Contact.jsx",
    "src/App.jsx",
    "src/styles.css",
];

const PROJECT_DIRS: [&str; 2] = ["src", "src/components"];

/// One rendered file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub relative_path: &'static str,
    pub contents: String,
}

/// Every file for one record, plus the hero word drawn for it.
#[derive(Debug, Clone)]
pub struct RenderedProject {
    pub hero_word: String,
    pub files: Vec<ProjectFile>,
}

/// A project skeleton that has been written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub domain: String,
    pub root: PathBuf,
    pub hero_word: String,
}

/// Renders and writes project skeletons.
pub struct Generator {
    output_root: PathBuf,
    pool: HeroWordPool,
    rng: fastrand::Rng,
}

impl Generator {
    /// Generator drawing hero words from system entropy.
    pub fn new(output_root: impl AsRef<Path>, pool: HeroWordPool) -> Self {
        Self::with_rng(output_root, pool, fastrand::Rng::new())
    }

    /// Generator drawing hero words from `rng`.
    pub fn with_rng(output_root: impl AsRef<Path>, pool: HeroWordPool, rng: fastrand::Rng) -> Self {
        Self {
            output_root: output_root.as_ref().to_path_buf(),
            pool,
            rng,
        }
    }

    pub fn pool(&self) -> &HeroWordPool {
        &self.pool
    }

    /// Directory a record's project is written to.
    pub fn project_dir(&self, record: &Record) -> PathBuf {
        self.output_root.join(record.domain())
    }

    /// Render all eight files for `record` without touching the disk.
    ///
    /// Draws a fresh hero word on every call.
    pub fn render(&mut self, record: &Record) -> Result<RenderedProject, FatalGenerationError> {
        let domain = record.domain();
        let title = record.title().filter(|t| !t.is_empty()).unwrap_or(domain);
        let hero_word = self.pool.choose(&mut self.rng).to_string();

        let contents = [
            templates::package_json(domain)?,
            templates::vite_config(domain),
            templates::index_html(title),
            templates::main_jsx(),
            templates::heading_jsx(&hero_word),
            templates::contact_jsx(
                record.phone().unwrap_or_default(),
                record.address().unwrap_or_default(),
            ),
            templates::app_jsx(),
            templates::styles_css(),
        ];

        let files = PROJECT_FILES
            .into_iter()
            .zip(contents)
            .map(|(relative_path, contents)| ProjectFile {
                relative_path,
                contents,
            })
            .collect();

        Ok(RenderedProject { hero_word, files })
    }

    /// Create the project directories and write every file for `record`.
    ///
    /// Callers filter out blank-domain records first.
    pub fn generate(&mut self, record: &Record) -> Result<GeneratedProject, FatalGenerationError> {
        let domain = record.domain();
        debug_assert!(!domain.is_empty(), "blank records are filtered by the caller");

        let root = self.project_dir(record);
        ensure_dir(&root)?;
        for dir in PROJECT_DIRS {
            ensure_dir(&root.join(dir))?;
        }

        let RenderedProject { hero_word, files } = self.render(record)?;
        for file in &files {
            let path = root.join(file.relative_path);
            fs::write(&path, &file.contents)
                .map_err(|source| FatalGenerationError::WriteFile { path: path.clone(), source })?;
            tracing::debug!(path = %path.display(), bytes = file.contents.len(), "wrote file");
        }

        Ok(GeneratedProject {
            domain: domain.to_string(),
            root,
            hero_word,
        })
    }
}

fn ensure_dir(path: &Path) -> Result<(), FatalGenerationError> {
    fs::create_dir_all(path).map_err(|source| FatalGenerationError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
