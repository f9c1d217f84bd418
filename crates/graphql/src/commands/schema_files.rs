use anyhow::Context;
use libgraphql_merge::MergeEngine;
use libgraphql_merge::SchemaBundle;
use libgraphql_merge::SchemaSource;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command that reads GraphQL schema files.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="File to write the resulting schema to. The schema is printed to \
             stdout when omitted.",
        long,
        short='o',
    )]
    pub output: Option<PathBuf>,
}
impl SchemaFileArgs {
    fn normalized_exts(&self) -> HashSet<String> {
        self.graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }

    /// Loads one side of a merge or pare: every GraphQL file found at or
    /// under `paths`, folded together in path order.
    pub fn load_side(
        &self,
        side: &str,
        paths: &[PathBuf],
    ) -> Result<LoadedSide, Vec<anyhow::Error>> {
        let (file_paths, num_skipped) = find_graphql_files(paths, &self.normalized_exts())?;
        log::debug!("Found {} GraphQL files for the {side} schema.", file_paths.len());

        let mut errors = vec![];
        let mut sources = vec![];
        for file_path in file_paths.iter() {
            match std::fs::read_to_string(file_path) {
                Ok(sdl) => sources.push(SchemaSource::Sdl(sdl)),
                Err(e) => errors.push(anyhow::Error::new(e).context(format!(
                    "Unable to read {side} file {}",
                    file_path.display(),
                ))),
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let bundle = MergeEngine::default()
            .merge_all(&sources)
            .with_context(|| format!("Unable to combine the {side} schema files"))
            .map_err(|e| vec![e])?;

        Ok(LoadedSide {
            bundle,
            num_files: file_paths.len(),
            num_skipped,
        })
    }

    /// Writes `sdl` to `--output`, if one was given.
    ///
    /// Returns `Ok(false)` when there is no output file and the caller should
    /// print the schema itself.
    pub fn write_output(&self, sdl: &str) -> anyhow::Result<bool> {
        let Some(output) = &self.output else {
            return Ok(false);
        };
        std::fs::write(output, sdl)
            .with_context(|| format!("Unable to write {}", output.display()))?;
        log::info!("Wrote {} bytes to {}.", sdl.len(), output.display());
        Ok(true)
    }
}

pub(crate) struct LoadedSide {
    pub bundle: SchemaBundle,
    pub num_files: usize,
    pub num_skipped: usize,
}

/// Finds all GraphQL files recursively located at or under each path.
///
/// Returns the files in a stable order along with the number of non-file
/// entries that were skipped.
fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> Result<(Vec<PathBuf>, usize), Vec<anyhow::Error>> {
    let mut errors = vec![];
    let mut num_skipped = 0;
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:#?}.");
                        num_skipped += 1;
                        continue;
                    }
                    log::trace!("Found file at {entry_path:#?}.");
                    if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                        && graphql_file_exts.contains(&*ext) {
                        match canonical(entry_path) {
                            Ok(canonical_path) => file_paths.push(canonical_path),
                            Err(e) => errors.push(e),
                        }
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    errors.push(e.into());
                },
            }
        }

        // A file passed directly is loaded even if its extension doesn't match
        // one of the `--graphql-file-exts`.
        if path.is_file()
            && !path.extension()
                .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy())) {
            log::warn!(
                "Proceeding to load {path:#?} even though it doesn't match any \
                of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            match canonical(path) {
                Ok(canonical_path) => file_paths.push(canonical_path),
                Err(e) => errors.push(e),
            }
        }
    }

    if errors.is_empty() {
        Ok((file_paths, num_skipped))
    } else {
        Err(errors)
    }
}

fn canonical(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Unable to resolve {}", path.display()))
}
