use crate::document_description::DocumentDescription;
use crate::CommandOutput;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_builder::render::RenderOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

const GREEN_CHECK: &str = "\u{2705}";
const RED_X: &str = "\u{274C}";

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for \
             document descriptions within a directory.",
        long,
        value_delimiter = ',',
    )]
    description_file_exts: Vec<String>,

    #[arg(
        default_value_t=RenderOptions::default().indent_width,
        help="Number of spaces per nesting level in the rendered output.",
        long,
    )]
    indent: usize,

    #[arg(
        help="Paths to one or more JSON document descriptions, or \
             directories containing them, to be rendered as GraphQL.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl RenderCmd {
    /// Find every description file at or under the given paths, in a stable
    /// (sorted) order.
    fn collect_file_paths(&self) -> (Vec<PathBuf>, Vec<anyhow::Error>) {
        let exts: HashSet<String> =
            self.description_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        let mut errors = vec![];
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            // A file named explicitly is rendered regardless of its extension.
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && exts.contains(&*ext) {
                            log::trace!("Found document description at {path:#?}.");
                            file_paths.push(path.to_owned());
                        } else {
                            log::trace!("Skipping file with unrecognized extension: {path:#?}.");
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(anyhow::Error::new(e));
                    },
                }
            }
        }
        (file_paths, errors)
    }

    async fn render_file(
        &self,
        path: &Path,
        render_options: RenderOptions,
    ) -> anyhow::Result<String> {
        let json =
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {path:#?}"))?;

        let document =
            DocumentDescription::from_json(&json)
                .and_then(|desc| desc.into_document_builder(render_options))
                .with_context(|| format!("Failed to build a document from {path:#?}"))?;

        Ok(document.build())
    }
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self) -> CommandOutput {
        let (file_paths, mut errors) = self.collect_file_paths();
        log::debug!(
            "Found {} document descriptions under {} input paths.",
            file_paths.len(),
            self.file_or_dir_paths.len(),
        );

        let render_options = RenderOptions {
            indent_width: self.indent,
        };

        // Each document is labelled with a GraphQL comment when more than one
        // is printed, so the combined output stays parseable piece by piece.
        let label = file_paths.len() > 1;
        let mut documents = vec![];
        for path in &file_paths {
            match self.render_file(path, render_options.clone()).await {
                Ok(document) if label =>
                    documents.push(format!("# {}\n{document}", path.display())),
                Ok(document) => documents.push(document),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            log::info!("{GREEN_CHECK} Rendered {} documents.", documents.len());
        }
        let failures =
            errors.iter()
                .map(|e| format!("{RED_X} {e:#}"))
                .collect();
        CommandOutput::from_documents(documents, failures)
    }
}
