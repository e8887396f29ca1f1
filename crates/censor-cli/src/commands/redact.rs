use anyhow::{Context, Result};
use censor_config::Config;
use censor_core::{Error, FileReport, render_json, render_text};
use censor_engine::{Pipeline, Redactor};
use censor_entities::GazetteerRecognizer;
use censor_lexicon::Lexicon;
use censor_sources::{censored_name, expand_globs, load_document, write_censored};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::cli::{Cli, StatsFormat};

pub async fn handle(cli: Cli, config: &Config) -> Result<()> {
    let options = cli.options();
    if options.is_noop() {
        warn!("No redaction flags given; files will be copied unchanged");
    }

    let redactor = build_redactor(config)?;
    let pipeline = Arc::new(redactor.prepare(&options)?);

    let files = expand_globs(&cli.input)?;
    if files.is_empty() {
        warn!("No files matched {:?}", cli.input);
    }

    let reports = process_files(files, pipeline, &cli.output, &config.output.extension).await;
    info!("Redacted {} file(s) into {}", reports.len(), cli.output.display());

    if let Some(target) = &cli.stats {
        emit_stats(&reports, target, cli.stats_format)?;
    }

    Ok(())
}

/// Build the recognizer and lexicon described by `config`
fn build_redactor(config: &Config) -> Result<Redactor> {
    let lexicon = match &config.lexicon.path {
        Some(path) => Lexicon::from_path(path)?,
        None => Lexicon::bundled()?,
    };
    info!("Loaded lexicon with {} synsets", lexicon.len());

    let entities = &config.entities;
    let mut builder = GazetteerRecognizer::builder()
        .persons(entities.persons.iter().cloned())
        .places(entities.places.iter().cloned())
        .facilities(entities.facilities.iter().cloned());
    if entities.us_states {
        builder = builder.us_states();
    }
    let recognizer = builder.build()?;

    Ok(Redactor::new(Arc::new(recognizer), Arc::new(lexicon))
        .with_similarity_threshold(config.lexicon.similarity_threshold))
}

/// Redact every file concurrently; reports come back in input order and
/// failed files are logged and left out
async fn process_files(
    files: Vec<PathBuf>,
    pipeline: Arc<Pipeline>,
    output_dir: &Path,
    extension: &str,
) -> Vec<FileReport> {
    let mut tasks = JoinSet::new();

    for (index, path) in files.into_iter().enumerate() {
        let pipeline = pipeline.clone();
        let output_dir = output_dir.to_path_buf();
        let extension = extension.to_string();
        tasks.spawn(async move {
            let result = process_file(&path, pipeline, &output_dir, &extension).await;
            (index, path, result)
        });
    }

    let mut completed = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, path, Ok(report))) => {
                info!(
                    total = report.stats.total(),
                    "Redacted {} -> {}",
                    path.display(),
                    report.filename
                );
                completed.push((index, report));
            }
            Ok((_, path, Err(e))) => error!("Error processing {}: {}", path.display(), e),
            Err(e) => error!("Redaction task failed: {}", e),
        }
    }

    completed.sort_by_key(|(index, _)| *index);
    completed.into_iter().map(|(_, report)| report).collect()
}

async fn process_file(
    path: &Path,
    pipeline: Arc<Pipeline>,
    output_dir: &Path,
    extension: &str,
) -> censor_core::Result<FileReport> {
    let text = load_document(path).await?;

    let outcome = tokio::task::spawn_blocking(move || pipeline.run(&text))
        .await
        .map_err(|e| Error::Other(e.into()))?;

    let name = censored_name(path, extension);
    write_censored(output_dir, &name, &outcome.text).await?;

    Ok(FileReport::new(name, outcome.stats, &outcome.text))
}

fn render_stats(reports: &[FileReport], format: StatsFormat) -> Result<String> {
    Ok(match format {
        StatsFormat::Text => render_text(reports),
        StatsFormat::Json => render_json(reports)?,
    })
}

/// Send the report to stdout, stderr or a file
fn emit_stats(reports: &[FileReport], target: &str, format: StatsFormat) -> Result<()> {
    let rendered = render_stats(reports, format)?;
    match target {
        "stdout" => println!("{}", rendered),
        "stderr" => eprintln!("{}", rendered),
        path => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write stats to {}", path))?,
    }
    Ok(())
}
