use anyhow::{anyhow, Context, Result};
use clap::Args;
use crossbeam_channel::{bounded, Sender};
use flate2::read::GzDecoder;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, error, info};

use crate::parse::AffiliationParser;
use crate::rules::resolve_rules;
use crate::{wos, NormalizedRecord};

mod reader;
pub use reader::extract_record;

pub const RECORDS_FILE: &str = "normalized_affiliations.jsonl";
pub const WOS_FILE: &str = "wos_fields.txt";

#[derive(Args)]
pub struct NormalizeArgs {
    /// Directory containing .jsonl or .jsonl.gz exports
    #[arg(short, long)]
    pub input: PathBuf,

    /// Working directory for output files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of threads (0 = auto)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Records per batch
    #[arg(short, long, default_value = "5000")]
    pub batch_size: usize,

    /// Key (or JSON pointer) holding the author-affiliation string
    #[arg(long, default_value = "Authors with affiliations")]
    pub field: String,

    /// Key holding the record identifier
    #[arg(long, default_value = "EID")]
    pub id_field: String,

    /// JSON rules file replacing the built-in tables
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

/// One processed record together with its tagged rendering.
pub struct NormalizedOutput {
    pub record: NormalizedRecord,
    pub wos: String,
}

/// Result of one batch: the records produced and counts of the lines that
/// produced nothing.
#[derive(Default)]
pub struct NormalizedBatch {
    pub outputs: Vec<NormalizedOutput>,
    /// Lines that are not valid JSON.
    pub undecodable: usize,
    /// JSON records with no usable affiliation field.
    pub without_affiliations: usize,
}

enum LineOutcome {
    Normalized(Box<NormalizedOutput>),
    Undecodable,
    WithoutAffiliations,
}

#[derive(Default)]
struct Stats {
    records: AtomicUsize,
    undecodable: AtomicUsize,
    without_affiliations: AtomicUsize,
    address_lines: AtomicUsize,
    skipped_entries: AtomicUsize,
}

pub fn find_input_files<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for suffix in ["**/*.jsonl", "**/*.jsonl.gz"] {
        let pattern = directory.as_ref().join(suffix);
        let pattern_str = pattern.to_string_lossy();
        files.extend(glob(&pattern_str)?.filter_map(Result::ok));
    }
    files.sort();
    Ok(files)
}

fn open_input(filepath: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(filepath)
        .with_context(|| format!("Failed to open {}", filepath.display()))?;
    let inner: Box<dyn Read> = if filepath.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(Box::new(BufReader::new(inner)))
}

/// Runs the parser over one batch of raw lines, in parallel.
pub fn normalize_lines(
    parser: &AffiliationParser,
    lines: &[(usize, String)],
    id_field: &str,
    field: &str,
) -> NormalizedBatch {
    let outcomes: Vec<LineOutcome> = lines
        .par_iter()
        .map(|(line_no, line)| {
            let value = match serde_json::from_str::<serde_json::Value>(line) {
                Ok(value) => value,
                Err(e) => {
                    debug!("Skipping undecodable line {}: {}", line_no, e);
                    return LineOutcome::Undecodable;
                }
            };
            let Some(source) = extract_record(&value, id_field, field, *line_no) else {
                return LineOutcome::WithoutAffiliations;
            };
            let parsed = parser.parse(&source.affiliations);
            LineOutcome::Normalized(Box::new(NormalizedOutput {
                wos: wos::render_record(&source.id, &parsed),
                record: NormalizedRecord::from_parsed(source.id, &parsed),
            }))
        })
        .collect();

    let mut batch = NormalizedBatch::default();
    for outcome in outcomes {
        match outcome {
            LineOutcome::Normalized(output) => batch.outputs.push(*output),
            LineOutcome::Undecodable => batch.undecodable += 1,
            LineOutcome::WithoutAffiliations => batch.without_affiliations += 1,
        }
    }
    batch
}

fn process_file(
    filepath: &Path,
    parser: &AffiliationParser,
    args: &NormalizeArgs,
    stats: &Stats,
    tx: &Sender<Vec<NormalizedOutput>>,
) -> Result<()> {
    let reader = open_input(filepath)?;
    let batch_size = args.batch_size.max(1);
    let mut lines = Vec::with_capacity(batch_size);

    let flush = |lines: &mut Vec<(usize, String)>| -> bool {
        let NormalizedBatch {
            outputs,
            undecodable,
            without_affiliations,
        } = normalize_lines(parser, lines, &args.id_field, &args.field);
        lines.clear();
        stats.undecodable.fetch_add(undecodable, Ordering::Relaxed);
        stats
            .without_affiliations
            .fetch_add(without_affiliations, Ordering::Relaxed);
        for output in &outputs {
            stats.records.fetch_add(1, Ordering::Relaxed);
            stats
                .address_lines
                .fetch_add(output.record.addresses.len(), Ordering::Relaxed);
            stats
                .skipped_entries
                .fetch_add(output.record.skipped_entries, Ordering::Relaxed);
        }
        outputs.is_empty() || tx.send(outputs).is_ok()
    };

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", filepath.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push((idx + 1, line));

        if lines.len() >= batch_size && !flush(&mut lines) {
            return Ok(());
        }
    }

    if !lines.is_empty() {
        let _ = flush(&mut lines);
    }

    Ok(())
}

fn write_outputs(
    output_dir: &Path,
    rx: crossbeam_channel::Receiver<Vec<NormalizedOutput>>,
) -> Result<()> {
    let records_path = output_dir.join(RECORDS_FILE);
    let wos_path = output_dir.join(WOS_FILE);
    let mut records = BufWriter::new(
        File::create(&records_path)
            .with_context(|| format!("Failed to create {}", records_path.display()))?,
    );
    let mut tagged = BufWriter::new(
        File::create(&wos_path)
            .with_context(|| format!("Failed to create {}", wos_path.display()))?,
    );

    while let Ok(batch) = rx.recv() {
        for output in batch {
            serde_json::to_writer(&mut records, &output.record)?;
            records.write_all(b"\n")?;
            tagged.write_all(output.wos.as_bytes())?;
            tagged.write_all(b"\n\n")?;
        }
    }

    records.flush()?;
    tagged.flush()?;
    Ok(())
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scopus_affil=info".parse()?),
        )
        .try_init()
        .ok();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let rules = resolve_rules(args.rules.as_deref())?;
    let parser = AffiliationParser::new(&rules)?;

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();
    info!("Using {} threads", num_threads);

    let files = find_input_files(&args.input)?;
    info!("Found {} files to process", files.len());
    if files.is_empty() {
        return Ok(());
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let stats = Stats::default();
    let (tx, rx) = bounded::<Vec<NormalizedOutput>>(num_threads * 4);

    let output_dir = args.output.clone();
    let writer_handle = std::thread::spawn(move || write_outputs(&output_dir, rx));

    files.par_iter().for_each_with(tx.clone(), |tx, filepath| {
        if let Err(e) = process_file(filepath, &parser, &args, &stats, tx) {
            error!("Error processing {}: {}", filepath.display(), e);
        }
        progress.inc(1);
    });

    drop(tx);
    writer_handle
        .join()
        .map_err(|_| anyhow!("Writer thread panicked"))??;
    progress.finish();

    info!(
        "Normalized {} records into {} address lines",
        stats.records.load(Ordering::Relaxed),
        stats.address_lines.load(Ordering::Relaxed)
    );
    info!(
        "Skipped {} malformed author entries and {} records without affiliations",
        stats.skipped_entries.load(Ordering::Relaxed),
        stats.without_affiliations.load(Ordering::Relaxed)
    );
    info!(
        "Skipped {} undecodable lines",
        stats.undecodable.load(Ordering::Relaxed)
    );
    info!("Output: {}", args.output.display());

    Ok(())
}
