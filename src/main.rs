use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use endcard::{
    render, AppConfig, EndcardRecord, OrientationMode, RenderOutput, UploadPolicy,
};

/// Convert an image or short video into self-contained HTML endcards
#[derive(Parser, Debug)]
#[command(name = "endcard", version, about)]
struct Cli {
    /// Media file to convert (jpg, jpeg, png or mp4)
    input: PathBuf,

    /// Landscape-framed source for rotatable mode
    #[arg(long)]
    landscape: Option<PathBuf>,

    /// Orientation mode: portrait, landscape, both or rotatable
    #[arg(long, short, default_value = "both")]
    mode: OrientationMode,

    /// Original filename to classify by, if different from the input path
    #[arg(long)]
    name: Option<String>,

    /// Directory the HTML documents are written to
    #[arg(long, short, default_value = ".")]
    out_dir: PathBuf,

    /// Also write a JSON metadata record next to the documents
    #[arg(long)]
    record: bool,
}

fn file_name_of(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .with_context(|| format!("input path has no usable filename: {}", path.display()))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let policy = UploadPolicy::from_config(&config);

    let original_filename = match &cli.name {
        Some(name) => name.clone(),
        None => file_name_of(&cli.input)?,
    };

    // The caller validates before the renderer runs
    let size = std::fs::metadata(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?
        .len();
    policy.check(&original_filename, size)?;

    if cli.mode == OrientationMode::Rotatable && cli.landscape.is_none() {
        bail!("rotatable mode requires --landscape with the landscape-framed source");
    }

    let output = render(
        &cli.input,
        cli.landscape.as_deref(),
        &original_filename,
        cli.mode,
    )?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("cannot create {}", cli.out_dir.display()))?;

    for doc in output.documents() {
        let path = cli.out_dir.join(doc.download_name());
        std::fs::write(&path, &doc.html)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!("wrote {} ({} bytes)", path.display(), doc.html.len());
        println!("{}", path.display());
    }

    if cli.record {
        let record = EndcardRecord::for_conversion(
            &original_filename,
            endcard::media::kind_for(&original_filename),
            size,
            cli.mode,
        );
        let path = cli
            .out_dir
            .join(format!("{}_record.json", endcard::media::base_filename(&original_filename)));
        std::fs::write(&path, record.to_json()?)
            .with_context(|| format!("cannot write {}", path.display()))?;
        println!("{}", path.display());
    }

    if let RenderOutput::Rotatable(set) = &output {
        info!(
            "rotatable bundle: {} orientation entries",
            set.to_map().len()
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("endcard: {:#}", e);
        std::process::exit(1);
    }
}
