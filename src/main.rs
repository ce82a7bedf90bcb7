use clap::Parser;
use cnol_badge::{BadgeError, BadgeGenerator, BadgeRequest, DEFAULT_ASSET_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Renders a single CNOL badge from a JSON record.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with name, function, city, email and userId
    #[arg(short, long)]
    record: PathBuf,

    /// Directory holding logo-cnol.png and cnol2025-poster.jpg
    #[arg(short, long, default_value = DEFAULT_ASSET_DIR)]
    assets: PathBuf,

    /// Badge template JSON (defaults to the built-in CNOL 2025 layout)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file (defaults to badge-<userId>.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid record JSON: {0}")]
    Record(#[from] serde_json::Error),
    #[error(transparent)]
    Badge(#[from] BadgeError),
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Renders the badge described by `args`. Without `--output` the badge is
/// written to `working_dir` under its derived filename.
fn run(args: Args, working_dir: &Path) -> Result<PathBuf, CliError> {
    let json = fs::read_to_string(&args.record).map_err(|source| CliError::Read {
        path: args.record.clone(),
        source,
    })?;
    let request: BadgeRequest = serde_json::from_str(&json)?;

    let mut builder = BadgeGenerator::builder().with_asset_dir(&args.assets);
    if let Some(template) = &args.template {
        builder = builder.with_template_file(template)?;
    }
    let generator = builder.build()?;

    let badge = generator.generate(request)?;
    let output = args
        .output
        .unwrap_or_else(|| working_dir.join(&badge.filename));
    fs::write(&output, &badge.bytes).map_err(|source| CliError::Write {
        path: output.clone(),
        source,
    })?;
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse(), Path::new("")) {
        Ok(output) => {
            log::info!("Badge written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn write_image(path: &Path, img: image::DynamicImage, format: ImageFormat) {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        fs::write(path, buf.into_inner()).unwrap();
    }

    fn asset_dir(root: &Path) -> PathBuf {
        let dir = root.join("public");
        fs::create_dir(&dir).unwrap();
        write_image(
            &dir.join("logo-cnol.png"),
            RgbaImage::from_pixel(200, 80, Rgba([0, 82, 147, 255])).into(),
            ImageFormat::Png,
        );
        write_image(
            &dir.join("cnol2025-poster.jpg"),
            RgbImage::from_pixel(300, 420, Rgb([200, 30, 30])).into(),
            ImageFormat::Jpeg,
        );
        dir
    }

    fn args(record: PathBuf, assets: PathBuf) -> Args {
        Args {
            record,
            assets,
            template: None,
            output: None,
        }
    }

    #[test]
    fn test_run_writes_derived_filename_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let assets = asset_dir(dir.path());
        let record = dir.path().join("record.json");
        fs::write(
            &record,
            r#"{"name": "Jean Barnard", "function": "Opticien", "userId": "cnol2025-jbarnard"}"#,
        )
        .unwrap();

        let output = run(args(record, assets), dir.path()).unwrap();

        assert_eq!(output, dir.path().join("badge-cnol2025-jbarnard.pdf"));
        let bytes = fs::read(&output).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_run_honours_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let assets = asset_dir(dir.path());
        let record = dir.path().join("record.json");
        fs::write(&record, r#"{"name": "Jean", "userId": "id-1"}"#).unwrap();

        let target = dir.path().join("out.pdf");
        let mut cli = args(record, assets);
        cli.output = Some(target.clone());

        assert_eq!(run(cli, dir.path()).unwrap(), target);
        assert!(fs::read(&target).unwrap().starts_with(b"%PDF"));
        assert!(!dir.path().join("badge-id-1.pdf").exists());
    }

    #[test]
    fn test_run_rejects_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("record.json");
        fs::write(&record, "{\"name\": ").unwrap();

        let err = run(args(record, dir.path().join("public")), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::Record(_)));
    }

    #[test]
    fn test_run_reports_missing_record_and_invalid_fields() {
        let dir = tempfile::tempdir().unwrap();
        let missing = run(args(dir.path().join("absent.json"), dir.path().into()), dir.path());
        assert!(matches!(missing, Err(CliError::Read { .. })));

        let record = dir.path().join("record.json");
        fs::write(&record, "{}").unwrap();
        let invalid = run(args(record, dir.path().into()), dir.path());
        assert!(matches!(
            invalid,
            Err(CliError::Badge(BadgeError::Validation(_)))
        ));
    }
}
