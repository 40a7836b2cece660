use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use letterer_rs::cli::{Args, Commands, ReplaceArgs};
use letterer_rs::config::PAGE_SEG_MODE;
use letterer_rs::{extract, render, ExtractorConfig, RenderConfig, TesseractEngine};

fn init_tracing(verbose: bool) {
  let default = if verbose { "letterer_rs=debug,letterer_ocr=debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn engine(lang: &str) -> TesseractEngine {
  TesseractEngine::new()
    .with_lang(lang)
    .with_page_seg_mode(PAGE_SEG_MODE)
}

fn run_replace(args: ReplaceArgs) -> Result<()> {
  let texts = args.replacement_texts();
  let config = RenderConfig {
    font_path: args.font,
    mask_regions: args.mask,
    output_path: args.output,
    display: !args.no_display,
    ..RenderConfig::default()
  };

  render(&args.image, &texts, &engine(&args.lang), &ExtractorConfig::default(), &config)
    .with_context(|| format!("Failed to letter {}", args.image.display()))?;

  println!("Saved {}", config.output_path.display());
  Ok(())
}

fn run_extract(image: std::path::PathBuf, lang: &str) -> Result<()> {
  let extraction = extract(&image, &engine(lang), &ExtractorConfig::default())
    .with_context(|| format!("Failed to read balloons from {}", image.display()))?;
  let json = serde_json::to_string_pretty(&extraction.entries)?;
  println!("{}", json);
  Ok(())
}

fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(args.verbose);

  match args.command {
    Some(Commands::Version) => {
      println!("letterer {}", env!("CARGO_PKG_VERSION"));
      Ok(())
    }
    Some(Commands::Replace(replace)) => run_replace(replace),
    Some(Commands::Extract { image, lang }) => run_extract(image, &lang),
    None => run_replace(ReplaceArgs::default()),
  }
}
