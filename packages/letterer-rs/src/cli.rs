//! Command line arguments backing the `letterer` binary.
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_FONT_PATH, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Replacement lines used when none are given on the command line.
pub const SAMPLE_TEXTS: &[&str] = &["Hey Nihu!", "Yes tell me Dhyaan!"];

#[derive(Parser, Debug)]
#[command(
  name = "letterer",
  about = "Find speech balloons in a comic page, read them, and letter new text over them",
  version
)]
pub struct Args {
  /// Log progress to stderr (RUST_LOG overrides)
  #[arg(long, short = 'v', global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Letter replacement text over every balloon found on the page
  Replace(ReplaceArgs),
  /// Print the balloons found on the page and their text as JSON
  Extract {
    /// Comic page to read
    #[arg(default_value = DEFAULT_INPUT)]
    image: PathBuf,

    /// Tesseract language code
    #[arg(long, default_value = "eng")]
    lang: String,
  },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReplaceArgs {
  /// Comic page to letter
  #[arg(default_value = DEFAULT_INPUT)]
  pub image: PathBuf,

  /// Replacement text, one per balloon in detection order (repeatable)
  #[arg(long = "text", short = 't')]
  pub texts: Vec<String>,

  /// Output PNG path, overwritten if it exists
  #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
  pub output: PathBuf,

  /// TrueType font for the replacement text
  #[arg(long, default_value = DEFAULT_FONT_PATH)]
  pub font: PathBuf,

  /// Paint each balloon white before lettering
  #[arg(long)]
  pub mask: bool,

  /// Do not open the result in an image viewer
  #[arg(long)]
  pub no_display: bool,

  /// Tesseract language code
  #[arg(long, default_value = "eng")]
  pub lang: String,
}

impl Default for ReplaceArgs {
  fn default() -> Self {
    Self {
      image: PathBuf::from(DEFAULT_INPUT),
      texts: Vec::new(),
      output: PathBuf::from(DEFAULT_OUTPUT),
      font: PathBuf::from(DEFAULT_FONT_PATH),
      mask: false,
      no_display: false,
      lang: "eng".to_string(),
    }
  }
}

impl ReplaceArgs {
  /// Texts to letter, falling back to the sample lines when none were given.
  pub fn replacement_texts(&self) -> Vec<String> {
    if self.texts.is_empty() {
      SAMPLE_TEXTS.iter().map(|s| s.to_string()).collect()
    } else {
      self.texts.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_no_subcommand_parses() {
    let args = Args::try_parse_from(["letterer"]).unwrap();
    assert!(args.command.is_none());
    assert!(!args.verbose);
  }

  #[test]
  fn test_replace_flags() {
    let args = Args::try_parse_from([
      "letterer", "replace", "page.png", "-t", "Hello", "-t", "World", "-o", "out.png", "--mask",
      "--no-display",
    ])
    .unwrap();
    let Some(Commands::Replace(replace)) = args.command else {
      panic!("expected replace subcommand");
    };
    assert_eq!(replace.image, PathBuf::from("page.png"));
    assert_eq!(replace.replacement_texts(), vec!["Hello", "World"]);
    assert_eq!(replace.output, PathBuf::from("out.png"));
    assert!(replace.mask);
    assert!(replace.no_display);
  }

  #[test]
  fn test_replace_defaults_match_sample_run() {
    let args = Args::try_parse_from(["letterer", "replace"]).unwrap();
    let Some(Commands::Replace(replace)) = args.command else {
      panic!("expected replace subcommand");
    };
    assert_eq!(replace.image, PathBuf::from(DEFAULT_INPUT));
    assert_eq!(replace.output, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(replace.replacement_texts(), SAMPLE_TEXTS);
    assert_eq!(ReplaceArgs::default().replacement_texts(), SAMPLE_TEXTS);
  }

  #[test]
  fn test_threshold_is_not_a_flag() {
    assert!(Args::try_parse_from(["letterer", "replace", "--threshold", "150"]).is_err());
  }
}
