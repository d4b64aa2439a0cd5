use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anchorfix::{Options, transform};
use anyhow::Context as _;
use clap::Parser;
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Fix heading anchors, links, and images in rendered HTML")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Print only the table-of-contents markup
    #[arg(long = "toc-only", conflicts_with = "in_place")]
    toc_only: bool,
    #[command(flatten)]
    opts: TransformOpts,
    /// HTML files to fix
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
struct TransformOpts {
    /// Deepest heading level included in the table of contents
    #[arg(long = "toc-depth", default_value_t = 3)]
    toc_depth: u8,
    /// Slug word separator
    #[arg(long = "separator", default_value = "-")]
    separator: String,
    /// Skip table-of-contents derivation
    #[arg(long = "no-toc")]
    no_toc: bool,
    /// Leave bare images unwrapped
    #[arg(long = "no-images")]
    no_images: bool,
    /// Leave code-block language classes alone
    #[arg(long = "no-code-classes")]
    no_code_classes: bool,
}

impl TransformOpts {
    fn to_options(&self) -> Options {
        Options {
            max_toc_depth: self.toc_depth,
            separator: self.separator.clone(),
            toc_enabled: !self.no_toc,
            linkify_images: !self.no_images,
            fix_code_classes: !self.no_code_classes,
        }
    }
}

fn process_file(path: &Path, cli: &Cli, options: &Options) -> anyhow::Result<Option<String>> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let out = transform(&html, options);
    if cli.in_place {
        std::fs::write(path, out.html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        return Ok(None);
    }
    if cli.toc_only {
        return Ok(Some(out.toc.unwrap_or_default()));
    }
    Ok(Some(out.html))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = cli.opts.to_options();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let out = transform(&input, &options);
        if cli.toc_only {
            println!("{}", out.toc.unwrap_or_default());
        } else {
            println!("{}", out.html);
        }
        return Ok(());
    }

    // Documents are independent, so files can run in parallel; output is
    // collected and printed in argument order.
    let results: Vec<(PathBuf, anyhow::Result<Option<String>>)> = cli
        .files
        .par_iter()
        .map(|path| (path.clone(), process_file(path, &cli, &options)))
        .collect();

    let mut failed = false;
    for (path, result) in results {
        match result {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(err) => {
                failed = true;
                eprintln!("{}: {err:#}", path.display());
            }
        }
    }
    if failed {
        anyhow::bail!("one or more files could not be processed");
    }
    Ok(())
}
