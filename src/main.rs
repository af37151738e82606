// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use lidrupviz::{report, Model, ModelConfig, ParserConfig};

use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lidrupviz", about = "Utility for LIDRUP proof log files")]
struct Options {
    #[structopt(flatten)]
    parser_config: ParserConfig,

    #[structopt(flatten)]
    model_config: ModelConfig,

    /// Path to the LIDRUP log file.
    #[structopt(parse(from_os_str))]
    filename: PathBuf,

    /// Save the charts as a PNG file next to the input instead of opening
    /// a viewer.
    #[structopt(long)]
    save: bool,

    /// Do not draw chart legends.
    #[structopt(long)]
    no_legend: bool,
}

fn process_file(options: &Options) -> std::io::Result<Model> {
    let file = std::io::BufReader::new(std::fs::File::open(&options.filename)?);
    let mut model = Model::new(options.model_config.clone());
    if let Err(e) = model.process_with_config(
        options.parser_config.clone(),
        options.filename.to_str().map(String::from),
        file,
    ) {
        panic!("{}", e);
    }
    Ok(model)
}

fn open_viewer(path: &Path) {
    let program = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    };
    if std::process::Command::new(program).arg(path).spawn().is_err() {
        println!("Report written to {}", path.display());
    }
}

fn main() {
    let options = Options::from_args();
    let model = match process_file(&options) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Cannot read {}: {}", options.filename.display(), e);
            std::process::exit(1);
        }
    };
    println!("Queries: {}", model.queries().len());
    println!("Weakened clauses: {}", model.weakens().len());
    println!("Restored clauses: {}", model.restores().len());

    let target = if options.save {
        options.filename.with_extension("png")
    } else {
        let stem = options
            .filename
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "lidrupviz".into());
        let mut name = stem;
        name.push(".png");
        std::env::temp_dir().join(name)
    };
    report::render_png(&model, &target, !options.no_legend)
        .unwrap_or_else(|e| panic!("Cannot render {}: {}", target.display(), e));
    if options.save {
        println!("Report written to {}", target.display());
    } else {
        open_viewer(&target);
    }
}
