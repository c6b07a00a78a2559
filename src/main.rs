//! # lang8-features
//!
//! Extracts linguistic features from Lang-8 learner essays, to classify the native language family
//! (European or Asian) of their writers.
//!
//! ## Getting started
//!
//! ```sh
//! lang8-features 0.3.0
//! Feature extraction for native language family classification on Lang-8.
//!
//! USAGE:
//!     lang8-features <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     build      Build train/dev/test feature tables
//!     help       Prints this message or the help of the given subcommand(s)
//!     inspect    Print labels and features of every document of an archive
//! ```
//!
//! `RUST_LOG=info lang8-features build lang-8.zip train.txt dev.txt test.txt out/`
//! writes `out/train.csv`, `out/dev.csv`, `out/test.csv` and `out/features.json`.
use structopt::StructOpt;

use lang8_features::io::writer::DatasetWriter;
use lang8_features::pipelines::{DatasetBuilder, Inspect, Mode, Pipeline};
use lang8_features::{cli, error};

#[macro_use]
extern crate log;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Lang8::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Lang8::Build(b) => {
            let config = b.schema.resolve()?;
            let mode = if b.sequential {
                Mode::Sequential
            } else {
                Mode::Parallel {
                    chunk_size: b.chunk_size,
                }
            };

            // fail before reading the whole archive
            let writer = DatasetWriter::new(&b.dst)?;
            let p = DatasetBuilder::new(b.archive, b.train, b.dev, b.test)
                .config(config.clone())
                .mode(mode);
            let dataset = p.run()?;
            writer.write(&dataset, &config)?;
        }

        cli::Lang8::Inspect(i) => {
            let config = i.schema.resolve()?;
            let p = Inspect::new(i.archive, config);
            p.run()?;
        }
    };
    Ok(())
}
