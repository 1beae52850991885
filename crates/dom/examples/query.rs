//! Example: run a CSS selector over an HTML file
//!
//! ```text
//! cargo run -p dom --example query -- "ul > li.item" page.html
//! cat page.html | cargo run -p dom --example query -- "a[href]"
//! ```
//!
//! Set `RUST_LOG=dom_html=debug` to see parse sizes.

use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use dom::prelude::*;
use dom::{Config, Parser};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let selector = args
        .next()
        .context("usage: query <selector> [file]")?;

    let parser = Parser::new(Config::default());
    let doc = match args.next() {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            parser.parse_document_from_reader(file)?
        }
        None => parser.parse_document_from_reader(io::stdin().lock())?,
    };

    let matches = doc
        .query_selector_all(&selector)
        .with_context(|| format!("running selector {selector:?}"))?;
    for element in &matches {
        println!("{}", element.outer_html()?);
    }
    tracing::info!(count = matches.length(), "done");
    Ok(())
}
