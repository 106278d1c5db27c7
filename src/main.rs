use std::{fs::read_to_string, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::info;
use mdsl::lexer::lexer::tokenize_mdsl;

#[derive(Debug, Parser)]
#[command(name = "mdsl-lex", about = "Print the classified tokens of an MDSL file")]
struct Options {
    /// MDSL model file
    file: PathBuf,
    /// Raise the log level, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// 1-based line and 0-based byte column of the next token.
#[derive(Debug, PartialEq, Eq)]
struct LineColumn {
    line: usize,
    column: usize,
}

impl LineColumn {
    fn new() -> Self {
        LineColumn { line: 1, column: 0 }
    }

    fn advance(&mut self, text: &str) {
        match text.rfind('\n') {
            Some(last) => {
                self.line += text.matches('\n').count();
                self.column = text.len() - last - 1;
            }
            None => self.column += text.len(),
        }
    }
}

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .module("mdsl")
        .verbosity(options.verbose as usize + 1)
        .init()?;

    let file_contents = read_to_string(&options.file)
        .with_context(|| format!("failed to read {}", options.file.display()))?;

    let start = Instant::now();
    let mut count = 0;
    let mut position = LineColumn::new();

    for token in tokenize_mdsl(&file_contents) {
        println!(
            "{}:{} {} {:?}",
            position.line,
            position.column + 1,
            token.category,
            token.text
        );
        position.advance(&token.text);
        count += 1;
    }

    info!("Tokenized {} tokens in {:?}", count, start.elapsed());

    Ok(())
}
