use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use linecalc::{
    config::{Config, Dialect},
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_outcome,
};

#[derive(ClapParser, Debug)]
#[command(version, about = "Evaluates one line of `name = expression` assignments", long_about = None)]
struct Args {
    /// Line to evaluate; read from standard input when omitted
    #[arg(short, long)]
    source: Option<String>,

    /// Fractional digits of printed values
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Symbol classification and grammar to use
    #[arg(long, value_enum, default_value_t = DialectArg::Extended)]
    dialect: DialectArg,

    /// Print the error name, a suggestion and the offending column after each diagnostic
    #[arg(long)]
    explain: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DialectArg {
    Reference,
    Extended,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Reference => Dialect::Reference,
            DialectArg::Extended => Dialect::Extended,
        }
    }
}

fn read_line() -> anyhow::Result<String> {
    print!("Enter code: ");
    io::stdout().flush().context("can't flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("can't read from stdin")?;
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config {
        dialect: args.dialect.into(),
        precision: args.precision,
    };

    let source = match args.source {
        Some(source) => source,
        None => read_line()?,
    };

    let start = Instant::now();
    let tokens = tokenize(&source, config.dialect);
    log::info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let parse_start = Instant::now();
    let outcomes = parse(tokens, config.dialect);
    log::info!("Parsed in {:?}", parse_start.elapsed());

    for outcome in &outcomes {
        println!("{}", render_outcome(outcome, &config));

        if let (true, Err(error)) = (args.explain, outcome) {
            println!("{}", display_error(error, source.trim_end_matches(['\r', '\n'])));
        }
    }

    Ok(())
}
