use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;
use log::info;

use strmath::{storage, BigInt, Error, Result};

#[derive(ClapParser, Debug)]
#[command(author, version, about = "Adds two arbitrarily long integers", long_about = None)]
struct Cli {
    /// First operand; read from stdin when omitted
    a: Option<String>,

    /// Second operand; read from stdin when omitted
    b: Option<String>,

    /// Use a number stored with --save as an operand, in place of A or B
    #[arg(long, value_name = "PATH")]
    load: Vec<PathBuf>,

    /// Store the sum in a number file
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,
}

/// Reads one digit sequence per line. The line terminator is not part of
/// the number; an empty line counts as a missing input.
fn read_operand<R: BufRead>(input: &mut R) -> Result<BigInt> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::MissingInput);
    }
    let digits = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    if digits.is_empty() {
        return Err(Error::MissingInput);
    }
    Ok(digits.parse()?)
}

fn run<R: BufRead, W: Write>(cli: &Cli, mut input: R, mut output: W) -> Result<()> {
    let mut operands = Vec::new();
    for path in &cli.load {
        operands.push(storage::read_number_file(path)?);
    }
    for arg in cli.a.iter().chain(cli.b.iter()) {
        operands.push(arg.parse::<BigInt>()?);
    }
    if operands.len() > 2 {
        return Err(Error::TooManyInputs(operands.len()));
    }
    while operands.len() < 2 {
        operands.push(read_operand(&mut input)?);
    }

    let (a, b) = (&operands[0], &operands[1]);
    let sum = strmath::add(a, b);
    info!(
        "added {} + {} limbs into {} limbs",
        a.len(),
        b.len(),
        sum.len()
    );

    writeln!(
        output,
        "{} + {} = {}",
        strmath::render(a),
        strmath::render(b),
        strmath::render(&sum)
    )?;

    if let Some(path) = &cli.save {
        storage::write_number_file(path, &sum)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&cli, stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
