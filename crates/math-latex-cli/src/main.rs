use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};

use math_latex::{Delimiters, Expression, FormatConfig, LatexFormatter, MulOperator};

mod config_file;
mod document;
mod report;

use config_file::{ConfigError, load_config_file};
use document::{DocumentError, Formula, load_document, render_document};

/// Formats mathematical expressions as LaTeX
#[derive(Parser, Debug)]
#[command(version, about = "Formats mathematical expressions as LaTeX", long_about = None)]
struct Args {
    /// Reads default options from a TOML config file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disables colors in error reports
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// BASE_{S}
    Subscript { base: String, s: String },
    /// BASE^{S}
    Superscript { base: String, s: String },
    /// BASE_{SUB}^{SUP}
    Subsup {
        base: String,
        sub: String,
        sup: String,
    },
    /// Cells joined by " & "
    Row {
        #[arg(required = true)]
        cells: Vec<String>,
    },
    /// A matrix environment; rows are separated by ';', cells by ','
    Matrix {
        /// Brackets around the matrix: paren, square, brace, angle, vert, double-vert
        #[arg(short, long, value_name = "NAME")]
        brackets: Option<Delimiters>,
        rows: String,
    },
    /// A 4x4 matrix with its third row and column replaced by dots
    ExampleMatrix {
        /// Brackets around the matrix: paren, square, brace, angle, vert, double-vert
        #[arg(short, long, value_name = "NAME")]
        brackets: Option<Delimiters>,
        rows: String,
    },
    /// \frac{NUM}{DEN}
    Frac { num: String, den: String },
    /// \sum_{START}^{END}TERM
    Sum {
        start: String,
        end: String,
        term: String,
    },
    /// \prod_{START}^{END}TERM
    Prod {
        start: String,
        end: String,
        term: String,
    },
    /// \int_{START}^{END}TERM
    Int {
        start: String,
        end: String,
        term: String,
    },
    /// Terms joined by " + "
    Add {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Terms joined by " - "
    Sub {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Terms joined by a multiplication symbol
    Mul {
        /// The operator: times, cdot, ast, star, bullet, circ, otimes, odot or implicit
        #[arg(short, long, value_name = "NAME", value_parser = parse_operator)]
        operator: Option<MulOperator>,
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Terms joined by " \div "
    Div {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// \sqrt{BASE}
    Sqrt { base: String },
    /// \sqrt[N]{BASE}
    Root { base: String, n: String },
    /// \log_{BASE}EXP
    Log { base: String, exp: String },
    /// \lim_{BASE}EXP
    Lim { base: String, exp: String },
    /// Renders a TOML file of [[formula]] tables, one line per formula ('-' reads stdin)
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    let with_color = !args.no_color;
    let config = match args.config {
        Some(ref path) => match load_config_file(path) {
            Ok(config) => config.math_latex,
            Err(e) => exit_config_error(e, path, with_color),
        },
        None => FormatConfig::default(),
    };
    let formatter = LatexFormatter::new(config);

    if let Command::Render { ref file } = args.command {
        render_and_exit(file, &formatter, with_color);
    } else if let Some(formula) = command_to_formula(args.command) {
        match formula.render(&formatter) {
            Ok(latex) => println!("{}", latex),
            Err(e) => exit_format_error(e, None),
        }
    }
}

fn render_and_exit(file: &Path, formatter: &LatexFormatter, with_color: bool) {
    let document = match load_document(file) {
        Ok(document) => document,
        Err(DocumentError::Io(e)) => exit_io_error(e),
        Err(DocumentError::Parse(e, source)) => {
            let name = file.display().to_string();
            eprint!("{}", report::toml_error_report(&e, &name, &source, with_color));
            std::process::exit(2);
        }
        Err(e) => exit_format_error(e, Some(file)),
    };
    match render_document(&document, formatter) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => exit_format_error(e, Some(file)),
    }
}

/// Turns a subcommand into the equivalent formula; command-line operands are always text.
///
/// Returns `None` for `render`, which works on a whole document.
fn command_to_formula(command: Command) -> Option<Formula> {
    let formula = match command {
        Command::Subscript { base, s } => Formula::Subscript {
            base: text(base),
            script: text(s),
        },
        Command::Superscript { base, s } => Formula::Superscript {
            base: text(base),
            script: text(s),
        },
        Command::Subsup { base, sub, sup } => Formula::SubscriptSuperscript {
            base: text(base),
            sub: text(sub),
            sup: text(sup),
        },
        Command::Row { cells } => Formula::Row {
            cells: texts(cells),
        },
        Command::Matrix { brackets, rows } => Formula::Matrix {
            rows: parse_rows(&rows),
            brackets,
        },
        Command::ExampleMatrix { brackets, rows } => Formula::ExampleMatrix {
            rows: parse_rows(&rows),
            brackets,
        },
        Command::Frac { num, den } => Formula::Fraction {
            numerator: text(num),
            denominator: text(den),
        },
        Command::Sum { start, end, term } => Formula::Sum {
            start: text(start),
            end: text(end),
            term: text(term),
        },
        Command::Prod { start, end, term } => Formula::Product {
            start: text(start),
            end: text(end),
            term: text(term),
        },
        Command::Int { start, end, term } => Formula::Integral {
            start: text(start),
            end: text(end),
            term: text(term),
        },
        Command::Add { terms } => Formula::Add {
            terms: texts(terms),
        },
        Command::Sub { terms } => Formula::Sub {
            terms: texts(terms),
        },
        Command::Mul { operator, terms } => Formula::Mul {
            terms: texts(terms),
            operator,
        },
        Command::Div { terms } => Formula::Div {
            terms: texts(terms),
        },
        Command::Sqrt { base } => Formula::Sqrt { base: text(base) },
        Command::Root { base, n } => Formula::Root {
            base: text(base),
            n: text(n),
        },
        Command::Log { base, exp } => Formula::Log {
            base: text(base),
            exp: text(exp),
        },
        Command::Lim { base, exp } => Formula::Lim {
            base: text(base),
            exp: text(exp),
        },
        Command::Render { .. } => return None,
    };
    Some(formula)
}

#[inline]
fn text(s: String) -> Expression<'static> {
    Expression::Text(Cow::Owned(s))
}

fn texts(values: Vec<String>) -> Vec<Expression<'static>> {
    values.into_iter().map(text).collect()
}

/// Splits `a,b;c,d` into rows and cells. Surrounding whitespace of each cell is dropped.
fn parse_rows(s: &str) -> Vec<Vec<Expression<'static>>> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split(';')
        .map(|row| row.split(',').map(|cell| text(cell.trim().to_string())).collect())
        .collect()
}

fn parse_operator(name: &str) -> Result<MulOperator, String> {
    MulOperator::from_name(name).ok_or_else(|| format!("unknown multiplication operator '{name}'"))
}

fn exit_config_error(e: ConfigError, path: &Path, with_color: bool) -> ! {
    match e {
        ConfigError::Io(e) => exit_io_error(e),
        ConfigError::Parse(e, source) => {
            let name = path.display().to_string();
            eprint!("{}", report::toml_error_report(&e, &name, &source, with_color));
            std::process::exit(2);
        }
    }
}

fn exit_format_error<E: std::error::Error>(e: E, fp: Option<&Path>) -> ! {
    eprint!("Formatting error");
    if let Some(fp) = fp {
        eprint!(" in '{}'", fp.display());
    }
    eprintln!(": {}", e);
    std::process::exit(2);
}

fn exit_io_error(e: std::io::Error) -> ! {
    eprintln!("IO Error: {}", e);
    std::process::exit(1);
}
