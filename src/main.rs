use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use plotexpr::plot::MAX_POINTS;
use plotexpr::{Engine, Grid, Lexer, Options};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Skip unknown characters and tolerate unbalanced parentheses
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an expression once
    Eval {
        expression: String,
        /// Variable binding, as `name=value`. May be repeated.
        #[arg(short, long = "var", value_parser = parse_binding)]
        vars: Vec<(String, f64)>,
    },
    /// Sample an expression of `x` and `y` over a grid and print the points
    /// as JSON. The grid may hold at most 1000000 points.
    Plot {
        expression: String,
        #[arg(long, default_value_t = -10, allow_negative_numbers = true)]
        min: i64,
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        max: i64,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the expression in reverse polish notation
    Rpn { expression: String },
    /// Print the lexemes of the expression
    Tokens { expression: String },
}

fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", binding))?;
    let value = value
        .trim()
        .parse()
        .map_err(|err| format!("invalid value for '{}': {}", name, err))?;
    Ok((name.trim().to_string(), value))
}

fn square_grid(min: i64, max: i64) -> anyhow::Result<Grid> {
    if min > max {
        bail!("empty grid: --min {} is above --max {}", min, max);
    }
    let grid = Grid::square(min..=max);
    match grid.len() {
        Some(len) if len <= MAX_POINTS => Ok(grid),
        _ => bail!(
            "grid {}..={} is too large: at most {} points are sampled",
            min,
            max,
            MAX_POINTS
        ),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = if cli.lenient {
        Options::lenient()
    } else {
        Options::strict()
    };
    let engine = Engine::with_options(options);

    match cli.command {
        Commands::Eval { expression, vars } => {
            let scope: HashMap<String, f64> = vars.into_iter().collect();
            let value = engine
                .evaluate(&expression, &scope)
                .with_context(|| format!("evaluating '{}' failed", expression))?;
            println!("{}", value);
        }
        Commands::Plot {
            expression,
            min,
            max,
            pretty,
        } => {
            let grid = square_grid(min, max)?;
            let points = engine
                .plot(&expression, &grid)
                .with_context(|| format!("Invalid expression: '{}'", expression))?;
            let json = if pretty {
                serde_json::to_string_pretty(&points)?
            } else {
                serde_json::to_string(&points)?
            };
            println!("{}", json);
        }
        Commands::Rpn { expression } => {
            let expr = engine
                .compile(&expression)
                .with_context(|| format!("parsing '{}' failed", expression))?;
            println!("{}", expr);
        }
        Commands::Tokens { expression } => {
            let lexemes = Lexer::new(&expression, options)
                .tokenize()
                .with_context(|| format!("tokenizing '{}' failed", expression))?;
            for lexeme in lexemes {
                println!("{:>4}  {:?}  {}", lexeme.offset, lexeme.kind, lexeme.text);
            }
        }
    }

    Ok(())
}
