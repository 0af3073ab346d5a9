use clap::Parser;
use polexpr::{
    Context,
    error::ParseError,
    interpreter::{
        parser::{
            config::{DEFAULT_MAX_DEPTH, DEFAULT_SEPARATOR, ParserConfig},
            core::parse_with,
        },
        serializer::{
            graphviz::to_graphviz,
            prefix::{SerializeConfig, to_prefix_notation_with},
        },
    },
    util::num::NumberFormat,
};
use tracing_subscriber::EnvFilter;

/// polexpr evaluates arithmetic expressions written in prefix (Polish)
/// notation, such as `+|sin|var0|2.0`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, for example `--var x=2.5`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Binds `var0`, `var1`, ... in order, for example `--values 1,2.5,-3`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<f64>,

    /// Separator between tokens, used for both reading and echoing.
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Deepest expression accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Prints the expression as a Graphviz digraph instead of evaluating it.
    #[arg(long)]
    graphviz: bool,

    /// Echoes constants in their shortest exact form instead of six decimals.
    #[arg(long)]
    shortest: bool,

    /// The expression in prefix notation.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let config = ParserConfig::default().with_separator(args.separator.as_str())
                                        .with_max_depth(args.max_depth);
    let tree = match parse_with(&args.expression, &config) {
        Ok(tree) => tree,
        Err(ParseError::Lex(e)) => {
            eprintln!("{}", e.render(&args.expression));
            std::process::exit(1);
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if args.graphviz {
        print!("{}", to_graphviz(&tree));
        return;
    }

    let mut context = Context::from_values(args.values.iter().copied());
    for (name, value) in &args.vars {
        context.bind(name.as_str(), *value);
    }

    let number_format = if args.shortest { NumberFormat::Shortest } else { NumberFormat::default() };
    let echo = SerializeConfig::default().with_separator(args.separator.as_str())
                                         .with_number_format(number_format);
    println!("{}", to_prefix_notation_with(&tree, &echo));

    match tree.evaluate(&context) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
