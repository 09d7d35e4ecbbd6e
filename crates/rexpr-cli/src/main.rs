use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the token sequence before the expression tree.
    #[arg(long)]
    tokens: bool,

    /// The expression to evaluate.
    #[arg(default_value = "1+2*3+4")]
    input: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!("parsed CLI args = {:?}", args);

    if args.tokens {
        println!("tokens: {:?}", rexpr::tokenize(&args.input));
    }

    let (expr, value) = rexpr::evaluate(&args.input)
        .with_context(|| anyhow::anyhow!("failed to evaluate {:?}", args.input))?;
    println!("{}", expr);
    println!("{}", value);

    Ok(())
}
