use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pow2-heap",
    about = "Interactive max-heap with 2^k children per node",
    version
)]
pub struct Cli {
    /// Children exponent k; every node gets 2^k children. Prompted for when absent.
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub exponent: Option<i64>,
    /// Maximum number of keys. Prompted for when absent.
    #[arg(short, long, allow_negative_numbers = true)]
    pub capacity: Option<i64>,
    /// Don't print prompts or the menu, only outcomes.
    #[arg(short, long)]
    pub quiet: bool,
}
