use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Always use the portable scalar encoder
    #[arg(long, global = true)]
    pub scalar: bool,

    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Maximum input size in bytes (0 = unlimited, default from config)
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Process files exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}
