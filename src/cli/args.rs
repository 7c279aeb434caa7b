use clap::Parser;

/// Password generator with strength scoring.
///
/// Run without arguments for the interactive form, or pass flags to print
/// passwords directly.
#[derive(Debug, Parser)]
#[command(name = "passgen", author, version, about, long_about = None)]
pub struct Cli {
    /// Characters per password. Values that are not a positive number fall back to 12.
    #[arg(short, long, value_name = "LEN", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Include uppercase letters (A-Z)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub upper: Option<bool>,

    /// Include lowercase letters (a-z)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub lower: Option<bool>,

    /// Include digits (0-9)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub numbers: Option<bool>,

    /// Include symbols (!@#$%^&*()-_=+[]{};:,.<>?/)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub symbols: Option<bool>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub number: usize,

    /// Copy to the clipboard instead of printing the passwords
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print only the passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Start from the saved settings instead of the built-in defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resolved length and classes as the new saved settings
    #[arg(long)]
    pub save: bool,

    /// Seed the random source for reproducible output
    #[arg(long, value_name = "N", env = "PASSGEN_SEED")]
    pub seed: Option<u64>,

    /// Open the interactive form (it starts from the saved settings)
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "length", "upper", "lower", "numbers", "symbols",
            "number", "clipboard", "quiet", "saved", "save",
        ]
    )]
    pub interactive: bool,
}
