use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all packages:\n    just-install list\n\n\
                  Only packages whose name contains \"zip\":\n    just-install list --filter zip")]
pub struct ListArgs {
    /// Only show packages whose name contains this text (case-insensitive)
    #[arg(long, short = 'f')]
    pub filter: Option<String>,
}
