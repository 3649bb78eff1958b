use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    just-install completions bash > ~/.bash_completion.d/just-install\n\n\
                  Generate PowerShell completions:\n    just-install completions powershell >> $PROFILE")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
