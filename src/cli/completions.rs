use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    apkset completions bash > ~/.bash_completion.d/apkset\n\n\
                  Generate zsh completions:\n    apkset completions zsh > ~/.zfunc/_apkset\n\n\
                  Generate fish completions:\n    apkset completions fish > ~/.config/fish/completions/apkset.fish\n\n\
                  Generate PowerShell completions:\n    apkset completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
