//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TaskTokError;

/// Execute completions command: the completion script, or install notes.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, TaskTokError> {
    if install {
        return Ok(install_instructions(shell));
    }
    generate_completions(shell)
}

/// Generate the completion script for a shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TaskTokError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tasktok", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TaskTokError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:
source <(tasktok completions bash)"
            .to_string(),
        Shell::Zsh => "# Save to your fpath, then run compinit:
tasktok completions zsh > ~/.zfunc/_tasktok"
            .to_string(),
        Shell::Fish => "# Save to fish's completions directory:
tasktok completions fish > ~/.config/fish/completions/tasktok.fish"
            .to_string(),
        Shell::PowerShell => "# Add to your PowerShell profile:
tasktok completions powershell | Out-String | Invoke-Expression"
            .to_string(),
        _ => format!("# Generate the script and load it from your {shell} config:
tasktok completions {shell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("tasktok"));
        assert!(script.contains("presets"));
    }

    #[test]
    fn test_install_instructions() {
        let text = completions(Shell::Zsh, true).unwrap();
        assert!(text.contains("_tasktok"));
    }
}
