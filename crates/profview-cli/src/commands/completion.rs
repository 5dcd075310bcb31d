// Dweve profview - Profile Explorer View State
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation - Tab completion for various shells

use crate::error::CliResult;
use clap::Command;
use clap_complete::{generate, Generator, Shell};
use std::io;

/// Write the completion script for `cmd` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::Shell;
/// use profview_cli::commands::generate_completion_for_command;
///
/// let mut cmd = Command::new("profview");
/// generate_completion_for_command(Shell::Bash, &mut cmd).unwrap();
/// ```
pub fn generate_completion_for_command<G: Generator>(generator: G, cmd: &mut Command) -> CliResult<()> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Instructions for enabling completions in `shell`.
///
/// ```
/// use clap_complete::Shell;
/// use profview_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions(Shell::Zsh).contains("~/.zshrc"));
/// ```
pub fn print_installation_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Current session:\n\
                        eval \"$(profview completion bash)\"\n\n\
                        # Persistent:\n\
                        profview completion bash > ~/.local/share/bash-completion/completions/profview\n"
            .to_string(),
        Shell::Zsh => "# Current session:\n\
                       eval \"$(profview completion zsh)\"\n\n\
                       # Persistent (add to ~/.zshrc or a directory in $fpath):\n\
                       profview completion zsh > ~/.zsh/completions/_profview\n"
            .to_string(),
        Shell::Fish => "# Persistent:\n\
                        profview completion fish > ~/.config/fish/completions/profview.fish\n"
            .to_string(),
        Shell::PowerShell => "# Add to $PROFILE:\n\
                              profview completion powershell | Out-String | Invoke-Expression\n"
            .to_string(),
        Shell::Elvish => "# Add to ~/.elvish/rc.elv:\n\
                          eval (profview completion elvish | slurp)\n"
            .to_string(),
        other => format!("# Run `profview completion {}` and load the output in your shell\n", other),
    }
}
