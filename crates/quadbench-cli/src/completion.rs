//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Binary name completions are generated for.
pub const BIN_NAME: &str = "quadbench";

/// Generate the completion script for `shell` and write it to `out`.
///
/// The script is rendered in memory first, so a closed pipe surfaces as an
/// error instead of a panic inside the generator.
pub fn generate_completion(
    cmd: &mut Command,
    shell: Shell,
    out: &mut dyn io::Write,
) -> io::Result<()> {
    let mut script = Vec::new();
    generate(shell, cmd, BIN_NAME, &mut script);
    out.write_all(&script)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Command {
        Command::new(BIN_NAME)
            .arg(clap::Arg::new("rule").long("rule"))
            .arg(clap::Arg::new("reps-a").long("reps-a"))
    }

    #[test]
    fn bash_completion_lists_flags() {
        let mut buf = Vec::new();
        generate_completion(&mut command(), Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains(BIN_NAME));
        assert!(script.contains("--rule"));
        assert!(script.contains("--reps-a"));
    }

    #[test]
    fn every_shell_produces_a_script() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let mut buf = Vec::new();
            generate_completion(&mut command(), shell, &mut buf).unwrap();
            assert!(!buf.is_empty(), "{shell}");
        }
    }

    #[test]
    fn closed_sink_is_an_error() {
        struct Closed;
        impl io::Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let result = generate_completion(&mut command(), Shell::Bash, &mut Closed);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
