//! Built-in entry points shipped with the `gatelaunch` binary.
//!
//! - [`ECHO`] prints each argument on its own line
//! - [`EXIT`] fails with [`ExitRequested`], ending the run with a chosen code

use anyhow::Context;
use thiserror::Error;

use super::registry::EntryPointRegistry;

/// Id of the echo entry point.
pub const ECHO: &str = "gatelaunch.echo";

/// Id of the exit entry point.
pub const EXIT: &str = "gatelaunch.exit";

/// Failure raised by [`EXIT`]; the binary exits with `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Exit requested with code {code}")]
pub struct ExitRequested {
    pub code: i32,
}

/// Add the built-in entry points to `registry`.
pub fn register_builtins(registry: &mut EntryPointRegistry) {
    registry.register(ECHO, echo);
    registry.register(EXIT, exit);
}

fn echo(args: &[String]) -> anyhow::Result<()> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(())
}

fn exit(args: &[String]) -> anyhow::Result<()> {
    let code = match args.first() {
        Some(raw) => raw
            .parse::<i32>()
            .with_context(|| format!("Invalid exit code '{}'", raw))?,
        None => 1,
    };
    Err(ExitRequested { code }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_succeeds() {
        assert!(echo(&["a".to_string(), "b".to_string()]).is_ok());
    }

    #[test]
    fn exit_defaults_to_one() {
        let err = exit(&[]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExitRequested>(),
            Some(&ExitRequested { code: 1 })
        );
    }

    #[test]
    fn exit_uses_first_argument() {
        let err = exit(&["42".to_string(), "ignored".to_string()]).unwrap_err();
        assert_eq!(err.downcast_ref::<ExitRequested>().map(|e| e.code), Some(42));
    }

    #[test]
    fn exit_rejects_non_numeric_code() {
        let err = exit(&["soon".to_string()]).unwrap_err();
        assert!(err.downcast_ref::<ExitRequested>().is_none());
        assert!(err.to_string().contains("soon"));
    }
}
