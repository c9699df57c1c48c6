//! Composition of the packaging tool command line.

use std::ffi::{OsStr, OsString};

use super::BuildConfig;

/// Separator between source and destination in `--add-data`.
#[cfg(windows)]
pub const DATA_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const DATA_SEPARATOR: &str = ":";

/// A fully composed packaging tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleInvocation {
    program: String,
    args: Vec<OsString>,
}

impl BundleInvocation {
    /// Compose the invocation for `config`.
    ///
    /// Argument order: mode and name flags, optional window/icon flags, one
    /// `--add-data` per mapping, the two collect flags per library, then the
    /// entry file as the final positional argument.
    pub fn from_config(config: &BuildConfig) -> Self {
        let mut args: Vec<OsString> =
            vec!["--onefile".into(), "--name".into(), config.name.as_str().into()];

        if config.windowed {
            args.push("--windowed".into());
        }
        if let Some(icon) = &config.icon {
            args.push("--icon".into());
            args.push(icon.into());
        }

        for mapping in &config.data {
            let mut spec = OsString::from(mapping.source.as_os_str());
            spec.push(DATA_SEPARATOR);
            spec.push(mapping.target.as_os_str());
            args.push("--add-data".into());
            args.push(spec);
        }

        for library in &config.collect {
            args.push("--collect-submodules".into());
            args.push(library.into());
        }
        for library in &config.collect {
            args.push("--collect-binaries".into());
            args.push(library.into());
        }

        args.push(config.entry.as_os_str().to_owned());

        Self { program: config.tool.clone(), args }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }

    /// Human-readable command line, quoting arguments that contain whitespace.
    pub fn display(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|arg| quote(&arg.to_string_lossy())))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
