//! Shared helpers for CLI integration tests.
//!
//! - `run_cli`: invokes `drawcalc_cli::run` in-process and captures the exit
//!   code, stdout and stderr.
//! - `EnvGuard`: sets environment variables for one test and restores the
//!   previous values on drop. Tests using it must be `#[serial]`.

#![allow(dead_code)]

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut argv = vec!["drawcalc"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = drawcalc_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub const CONFIG_VARS: &[&str] = &[
    "DRAWCALC_CONFIG",
    "DRAWCALC_TEMPLATE",
    "DRAWCALC_FORMAT",
    "DRAWCALC_PRECISION",
    "DRAWCALC_MAX_GROUPS",
];

pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clears every drawcalc variable, then applies `pairs`.
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
