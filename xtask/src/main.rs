//! Development automation tasks for the Constant Contact SDK workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{anyhow, Context};

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("doc") => run_doc(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Constant Contact SDK Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run all CI checks (fmt, clippy, test, doc, deny, audit)");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints");
    println!("    test      Run all tests, examples included");
    println!("    doc       Build API docs with warnings denied");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    const STEPS: [(&str, fn() -> anyhow::Result<()>); 6] = [
        ("Checking Rust format", run_fmt),
        ("Running Clippy", run_clippy),
        ("Running tests", run_test),
        ("Building docs", run_doc),
        ("Checking dependencies", run_deny),
        ("Auditing dependencies", run_audit),
    ];

    println!("==> Running CI checks...");

    for (index, (label, step)) in STEPS.iter().enumerate() {
        println!("\n==> Step {}/{}: {label}...", index + 1, STEPS.len());
        step()?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"], "Clippy run failed. See output above.")
}

/// Run all workspace tests and make sure examples build
fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace", "--all-targets"], "Tests failed")?;
    cargo(&["test", "--workspace", "--doc"], "Doc tests failed")
}

/// Build API docs for the library crates
fn run_doc() -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(["doc", "--no-deps", "-p", "ctct-domain", "-p", "ctct-core", "-p", "ctct-infra"])
        .env("RUSTDOCFLAGS", "-D warnings")
        .status()
        .context("Failed to run cargo doc")?;

    if !status.success() {
        anyhow::bail!("Documentation build failed");
    }

    Ok(())
}

/// Check dependencies with cargo-deny
fn run_deny() -> anyhow::Result<()> {
    ensure_installed("deny", "cargo-deny")?;
    cargo(&["deny", "check"], "cargo-deny found issues")
}

/// Audit dependencies for security vulnerabilities
fn run_audit() -> anyhow::Result<()> {
    ensure_installed("audit", "cargo-audit")?;
    cargo(&["audit"], "cargo-audit found vulnerabilities")
}

fn ensure_installed(subcommand: &str, package: &str) -> anyhow::Result<()> {
    let check_installed = Command::new("cargo").args([subcommand, "--version"]).output();

    if !check_installed.as_ref().is_ok_and(|o| o.status.success()) {
        eprintln!("{package} is not installed.");
        eprintln!("Install it with: cargo install {package}");
        anyhow::bail!("{package} not found");
    }

    Ok(())
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status =
        Command::new("cargo").args(args).status().with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }

    Ok(())
}
