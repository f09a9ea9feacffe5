/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, bail};
use rpassword::read_password;
use std::io::{self, Write};
use std::str::FromStr;

pub fn ask_for_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let inp = read_password().context("Failed to read password")?;

    if inp.is_empty() {
        bail!("Password cannot be empty.");
    }

    Ok(inp)
}

pub fn ask_for_input(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .with_context(|| format!("Failed to read {}.", prompt))?;
    let inp = inp.trim().to_string();

    if inp.is_empty() {
        bail!("{} cannot be empty.", prompt);
    }

    Ok(inp)
}

/// Returns `value` if given on the command line, otherwise prompts for it.
pub fn or_ask(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => ask_for_input(prompt),
    }
}

pub fn or_ask_parsed<T>(value: Option<T>, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => Ok(value),
        None => {
            let raw = ask_for_input(prompt)?;
            raw.parse::<T>()
                .map_err(|e| anyhow::anyhow!("Invalid {}: {} ({})", prompt, raw, e))
        }
    }
}

pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
