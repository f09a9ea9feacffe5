/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use connector::auth::{self, RegisterData, SignupRole};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "WORK21", display_name = "WORK21", bin_name = "work21", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Register {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        first_name: Option<String>,
        #[arg(short, long)]
        last_name: Option<String>,
        /// student or customer
        #[arg(short, long)]
        role: Option<SignupRole>,
    },
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    Logout,
    User {
        #[command(subcommand)]
        cmd: user::Commands,
    },
    Project {
        #[command(subcommand)]
        cmd: project::Commands,
    },
    Rating {
        #[command(subcommand)]
        cmd: rating::Commands,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    let Some(cmd) = cli.cmd else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match cmd {
        MainCommands::Config { key, value } => set_get_value_from_string(&key, value)?,

        MainCommands::Register {
            email,
            first_name,
            last_name,
            role,
        } => {
            let data = RegisterData {
                email: or_ask(email, "Email")?,
                first_name: or_ask(first_name, "First Name")?,
                last_name: or_ask(last_name, "Last Name")?,
                role: or_ask_parsed(role, "Role (student/customer)")?,
                password: ask_for_password()?,
            };

            let user = auth::register(&get_request_config()?, &data).await?;
            println!("Registered {} as {}. Please log in.", user.email, user.role);
        }

        MainCommands::Login { email } => {
            let email = or_ask(email, "Email")?;
            let password = ask_for_password()?;

            let res = auth::login(&get_request_config()?, &email, &password).await?;
            set_value(ConfigKey::AccessToken, Some(res.access_token))?;
            println!("Logged in.");
        }

        MainCommands::Logout => {
            set_value(ConfigKey::AccessToken, None)?;
            println!("Logged out.");
        }

        MainCommands::User { cmd } => user::handle(cmd).await?,
        MainCommands::Project { cmd } => project::handle(cmd).await?,
        MainCommands::Rating { cmd } => rating::handle(cmd).await?,
    }

    Ok(())
}
