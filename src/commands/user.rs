/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use anyhow::{Result, bail};
use clap::Subcommand;
use connector::users::{self, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_LIMIT, DEFAULT_SKIP, Role, User, UserUpdate};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the logged in user
    Me,
    Show {
        id: i64,
    },
    Edit {
        #[arg(short, long)]
        first_name: Option<String>,
        #[arg(short, long)]
        last_name: Option<String>,
        #[arg(short, long)]
        bio: Option<String>,
        #[arg(short, long)]
        skills: Option<String>,
        #[arg(short, long)]
        avatar_url: Option<String>,
    },
    Students {
        #[arg(long, default_value_t = DEFAULT_SKIP)]
        skip: u32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    Leaderboard {
        #[arg(long, default_value_t = DEFAULT_LEADERBOARD_LIMIT)]
        limit: u32,
    },
}

pub async fn handle(cmd: Commands) -> Result<()> {
    let config = get_request_config()?;

    match cmd {
        Commands::Me => {
            let user = users::get_me(&config).await?;
            print_user(&user);

            match user.role {
                Role::Student => {
                    println!();
                    println!("Browse open projects with `work21 project list`.");
                }
                Role::Customer => {
                    println!();
                    println!("Manage your projects with `work21 project my`.");
                }
                Role::Admin => {}
            }
        }

        Commands::Show { id } => print_user(&users::get_by_id(&config, id).await?),

        Commands::Edit {
            first_name,
            last_name,
            bio,
            skills,
            avatar_url,
        } => {
            let update = UserUpdate {
                first_name,
                last_name,
                bio,
                skills,
                avatar_url,
            };

            if update.is_empty() {
                bail!("Nothing to update.");
            }

            users::update_me(&config, &update).await?;
            println!("Profile updated.");
        }

        Commands::Students { skip, limit } => {
            let students = users::get_students(&config, skip, limit).await?;

            if students.is_empty() {
                println!("No students found.");
            }

            for student in students {
                println!("{}: {} ({:.1})", student.id, student.full_name(), student.rating_score);
            }
        }

        Commands::Leaderboard { limit } => {
            let leaders = users::get_leaderboard(&config, limit).await?;

            for (place, user) in leaders.iter().enumerate() {
                println!(
                    "{:>3}. {} - rating {:.1}, {} completed",
                    place + 1,
                    user.full_name(),
                    user.rating_score,
                    user.completed_projects
                );
            }
        }
    }

    Ok(())
}

fn print_user(user: &User) {
    let role = match user.role {
        Role::Student => "Student",
        Role::Customer => "Customer",
        Role::Admin => "Administrator",
    };

    println!("===== User =====");
    println!("ID: {}", user.id);
    println!("Name: {}", user.full_name());
    println!("Email: {}", user.email);
    println!("Role: {}", role);

    if let Some(bio) = &user.bio {
        println!("Bio: {}", bio);
    }

    if let Some(skills) = &user.skills {
        println!("Skills: {}", skills);
    }

    if user.role == Role::Student {
        println!("Rating: {:.1}", user.rating_score);
        println!("Completed Projects: {}", user.completed_projects);
    }

    println!("Verified: {}", if user.is_verified { "yes" } else { "no" });
    println!("Member Since: {}", user.created_at);
}
