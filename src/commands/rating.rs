/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use crate::input::*;
use anyhow::Result;
use clap::Subcommand;
use connector::ratings::{self, RatingCreate};
use connector::users::{DEFAULT_LIMIT, DEFAULT_SKIP};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review a student after a completed project
    Create {
        #[arg(short, long)]
        project: Option<i64>,
        #[arg(short, long)]
        reviewee: Option<i64>,
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=5))]
        score: Option<i32>,
        #[arg(short, long)]
        comment: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        quality: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        communication: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        deadline: Option<i32>,
    },
    List {
        user: i64,
        #[arg(long, default_value_t = DEFAULT_SKIP)]
        skip: u32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
}

pub async fn handle(cmd: Commands) -> Result<()> {
    let config = get_request_config()?;

    match cmd {
        Commands::Create {
            project,
            reviewee,
            score,
            comment,
            quality,
            communication,
            deadline,
        } => {
            let data = RatingCreate {
                project_id: or_ask_parsed(project, "Project ID")?,
                reviewee_id: or_ask_parsed(reviewee, "Student ID")?,
                score: or_ask_parsed(score, "Score (1-5)")?,
                comment,
                quality_score: quality,
                communication_score: communication,
                deadline_score: deadline,
            };

            let rating = ratings::create(&config, &data).await?;
            println!("Rating {} saved.", rating.id);
        }

        Commands::List { user, skip, limit } => {
            let list = ratings::get_for_user(&config, user, skip, limit).await?;

            if list.is_empty() {
                println!("No ratings yet.");
            }

            for rating in list {
                println!("Project {}: {}/5", rating.project_id, rating.score);

                if let Some(comment) = rating.comment {
                    println!("    {}", comment);
                }
            }
        }
    }

    Ok(())
}
