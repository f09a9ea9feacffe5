/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use crate::input::*;
use anyhow::{Result, bail};
use clap::Subcommand;
use connector::projects::{
    self, Application, ApplicationDecision, Project, ProjectCreate, ProjectStatus, ProjectUpdate,
};
use connector::users::{DEFAULT_LIMIT, DEFAULT_SKIP};

#[derive(Subcommand, Debug)]
pub enum Commands {
    Create {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        requirements: Option<String>,
        #[arg(short, long)]
        budget: Option<f64>,
        /// ISO-8601 date, e.g. 2025-02-01T00:00:00
        #[arg(long)]
        deadline: Option<String>,
        /// Comma separated, e.g. "Rust, PostgreSQL"
        #[arg(short = 's', long)]
        tech_stack: Option<String>,
    },
    List {
        #[arg(long)]
        status: Option<ProjectStatus>,
        #[arg(long, default_value_t = DEFAULT_SKIP)]
        skip: u32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    My,
    Show {
        id: i64,
    },
    Edit {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        requirements: Option<String>,
        #[arg(short, long)]
        budget: Option<f64>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(short = 's', long)]
        tech_stack: Option<String>,
        #[arg(long)]
        status: Option<ProjectStatus>,
    },
    Publish {
        id: i64,
    },
    Apply {
        id: i64,
        #[arg(short, long)]
        cover_letter: Option<String>,
        #[arg(short, long)]
        rate: Option<f64>,
    },
    Applications {
        id: i64,
    },
    Accept {
        id: i64,
        application: i64,
    },
    Reject {
        id: i64,
        application: i64,
    },
}

pub async fn handle(cmd: Commands) -> Result<()> {
    let config = get_request_config()?;

    match cmd {
        Commands::Create {
            title,
            description,
            requirements,
            budget,
            deadline,
            tech_stack,
        } => {
            let data = ProjectCreate {
                title: or_ask(title, "Title")?,
                description: or_ask(description, "Description")?,
                requirements,
                budget: or_ask_parsed(budget, "Budget")?,
                deadline,
                tech_stack: tech_stack.as_deref().map(parse_list),
            };

            let project = projects::create(&config, &data).await?;
            println!("Project {} created as draft. Publish it with `work21 project publish {}`.", project.id, project.id);
        }

        Commands::List { status, skip, limit } => {
            let list = projects::get_list(&config, status, skip, limit).await?;
            print_project_list(&list);
        }

        Commands::My => {
            let list = projects::get_my(&config).await?;

            if list.is_empty() {
                println!("You have no projects.");
            } else {
                print_project_list(&list);
            }
        }

        Commands::Show { id } => print_project(&projects::get_by_id(&config, id).await?),

        Commands::Edit {
            id,
            title,
            description,
            requirements,
            budget,
            deadline,
            tech_stack,
            status,
        } => {
            let update = ProjectUpdate {
                title,
                description,
                requirements,
                budget,
                deadline,
                tech_stack: tech_stack.as_deref().map(parse_list),
                status,
            };

            if update.is_empty() {
                bail!("Nothing to update.");
            }

            projects::update(&config, id, &update).await?;
            println!("Project edited.");
        }

        Commands::Publish { id } => {
            let project = projects::publish(&config, id).await?;
            println!("Project {} is now {}.", project.id, project.status);
        }

        Commands::Apply {
            id,
            cover_letter,
            rate,
        } => {
            let application = projects::apply(&config, id, cover_letter, rate).await?;
            println!("Application {} submitted.", application.id);
        }

        Commands::Applications { id } => {
            let applications = projects::get_applications(&config, id).await?;

            if applications.is_empty() {
                println!("No applications yet.");
            }

            for application in applications {
                print_application(&application);
            }
        }

        Commands::Accept { id, application } => {
            decide(&config, id, application, ApplicationDecision::Accepted).await?
        }

        Commands::Reject { id, application } => {
            decide(&config, id, application, ApplicationDecision::Rejected).await?
        }
    }

    Ok(())
}

async fn decide(
    config: &connector::RequestConfig,
    project_id: i64,
    application_id: i64,
    decision: ApplicationDecision,
) -> Result<()> {
    let application =
        projects::update_application_status(config, project_id, application_id, decision).await?;
    println!("Application {} {}.", application.id, application.status);
    Ok(())
}

fn print_project_list(list: &[Project]) {
    if list.is_empty() {
        println!("No projects found.");
        return;
    }

    for project in list {
        println!(
            "{}: {} [{}] {:.0}",
            project.id, project.title, project.status, project.budget
        );
    }
}

fn print_project(project: &Project) {
    println!("===== Project =====");
    println!("ID: {}", project.id);
    println!("Title: {}", project.title);
    println!("Status: {}", project.status);
    println!("Budget: {:.2}", project.budget);
    println!("Customer ID: {}", project.customer_id);
    println!("Description: {}", project.description);

    if let Some(requirements) = &project.requirements {
        println!("Requirements: {}", requirements);
    }

    if let Some(deadline) = &project.deadline {
        println!("Deadline: {}", deadline);
    }

    if !project.tech_stack.is_empty() {
        println!("Tech Stack: {}", project.tech_stack);
    }

    println!("Created At: {}", project.created_at);
    println!("Updated At: {}", project.updated_at);

    if let Some(spec) = &project.generated_spec {
        println!();
        println!("===== Specification =====");
        println!("{}", spec);
    }

    if project.tasks.is_empty() {
        return;
    }

    println!();
    println!("===== Tasks =====");
    for task in project.ordered_tasks() {
        let hours = task
            .estimated_hours
            .map(|h| format!(", {}h", h))
            .unwrap_or_default();

        println!(
            "{}. {} [{}] complexity {}{}",
            task.order, task.title, task.status, task.complexity, hours
        );
    }
}

fn print_application(application: &Application) {
    println!(
        "{}: student {} [{}]",
        application.id, application.student_id, application.status
    );

    if let Some(rate) = application.proposed_rate {
        println!("    Proposed Rate: {:.2}", rate);
    }

    if let Some(letter) = &application.cover_letter {
        println!("    {}", letter);
    }
}
