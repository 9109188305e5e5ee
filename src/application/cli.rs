use crate::application::{
    BoardView, LeaderboardApp, LeaderboardPage, Response, TextRenderer, render_error_boundary,
};
use crate::domain::{CalendarUnit, PeriodError, SubmissionForm};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "leaderboards")]
#[command(about = "Browse daily, weekly, monthly and yearly product leaderboards")]
#[command(version)]
pub struct Cli {
    /// Print the raw response as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretend the current instant is this RFC 3339 timestamp
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one leaderboard, e.g. `board daily 2024 3 15`
    Board {
        /// daily, weekly, monthly or yearly
        period: String,
        /// Period components in path order
        components: Vec<String>,
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Print where the bare period path redirects to
    Redirect {
        /// daily, weekly, monthly or yearly
        period: String,
    },
    /// Show the top products of every current period
    Overview,
    /// Search products by name or description
    Search {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long)]
        page: Option<String>,
    },
    /// List product categories
    Categories {
        #[arg(short, long)]
        page: Option<String>,
    },
    /// List the products of one category
    Category {
        id: String,
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Validate a product submission
    Submit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Start the interactive leaderboard browser
    Browse {
        /// daily, weekly, monthly or yearly
        #[arg(default_value = "weekly")]
        period: String,
    },
}

impl Cli {
    pub fn run() -> anyhow::Result<ExitCode> {
        let cli = Self::parse();
        let app = LeaderboardApp::from_env()?;
        let now = match &cli.now {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --now timestamp: {}", raw))?
                .with_timezone(&Utc),
            None => Utc::now(),
        };
        let renderer = TextRenderer::new();
        let json = cli.json;

        debug!("Running at {} in {}", now, app.calendar().time_zone());

        match cli.command {
            Some(Commands::Board {
                period,
                components,
                page,
            }) => {
                let response = match CalendarUnit::from_period_name(&period) {
                    Some(unit) => app.leaderboard(unit, &components, page.as_deref(), now),
                    None => {
                        Response::<LeaderboardPage>::from(PeriodError::InvalidPeriodName(period))
                    }
                };
                emit(json, response, |page| renderer.render_leaderboard(page))
            }
            Some(Commands::Redirect { period }) => {
                emit(json, app.redirect(&period, now), |_| String::new())
            }
            Some(Commands::Overview) => {
                emit(json, app.overview(now), |page| renderer.render_overview(page))
            }
            Some(Commands::Search { query, page }) => emit(
                json,
                app.search(query.as_deref(), page.as_deref()),
                |page| renderer.render_search(page),
            ),
            Some(Commands::Categories { page }) => emit(
                json,
                app.categories(page.as_deref()),
                |page| renderer.render_categories(page),
            ),
            Some(Commands::Category { id, page }) => emit(
                json,
                app.category(&id, page.as_deref()),
                |page| renderer.render_category(page),
            ),
            Some(Commands::Submit {
                name,
                description,
                url,
                category,
            }) => {
                let form = SubmissionForm {
                    name,
                    description,
                    url,
                    category,
                };
                let result = app.submit(&form);
                if json {
                    let value = match &result {
                        Ok(submission) => serde_json::json!({ "submission": submission }),
                        Err(errors) => serde_json::json!({ "errors": errors }),
                    };
                    println!("{}", serde_json::to_string_pretty(&value)?);
                } else {
                    print!("{}", renderer.render_submission(&result));
                }
                Ok(if result.is_ok() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            }
            Some(Commands::Browse { period }) => {
                let unit = CalendarUnit::from_period_name(&period)
                    .ok_or(PeriodError::InvalidPeriodName(period))?;
                let last = {
                    let mut view = BoardView::new(&app, unit, now)?;
                    view.run()?
                }; // view is dropped here, restoring the terminal
                println!("{}", last.path(app.calendar().base_path()));
                Ok(ExitCode::SUCCESS)
            }
            None => emit(json, app.overview(now), |page| renderer.render_overview(page)),
        }
    }
}

/// Print a response and map it to the process exit status
fn emit<T, F>(json: bool, response: Response<T>, render: F) -> anyhow::Result<ExitCode>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        match &response {
            Response::Page { body } => print!("{}", render(body)),
            Response::Redirect { status, location } => println!("{} {}", status, location),
            Response::Error { status, payload } => {
                eprintln!("{}", render_error_boundary(*status, payload.as_ref()))
            }
        }
    }

    Ok(if response.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_board_arguments() {
        let cli = Cli::try_parse_from([
            "leaderboards",
            "--json",
            "board",
            "weekly",
            "2024",
            "11",
            "--page",
            "2",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Some(Commands::Board {
                period,
                components,
                page,
            }) => {
                assert_eq!(period, "weekly");
                assert_eq!(components, vec!["2024", "11"]);
                assert_eq!(page.as_deref(), Some("2"));
            }
            _ => panic!("expected board command"),
        }
    }

    #[test]
    fn test_browse_defaults_to_weekly() {
        let cli = Cli::try_parse_from(["leaderboards", "browse"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Browse { period }) if period == "weekly"));
    }
}
