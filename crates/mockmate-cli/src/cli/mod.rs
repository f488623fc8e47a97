//! CLI entry and dispatch.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use mockmate_client::types::{
    Category, Difficulty, InterviewType, ProgrammingLanguage, QuestionType, Role, SessionStatus,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

/// Env var holding the log filter directive.
const LOG_ENV: &str = "MOCKMATE_LOG";

#[derive(Parser)]
#[command(name = "mockmate")]
#[command(version)]
#[command(about = "Mock-Mate interview practice client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in and store the session credential
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "MOCKMATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "MOCKMATE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        /// STUDENT, MENTOR or ADMIN
        #[arg(long, default_value = "STUDENT")]
        role: Role,
    },
    /// End the session and forget the stored credential
    Logout,
    /// Show the signed-in user's profile
    Whoami,
    /// Show the signed-in user's statistics
    Stats,
    /// Show the top-ranked users
    Leaderboard {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Manage interview sessions
    Interviews {
        #[command(subcommand)]
        command: InterviewCommands,
    },
    /// Browse the question bank
    Questions {
        #[command(subcommand)]
        command: QuestionCommands,
    },
    /// Submit and test code
    Coding {
        #[command(subcommand)]
        command: CodingCommands,
    },
    /// Record and analyze behavioral answers
    Behavioral {
        #[command(subcommand)]
        command: BehavioralCommands,
    },
    /// Administrative views (ADMIN role)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum InterviewCommands {
    /// Lists your interviews
    List {
        /// Only sessions in this state (e.g. SCHEDULED, IN_PROGRESS)
        #[arg(long)]
        status: Option<SessionStatus>,
    },
    /// Schedules a new interview
    Create {
        #[arg(value_name = "TITLE")]
        title: String,
        /// TECHNICAL, BEHAVIORAL, CODING or MIXED
        #[arg(long = "type", default_value = "TECHNICAL")]
        kind: InterviewType,
        /// Start time, e.g. 2026-11-02T15:30:00
        #[arg(long)]
        at: NaiveDateTime,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_name = "USER_ID")]
        mentor: Option<i64>,
        /// Peer to practice with; marks the session as a peer interview
        #[arg(long, value_name = "USER_ID")]
        peer: Option<i64>,
    },
    /// Starts a scheduled interview
    Start { id: i64 },
    /// Completes an interview with feedback
    Complete {
        id: i64,
        #[arg(short, long)]
        feedback: String,
    },
    /// Cancels an interview
    Cancel { id: i64 },
    /// Lists peer interviews open to join
    Available,
    /// Joins a peer interview
    Join { id: i64 },
}

#[derive(clap::Subcommand)]
enum QuestionCommands {
    /// Lists questions
    List {
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long = "type")]
        kind: Option<QuestionType>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Shows one question
    Show { id: i64 },
    /// Draws random questions
    Random {
        /// May be repeated
        #[arg(long = "category")]
        categories: Vec<Category>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long = "type")]
        kind: Option<QuestionType>,
        #[arg(long)]
        count: Option<u32>,
    },
}

#[derive(clap::Subcommand)]
enum CodingCommands {
    /// Submits a solution file for evaluation
    Submit {
        #[arg(value_name = "QUESTION_ID")]
        question_id: i64,
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(short, long)]
        language: ProgrammingLanguage,
        #[arg(long, value_name = "INTERVIEW_ID")]
        session: Option<i64>,
    },
    /// Runs a file against custom input without recording it
    Test {
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(short, long)]
        language: ProgrammingLanguage,
        #[arg(short, long, default_value = "")]
        input: String,
    },
    /// Lists your submissions
    Submissions {
        #[arg(long, value_name = "QUESTION_ID")]
        question: Option<i64>,
        #[arg(long, value_name = "INTERVIEW_ID")]
        session: Option<i64>,
    },
}

#[derive(clap::Subcommand)]
enum BehavioralCommands {
    /// Records an answer to a behavioral question
    Submit {
        #[arg(value_name = "QUESTION_ID")]
        question_id: i64,
        #[arg(short, long)]
        response: String,
        #[arg(long, value_name = "INTERVIEW_ID")]
        session: Option<i64>,
        #[arg(long, value_name = "SECONDS")]
        time: Option<u32>,
    },
    /// Lists your recorded answers
    Responses {
        #[arg(long, value_name = "QUESTION_ID")]
        question: Option<i64>,
        #[arg(long, value_name = "INTERVIEW_ID")]
        session: Option<i64>,
    },
    /// Requests analysis of a recorded answer
    Analyze { id: i64 },
}

#[derive(clap::Subcommand)]
enum AdminCommands {
    /// Shows dashboard figures
    Dashboard,
    /// Lists users
    Users {
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Shows system statistics
    Stats,
    /// Deletes a user account
    DeleteUser { id: i64 },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Config commands work without a reachable backend.
    if let Commands::Config { command } = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let gateway = commands::gateway()?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&gateway, &username, &password).await
        }
        Commands::Register {
            username,
            email,
            password,
            first_name,
            last_name,
            role,
        } => {
            commands::auth::register(
                &gateway,
                commands::auth::Registration {
                    username,
                    email,
                    password,
                    first_name,
                    last_name,
                    role,
                },
            )
            .await
        }
        Commands::Logout => commands::auth::logout(&gateway).await,
        Commands::Whoami => commands::auth::whoami(&gateway).await,
        Commands::Stats => commands::auth::stats(&gateway).await,
        Commands::Leaderboard { limit } => commands::auth::leaderboard(&gateway, limit).await,

        Commands::Interviews { command } => match command {
            InterviewCommands::List { status } => {
                commands::interviews::list(&gateway, status).await
            }
            InterviewCommands::Create {
                title,
                kind,
                at,
                duration,
                description,
                mentor,
                peer,
            } => {
                commands::interviews::create(
                    &gateway,
                    commands::interviews::NewInterview {
                        title,
                        kind,
                        scheduled_at: at,
                        duration,
                        description,
                        mentor,
                        peer,
                    },
                )
                .await
            }
            InterviewCommands::Start { id } => commands::interviews::start(&gateway, id).await,
            InterviewCommands::Complete { id, feedback } => {
                commands::interviews::complete(&gateway, id, &feedback).await
            }
            InterviewCommands::Cancel { id } => commands::interviews::cancel(&gateway, id).await,
            InterviewCommands::Available => commands::interviews::available(&gateway).await,
            InterviewCommands::Join { id } => commands::interviews::join(&gateway, id).await,
        },

        Commands::Questions { command } => match command {
            QuestionCommands::List {
                category,
                difficulty,
                kind,
                limit,
            } => {
                commands::questions::list(&gateway, category, difficulty, kind, limit).await
            }
            QuestionCommands::Show { id } => commands::questions::show(&gateway, id).await,
            QuestionCommands::Random {
                categories,
                difficulty,
                kind,
                count,
            } => {
                commands::questions::random(&gateway, categories, difficulty, kind, count).await
            }
        },

        Commands::Coding { command } => match command {
            CodingCommands::Submit {
                question_id,
                file,
                language,
                session,
            } => commands::coding::submit(&gateway, question_id, &file, language, session).await,
            CodingCommands::Test {
                file,
                language,
                input,
            } => commands::coding::test(&gateway, &file, language, input).await,
            CodingCommands::Submissions { question, session } => {
                commands::coding::submissions(&gateway, question, session).await
            }
        },

        Commands::Behavioral { command } => match command {
            BehavioralCommands::Submit {
                question_id,
                response,
                session,
                time,
            } => commands::behavioral::submit(&gateway, question_id, response, session, time).await,
            BehavioralCommands::Responses { question, session } => {
                commands::behavioral::responses(&gateway, question, session).await
            }
            BehavioralCommands::Analyze { id } => {
                commands::behavioral::analyze(&gateway, id).await
            }
        },

        Commands::Admin { command } => match command {
            AdminCommands::Dashboard => commands::admin::dashboard(&gateway).await,
            AdminCommands::Users {
                role,
                search,
                page,
                size,
            } => commands::admin::users(&gateway, role, search, page, size).await,
            AdminCommands::Stats => commands::admin::stats(&gateway).await,
            AdminCommands::DeleteUser { id } => commands::admin::delete_user(&gateway, id).await,
        },

        // handled above
        Commands::Config { .. } => Ok(()),
    }
}
