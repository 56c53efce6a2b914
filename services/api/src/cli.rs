use crate::demo::{run_demo, run_questions, run_score, DemoArgs, QuestionsArgs, ScoreArgs};
use crate::server;
use career_fit::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Fit Assessment",
    about = "Score fraud-detection career assessments from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answer file (JSON array or questionId,answer CSV)
    Score(ScoreArgs),
    /// Print the questionnaire
    Questions(QuestionsArgs),
    /// Score a synthetic respondent and print the report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Questions(args) => run_questions(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoProfile;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["career-fit-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_command_reads_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "career-fit-api",
            "score",
            "--answers",
            "answers.csv",
            "--catalog",
            "catalog.json",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers.to_str(), Some("answers.csv"));
                assert_eq!(
                    args.catalog.as_deref().and_then(|path| path.to_str()),
                    Some("catalog.json")
                );
                assert!(args.json);
                assert!(!args.strict);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn score_command_requires_answers() {
        assert!(Cli::try_parse_from(["career-fit-api", "score"]).is_err());
    }

    #[test]
    fn demo_profile_defaults_to_moderate() {
        let cli = Cli::try_parse_from(["career-fit-api", "demo"]).expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.profile, DemoProfile::Moderate),
            other => panic!("expected demo command, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["career-fit-api", "demo", "--profile", "strong"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.profile, DemoProfile::Strong),
            other => panic!("expected demo command, got {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["career-fit-api", "serve", "--port", "8088"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8088));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
