use crate::infra::load_effective_config;
use clap::Args;
use maturity_check::error::AppError;
use maturity_check::quiz::validation::check_answers;
use maturity_check::quiz::{assess, AnswerSet, Assessment, EffectiveConfig, QuizServiceError};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Selected points per question, in catalog order (e.g. 3,2,2,1)
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) answers: Vec<u32>,
    /// Score against the configuration stored in this JSON file
    #[arg(long)]
    pub(crate) store: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Resolve the configuration stored in this JSON file
    #[arg(long)]
    pub(crate) store: Option<PathBuf>,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { answers, store } = args;

    let config = load_effective_config(store.as_deref())?;
    let assessment = score_answers(&answers, &config)?;
    println!("{}", render_assessment(&assessment));
    Ok(())
}

pub(crate) fn run_config_report(args: ConfigArgs) -> Result<(), AppError> {
    let config = load_effective_config(args.store.as_deref())?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|err| AppError::Input(format!("unable to render configuration: {err}")))?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn score_answers(
    answers: &[u32],
    config: &EffectiveConfig,
) -> Result<Assessment, AppError> {
    let answers: AnswerSet = answers.iter().copied().enumerate().collect();
    check_answers(&answers, &config.questions).map_err(QuizServiceError::from)?;
    Ok(assess(&answers, config))
}

pub(crate) fn render_assessment(assessment: &Assessment) -> String {
    let mut lines = vec![
        assessment.tier.title.clone(),
        format!(
            "Modenhedsscore: {} / {}",
            assessment.score, assessment.max_score
        ),
    ];

    if !assessment.complete {
        lines.push(format!(
            "({} of {} questions answered)",
            assessment.answered, assessment.total_questions
        ));
    }

    lines.push(String::new());
    lines.push(assessment.tier.description.clone());

    if !assessment.tier.bullets.is_empty() {
        lines.push(String::new());
        for bullet in &assessment.tier.bullets {
            lines.push(format!("- {}: {}", bullet.kind.label(), bullet.text));
        }
    }

    lines.join("\n")
}
