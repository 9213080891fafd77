use crate::infra::load_effective_config;
use crate::report::render_assessment;
use clap::Args;
use maturity_check::error::AppError;
use maturity_check::quiz::{EffectiveConfig, QuizSession, SessionError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Take the quiz defined in this JSON file instead of the defaults
    #[arg(long)]
    pub(crate) store: Option<PathBuf>,
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let config = load_effective_config(args.store.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    drive(&config, stdin.lock(), stdout.lock())
}

enum Input {
    Choose(usize),
    Back,
    Restart,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "quit" | ":q" => return Input::Quit,
        "back" | "<" => return Input::Back,
        "restart" => return Input::Restart,
        _ => {}
    }

    if let Ok(number) = line.parse::<usize>() {
        return match number {
            0 => Input::Unknown,
            n => Input::Choose(n - 1),
        };
    }

    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            Input::Choose(usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
        }
        _ => Input::Unknown,
    }
}

/// Runs one quiz over line-oriented input until it completes, the user quits, or input ends.
fn drive<I, O>(config: &EffectiveConfig, input: I, mut output: O) -> Result<(), AppError>
where
    I: BufRead,
    O: Write,
{
    let mut session = QuizSession::new(config);

    writeln!(output, "{}", config.title)?;
    writeln!(output, "{}", config.subtitle)?;
    writeln!(output)?;
    writeln!(output, "{}", config.description)?;
    writeln!(output)?;
    writeln!(
        output,
        "Answer with a letter or number. Type back, restart or quit to navigate."
    )?;

    session
        .start()
        .map_err(|err| AppError::Input(err.to_string()))?;
    prompt(&session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Quit => return Ok(()),
            Input::Restart => {
                session.reset();
                session
                    .start()
                    .map_err(|err| AppError::Input(err.to_string()))?;
            }
            Input::Back => {
                if let Err(SessionError::AtFirstQuestion) = session.retreat() {
                    writeln!(output, "Already at the first question.")?;
                }
            }
            Input::Choose(option) => match session.choose(option) {
                Ok(()) => {
                    session
                        .advance()
                        .map_err(|err| AppError::Input(err.to_string()))?;
                }
                Err(err) => writeln!(output, "{err}")?,
            },
            Input::Unknown => writeln!(output, "Unrecognised input: {}", line.trim())?,
        }

        if let Some(assessment) = session.outcome() {
            writeln!(output)?;
            writeln!(output, "{}", render_assessment(&assessment))?;
            return Ok(());
        }
        prompt(&session, &mut output)?;
    }

    Ok(())
}

fn prompt<O: Write>(session: &QuizSession<'_>, output: &mut O) -> Result<(), AppError> {
    let (Some(question), Some((position, total))) = (session.current_question(), session.progress())
    else {
        return Ok(());
    };
    // Answers keep points only, so options sharing a value mark the first of them.
    let selected = session.current_selection().and_then(|points| {
        question
            .options
            .iter()
            .position(|option| option.points == points)
    });

    writeln!(output)?;
    writeln!(output, "[{position} / {total}] {}", question.category)?;
    writeln!(output, "{}", question.text)?;
    for (index, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(index) { "*" } else { " " };
        writeln!(
            output,
            " {marker} {}) {}",
            question.option_label(index),
            option.text
        )?;
    }
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}
