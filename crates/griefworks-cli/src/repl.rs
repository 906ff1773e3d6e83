use std::borrow::Cow::{self, Borrowed, Owned};
use std::fmt::Display;
use std::future::Future;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use griefworks_application::grief_guide::COMPLETE_MOOD_ANALYSIS_FOR_TOOLS;
use griefworks_application::{FlowKind, GriefWorks, Notice};
use griefworks_core::error::GriefError;
use griefworks_core::inputs::{CauseOfLoss, Relationship, UserInputsDraft};
use griefworks_core::retry::Orchestrator;

use crate::commands::{COMMAND_NAMES, Command, HELP, parse_choice};
use crate::render;

type ReplEditor = Editor<CliHelper, DefaultHistory>;

/// Completion, highlighting and hints for the command words.
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    fn is_command(&self, line: &str) -> bool {
        line.split_whitespace()
            .next()
            .is_some_and(|word| self.commands.iter().any(|cmd| cmd == word))
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.is_command(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

pub async fn run(app: &GriefWorks) -> Result<()> {
    let mut rl: ReplEditor = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Grief Works ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'analyze' to begin, 'help' for all commands, or 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match Command::parse(trimmed) {
                    Some(Command::Quit) => {
                        println!("{}", "Take care of yourself. Goodbye!".bright_green());
                        break;
                    }
                    Some(command) => execute(app, &mut rl, command).await?,
                    None => println!(
                        "{}",
                        "Unknown command. Type 'help' to see what you can do.".bright_black()
                    ),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

async fn execute(app: &GriefWorks, rl: &mut ReplEditor, command: Command) -> Result<()> {
    match command {
        Command::Analyze => {
            let Some(draft) = prompt_draft(rl)? else {
                println!("{}", "Cancelled.".bright_black());
                return Ok(());
            };
            println!("{}", "Analyzing...".bright_black());
            let flow = app.mood();
            let outcome = with_progress(flow.orchestrator(), flow.submit(&draft)).await;
            render::notice(&Notice::for_outcome(FlowKind::MoodAnalysis, &outcome));
            if let Ok(response) = &outcome {
                render::sentiment(response);
            }
        }
        Command::Mood => match app.mood().restore().mood {
            Some(mood) => render::mood(mood),
            None => println!("{}", "No mood analysed yet. Try 'analyze'.".bright_black()),
        },
        Command::Schedule => {
            println!("{}", "Generating your schedule...".bright_black());
            let flow = app.schedule();
            let outcome = with_progress(flow.orchestrator(), flow.generate()).await;
            render::notice(&Notice::for_outcome(FlowKind::DailySchedule, &outcome));
            if let Ok(schedule) = &outcome {
                render::schedule(schedule);
            }
        }
        Command::Tools => {
            if app.guide().restore().missing_data {
                render_missing_tools();
            } else {
                render::tools(&app.guide().tool_selections());
            }
        }
        Command::Guide(number) => {
            let selections = app.guide().tool_selections();
            let Some(selection) = selections.get(number - 1) else {
                if selections.is_empty() {
                    render_missing_tools();
                } else {
                    println!(
                        "{}",
                        format!("There is no tool {number}. Type 'tools' to list them.").yellow()
                    );
                }
                return Ok(());
            };
            println!(
                "{}",
                format!("Preparing content for '{}'...", selection.name).bright_black()
            );
            let flow = app.guide();
            let outcome = with_progress(flow.orchestrator(), flow.select_tool(selection)).await;
            render::notice(&Notice::for_outcome(FlowKind::GriefGuide, &outcome));
            if let Ok(content) = &outcome {
                render::content(content, Some(selection.name.as_str()));
            }
        }
        Command::Content => {
            let view = app.guide().restore();
            match &view.content {
                Some(content) => render::content(content, view.selected_tool.as_deref()),
                None => println!(
                    "{}",
                    "No personalized content yet. Pick one with 'guide <n>'.".bright_black()
                ),
            }
        }
        Command::Reset => {
            app.reset();
            println!("{}", "Session cleared.".bright_green());
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
    Ok(())
}

fn render_missing_tools() {
    let err = GriefError::missing_data(COMPLETE_MOOD_ANALYSIS_FOR_TOOLS);
    render::notice(&Notice::from_error(FlowKind::GriefGuide, &err));
}

/// Drives `work` while printing "Attempt k/N" each time a retry starts.
async fn with_progress<T>(orchestrator: &Orchestrator, work: impl Future<Output = T>) -> T {
    let mut progress = orchestrator.subscribe();
    let printer = async {
        while progress.changed().await.is_ok() {
            if let Some(label) = progress.borrow_and_update().label() {
                println!("{}", label.bright_black());
            }
        }
    };

    tokio::pin!(work);
    tokio::select! {
        output = &mut work => output,
        () = printer => work.await,
    }
}

/// Asks for the three form fields. `None` if the user pressed CTRL-C.
fn prompt_draft(rl: &mut ReplEditor) -> Result<Option<UserInputsDraft>> {
    let Some(user_thoughts) = prompt(rl, "How are you feeling? ")? else {
        return Ok(None);
    };
    let Some(relationship) = prompt_choice(rl, "Who did you lose?", &Relationship::options())?
    else {
        return Ok(None);
    };
    let Some(cause_of_loss) =
        prompt_choice(rl, "What was the cause of loss?", &CauseOfLoss::options())?
    else {
        return Ok(None);
    };

    Ok(Some(UserInputsDraft {
        user_thoughts,
        relationship,
        cause_of_loss,
    }))
}

/// Outer `None` means cancelled; inner `None` means nothing valid was picked.
fn prompt_choice<T: Copy + Display>(
    rl: &mut ReplEditor,
    question: &str,
    options: &[T],
) -> Result<Option<Option<T>>> {
    println!("{}", question.bright_magenta());
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {option}", index + 1);
    }
    Ok(prompt(rl, "> ")?.map(|answer| parse_choice(&answer, options)))
}

fn prompt(rl: &mut ReplEditor, label: &str) -> Result<Option<String>> {
    match rl.readline(label) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
