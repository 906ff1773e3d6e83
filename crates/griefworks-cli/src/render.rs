use colored::Colorize;

use griefworks_application::{Notice, Severity};
use griefworks_core::guide::{PersonalizedContentResponse, ToolSelection};
use griefworks_core::schedule::ScheduleResponse;
use griefworks_core::sentiment::{Mood, SentimentResponse};

pub fn notice(notice: &Notice) {
    let title = match notice.severity {
        Severity::Success => notice.title.bright_green().bold(),
        Severity::Info => notice.title.yellow().bold(),
        Severity::Error => notice.title.red().bold(),
    };
    println!("{title}: {}", notice.description);
}

pub fn mood(mood: Mood) {
    println!("{} {}", "Mood:".bright_magenta().bold(), format!("{mood} {}", mood.emoji()).bold());
}

pub fn sentiment(response: &SentimentResponse) {
    mood(response.mood);
    for category in response.categories() {
        println!("{}", category.title.bright_cyan());
        println!("  {}", category.description.bright_black());
    }
}

/// Numbered tool list; the numbers are what `guide <n>` takes.
pub fn tools(selections: &[ToolSelection]) {
    let mut current_title = None;
    for (index, selection) in selections.iter().enumerate() {
        if current_title != Some(selection.title.as_str()) {
            println!("{}", selection.title.bright_cyan().bold());
            println!("  {}", selection.description.bright_black());
            current_title = Some(selection.title.as_str());
        }
        println!("  {:>2}. {}", index + 1, selection.name);
    }
}

pub fn schedule(schedule: &ScheduleResponse) {
    if let Some(date) = &schedule.date {
        println!("{}", date.bright_black());
    }
    for (period, activities) in schedule.periods() {
        if activities.is_empty() {
            continue;
        }
        println!("{}", period.to_string().bright_cyan().bold());
        for activity in activities {
            println!("  {}  {}", activity.time_frame.yellow(), activity.activity);
            if !activity.description.is_empty() {
                println!("      {}", activity.description.bright_black());
            }
        }
    }
}

pub fn content(content: &PersonalizedContentResponse, selected_tool: Option<&str>) {
    if let Some(tool) = selected_tool {
        println!("{} {}", "Tool:".bright_magenta().bold(), tool);
    }

    for card in &content.motivation_cards {
        println!("  {} {}", "*".bright_magenta(), card);
    }

    let song = &content.song_recommendation;
    println!();
    println!("{} {}", "Song:".bright_magenta().bold(), song.title.bold());
    println!("  {}", song.reason);
    println!(
        "  {}",
        song.youtube_embed_url()
            .unwrap_or_else(|| song.url.clone())
            .blue()
            .underline()
    );

    println!();
    println!("{}", format!("\"{}\"", content.essay.quote).italic());
    for (heading, text) in content.essay.sections() {
        println!();
        println!("{}", heading.bright_cyan().bold());
        for line in text.lines() {
            println!("  {line}");
        }
    }
}
