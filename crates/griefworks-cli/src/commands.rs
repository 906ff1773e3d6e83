use std::fmt::Display;

/// One line typed at the REPL prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Analyze,
    Mood,
    Schedule,
    Tools,
    /// 1-based index into the `tools` listing.
    Guide(usize),
    Content,
    Reset,
    Help,
    Quit,
}

pub const COMMAND_NAMES: &[&str] = &[
    "analyze", "mood", "schedule", "tools", "guide", "content", "reset", "help", "quit",
];

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = match words.next()? {
            "analyze" => Command::Analyze,
            "mood" => Command::Mood,
            "schedule" => Command::Schedule,
            "tools" => Command::Tools,
            "guide" => {
                let index = words.next()?.parse().ok().filter(|&n: &usize| n > 0)?;
                Command::Guide(index)
            }
            "content" => Command::Content,
            "reset" => Command::Reset,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return None,
        };
        // Trailing words are only allowed after `guide <n>`.
        words.next().is_none().then_some(command)
    }
}

/// Picks an option by its 1-based number or by its name (any case).
pub fn parse_choice<T: Copy + Display>(input: &str, options: &[T]) -> Option<T> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return number.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options
        .iter()
        .find(|option| option.to_string().eq_ignore_ascii_case(input))
        .copied()
}

pub const HELP: &str = "\
analyze      Share how you are feeling and get your mood analysed
mood         Show the last analysed mood
schedule     Generate a daily schedule
tools        List the grief support tools for your mood
guide <n>    Get personalized content for tool number n
content      Show the last personalized content
reset        Forget everything from this session
help         Show this help
quit         Exit";

#[cfg(test)]
mod tests {
    use super::*;
    use griefworks_core::inputs::Relationship;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("analyze"), Some(Command::Analyze));
        assert_eq!(Command::parse("  tools "), Some(Command::Tools));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse("dance"), None);
        assert_eq!(Command::parse("mood now"), None);
    }

    #[test]
    fn test_parse_guide_index() {
        assert_eq!(Command::parse("guide 3"), Some(Command::Guide(3)));
        assert_eq!(Command::parse("guide"), None);
        assert_eq!(Command::parse("guide 0"), None);
        assert_eq!(Command::parse("guide two"), None);
    }

    #[test]
    fn test_parse_choice_by_number_or_name() {
        let options = Relationship::options();
        assert_eq!(parse_choice("1", &options), Some(Relationship::Parent));
        assert_eq!(parse_choice("friend", &options), Some(Relationship::Friend));
        assert_eq!(parse_choice("0", &options), None);
        assert_eq!(parse_choice("42", &options), None);
        assert_eq!(parse_choice("", &options), None);
    }
}
