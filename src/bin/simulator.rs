use crossterm::style::{Color, Stylize};
use keyword_core::clipboard::{copy_all, copy_to_clipboard};
use keyword_core::config::{parse_count, Config};
use keyword_core::{logging, KeywordClass, Session, SortOrder};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const VISIBLE_ROWS: usize = 25;

const IDLE_STATUS: &str = "No results yet. Enter a seed keyword.";

struct Repl {
    session: Session,
    category: String,
    count: usize,
    default_category: String,
    default_count: usize,
    export_path: PathBuf,
    status: String,
}

impl Repl {
    fn new(session: Session, config: &Config) -> Self {
        Self {
            session,
            category: config.default_category.clone(),
            count: config.default_count,
            default_category: config.default_category.clone(),
            default_count: config.default_count,
            export_path: config.export_path.clone(),
            status: IDLE_STATUS.to_string(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(&config.logging.level);

    let mut repl = Repl::new(Session::from_config(&config)?, &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_ui(&repl, &mut stdout)?;

    for line in stdin.lock().lines() {
        let input = line?;
        let cmd = input.trim();
        if cmd == "exit" {
            break;
        }
        repl.status = handle_command(&mut repl, cmd);
        print_ui(&repl, &mut stdout)?;
    }
    Ok(())
}

/// Runs one input line and returns the status message to show.
fn handle_command(repl: &mut Repl, cmd: &str) -> String {
    let (name, arg) = match cmd.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (cmd, ""),
    };

    match name {
        "" => repl.status.clone(),
        ":cat" => {
            repl.category = arg.to_string();
            format!("Category set to '{}'", repl.category)
        }
        ":count" => {
            repl.count = parse_count(arg);
            format!("Count set to {}", repl.count)
        }
        ":sort" => match arg.parse::<SortOrder>() {
            Ok(order) => {
                repl.session.sort = order;
                format!("Sorted by {}", order)
            }
            Err(e) => e,
        },
        ":filter" => {
            repl.session.filter = arg.to_string();
            format!("{} match '{}'", repl.session.visible().len(), arg)
        }
        ":copy" => match nth_visible(repl, arg) {
            Some(phrase) => match copy_to_clipboard(&phrase) {
                Ok(()) => "Copied to clipboard".to_string(),
                Err(e) => format!("Copy failed: {}", e),
            },
            None => format!("No suggestion number '{}'", arg),
        },
        ":tag" => match nth_visible(repl, arg) {
            Some(phrase) => {
                if repl.session.add_tag(&phrase) {
                    "Tag added".to_string()
                } else {
                    "Tag already listed".to_string()
                }
            }
            None => format!("No suggestion number '{}'", arg),
        },
        ":copyall" => match copy_all(repl.session.results()) {
            Ok(()) => "All keywords copied".to_string(),
            Err(e) => e.to_string(),
        },
        ":export" => {
            let path = if arg.is_empty() {
                repl.export_path.clone()
            } else {
                PathBuf::from(arg)
            };
            match repl.session.save_csv(&path) {
                Ok(()) => format!("CSV exported to {}", path.display()),
                Err(e) => e.to_string(),
            }
        }
        ":clear" => {
            repl.session.clear();
            repl.category = repl.default_category.clone();
            repl.count = repl.default_count;
            IDLE_STATUS.to_string()
        }
        _ => {
            let category = repl.category.clone();
            match repl.session.generate(cmd, &category, repl.count) {
                Ok(results) => format!("{} suggestions generated", results.len()),
                Err(e) => e.to_string(),
            }
        }
    }
}

/// 1-based index into the current view.
fn nth_visible(repl: &Repl, arg: &str) -> Option<String> {
    let n: usize = arg.parse().ok()?;
    let visible = repl.session.visible();
    visible.get(n.checked_sub(1)?).map(|kw| kw.phrase.clone())
}

fn score_color(class: KeywordClass) -> Color {
    match class {
        KeywordClass::High => Color::Green,
        KeywordClass::Medium => Color::Yellow,
        KeywordClass::Low => Color::Red,
    }
}

fn print_ui(repl: &Repl, stdout: &mut io::Stdout) -> io::Result<()> {
    // Basic clear screen for simplicity
    write!(stdout, "\x1B[2J\x1B[1;1H")?;
    writeln!(stdout, "Keyword Finder Simulator")?;
    writeln!(stdout, "---------------------------------------------------------------")?;
    writeln!(stdout, "Type a seed and press [Enter] to generate. ':cat X', ':count N',")?;
    writeln!(stdout, "':sort MODE', ':filter Q', ':copy N', ':tag N', ':copyall',")?;
    writeln!(stdout, "':export [PATH]', ':clear'. 'exit' to quit.\n")?;

    let session = &repl.session;
    if session.seed().is_empty() {
        writeln!(stdout, "Suggestions")?;
    } else {
        writeln!(stdout, "Suggestions for: \"{}\"", session.seed())?;
    }
    writeln!(
        stdout,
        "category: '{}'  count: {}  sort: {}  filter: '{}'",
        repl.category, repl.count, session.sort, session.filter
    )?;
    writeln!(stdout, "{}\n", repl.status.as_str().italic())?;

    let visible = session.visible();
    for (i, kw) in visible.iter().take(VISIBLE_ROWS).enumerate() {
        writeln!(
            stdout,
            "  :{:<3} {}  {}  ({} est. searches • {} words)",
            i + 1,
            format!("{:>2}", kw.opportunity).with(score_color(kw.class)),
            kw.phrase,
            kw.estimated_volume,
            kw.word_count
        )?;
    }
    if visible.len() > VISIBLE_ROWS {
        writeln!(stdout, "  … {} more", visible.len() - VISIBLE_ROWS)?;
    }

    if !session.results().is_empty() {
        if let Some(top) = session.top_suggestion() {
            writeln!(stdout, "\nTop suggestion: {}", top.phrase.as_str().bold())?;
        }
        writeln!(stdout, "Title ideas:")?;
        for idea in session.title_ideas() {
            writeln!(stdout, "  • {}", idea)?;
        }
        writeln!(stdout, "Tags: {}", session.tags().join(", "))?;
    }

    write!(stdout, "\n> ")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyword_core::KeywordGenerator;

    fn repl() -> Repl {
        Repl::new(Session::new(KeywordGenerator::default()), &Config::default())
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut repl = repl();
        handle_command(&mut repl, ":cat home decor");
        handle_command(&mut repl, ":count 40");
        handle_command(&mut repl, ":filter gift");
        handle_command(&mut repl, "soy candle");
        assert_eq!(repl.session.results().len(), 40);

        let status = handle_command(&mut repl, ":clear");
        assert_eq!(status, IDLE_STATUS);
        assert_eq!(repl.category, "");
        assert_eq!(repl.count, 120);
        assert!(repl.session.results().is_empty());
        assert!(repl.session.filter.is_empty());
    }

    #[test]
    fn test_empty_results_refuse_copy_and_export() {
        let mut repl = repl();
        assert_eq!(handle_command(&mut repl, ":copyall"), "No suggestions to copy");
        assert_eq!(handle_command(&mut repl, ":export"), "No suggestions to export");
    }

    #[test]
    fn test_tag_by_index() {
        let mut repl = repl();
        handle_command(&mut repl, ":sort score-desc");
        handle_command(&mut repl, "mug");
        assert_eq!(handle_command(&mut repl, ":tag 0"), "No suggestion number '0'");

        let first = repl.session.visible()[0].phrase.clone();
        let tag = keyword_core::view::tag_for(&first);
        let before = repl.session.tags().contains(&tag);
        let status = handle_command(&mut repl, ":tag 1");
        if before {
            assert_eq!(status, "Tag already listed");
        } else {
            assert_eq!(status, "Tag added");
        }
        assert!(repl.session.tags().contains(&tag));
    }
}
