use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use todo::api::{CmdMessage, CmdResult, MessageLevel, TodoApi};
use todo::config::TodoConfig;
use todo::dates::parse_date;
use todo::error::{Result, TodoError};
use todo::model::{now, RepeatPeriod, TodoItem};
use todo::store::fs::FileStore;
use todo::store::DataStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodoApi<FileStore>,
    config_dir: PathBuf,
    today: NaiveDate,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    // The daily refresh runs before every command, mirroring the schedule
    // guarantees: at most one full scan per calendar day.
    ctx.api.refresh(ctx.today, false)?;

    match cli.command {
        Some(Commands::Add { event }) => handle_simple(ctx.api.add(&event)?),
        Some(Commands::Done { n }) => handle_simple(ctx.api.done(n, now())?),
        Some(Commands::Redo { n }) => handle_simple(ctx.api.redo(n, now())?),
        Some(Commands::Edit { n, event }) => handle_simple(ctx.api.edit(n, &event)?),
        Some(Commands::Delete { n }) => handle_simple(ctx.api.delete(n)?),
        Some(Commands::Clean) => handle_simple(ctx.api.clean()?),
        Some(Commands::Repeat {
            n,
            every,
            from,
            stop,
        }) => handle_repeat(&mut ctx, n, every, from, stop),
        Some(Commands::Refresh { force }) => {
            let result = ctx.api.refresh(ctx.today, force)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Where) => handle_where(&ctx),
        None => handle_list(&ctx, cli.all),
    }
}

fn init_context() -> Result<AppContext> {
    // TODO_CONFIG_DIR overrides the platform config dir (integration tests
    // point it at a temp dir).
    let config_dir = match std::env::var_os("TODO_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "todo", "todo")
            .ok_or_else(|| TodoError::Store("Could not determine config dir".to_string()))?
            .config_dir()
            .to_path_buf(),
    };

    let config = TodoConfig::load(&config_dir)?;
    let store = FileStore::new(config.db_path.clone());
    let api = TodoApi::new(store);

    Ok(AppContext {
        api,
        config_dir,
        today: Local::now().date_naive(),
    })
}

fn handle_simple(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_repeat(
    ctx: &mut AppContext,
    n: usize,
    every: Option<String>,
    from: Option<String>,
    stop: bool,
) -> Result<()> {
    let result = if stop {
        ctx.api.stop_schedule(n, now())?
    } else {
        let every = every.ok_or_else(|| {
            TodoError::Api("Use --every week|month|year, or --stop.".to_string())
        })?;
        let period: RepeatPeriod = every.parse()?;
        let start = match from {
            Some(s) => parse_date(&s)?,
            None => ctx.today,
        };
        ctx.api.make_schedule(n, period, start, ctx.today)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_where(ctx: &AppContext) -> Result<()> {
    println!("[config] {}", TodoConfig::config_path(&ctx.config_dir).display());
    if let Some(db_path) = ctx.api.store().path() {
        println!("[database] {}", db_path.display());
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, all: bool) -> Result<()> {
    let result = ctx.api.list()?;

    if result.todo.is_empty() && result.done.is_empty() && result.scheduled.is_empty() {
        println!("There's no todo item.");
        println!("Use 'todo add ...' to add a todo item.");
        println!("Use 'todo --help' to get more information.");
        return Ok(());
    }

    if let Some(motto) = &result.motto {
        println!("\n{}", motto.dimmed());
    }

    print_section("Todo", &result.todo, |item| item.event.clone());
    if result.todo.is_empty() && !all {
        println!("\nTry 'todo -a' to include completed items.");
    }

    if all || !result.done.is_empty() {
        print_section("Completed", &result.done, |item| item.event.clone());
    }
    if all {
        print_section("Schedule", &result.scheduled, schedule_line);
    }
    println!();
    Ok(())
}

const EVENT_WIDTH: usize = 60;

fn print_section<F>(title: &str, items: &[(usize, TodoItem)], render: F)
where
    F: Fn(&TodoItem) -> String,
{
    println!("\n{}\n------------", title.bold());
    if items.is_empty() {
        println!("(none)");
        return;
    }
    for (idx, item) in items {
        let line = truncate_to_width(&render(item), EVENT_WIDTH);
        println!("{} {}", format!("{}.", idx + 1).yellow(), line);
    }
}

/// `every Monday [2024-06-10] water plants` for weekly items,
/// `every month [2024-07-01] pay rent` otherwise.
fn schedule_line(item: &TodoItem) -> String {
    let every = match item.repeat {
        RepeatPeriod::Week => parse_date(&item.start_date)
            .map(|d| d.format("%A").to_string())
            .unwrap_or_else(|_| item.repeat.to_string()),
        other => other.to_string(),
    };
    format!("every {} [{}] {}", every, item.next_date, item.event)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
