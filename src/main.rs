mod browser;
mod clock;
mod config;
mod error;
mod models;
mod storage;
mod ui;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::browser::JokeBrowser;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::{Config, default_config_path, load_config, load_config_file};
use crate::error::{AppError, Result};
use crate::models::{JokeRecord, ViewMode};
use crate::storage::load_jokes;
use crate::ui::view::{EMPTY_MESSAGE, FEATURED_MARK};
use crate::ui::{App, render};

/// Browse bilingual Japanese wordplay jokes in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Load jokes from this JSON file instead of the bundled dataset
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Read configuration from this TOML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial search text
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Initial view
    #[arg(long, value_enum)]
    view: Option<CliViewMode>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Print the visible jokes and exit instead of starting the TUI
    #[arg(long)]
    print: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliViewMode {
    Featured,
    Newest,
    All,
}

impl From<CliViewMode> for ViewMode {
    fn from(mode: CliViewMode) -> Self {
        match mode {
            CliViewMode::Featured => ViewMode::Featured,
            CliViewMode::Newest => ViewMode::Newest,
            CliViewMode::All => ViewMode::All,
        }
    }
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// 获取数据目录路径 (~/.local/share/jlpt-jokes/)
fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(AppError::NoDataDir)?
        .join("jlpt-jokes");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 初始化日志：TUI 占用终端，日志按天写入数据目录下的 logs/
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = get_data_dir()?.join("logs");
    let file_appender = tracing_appender::rolling::daily(&log_dir, "jlpt-jokes.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jlpt_jokes=info"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging()?;
    info!("jlpt-jokes v{} starting", env!("CARGO_PKG_VERSION"));

    let result = run(args);
    if let Err(e) = &result {
        error!(err = %e, "exiting with error");
    }
    result
}

/// 命令行参数与配置合并后的启动设置
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    dataset: Option<PathBuf>,
    view_mode: ViewMode,
    newest_window_days: u32,
    query: Option<String>,
    today: Option<NaiveDate>,
    print: bool,
}

impl Settings {
    /// 命令行 > 配置文件 > 默认值
    fn merge(args: Args, config: Config) -> Self {
        Self {
            dataset: args.data.or(config.dataset),
            view_mode: args.view.map(ViewMode::from).unwrap_or(config.default_view),
            newest_window_days: config.newest_window_days,
            query: args.query,
            today: args.today,
            print: args.print,
        }
    }

    fn browser(&self, jokes: Vec<JokeRecord>) -> JokeBrowser {
        let mut browser = JokeBrowser::new(jokes)
            .with_newest_window(self.newest_window_days)
            .with_view_mode(self.view_mode);
        if let Some(query) = &self.query {
            browser.update_search_text(query.as_str());
        }
        browser
    }

    fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => {
                info!(today = %date, "clock pinned");
                Box::new(FixedClock(date))
            }
            None => Box::new(SystemClock),
        }
    }
}

/// 用户指定的配置文件必须存在，默认位置缺失时使用默认值
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => match default_config_path() {
            Some(path) => load_config(&path),
            None => Ok(Config::default()),
        },
    }
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let settings = Settings::merge(args, config);

    let jokes = load_jokes(settings.dataset.as_deref())?;
    let browser = settings.browser(jokes);
    let clock = settings.clock();

    if settings.print {
        return print_jokes(&mut io::stdout().lock(), &browser, clock.as_ref());
    }

    let mut app = App::new(browser, clock);

    // panic 时先恢复终端
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press
                && ui::handle_key_event(app, key.code)
            {
                break;
            }
        }
    }
    Ok(())
}

/// 非交互模式：输出当前可见的笑话，精选标记规则与 TUI 一致
fn print_jokes(out: &mut impl Write, browser: &JokeBrowser, clock: &dyn Clock) -> Result<()> {
    let jokes = browser.visible_jokes(clock);

    if jokes.is_empty() {
        writeln!(out, "{}", EMPTY_MESSAGE)?;
        return Ok(());
    }

    let show_mark = !browser.is_searching();
    for joke in jokes {
        let mark = if show_mark && joke.featured {
            FEATURED_MARK
        } else {
            " "
        };
        writeln!(out, "{} {}", mark, joke.english)?;
        writeln!(out, "  {}", joke.punchline)?;
        writeln!(out, "  {}", joke.explanation)?;
        writeln!(out)?;
    }
    Ok(())
}
