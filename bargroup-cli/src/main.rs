mod paths;
mod script;
mod signals;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bargroup::Group;
use bargroup::GroupError;
use bargroup::config::{Axis, ConfigError, GroupConfig};
use bargroup::drawer::VisibilityChange;
use clap::Parser;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::time::{Instant, sleep_until};

use script::Command;
use signals::RefreshSignal;

/// Used when no configuration file exists: a hover drawer that hides after
/// two idle seconds and listens on SIGRTMIN+1.
const DEFAULT_CONFIG: &str = r#"{ "drawer": {}, "interval": 2, "signal": 1 }"#;

/// Drive a status-bar group from a scripted event stream.
///
/// Reads commands from stdin (`enter`, `leave`, `leave-inferior`,
/// `click <button>`, `refresh <code>`, `sleep <ms>`, `add <label>`, `state`,
/// `quit`) and prints every visibility change as a JSON line.
#[derive(Debug, Parser)]
#[command(name = "bargroup", version)]
struct Args {
    /// Group configuration file (JSON module block)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The enclosing bar is vertical
    #[arg(long)]
    vertical: bool,

    /// Module name of the group
    #[arg(long, default_value = "group/demo")]
    name: String,

    /// Instance id of the group
    #[arg(long, default_value = "")]
    id: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Group(#[from] GroupError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("bargroup.log"));
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(LevelFilter::Debug, Config::default(), file).is_err() {
                eprintln!("Logger already initialized");
            }
        }
        Err(e) => eprintln!("Logging disabled, cannot create {}: {}", path.display(), e),
    }
}

fn load_config(args: &Args) -> Result<GroupConfig, CliError> {
    let parent = Axis::from_vertical(args.vertical);
    let path = args.config.clone().or_else(paths::config_file);

    let text = match path {
        Some(path) if args.config.is_some() || path.exists() => read_config(&path)?,
        _ => {
            info!("no configuration file, using built-in drawer");
            DEFAULT_CONFIG.to_string()
        }
    };
    Ok(GroupConfig::from_json_str(&args.name, &args.id, &text, parent)?)
}

fn read_config(path: &Path) -> Result<String, CliError> {
    info!("loading group configuration from {}", path.display());
    fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn print_change(change: VisibilityChange) {
    match serde_json::to_string(&change) {
        Ok(line) => println!("{}", line),
        Err(e) => warn!("cannot encode visibility change: {}", e),
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let mut signal = RefreshSignal::listen(config.signal_code())?;
    let mut group: Group<String> = Group::new(config, Arc::new(print_change))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    drive(&mut group, &mut lines, &mut signal).await?;

    group.shutdown().await;
    Ok(())
}

/// Replay script lines until EOF, `quit` or ctrl-c. A `sleep` only pauses
/// reading the script; signals and ctrl-c are still served meanwhile.
async fn drive<R>(
    group: &mut Group<String>,
    lines: &mut Lines<R>,
    signal: &mut RefreshSignal,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut resume_at: Option<Instant> = None;
    loop {
        tokio::select! {
            line = lines.next_line(), if resume_at.is_none() => {
                let Some(line) = line? else { break };
                match script::parse_line(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Sleep(duration))) => resume_at = Some(Instant::now() + duration),
                    Ok(Some(command)) => apply(group, command),
                    Ok(None) => {}
                    Err(e) => warn!("skipping script line '{}': {}", line, e),
                }
            }
            () = sleep_until(resume_at.unwrap_or_else(Instant::now)), if resume_at.is_some() => {
                resume_at = None;
            }
            Some(code) = signal.recv() => {
                info!("refresh signal {}", code);
                group.refresh(code);
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

fn apply(group: &mut Group<String>, command: Command) {
    match command {
        Command::Pointer(event) => {
            group.handle_pointer(event);
        }
        Command::Click(event) => {
            group.handle_click(event);
        }
        Command::Refresh(code) => {
            if !group.refresh(code) {
                info!("refresh code {} does not address '{}'", code, group.name());
            }
        }
        Command::State => match serde_json::to_string(&group.reveal_state()) {
            Ok(state) => println!("{{\"current\":{}}}", state),
            Err(e) => warn!("cannot encode state: {}", e),
        },
        Command::Add(label) => {
            let placement = group.add_widget(label);
            match serde_json::to_string(&placement) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!("cannot encode placement: {}", e),
            }
        }
        // Handled by the script loop
        Command::Sleep(_) | Command::Quit => {}
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use std::time::Duration;

    use bargroup::config::{AutoHide, DrawerConfig};
    use bargroup::drawer::RevealState;
    use tokio::sync::mpsc;

    use super::*;

    const CODE: i32 = 2;

    #[tokio::test]
    async fn test_signal_served_while_script_sleeps() {
        let config = GroupConfig::new("group/script", Axis::Horizontal)
            .drawer(DrawerConfig::new())
            .auto_hide(AutoHide::Disabled)
            .signal(CODE);
        let (tx, mut changes) = mpsc::unbounded_channel();
        let view = move |change: VisibilityChange| {
            let _ = tx.send(change);
        };
        let mut group: Group<String> = Group::new(config, Arc::new(view)).unwrap();
        let mut signal = RefreshSignal::listen(Some(CODE)).unwrap();
        let mut lines = BufReader::new(&b"sleep 60000\nquit\n"[..]).lines();

        let script = drive(&mut group, &mut lines, &mut signal);
        let raise = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            unsafe { libc::raise(libc::SIGRTMIN() + CODE) };
            tokio::time::timeout(Duration::from_secs(5), changes.recv()).await
        };
        let change = tokio::select! {
            _ = script => panic!("script finished before the sleep elapsed"),
            change = raise => change,
        };

        assert_eq!(
            change,
            Ok(Some(VisibilityChange::new(RevealState::Revealed)))
        );
        assert_eq!(group.reveal_state(), RevealState::Revealed);
    }
}
