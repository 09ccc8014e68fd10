extern crate tripleview as lib;

use flexi_logger::{FileSpec, Logger};
use lib::events::Dispatcher;
use lib::ui::app::App;
use nix::sys::termios;
use std::io::{stdout, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tv",
    about = "TripleView - a three-month calendar with Chinese holidays and an AI monthly insight."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    let mut app = App::new(&config);

    if args.show {
        let mut out = stdout();
        app.show(&mut out)?;
        return Ok(());
    }

    const TTY_FD: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(TTY_FD).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch back to the main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(TTY_FD, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("TripleView ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let dispatcher = Dispatcher::from_config(&config);

    let stdout = stdout().into_raw_mode()?;
    let mut screen = AlternateScreen::from(stdout);
    write!(screen, "{}", termion::cursor::Hide)?;

    let result = app.run(dispatcher, &mut screen);

    write!(screen, "{}", termion::cursor::Show)?;
    screen.flush()?;

    result
}
