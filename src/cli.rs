// src/cli.rs
use std::{
    env,
    error::Error,
    path::{Path, PathBuf},
};

use crate::{
    config::{
        consts::{DEFAULT_FEEDS_FILE, MAIN_BUTTONS, SIDEBAR_BUTTONS},
        options::{AppOptions, ExportType, FeedConfig, LoadMode},
    },
    controller::{ButtonGroup, Controller},
    error::FeedError,
    file,
    keys::FeedKey,
    loader,
    progress::Progress,
};

#[derive(Debug, Default)]
pub struct CliArgs {
    pub feeds: Option<PathBuf>,
    pub options: AppOptions,
    pub list_feeds: bool,
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    args.options.feeds = match &args.feeds {
        Some(p) => FeedConfig::load(p)?,
        None => FeedConfig::load_or_default(Path::new(DEFAULT_FEEDS_FILE))?,
    };

    if args.list_feeds {
        for f in args.options.feeds.feeds() {
            println!("{} = {}", f.key, f.url);
        }
        return Ok(());
    }

    export(&args.options)
}

fn export(opts: &AppOptions) -> Result<(), Box<dyn Error>> {
    let mut prog = CliProgress::default();
    let data = loader::load_blocking(&opts.feeds, &opts.net, Some(&mut prog))?;

    let sidebar_buttons = ButtonGroup::new(SIDEBAR_BUTTONS);
    let main_buttons = ButtonGroup::new(MAIN_BUTTONS);
    let out = opts.export.out_path();

    match opts.export.export_type {
        ExportType::Site => {
            let written = file::write_site(&data, &sidebar_buttons, &main_buttons, &out)?;
            eprintln!("Wrote {} pages to {}", written.len(), out.display());
        }
        ExportType::SinglePage => {
            let mut ctrl = Controller::mount(&data, sidebar_buttons, main_buttons);
            if let Some(k) = &opts.export.sidebar_key {
                if !ctrl.activate_sidebar_key(&data, k) {
                    return Err(format!("No sidebar button with key: {k}").into());
                }
            }
            if let Some(k) = &opts.export.main_key {
                if !ctrl.activate_main_key(&data, k) {
                    return Err(format!("No main button with key: {k}").into());
                }
            }
            let path = file::write_page(&ctrl, &out)?;
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--feeds" => out.feeds = Some(PathBuf::from(args.next().ok_or("Missing value for --feeds")?)),
            "--sidebar" => out.options.export.sidebar_key = Some(args.next().ok_or("Missing value for --sidebar")?),
            "--main" => out.options.export.main_key = Some(args.next().ok_or("Missing value for --main")?),
            "-o" | "--out" => out.options.export.set_out(args.next().ok_or("Missing output path")?),
            "--site" => out.options.export.export_type = ExportType::Site,
            "--parallel" => out.options.net.mode = LoadMode::Concurrent,
            "--timeout" => {
                let v = args.next().ok_or("Missing value for --timeout")?;
                let secs: u64 = v.parse().map_err(|_| format!("Bad timeout: {v}"))?;
                if secs == 0 { return Err("Timeout must be at least 1 second".into()); }
                out.options.net.timeout_secs = Some(secs);
            }
            "--list-feeds" => out.list_feeds = true,
            "-h" | "--help" => out.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if out.options.export.export_type == ExportType::Site
        && (out.options.export.sidebar_key.is_some() || out.options.export.main_key.is_some())
    {
        return Err("--sidebar/--main select one page; they can't be combined with --site".into());
    }
    Ok(out)
}

/// Progress lines on stderr; stdout stays clean for `--list-feeds`.
#[derive(Default)]
struct CliProgress {
    total: usize,
    seen: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Loading {total} feeds…");
    }
    fn item_done(&mut self, key: FeedKey, rows: usize) {
        self.seen += 1;
        eprintln!("[{}/{}] {key}: {rows} rows", self.seen, self.total);
    }
    fn item_failed(&mut self, key: FeedKey, err: &FeedError) {
        self.seen += 1;
        eprintln!("[{}/{}] Couldn't load {key} sheet: {err}", self.seen, self.total);
    }
}
