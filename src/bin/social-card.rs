use std::{
    io::{BufRead, Write},
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
};

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;
use social_card::{
    ComposeConfig, CompositionRequest,
    input::{Prompter, parse_font_size, parse_positive_u32},
};

#[derive(Parser, Debug)]
#[command(name = "social-card", version, about = "Compose a social-media preview image")]
struct Cli {
    /// JSON file with default options (canvas size, font sizes, fonts, background dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background image; bare names are looked up in the config's background dir.
    #[arg(long)]
    background: Option<String>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<String>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<String>,

    /// Domain label drawn bottom-right.
    #[arg(long)]
    domain: Option<String>,

    /// Font size of the domain label.
    #[arg(long)]
    domain_font_size: Option<String>,

    /// Title drawn top-left.
    #[arg(long)]
    title: Option<String>,

    /// Font size of the title.
    #[arg(long)]
    title_font_size: Option<String>,

    /// Output PNG path. Overwritten if it exists.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Never prompt; missing values fall back to the config or fail.
    #[arg(long)]
    no_prompt: bool,

    /// Print diagnostics about the fonts in use (path + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,

    /// Log pipeline stages to stderr.
    #[arg(long, short)]
    verbose: bool,
}

const PROMPTING: u8 = 0;
const COMPOSING: u8 = 1;
const CANCELLED: u8 = 2;

/// Watches SIGINT/SIGTERM on a dedicated thread.
///
/// While the user is still answering prompts a signal ends the process at once with status 0
/// and nothing written. Once composing has started the card is finished first.
#[derive(Clone, Debug)]
struct Interrupts {
    phase: Arc<AtomicU8>,
}

impl Interrupts {
    fn install() -> anyhow::Result<Self> {
        use signal_hook::{
            consts::{SIGINT, SIGTERM},
            iterator::Signals,
        };

        let mut signals = Signals::new([SIGINT, SIGTERM]).context("install signal handler")?;
        let phase = Arc::new(AtomicU8::new(PROMPTING));
        let watched = Arc::clone(&phase);
        std::thread::Builder::new()
            .name("signals".to_string())
            .spawn(move || {
                for sig in signals.forever() {
                    let cancelled = watched
                        .compare_exchange(PROMPTING, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
                        .is_ok();
                    if cancelled {
                        eprintln!();
                        eprintln!("- Ctrl+C pressed, nothing was written");
                        std::process::exit(0);
                    }
                    tracing::warn!(signal = sig, "finishing the current image before exiting");
                }
            })
            .context("spawn signal thread")?;
        Ok(Self { phase })
    }

    /// Leave the prompting phase. `false` when a signal got there first.
    fn begin_compose(&self) -> bool {
        self.phase
            .compare_exchange(PROMPTING, COMPOSING, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let interrupts = Interrupts::install()?;

    let config = match &cli.config {
        Some(path) => ComposeConfig::from_path(path)?,
        None => ComposeConfig::default(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let req = gather_request(&cli, &config, &mut prompter)?;
    drop(prompter);

    if !interrupts.begin_compose() {
        // The signal thread reports and exits.
        loop {
            std::thread::park();
        }
    }

    if cli.dump_fonts {
        dump_font_diagnostics(&req)?;
    }

    social_card::compose(&req)?;
    println!(
        "All done! Check for your new image at {}",
        req.output_path.display()
    );
    Ok(())
}

/// Resolve every field from flags, then prompts (unless `--no-prompt`), then config defaults.
fn gather_request<R: BufRead, W: Write>(
    cli: &Cli,
    config: &ComposeConfig,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<CompositionRequest> {
    let interactive = !cli.no_prompt;
    if interactive {
        prompter.say("Welcome to the Social Image Maker!")?;
        prompter.say("------------------------------------")?;
        prompter.say(&format!(
            "For best results, ensure that your images are {}x{}.",
            config.canvas_width, config.canvas_height
        ))?;
    }

    let mut answer = |flag: &Option<String>,
                      message: &str,
                      default: Option<String>|
     -> anyhow::Result<Option<String>> {
        if let Some(v) = flag {
            return Ok(Some(v.clone()));
        }
        if !interactive {
            return Ok(default);
        }
        let a = prompter.ask(message, default.as_deref())?;
        Ok(Some(a))
    };

    let background = answer(
        &cli.background,
        &format!(
            "Provide the image to set as the base. Put this in the '{}' folder.",
            config.background_dir.display()
        ),
        None,
    )?
    .filter(|s| !s.trim().is_empty())
    .context("a background image is required")?;

    let width = answer(
        &cli.width,
        "Enter a size for the image.\nFirst, width:",
        Some(config.canvas_width.to_string()),
    )?
    .unwrap_or_default();
    let height = answer(
        &cli.height,
        "Then, height:",
        Some(config.canvas_height.to_string()),
    )?
    .unwrap_or_default();

    let domain = answer(
        &cli.domain,
        "Provide the domain text located in the lower right of the image.",
        config.domain_text.clone(),
    )?
    .unwrap_or_default();
    let domain_font_size = answer(
        &cli.domain_font_size,
        "What font size should I make this domain text?",
        Some(config.domain_font_size.to_string()),
    )?
    .unwrap_or_default();

    let title = answer(&cli.title, "Provide a title for the main text in image.", None)?
        .unwrap_or_default();
    let title_font_size = answer(
        &cli.title_font_size,
        "What font size should I make this title text?",
        Some(config.title_font_size.to_string()),
    )?
    .unwrap_or_default();

    let out = match &cli.out {
        Some(p) => Some(p.clone()),
        None => answer(
            &None,
            "Provide a path and name for your image. Can just provide a name with extension.",
            None,
        )?
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from),
    }
    .context("an output path is required")?;

    let mut req = config.request(config.resolve_background(&background), domain, title, out);
    req.canvas_width = parse_positive_u32("width", &width)?;
    req.canvas_height = parse_positive_u32("height", &height)?;
    req.domain_font_size = parse_font_size("domain font size", &domain_font_size)?;
    req.title_font_size = parse_font_size("title font size", &title_font_size)?;
    Ok(req)
}

fn dump_font_diagnostics(req: &CompositionRequest) -> anyhow::Result<()> {
    eprintln!("font diagnostics:");
    for (role, path) in [
        ("domain", req.fonts.regular.as_path()),
        ("title", req.fonts.bold.as_path()),
    ] {
        let font = social_card::load_font(path)?;
        let family = social_card::TextLayoutEngine::new(&font)?
            .family_name()
            .to_string();
        eprintln!("  {role}:");
        eprintln!("    path:    {}", path.display());
        eprintln!("    family:  {family}");
        eprintln!("    sha256:  {}", sha256_hex(&font.bytes));
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
