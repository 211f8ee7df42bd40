use anyhow::Context as _;
use clap::Parser;
use wasm_bindgen::prelude::*;

pub use game::{GameProps, GameView};

mod game;
mod session;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: GameProps,
}

impl Args {
    /// Parses options written in the URL hash, e.g. `#--seed=42&-vv`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

fn try_run_app() -> anyhow::Result<()> {
    use gloo::utils::{document, window};

    let location_hash = window().location().hash().unwrap_or_default();
    let args = Args::from_location_hash(&location_hash).context("could not parse args")?;
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).context("error initializing logger")?;
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .context("could not find id=\"game\" element")?;

    log::debug!("App started");
    yew::Renderer::<GameView>::with_root_and_props(root, args.game).render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    if let Err(err) = try_run_app() {
        gloo::console::error!(format!("memorito failed to start: {err:#}"));
    }
}
