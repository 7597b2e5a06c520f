use clap::Parser;
use wasm_bindgen::prelude::*;
use yew::AttrValue;

use quizzo_core::BoardConfig;

mod game;
mod provider;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Base URL of the trivia provider
    #[arg(long)]
    provider: Option<String>,

    /// How many categories to list from the provider
    #[arg(long)]
    pool_size: Option<usize>,

    /// How many category columns on the board
    #[arg(long)]
    categories: Option<usize>,

    /// How many clues in each category column
    #[arg(long)]
    clues_per_category: Option<usize>,
}

impl Args {
    fn board_config(&self) -> BoardConfig {
        let defaults = BoardConfig::default();
        BoardConfig::new(
            self.pool_size.unwrap_or(defaults.pool_size),
            self.categories.unwrap_or(defaults.categories),
            self.clues_per_category
                .unwrap_or(defaults.clues_per_category),
        )
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let props = game::GameProps {
        config: args.board_config(),
        provider: args.provider.clone().map(AttrValue::from).unwrap_or(
            AttrValue::Static(provider::HttpCategorySource::DEFAULT_BASE_URL),
        ),
    };

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
