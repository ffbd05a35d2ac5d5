use crate::config::Config;
use crate::core::catalog::EventCatalog;
use crate::errors::AppResult;
use crate::ui::report::render_catalog;

/// Handle the `kinds` command: print the active catalog.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalog = EventCatalog::from_config(cfg);
    let source = if cfg.catalog.is_some() {
        "configuration"
    } else {
        "built-in"
    };

    println!("Event kinds ({source}, {} labels):\n", catalog.len());
    print!("{}", render_catalog(&catalog, separator(cfg)));
    Ok(())
}

pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}
