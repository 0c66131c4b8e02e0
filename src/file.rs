// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    controller::{ButtonGroup, Controller},
    render::html::{page_html, site_page_name, Nav},
    store::LoadState,
};
use crate::config::consts::DEFAULT_PAGE_FILE;

/// Write one page for the controller's current selection.
/// Returns the final path written to.
pub fn write_page(ctrl: &Controller, path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, page_html(ctrl, Nav::Buttons))?;
    logf!("Export: Wrote {}", path.display());
    Ok(path.to_path_buf())
}

/// Write every sidebar × main combination into `dir` as
/// `<sidebar>-<main>.html`, plus `index.html` for the initial state.
/// Button anchors link the pages together.
pub fn write_site(
    data: &LoadState,
    sidebar_buttons: &ButtonGroup,
    main_buttons: &ButtonGroup,
    dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(dir)?;

    let initial = Controller::mount(data, sidebar_buttons.clone(), main_buttons.clone());
    let mut written = Vec::with_capacity(sidebar_buttons.len() * main_buttons.len() + 1);

    let index = dir.join(DEFAULT_PAGE_FILE);
    fs::write(&index, page_html(&initial, Nav::SiteLinks))?;
    written.push(index);

    for si in 0..sidebar_buttons.len() {
        for mi in 0..main_buttons.len() {
            let mut ctrl = initial.clone();
            ctrl.activate_sidebar(data, si);
            ctrl.activate_main(data, mi);

            let (sk, mk) = match (sidebar_buttons.get(si), main_buttons.get(mi)) {
                (Some(s), Some(m)) => (&s.key, &m.key),
                _ => continue,
            };
            let path = dir.join(site_page_name(sk, mk));
            fs::write(&path, page_html(&ctrl, Nav::SiteLinks))?;
            written.push(path);
        }
    }

    logf!("Export: Site → {} ({} pages)", dir.display(), written.len());
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
