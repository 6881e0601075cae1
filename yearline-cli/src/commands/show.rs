use anyhow::Result;
use chrono::Local;
use yearline_core::Library;

use crate::render::{self, ViewOptions};

pub fn run(library: &Library, view: ViewOptions) -> Result<()> {
    let today = Local::now().date_naive();
    println!("{}", render::render_year(library, &view, today));
    Ok(())
}
