use anyhow::Result;
use owo_colors::OwoColorize;
use yearline_core::{AlignMode, AppConfig};

pub fn run(mut config: AppConfig, align: Option<String>) -> Result<()> {
    if let Some(align) = align {
        let align: AlignMode = align.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        config.align = align;
        config.save()?;
        println!("{}", "  Saved".green());
        return Ok(());
    }

    let config_path = AppConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Snapshots:  {}", config.data_path()?.display());

    println!();
    println!("{}", "Defaults".bold());
    let align = match config.align {
        AlignMode::Weekday => "weekday",
        AlignMode::FirstDay => "first-day",
    };
    println!("  Align:      {}", align);

    Ok(())
}
