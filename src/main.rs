// src/main.rs
use spoke_table::{cli, loge};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = cli::run() {
        loge!("{e}");
        return Err(e.into());
    }
    Ok(())
}
