use anyhow::Result;

use messkit_cli::house;

fn main() -> Result<()> {
    let app = house::cli::create_house_cli();
    let matches = app.get_matches();

    house::handlers::run_clean_the_house(&matches)?;

    Ok(())
}
