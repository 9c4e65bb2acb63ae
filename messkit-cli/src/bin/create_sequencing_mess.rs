use anyhow::Result;

use messkit_cli::reads;

fn main() -> Result<()> {
    let app = reads::cli::create_reads_cli();
    let matches = app.get_matches();

    reads::handlers::run_create_sequencing_mess(&matches)?;

    Ok(())
}
