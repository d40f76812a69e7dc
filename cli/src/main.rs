use anyhow::Result;

fn main() -> Result<()> {
    hextuples_cli::run()
}
