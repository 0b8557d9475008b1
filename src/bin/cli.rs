use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    notes_landing::cli::run().await
}
