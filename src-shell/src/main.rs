#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mirage_lib::run().await
}
