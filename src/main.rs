use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    docker_explorer::start().await
}
