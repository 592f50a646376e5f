//! Milestone verification oracle server binary.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    milestone_oracle::server::run().await
}
