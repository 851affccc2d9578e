use dbupload_http::{SqlStatement, UploadClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = UploadClient::from_env().map_err(anyhow::Error::msg)?;

    let statement = SqlStatement::new("INSERT INTO visits (page) VALUES ('home')");
    let accepted = client.upload_statement(&statement).await;
    println!("statement accepted: {accepted}");

    Ok(())
}
