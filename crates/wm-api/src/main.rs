#[tokio::main]
async fn main() {
    if let Err(err) = wm_api::run().await {
        tracing::error!(error = %err, "wm-api failed");
        std::process::exit(1);
    }
}
