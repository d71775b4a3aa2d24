#[tokio::main]
async fn main() {
    smashlabs_backend::run().await;
}
