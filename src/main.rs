#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    let config = riverfolio::backend::HostConfig::from_env();
    if let Err(error) = riverfolio::backend::run(config.clone()).await {
        riverfolio::backend::log_server_failure(&config, error.as_ref());
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    riverfolio::frontend::run();
}
