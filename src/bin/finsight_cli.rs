use finsight::{cli::run_cli, init};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init();

    let code = run_cli().await;
    if code != 0 {
        std::process::exit(code);
    }
}
