use std::process::ExitCode;

#[actix_web::main]
async fn main() -> ExitCode {
    match rollbook_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rollbook: {}", err);
            ExitCode::FAILURE
        }
    }
}
