use dotenv::dotenv;

/// Loads `.env` into the process environment (RUST_LOG and friends).
pub fn init() {
    _ = dotenv();
}
