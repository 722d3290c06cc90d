/// `User-Agent` sent with every request: client name and crate version.
pub fn get_user_agent() -> String {
    format!("RustNamur/{}", env!("CARGO_PKG_VERSION"))
}
