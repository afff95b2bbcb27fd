pub fn warn(msg: &str) {
    eprintln!("Warning: {msg}");
}
