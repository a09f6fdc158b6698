//! Version banner.

pub(super) fn print() {
    println!("kiln version {}", env!("CARGO_PKG_VERSION"));
}
