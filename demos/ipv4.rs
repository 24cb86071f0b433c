use tinyparse::contrib::{ipv4, is_ipv4};
use tinyparse::prelude::*;

/// cargo run --example ipv4 -- 192.168.1.1 999.0.0.1
///
/// RUST_LOG=trace cargo run --example ipv4
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let candidates: Vec<&str> = if args.is_empty() {
        vec!["192.168.1.1", "256.1.1.1", "10.0.0", "not an ip"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    let parser = ipv4();
    for candidate in candidates {
        let outcome = parser.parse(candidate).to_string();
        let verdict = if is_ipv4(candidate) {
            "valid IP address"
        } else {
            "invalid IP address"
        };
        println!("{candidate:<20} {outcome:<24} {verdict}");
    }
}
