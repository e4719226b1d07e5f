use conlog::Logger;

fn main() {
    conlog::init();

    println!("Exercising every logging operation at TRACE...");
    let mut verbose = Logger::with_level(Some("selftest"), "TRACE");
    let verbose_ok = verbose.self_test();

    println!();
    println!("Re-running with logging disabled (OFF)...");
    verbose.set_level("OFF");
    let silent_ok = verbose.self_test();

    println!();
    println!("Demonstrating request-entry logging...");
    let api = Logger::with_level(Some("api"), "INFO");
    let _ = api.request_start("GET", "/health");

    if verbose_ok && silent_ok {
        println!("Self-test passed.");
    } else {
        eprintln!("Self-test FAILED.");
        std::process::exit(1);
    }
}
