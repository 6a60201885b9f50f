fn main() {
    if let Err(e) = ojrec_lib::run() {
        tracing::error!(error = %e, "ojrec failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
