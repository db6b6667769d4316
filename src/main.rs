use miette::Result;

/// Main entry point for the check-dependency CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    // Run the library's main function
    check_dependency::run()
}
