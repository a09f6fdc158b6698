//! Usage text.

use kiln_core::verbosity::Verbosity;

pub(super) fn print() {
    println!("Usage: kiln [build-script] [-option=value ...]");
    println!();
    println!("The first bare argument is the build script. Without one, kiln looks for");
    println!("a script at build.kiln, build/build.kiln, or kiln/build.kiln.");
    println!();
    println!("Options:");
    println!("  -target=<name>             Target to run (default: Default)");
    println!(
        "  -verbosity=<level>         Output threshold: {} (alias: -v)",
        Verbosity::NAMES.join(", ")
    );
    println!("  -dryrun                    Walk the task graph without running tasks");
    println!("                             (aliases: -noop, -whatif)");
    println!("  -showdescription           List the script's tasks (alias: -s)");
    println!("  -workingdirectory=<path>   Directory to resolve paths against");
    println!("                             (alias: -workingfolder)");
    println!("  -help                      Show this text (alias: -?)");
    println!("  -version                   Show the version (alias: -ver)");
    println!();
    println!("Any other -name=value pair is passed through to the build script.");
}
