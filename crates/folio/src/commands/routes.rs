//! `folio routes` command.

use folio_site::Route;

use crate::error::CliError;
use crate::output::Output;

/// List every route with its static output file.
pub(crate) fn execute(output: &Output) -> Result<(), CliError> {
    for route in Route::all() {
        output.info(&format!(
            "{:<32} {}",
            route.path(),
            route.output_path().display()
        ));
    }
    Ok(())
}
