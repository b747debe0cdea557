//! Console table rendering of report blocks.

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use domain_recon_core::report::{flatten_report, ReportBlock};

/// Print the combined current + historical report as one table.
pub fn print_report(current: &ReportBlock, history: &[ReportBlock]) {
    println!("{}", report_table(current, history));
}

fn report_table(current: &ReportBlock, history: &[ReportBlock]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["PARAMETER", "DETAILS"]);
    for row in flatten_report(current, history) {
        table.add_row(vec![row.parameter, row.details]);
    }
    table
}
