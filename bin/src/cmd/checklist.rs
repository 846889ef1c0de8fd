//! Checklist command implementation.

use crate::output::header;
use mispricing::analysis::munger_checklist;

/// Print the psychological checklist.
pub(crate) fn show_checklist() {
    header("Psychological Checklist");

    for (i, item) in munger_checklist().iter().enumerate() {
        println!("{}. {}", i + 1, item.bias);
        println!("   {}\n", item.question);
    }
}
