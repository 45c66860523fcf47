//! Pay-package worksheet implementations.
//!
//! Two worksheets make up a full recalculation: the pay-side worksheet
//! derives stipends, contract hours, and gross pay from the candidate's
//! schedule, and the bill-side worksheet derives billing totals and margin
//! from the client's rates plus the pay-side results.

pub mod margin;
pub mod pay_package;

pub use margin::{MarginBand, MarginWorksheet, MarginWorksheetInput, MarginWorksheetResult};
pub use pay_package::{PayPackageInput, PayPackageResult, PayPackageWorksheet};
