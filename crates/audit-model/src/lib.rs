//! Cutlist Audit Model
//!
//! Defines the data contracts shared by the extractor and the reporter:
//! - **Clips:** One record per timeline element with a resolvable label
//! - **Audit:** Frame rate, total duration, and the ordered clip list
//! - **Acts:** Named half-open frame ranges used to group a report
//! - **Payload:** The JSON envelope that carries an audit (or a failure)
//!   across the host boundary
//!
//! All timing is expressed in whole frames. Seconds are derived at report
//! time from the audit's frame rate.

pub mod act;
pub mod audit;
pub mod clip;
pub mod payload;

pub use act::*;
pub use audit::*;
pub use clip::*;
pub use payload::*;
