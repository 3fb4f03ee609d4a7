
pub(crate) mod helper_constants;
mod helper_functions;
mod helper_types;
mod phone_number_regexps_and_mappings;
pub mod enums;
pub mod errors;
pub mod phonenumberutil;
mod parsing;
mod formatting;
mod classification;
mod comparisons;

pub use enums::{MatchType, PhoneNumberFormat, PhoneNumberType};
pub use phonenumberutil::{PhoneNumberUtil, PhoneNumberUtilOptions};
