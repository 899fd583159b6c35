mod error;
mod filter;
mod walk;


pub use error::DiscoveryError;
pub use filter::{Matcher, SAMPLE_EXTENSIONS};
pub use walk::find_matching_files;
