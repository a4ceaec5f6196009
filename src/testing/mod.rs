
pub use failing_io::{FailingReader, FailingWriter};
