//! Quote requests and contact inquiries.

mod forms;
mod request;
mod sink;

pub use forms::{ContactInquiry, CustomerInfo, InquiryType};
pub use request::{QuoteRequest, DEFAULT_QUOTE_PREFIX};
pub use sink::{InquirySink, LogSink, MemorySink};
