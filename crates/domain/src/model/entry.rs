use email_domains_shared_kernel::CustomerCount;
use serde::{Deserialize, Serialize};

/// A domain together with the number of customers using it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub domain: String,
    pub count: CustomerCount,
}

impl Entry {
    pub fn new(domain: impl Into<String>, count: impl Into<CustomerCount>) -> Self {
        Self { domain: domain.into(), count: count.into() }
    }
}
