use std::fmt::{Display, Formatter, Result as FmtResult};
use std::num::NonZeroU32;

/// One-based page number of a paginated listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageCursor(NonZeroU32);

impl PageCursor {
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Display for PageCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Items from a single response together with the cursor of the page after it, if any.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<PageCursor>,
}
