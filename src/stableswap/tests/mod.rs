
use crate::types::Money;

pub(crate) const ONE: Money = 1_000_000_000_000_000_000.0;
