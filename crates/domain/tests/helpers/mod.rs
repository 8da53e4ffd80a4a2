mod builders;

pub use builders::*;
