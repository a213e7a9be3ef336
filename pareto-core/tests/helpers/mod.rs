pub use self::solution::*;
