pub use crate::chars::{any_char, char_is, in_range, AnyChar, CharEquals, CharInRange};
pub use crate::error::ParseError;
pub use crate::exactly::{exactly, Exactly, ExactlyExt};
pub use crate::less_than::{less_than, LessThan, LessThanExt};
pub use crate::many::{many, Many, ManyExt};
pub use crate::more_than::{more_than, MoreThan, MoreThanExt};
pub use crate::optional::{optional, Optional, OptionalExt};
pub use crate::or::{or, Or, OrExt};
pub use crate::outcome::Outcome;
pub use crate::parser::{Consumer, Parser};
pub use crate::then::{then, Then, ThenExt};
