pub mod amount;
pub mod bound;
pub mod comparable;
pub mod count;
pub mod duration;
pub mod error;
pub mod interval;
pub mod numeric;
pub mod ordered;
pub mod ordered_value;
pub mod ordinal;
pub mod proportion;
pub mod quantified;
pub mod quantity;
pub mod reference_range;

pub use amount::{Amount, AmountAttributes, AmountBuilder, UNKNOWN_ACCURACY};
pub use bound::{Bound, Edge, Sentinel};
pub use comparable::Comparable;
pub use count::Count;
pub use duration::{Duration, DurationComponents, Sign};
pub use error::{DataValueError, ErrorKind, Result};
pub use interval::Interval;
pub use numeric::{Numeric, Operator};
pub use ordered::{Ordered, OrderedAttributes};
pub use ordered_value::OrderedValue;
pub use ordinal::Ordinal;
pub use proportion::{Proportion, ProportionKind};
pub use quantified::{Quantified, RelationSymbol};
pub use quantity::Quantity;
pub use reference_range::ReferenceRange;
