//! Ordered float keys for baseline maps.

use ordered_float::OrderedFloat;

pub(crate) type KeyF64 = OrderedFloat<f64>;

pub(crate) fn key_f64(v: f64) -> KeyF64 {
    OrderedFloat(v)
}
